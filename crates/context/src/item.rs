// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion items and results

use serde::{Deserialize, Serialize};

use crate::snippets::plain_text;

/// What an item inserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Keyword,
    Snippet,
}

/// A single suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    /// Insertion template; snippets may contain `${1:default}` and `$0` stops
    pub template: String,
    pub detail: Option<String>,
    /// Sort order (lower = higher priority)
    pub priority: u32,
}

impl CompletionItem {
    /// A keyword that inserts its own label
    pub fn keyword(label: impl Into<String>, priority: u32) -> Self {
        let label = label.into();
        Self {
            template: label.clone(),
            label,
            kind: CompletionKind::Keyword,
            detail: None,
            priority,
        }
    }

    pub fn snippet(
        label: impl Into<String>,
        template: impl Into<String>,
        detail: Option<&str>,
        priority: u32,
    ) -> Self {
        Self {
            label: label.into(),
            kind: CompletionKind::Snippet,
            template: template.into(),
            detail: detail.map(str::to_string),
            priority,
        }
    }

    pub fn is_snippet(&self) -> bool {
        self.kind == CompletionKind::Snippet
    }

    /// Text to insert, with placeholder markers stripped unless the host
    /// supports snippets
    pub fn insert_text(&self, snippet_support: bool) -> String {
        if self.is_snippet() && !snippet_support {
            plain_text(&self.template)
        } else {
            self.template.clone()
        }
    }
}

/// Suggestions plus the offset they replace from
///
/// The replaced range is `replace_from..cursor`. Labels are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub items: Vec<CompletionItem>,
    pub replace_from: usize,
}

impl CompletionResult {
    pub fn new(replace_from: usize) -> Self {
        Self {
            items: Vec::new(),
            replace_from,
        }
    }

    /// Add an item unless one with the same label exists
    pub fn push(&mut self, item: CompletionItem) -> bool {
        if self.items.iter().any(|existing| existing.label == item.label) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = CompletionItem>) {
        for item in items {
            self.push(item);
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items ordered by priority, then label
    pub fn sorted(&self) -> Vec<&CompletionItem> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.label.cmp(&b.label)));
        items
    }
}
