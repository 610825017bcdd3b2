// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Turns a completion context into suggestions

use std::collections::HashSet;

use dbdl_dialect::Dialect;
use dbdl_grammar::{SyntaxKind, SyntaxNode, SyntaxTree};
use tracing::{debug, trace};

use crate::completion::{CompletionContext, detect_completion_context};
use crate::item::{CompletionItem, CompletionResult};
use crate::keywords::{INDEX_METHODS, KeywordProvider, KeywordSet, UNIQUE};
use crate::snippets::{DATA_TYPE_SNIPPETS, SCRIPT_SNIPPETS, TABLE_SNIPPETS, snippet_items};

/// Priority of the first suggested column name; later ones count down
pub const COLUMN_PRIORITY: u32 = 99;

/// Completion resolver for one dialect
///
/// # Examples
///
/// ```rust
/// use dbdl_context::Resolver;
/// use dbdl_grammar::SyntaxTree;
///
/// let tree = SyntaxTree::empty(0);
/// let result = Resolver::new(dbdl_dialect::standard())
///     .resolve("", &tree, 0)
///     .unwrap();
/// assert_eq!(result.labels(), vec!["tb"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'d> {
    keywords: KeywordProvider<'d>,
}

impl<'d> Resolver<'d> {
    pub fn new(dialect: &'d Dialect) -> Self {
        Self {
            keywords: KeywordProvider::new(dialect),
        }
    }

    /// Render vocabulary keywords in upper case; column names are unaffected
    pub fn with_upper_case(mut self, upper_case: bool) -> Self {
        self.keywords = self.keywords.with_upper_case(upper_case);
        self
    }

    pub fn dialect(&self) -> &'d Dialect {
        self.keywords.dialect()
    }

    /// Suggestions for the cursor at `offset`, or `None` when nothing applies
    pub fn resolve(
        &self,
        text: &str,
        tree: &SyntaxTree,
        offset: usize,
    ) -> Option<CompletionResult> {
        let offset = offset.min(text.len());
        let Some(context) = detect_completion_context(text, tree, offset) else {
            trace!(offset, "no completion context");
            return None;
        };
        debug!(offset, context = context.name(), "completion context");

        let result = match context {
            CompletionContext::TopLevel { error } => {
                let mut result = CompletionResult::new(error.from());
                result.extend(snippet_items(SCRIPT_SNIPPETS));
                result
            }
            CompletionContext::DataType { error } => self.data_types(error.from()),
            CompletionContext::Options { error } => {
                let mut result = CompletionResult::new(error.from());
                result.extend(self.keywords.items(&self.keywords.options()));
                result
            }
            CompletionContext::IndexType {
                replace_from,
                has_unique,
                has_method,
                ..
            } => {
                if has_unique && has_method {
                    trace!("index declaration already complete");
                    return None;
                }
                let mut written = HashSet::new();
                if has_unique {
                    written.insert(UNIQUE);
                }
                if has_method {
                    written.extend(INDEX_METHODS);
                }
                let choices = self.keywords.index_types().exclude(&written);
                let mut result = CompletionResult::new(replace_from);
                result.extend(self.keywords.items(&choices));
                result
            }
            CompletionContext::IndexColumnList { block, table } => {
                index_columns(text, block, table, offset)
            }
            CompletionContext::Column { .. } => {
                let mut result = self.data_types(word_start(text, offset));
                result.extend(self.keywords.items(&self.keywords.dialect_words()));
                result
            }
            CompletionContext::TableBody { .. } => {
                let mut result = CompletionResult::new(word_start(text, offset));
                result.extend(snippet_items(TABLE_SNIPPETS));
                result
            }
            CompletionContext::Script => {
                let mut result = CompletionResult::new(word_start(text, offset));
                result.extend(snippet_items(SCRIPT_SNIPPETS));
                result
            }
        };

        trace!(items = result.items.len(), replace_from = result.replace_from, "resolved");
        Some(result)
    }

    fn data_types(&self, replace_from: usize) -> CompletionResult {
        let mut result = CompletionResult::new(replace_from);
        result.extend(snippet_items(DATA_TYPE_SNIPPETS));
        result.extend(self.keywords.items(&self.keywords.data_types()));
        result
    }
}

/// Columns declared in the table but not yet listed in the index
fn index_columns(
    text: &str,
    block: SyntaxNode<'_>,
    table: SyntaxNode<'_>,
    offset: usize,
) -> CompletionResult {
    let mut replace_from = offset;
    let mut referenced = KeywordSet::default();
    for name in block.children_of(SyntaxKind::IndexColumnName) {
        if name.to() == offset {
            replace_from = name.from();
        }
        referenced.extend([name.text(text)]);
    }
    let referenced: HashSet<&str> = referenced.words().collect();

    let declared = KeywordSet::new(
        table
            .children_of(SyntaxKind::Column)
            .filter_map(|column| column.child(SyntaxKind::ColumnName))
            .map(|name| name.text(text))
            .filter(|name| !name.is_empty()),
    );

    let mut result = CompletionResult::new(replace_from);
    let mut priority = COLUMN_PRIORITY;
    for name in declared.exclude(&referenced).words() {
        if result.push(CompletionItem::keyword(name, priority)) {
            priority = priority.saturating_sub(1);
        }
    }
    result
}

/// Start of the identifier-like word ending at `offset`
fn word_start(text: &str, offset: usize) -> usize {
    let bytes = text.as_bytes();
    let mut start = offset.min(bytes.len());
    while start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_') {
        start -= 1;
    }
    start
}
