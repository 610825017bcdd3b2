// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Diagnostic and fix types

use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Hint,
}

/// A single insertion the host may apply on request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    pub insert_at: usize,
    pub text: String,
}

impl Fix {
    pub fn insert(insert_at: usize, text: impl Into<String>) -> Self {
        Self {
            insert_at,
            text: text.into(),
        }
    }

    /// The document with this fix applied
    ///
    /// An offset past the end, or inside a multi-byte character, appends
    /// at the nearest preceding boundary.
    pub fn apply(&self, text: &str) -> String {
        let mut at = self.insert_at.min(text.len());
        while !text.is_char_boundary(at) {
            at -= 1;
        }
        let mut out = String::with_capacity(text.len() + self.text.len());
        out.push_str(&text[..at]);
        out.push_str(&self.text);
        out.push_str(&text[at..]);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub from: usize,
    pub to: usize,
    pub severity: Severity,
    pub message: String,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn error(from: usize, to: usize, message: impl Into<String>) -> Self {
        Self {
            from,
            to,
            severity: Severity::Error,
            message: message.into(),
            fix: None,
        }
    }

    pub fn hint(from: usize, to: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Hint,
            ..Self::error(from, to, message)
        }
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
