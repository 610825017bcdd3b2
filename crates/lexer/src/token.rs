// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Token types

use dbdl_dialect::WordClass;
use serde::{Deserialize, Serialize};

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    String,
    QuotedIdentifier,
    Identifier,
    Keyword,
    Type,
    Builtin,
    Bool,
    Null,
    Not,
    Default,
    Number,
    Bits,
    Bytes,
    Dot,
    /// `@name`, `?`, `:param` and friends
    SpecialVar,
    Operator,
    /// `,` `;` `:`
    Punctuation,
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    /// Any character no other rule accepts
    Unknown,
}

impl TokenKind {
    /// Whitespace and comments
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Reserved words of any class
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Keyword
                | TokenKind::Type
                | TokenKind::Builtin
                | TokenKind::Bool
                | TokenKind::Null
                | TokenKind::Not
                | TokenKind::Default
        )
    }
}

impl From<WordClass> for TokenKind {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::Keyword => TokenKind::Keyword,
            WordClass::Type => TokenKind::Type,
            WordClass::Builtin => TokenKind::Builtin,
            WordClass::Bool => TokenKind::Bool,
            WordClass::Null => TokenKind::Null,
            WordClass::Not => TokenKind::Not,
            WordClass::Default => TokenKind::Default,
        }
    }
}

/// A classified span of source text
///
/// `from..to` is a half-open byte range into the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub from: usize,
    pub to: usize,
}

impl Token {
    pub fn new(kind: TokenKind, from: usize, to: usize) -> Self {
        Self { kind, from, to }
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Slice this token out of the text it was produced from
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.from..self.to]
    }
}
