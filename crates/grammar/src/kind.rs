// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Grammar vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node kinds produced by a dbdl parser
///
/// The shape a parser is expected to emit:
///
/// ```text
/// SourceFile
///   TableBlock
///     Table                    "Table"
///     TableName
///     TableOptions?
///     BraceOpen
///     Column*
///       ColumnName
///       DataType
///         Precision?           "(10, 2)"
///       Nullable?              "not null"
///       Options?               "pk auto default 0"
///       ColumnComment?
///     IndexBlock?
///       Indexes                "Indexes"
///       BraceOpen
///       Index*
///         IndexColumnBlock     "(id, name)"
///           IndexColumnName*
///         IndexType?           "unique btree"
///       BraceClose
///     BraceClose
/// ```
///
/// Any node may contain `Error` children where the parser could not match
/// the expected structure. Error nodes may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    SourceFile,
    TableBlock,
    Table,
    TableName,
    TableOptions,
    Column,
    ColumnName,
    DataType,
    Precision,
    Nullable,
    Options,
    ColumnComment,
    IndexBlock,
    Indexes,
    Index,
    IndexColumnBlock,
    IndexColumnName,
    IndexType,

    Identifier,
    QuotedIdentifier,
    Keyword,
    Type,
    Number,
    String,
    LineComment,
    BlockComment,
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Punctuation,

    /// Parse error placeholder
    Error,
}

impl SyntaxKind {
    /// Grammar name of this kind
    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::SourceFile => "SourceFile",
            SyntaxKind::TableBlock => "TableBlock",
            SyntaxKind::Table => "Table",
            SyntaxKind::TableName => "TableName",
            SyntaxKind::TableOptions => "TableOptions",
            SyntaxKind::Column => "Column",
            SyntaxKind::ColumnName => "ColumnName",
            SyntaxKind::DataType => "DataType",
            SyntaxKind::Precision => "Precision",
            SyntaxKind::Nullable => "Nullable",
            SyntaxKind::Options => "Options",
            SyntaxKind::ColumnComment => "ColumnComment",
            SyntaxKind::IndexBlock => "IndexBlock",
            SyntaxKind::Indexes => "Indexes",
            SyntaxKind::Index => "Index",
            SyntaxKind::IndexColumnBlock => "IndexColumnBlock",
            SyntaxKind::IndexColumnName => "IndexColumnName",
            SyntaxKind::IndexType => "IndexType",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::QuotedIdentifier => "QuotedIdentifier",
            SyntaxKind::Keyword => "Keyword",
            SyntaxKind::Type => "Type",
            SyntaxKind::Number => "Number",
            SyntaxKind::String => "String",
            SyntaxKind::LineComment => "LineComment",
            SyntaxKind::BlockComment => "BlockComment",
            SyntaxKind::ParenOpen => "(",
            SyntaxKind::ParenClose => ")",
            SyntaxKind::BraceOpen => "{",
            SyntaxKind::BraceClose => "}",
            SyntaxKind::BracketOpen => "[",
            SyntaxKind::BracketClose => "]",
            SyntaxKind::Punctuation => "Punctuation",
            SyntaxKind::Error => "⚠",
        }
    }

    pub fn is_error(self) -> bool {
        self == SyntaxKind::Error
    }

    /// Kinds inside which completion never fires
    pub fn is_literal_or_comment(self) -> bool {
        matches!(
            self,
            SyntaxKind::String
                | SyntaxKind::LineComment
                | SyntaxKind::BlockComment
                | SyntaxKind::ColumnComment
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
