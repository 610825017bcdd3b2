// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Syntax diagnostics for parser error nodes
//!
//! Each error node is classified once by where it sits relative to its
//! parent and previous sibling. The first matching shape wins.

use dbdl_grammar::{SyntaxKind, SyntaxNode};

use crate::diagnostic::{Diagnostic, Fix};

pub const MISSING_TABLE_KEYWORD: &str = "Keyword 'Table' is required";
pub const TABLE_NAME_HINT: &str = "Table name";
pub const COLUMN_NAME_HINT: &str = "Column name";
pub const DATA_TYPE_EXPECTED: &str = "data type expected";
pub const TABLE_CLAUSE_EXPECTED: &str = "'{', <as query clause>, <default charset option>, \
     <default collate option>, <engine clause>, <like table clause>, <other table option>, \
     COMMENT or PARTITION expected";
pub const NULL_EXPECTED: &str = "NULL expected";

/// Where an error node sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// Directly under the document root
    TopLevel,
    /// Inside a table-name slot
    TableName,
    /// Inside a column-name slot
    ColumnName,
    /// Right after a column name
    AfterColumnName,
    /// Right after a table name
    AfterTableName,
    /// Inside a numeric precision slot
    Precision,
    /// Inside a nullability slot
    Nullable,
    /// Wraps an identifier; highlighted without a message
    UnexpectedIdentifier,
}

impl ErrorShape {
    pub fn classify(error: SyntaxNode<'_>) -> Option<Self> {
        let parent = error.parent().map(|p| p.kind());
        let prev = error.prev_sibling().map(|p| p.kind());

        let shape = match (parent, prev) {
            (Some(SyntaxKind::SourceFile), _) => ErrorShape::TopLevel,
            (Some(SyntaxKind::TableName), _) => ErrorShape::TableName,
            (Some(SyntaxKind::ColumnName), _) => ErrorShape::ColumnName,
            (_, Some(SyntaxKind::ColumnName)) => ErrorShape::AfterColumnName,
            (_, Some(SyntaxKind::TableName)) => ErrorShape::AfterTableName,
            (Some(SyntaxKind::Precision), _) => ErrorShape::Precision,
            (Some(SyntaxKind::Nullable), _) => ErrorShape::Nullable,
            _ if error.child(SyntaxKind::Identifier).is_some() => {
                ErrorShape::UnexpectedIdentifier
            }
            _ => return None,
        };
        Some(shape)
    }

    pub fn diagnostic(self, text: &str, error: SyntaxNode<'_>) -> Diagnostic {
        let (from, to) = (error.from(), error.to());
        match self {
            ErrorShape::TopLevel => Diagnostic::error(from, to, MISSING_TABLE_KEYWORD)
                .with_fix(Fix::insert(from, "Table ")),
            ErrorShape::TableName => Diagnostic::hint(from.saturating_sub(1), to, TABLE_NAME_HINT),
            ErrorShape::ColumnName => Diagnostic::hint(from, to, COLUMN_NAME_HINT),
            ErrorShape::AfterColumnName => Diagnostic::error(from, to, DATA_TYPE_EXPECTED),
            ErrorShape::AfterTableName => Diagnostic::error(from, to, TABLE_CLAUSE_EXPECTED),
            ErrorShape::Precision => {
                // Point at the identifier the precision belongs to, when there is one
                let (from, to) = error
                    .parent()
                    .and_then(|precision| precision.prev_sibling())
                    .and_then(|prev| prev.child(SyntaxKind::Identifier))
                    .map_or((from, to), |ident| (ident.from(), ident.to()));
                let got = text.get(from..to).unwrap_or_default();
                Diagnostic::error(from, to, format!("<number> expected, got '{got}'"))
            }
            ErrorShape::Nullable => {
                let after_space = from > 0 && text.get(from - 1..to) == Some(" ");
                let insert = if after_space { "null " } else { " null " };
                Diagnostic::error(from, to, NULL_EXPECTED).with_fix(Fix::insert(from, insert))
            }
            ErrorShape::UnexpectedIdentifier => Diagnostic::error(from, to, ""),
        }
    }
}

/// Diagnostic for one error node, if its shape is recognized
pub fn syntax_diagnostic(text: &str, error: SyntaxNode<'_>) -> Option<Diagnostic> {
    ErrorShape::classify(error).map(|shape| shape.diagnostic(text, error))
}
