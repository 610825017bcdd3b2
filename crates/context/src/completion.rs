// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion context detection
//!
//! Classifies the cursor position from the syntax tree alone. Error nodes
//! take precedence: a parser that failed right after a column name is a
//! much stronger signal than the enclosing column. Otherwise the nearest
//! structural ancestor decides.

use dbdl_grammar::{SyntaxKind, SyntaxNode, SyntaxTree};

/// Where the cursor sits, from a completion point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext<'t> {
    /// Error directly under the document root
    ///
    /// A `Table` block is expected here.
    TopLevel { error: SyntaxNode<'t> },

    /// Error right after a column name, or inside a data type
    DataType { error: SyntaxNode<'t> },

    /// Error inside a column's option list
    Options { error: SyntaxNode<'t> },

    /// At or after the end of an index declaration
    ///
    /// The flags record which parts of `unique btree|hash` are already
    /// written.
    IndexType {
        index: SyntaxNode<'t>,
        replace_from: usize,
        has_unique: bool,
        has_method: bool,
    },

    /// Inside an index's parenthesized column list
    IndexColumnList {
        block: SyntaxNode<'t>,
        table: SyntaxNode<'t>,
    },

    /// Inside a column declaration
    Column { column: SyntaxNode<'t> },

    /// Inside a table block where nothing more specific applies
    ///
    /// Also reached from a column whose error node matched no error rule.
    TableBody { table: SyntaxNode<'t> },

    /// Document level, outside any table
    Script,
}

impl CompletionContext<'_> {
    pub fn is_error_driven(&self) -> bool {
        matches!(
            self,
            CompletionContext::TopLevel { .. }
                | CompletionContext::DataType { .. }
                | CompletionContext::Options { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompletionContext::TopLevel { .. } => "top-level",
            CompletionContext::DataType { .. } => "data-type",
            CompletionContext::Options { .. } => "options",
            CompletionContext::IndexType { .. } => "index-type",
            CompletionContext::IndexColumnList { .. } => "index-columns",
            CompletionContext::Column { .. } => "column",
            CompletionContext::TableBody { .. } => "table-body",
            CompletionContext::Script => "script",
        }
    }
}

/// Classify the cursor at `offset`
///
/// Returns `None` inside strings and comments, and wherever no
/// suggestion applies. Offsets past the end are clamped.
pub fn detect_completion_context<'t>(
    text: &str,
    tree: &'t SyntaxTree,
    offset: usize,
) -> Option<CompletionContext<'t>> {
    let offset = offset.min(text.len());
    let node = tree.resolve(offset);

    if node.kind().is_literal_or_comment() {
        return None;
    }

    let error = tree.error_at(offset);
    if let Some(error) = error
        && let Some(context) = classify_error(text, error)
    {
        return Some(context);
    }

    for current in std::iter::once(node).chain(node.ancestors()) {
        match current.kind() {
            SyntaxKind::Index => {
                if let Some(context) = index_type_context(text, current, offset) {
                    return Some(context);
                }
            }
            SyntaxKind::IndexColumnBlock => {
                if let Some(table) = current.ancestor(SyntaxKind::TableBlock) {
                    return Some(CompletionContext::IndexColumnList {
                        block: current,
                        table,
                    });
                }
            }
            SyntaxKind::IndexBlock => {
                // Between index lines only the one ending on the cursor line counts
                return index_on_cursor_line(text, current, offset)
                    .and_then(|index| index_type_context(text, index, offset));
            }
            SyntaxKind::Column if error.is_none() => {
                return Some(CompletionContext::Column { column: current });
            }
            SyntaxKind::TableBlock => {
                return Some(CompletionContext::TableBody { table: current });
            }
            SyntaxKind::SourceFile => return Some(CompletionContext::Script),
            _ => {}
        }
    }

    None
}

fn classify_error<'t>(text: &str, error: SyntaxNode<'t>) -> Option<CompletionContext<'t>> {
    if error.parent()?.is(SyntaxKind::SourceFile) {
        return Some(CompletionContext::TopLevel { error });
    }

    let after_column_name = error
        .prev_sibling()
        .is_some_and(|prev| prev.is(SyntaxKind::ColumnName));
    if (after_column_name || error.has_ancestor(SyntaxKind::DataType))
        && preceded_by_single_space(text, error)
    {
        return Some(CompletionContext::DataType { error });
    }

    if error.has_ancestor(SyntaxKind::Options) {
        return Some(CompletionContext::Options { error });
    }

    None
}

/// The node's text, extended one byte left, is exactly one space
fn preceded_by_single_space(text: &str, node: SyntaxNode<'_>) -> bool {
    node.from() > 0 && text.get(node.from() - 1..node.to()) == Some(" ")
}

fn index_type_context<'t>(
    text: &str,
    index: SyntaxNode<'t>,
    offset: usize,
) -> Option<CompletionContext<'t>> {
    let block = index.last_child()?;
    if offset < block.to() {
        return None;
    }

    let typed = text.get(block.from()..offset)?;
    let replace_from = block.from() + typed.rfind([' ', '\t']).map_or(0, |i| i + 1);

    let marker = index
        .child(SyntaxKind::IndexType)
        .map(|node| node.text(text).to_ascii_lowercase())
        .unwrap_or_default();

    Some(CompletionContext::IndexType {
        index,
        replace_from,
        has_unique: marker.contains("unique"),
        has_method: marker.contains("btree") || marker.contains("hash"),
    })
}

fn index_on_cursor_line<'t>(
    text: &str,
    block: SyntaxNode<'t>,
    offset: usize,
) -> Option<SyntaxNode<'t>> {
    block
        .children_of(SyntaxKind::Index)
        .filter(|index| index.to() <= offset)
        .next_back()
        .filter(|index| {
            text.get(index.to()..offset)
                .is_some_and(|gap| !gap.contains('\n'))
        })
}
