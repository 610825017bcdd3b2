// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Column reference validation
//!
//! Index declarations may only list columns the same table declares. Names
//! are collected per table while the tree is walked and references are
//! checked once the walk is over, so an index block may precede the
//! columns it refers to.

use std::collections::{HashMap, HashSet};

use dbdl_grammar::{NodeId, SyntaxKind, SyntaxNode};

use crate::diagnostic::Diagnostic;

pub const COLUMN_NOT_FOUND: &str = "Column name not found";

/// Collects declared columns and index references during a tree walk
#[derive(Debug, Default)]
pub struct ColumnValidator<'s> {
    declared: HashMap<NodeId, HashSet<&'s str>>,
    references: Vec<ColumnReference<'s>>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnReference<'s> {
    table: NodeId,
    name: &'s str,
    from: usize,
    to: usize,
}

impl<'s> ColumnValidator<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` if it declares or references a column
    pub fn visit(&mut self, text: &'s str, node: SyntaxNode<'_>) {
        match node.kind() {
            SyntaxKind::ColumnName => {
                if node.has_ancestor(SyntaxKind::Error) {
                    return;
                }
                if let Some(table) = node.ancestor(SyntaxKind::TableBlock) {
                    self.declared
                        .entry(table.id())
                        .or_default()
                        .insert(node.text(text));
                }
            }
            SyntaxKind::IndexColumnName => {
                let name = node.text(text);
                if name.is_empty() {
                    return;
                }
                if let Some(table) = node.ancestor(SyntaxKind::TableBlock) {
                    self.references.push(ColumnReference {
                        table: table.id(),
                        name,
                        from: node.from(),
                        to: node.to(),
                    });
                }
            }
            _ => {}
        }
    }

    /// Columns declared by a table seen so far
    pub fn declared(&self, table: NodeId) -> impl Iterator<Item = &'s str> + '_ {
        self.declared.get(&table).into_iter().flatten().copied()
    }

    /// One diagnostic per reference to an undeclared column
    pub fn finish(self) -> Vec<Diagnostic> {
        self.references
            .iter()
            .filter(|reference| {
                !self
                    .declared
                    .get(&reference.table)
                    .is_some_and(|columns| columns.contains(reference.name))
            })
            .map(|reference| Diagnostic::error(reference.from, reference.to, COLUMN_NOT_FOUND))
            .collect()
    }
}
