// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Tree-wide lint entry point

use dbdl_grammar::SyntaxTree;
use tracing::{debug, trace};

use crate::diagnostic::Diagnostic;
use crate::syntax_diagnostics::ErrorShape;
use crate::validator::ColumnValidator;

/// Lint a document
///
/// An empty document yields no diagnostics without looking at the tree.
/// Otherwise the tree is walked once: every error node is mapped to at most
/// one syntax diagnostic, and index column references are checked against
/// the columns their table declares. Diagnostics are not sorted.
pub fn lint(text: &str, tree: &SyntaxTree) -> Vec<Diagnostic> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut diagnostics = Vec::new();
    let mut columns = ColumnValidator::new();

    for node in tree.iter() {
        if node.is_error() {
            match ErrorShape::classify(node) {
                Some(shape) => {
                    trace!(?shape, from = node.from(), to = node.to(), "error node");
                    diagnostics.push(shape.diagnostic(text, node));
                }
                None => trace!(from = node.from(), to = node.to(), "unclassified error node"),
            }
            continue;
        }
        columns.visit(text, node);
    }

    diagnostics.extend(columns.finish());
    debug!(count = diagnostics.len(), "lint finished");
    diagnostics
}
