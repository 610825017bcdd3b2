// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Syntax tree integration tests

use std::sync::Arc;

use dbdl_grammar::{Parser, SyntaxKind, SyntaxTree, TreeBuilder};
use dbdl_lexer::Token;

/// Parser that wraps the whole input in one `SourceFile` holding an error
struct ErrorOnly;

impl Parser for ErrorOnly {
    fn parse(&self, source: &str, _tokens: &[Token]) -> SyntaxTree {
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::SourceFile, 0);
        b.start_node(SyntaxKind::Error, 0);
        b.leaf(SyntaxKind::Identifier, 0, source.len());
        b.finish_node(source.len());
        b.finish_node(source.len());
        b.finish()
    }
}

#[test]
fn test_parser_through_smart_pointers() {
    let boxed: Box<dyn Parser> = Box::new(ErrorOnly);
    let shared: Arc<dyn Parser> = Arc::new(ErrorOnly);

    let a = boxed.parse("users", &[]);
    let b = shared.parse("users", &[]);
    assert_eq!(a, b);

    let error = a.errors().next().unwrap();
    assert_eq!(error.range(), 0..5);
    assert!(error.child(SyntaxKind::Identifier).is_some());
}

#[test]
fn test_innermost_error_wins() {
    // Table t { id ⚠ }
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile, 0);
    b.start_node(SyntaxKind::Error, 0);
    b.start_node(SyntaxKind::TableBlock, 0);
    b.start_node(SyntaxKind::Column, 10);
    b.start_node(SyntaxKind::ColumnName, 10);
    b.leaf(SyntaxKind::Identifier, 10, 12);
    b.finish_node(12);
    let inner = b.error(13);
    b.finish_node(13);
    b.finish_node(15);
    b.finish_node(15);
    b.finish_node(15);
    let tree = b.finish();

    let found = tree.error_at(13).unwrap();
    assert_eq!(found.id(), inner);
    assert_eq!(found.prev_sibling().unwrap().kind(), SyntaxKind::ColumnName);
    assert_eq!(tree.error_at(2).unwrap().depth(), 1);
}

#[test]
fn test_sibling_links_are_symmetric() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile, 0);
    for i in 0..4 {
        b.leaf(SyntaxKind::Identifier, i * 2, i * 2 + 1);
    }
    b.finish_node(8);
    let tree = b.finish();

    let root = tree.root();
    for child in root.children() {
        if let Some(next) = child.next_sibling() {
            assert_eq!(next.prev_sibling(), Some(child));
        }
        assert_eq!(child.parent(), Some(root));
    }
    assert_eq!(root.first_child().unwrap().from(), 0);
    assert_eq!(root.last_child().unwrap().from(), 6);
}
