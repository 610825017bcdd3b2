// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock syntax tree builder for tests
//!
//! ```rust
//! use dbdl_grammar::SyntaxKind;
//! use dbdl_test_utils::{Locator, MockNode};
//!
//! let source = "Table users";
//! let mut at = Locator::new(source);
//! let tree = MockNode::new(SyntaxKind::SourceFile)
//!     .with_range(0, source.len())
//!     .with_child(
//!         MockNode::new(SyntaxKind::TableBlock)
//!             .with_child(MockNode::leaf(SyntaxKind::Table, at.next("Table")))
//!             .with_child(
//!                 MockNode::new(SyntaxKind::TableName)
//!                     .with_child(MockNode::leaf(SyntaxKind::Identifier, at.next("users"))),
//!             ),
//!     )
//!     .build();
//!
//! assert_eq!(tree.root().first_child().unwrap().range(), 0..11);
//! ```

use std::ops::Range;

use dbdl_grammar::{SyntaxKind, SyntaxTree, TreeBuilder};

/// Owned, nested description of a syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockNode {
    pub kind: SyntaxKind,
    pub range: Option<Range<usize>>,
    pub children: Vec<MockNode>,
}

impl MockNode {
    /// A node whose span is derived from its children
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            kind,
            range: None,
            children: Vec::new(),
        }
    }

    /// A childless node with an explicit span
    pub fn leaf(kind: SyntaxKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range: Some(range),
            children: Vec::new(),
        }
    }

    /// An empty error node at `pos`
    pub fn error(pos: usize) -> Self {
        Self::leaf(SyntaxKind::Error, pos..pos)
    }

    /// Set the byte range
    pub fn with_range(mut self, from: usize, to: usize) -> Self {
        self.range = Some(from..to);
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: MockNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = MockNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Explicit span, or first child start to last child end
    pub fn span(&self) -> Range<usize> {
        if let Some(range) = &self.range {
            return range.clone();
        }
        let from = self.children.first().map_or(0, |c| c.span().start);
        let to = self.children.last().map_or(from, |c| c.span().end);
        from..to
    }

    /// Build a tree rooted at this node
    pub fn build(&self) -> SyntaxTree {
        let mut builder = TreeBuilder::new();
        self.emit(&mut builder);
        builder.finish()
    }

    fn emit(&self, builder: &mut TreeBuilder) {
        let span = self.span();
        builder.start_node(self.kind, span.start);
        for child in &self.children {
            child.emit(builder);
        }
        builder.finish_node(span.end);
    }
}

/// Finds successive substrings of a source text
///
/// Each lookup starts where the previous match ended, so repeated words
/// resolve in document order.
#[derive(Debug, Clone)]
pub struct Locator<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Locator<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    /// Span of the next occurrence of `needle`
    ///
    /// # Panics
    ///
    /// Panics when `needle` does not occur after the current position.
    pub fn next(&mut self, needle: &str) -> Range<usize> {
        let start = self.source[self.pos..]
            .find(needle)
            .map(|i| self.pos + i)
            .unwrap_or_else(|| panic!("{needle:?} not found after offset {}", self.pos));
        self.pos = start + needle.len();
        start..self.pos
    }

    /// Offset of the next occurrence of `needle`, without consuming it
    pub fn peek(&self, needle: &str) -> usize {
        self.source[self.pos..]
            .find(needle)
            .map(|i| self.pos + i)
            .unwrap_or_else(|| panic!("{needle:?} not found after offset {}", self.pos))
    }

    /// Current offset
    pub fn pos(&self) -> usize {
        self.pos
    }
}
