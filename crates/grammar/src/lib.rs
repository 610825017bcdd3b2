// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # dbdl Grammar
//!
//! The syntax tree shared by the completion resolver and the linter.
//!
//! ## Design
//!
//! The tree is an arena: every node is stored once in a flat vector and
//! parent, child and sibling links are indices into it. Consumers never hold
//! owning references to nodes; they navigate with [`SyntaxNode`] handles
//! borrowed from the tree.
//!
//! The parser is an external collaborator reached through the [`Parser`]
//! trait. The only contract is the [`SyntaxKind`] vocabulary, in particular
//! [`SyntaxKind::Error`] marking positions the grammar could not match.
//!
//! ## Example
//!
//! ```rust
//! use dbdl_grammar::{SyntaxKind, TreeBuilder};
//!
//! let mut b = TreeBuilder::new();
//! b.start_node(SyntaxKind::SourceFile, 0);
//! b.error(0);
//! b.finish_node(0);
//! let tree = b.finish();
//!
//! let error = tree.errors().next().unwrap();
//! assert_eq!(error.parent().unwrap().kind(), SyntaxKind::SourceFile);
//! ```

pub mod builder;
pub mod kind;
pub mod parser;
pub mod tree;

pub use builder::TreeBuilder;
pub use kind::SyntaxKind;
pub use parser::Parser;
pub use tree::{Children, Descendants, NodeId, SyntaxNode, SyntaxTree};
