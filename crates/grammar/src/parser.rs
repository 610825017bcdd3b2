// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Parser seam
//!
//! The grammar itself lives outside this workspace. Anything that can turn a
//! token stream into a [`SyntaxTree`] using the [`SyntaxKind`] vocabulary
//! plugs in here.
//!
//! [`SyntaxKind`]: crate::SyntaxKind

use dbdl_lexer::Token;

use crate::tree::SyntaxTree;

/// Turns tokens into a syntax tree
///
/// Implementations must never fail: input the grammar cannot match is
/// represented by `Error` nodes in the returned tree.
pub trait Parser: Send + Sync {
    fn parse(&self, source: &str, tokens: &[Token]) -> SyntaxTree;
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse(&self, source: &str, tokens: &[Token]) -> SyntaxTree {
        (**self).parse(source, tokens)
    }
}

impl<P: Parser + ?Sized> Parser for std::sync::Arc<P> {
    fn parse(&self, source: &str, tokens: &[Token]) -> SyntaxTree {
        (**self).parse(source, tokens)
    }
}
