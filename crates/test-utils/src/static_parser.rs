// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Stand-in parsers

use dbdl_grammar::{Parser, SyntaxTree};
use dbdl_lexer::Token;

/// Returns the same tree for every input
#[derive(Debug, Clone)]
pub struct StaticParser {
    tree: SyntaxTree,
}

impl StaticParser {
    pub fn new(tree: SyntaxTree) -> Self {
        Self { tree }
    }
}

impl Parser for StaticParser {
    fn parse(&self, _source: &str, _tokens: &[Token]) -> SyntaxTree {
        self.tree.clone()
    }
}

/// Builds the tree from the source text with a closure
pub struct FnParser<F>(pub F);

impl<F> Parser for FnParser<F>
where
    F: Fn(&str) -> SyntaxTree + Send + Sync,
{
    fn parse(&self, source: &str, _tokens: &[Token]) -> SyntaxTree {
        (self.0)(source)
    }
}
