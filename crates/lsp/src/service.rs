// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Language service
//!
//! [`LanguageService`] ties the layers together for a host: every request
//! tokenizes the text with the configured dialect, hands the tokens to the
//! parser and runs the resolver or the linter on the resulting tree.
//! Requests share no mutable state, so one service may serve concurrent
//! requests on different document snapshots.

use dbdl_context::{CompletionResult, Resolver};
use dbdl_dialect::Dialect;
use dbdl_grammar::{Parser, SyntaxTree};
use dbdl_lexer::{Token, tokenize};
use dbdl_semantic::{Diagnostic, lint};
use lsp_types::{CodeAction, CompletionList, Position, Range, Url};
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::render;

pub struct LanguageService {
    config: ServiceConfig,
    dialect: Dialect,
    parser: Box<dyn Parser>,
}

impl LanguageService {
    /// Create a service, resolving the configured dialect
    pub fn new(config: ServiceConfig, parser: Box<dyn Parser>) -> ServiceResult<Self> {
        config.validate()?;
        let dialect = config.resolve_dialect()?;
        info!(dialect = %dialect, "language service ready");
        Ok(Self {
            config,
            dialect,
            parser,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Swap in a new configuration
    ///
    /// On error the current configuration stays in effect.
    pub fn reconfigure(&mut self, config: ServiceConfig) -> ServiceResult<()> {
        config.validate()?;
        self.dialect = config.resolve_dialect()?;
        self.config = config;
        info!(dialect = %self.dialect, "language service reconfigured");
        Ok(())
    }

    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenize(text, &self.dialect).collect()
    }

    /// Tokenize and parse a document
    pub fn parse(&self, text: &str) -> SyntaxTree {
        let tokens = self.tokens(text);
        self.parser.parse(text, &tokens)
    }

    /// Suggestions at a byte offset
    pub fn completion_request(&self, text: &str, offset: usize) -> Option<CompletionResult> {
        debug!(offset, len = text.len(), "completion request");
        let tree = self.parse(text);
        Resolver::new(&self.dialect)
            .with_upper_case(self.config.upper_case_keywords)
            .resolve(text, &tree, offset)
    }

    /// Diagnostics for a whole document
    pub fn lint_request(&self, text: &str) -> Vec<Diagnostic> {
        debug!(len = text.len(), "lint request");
        if text.is_empty() {
            return Vec::new();
        }
        let tree = self.parse(text);
        lint(text, &tree)
    }

    /// Completion list at an LSP position
    pub fn completion(&self, text: &str, position: Position) -> ServiceResult<Option<CompletionList>> {
        let offset = render::position_to_offset(text, position)
            .ok_or(ServiceError::InvalidPosition(position))?;
        Ok(self.completion_request(text, offset).map(|result| {
            render::completion_list(text, &result, offset, self.config.snippet_support)
        }))
    }

    /// Diagnostics in LSP form
    pub fn diagnostics(&self, text: &str) -> Vec<lsp_types::Diagnostic> {
        self.lint_request(text)
            .iter()
            .map(|diagnostic| render::diagnostic(text, diagnostic))
            .collect()
    }

    /// Quick fixes for diagnostics overlapping `range`
    pub fn code_actions(&self, uri: &Url, text: &str, range: Range) -> Vec<CodeAction> {
        let start = render::position_to_offset(text, range.start).unwrap_or(text.len());
        let end = render::position_to_offset(text, range.end).unwrap_or(text.len());

        self.lint_request(text)
            .iter()
            .filter(|diagnostic| diagnostic.from <= end && start <= diagnostic.to)
            .filter_map(|diagnostic| render::code_action(uri, text, diagnostic))
            .collect()
    }
}

impl std::fmt::Debug for LanguageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageService")
            .field("config", &self.config)
            .field("dialect", &self.dialect.name)
            .finish_non_exhaustive()
    }
}
