// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # dbdl - Language Service
//!
//! Host-facing facade over the tokenizer, completion and lint layers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Host (editor, LSP server)       │
//! └──────────────┬──────────────────────────┘
//!                │ text + offset / Position
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │            LanguageService              │
//! │  • completion_request / lint_request    │
//! │  • completion / diagnostics / actions   │
//! └──────────────┬──────────────────────────┘
//!                │
//!    ┌───────────┼─────────────┬──────────────┐
//!    ↓           ↓             ↓              ↓
//! ┌───────┐ ┌─────────┐ ┌────────────┐ ┌───────────┐
//! │ Lexer │ │ Parser  │ │  Resolver  │ │  Linter   │
//! └───────┘ └─────────┘ └────────────┘ └───────────┘
//! ```
//!
//! The parser is supplied by the host through the
//! [`Parser`](dbdl_grammar::Parser) trait.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dbdl_lsp::{LanguageService, ServiceConfig};
//!
//! let service = LanguageService::new(ServiceConfig::new("MySQL"), Box::new(parser))?;
//! let result = service.completion_request("Table users {\n  id \n}", 17);
//! let diagnostics = service.lint_request("users");
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod service;

pub use config::{ConfigError, ConfigResult, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use service::LanguageService;
