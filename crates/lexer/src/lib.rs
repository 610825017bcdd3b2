// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # dbdl Lexer
//!
//! A single-pass, dialect-aware tokenizer.
//!
//! The tokenizer never fails. Unterminated strings, comments and quoted
//! identifiers run to the end of input and still produce a token, so the
//! editor can tokenize every keystroke. Every byte of input belongs to
//! exactly one token, whitespace included.
//!
//! ## Example
//!
//! ```rust
//! use dbdl_dialect::builtin_dialect;
//! use dbdl_lexer::{TokenKind, tokenize};
//!
//! let mysql = builtin_dialect("mysql").unwrap();
//! let kinds: Vec<_> = tokenize("id int # key", mysql).map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Whitespace,
//!         TokenKind::Type,
//!         TokenKind::Whitespace,
//!         TokenKind::LineComment,
//!     ]
//! );
//! ```

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
