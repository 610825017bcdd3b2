// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # dbdl Dialects
//!
//! This crate defines the dialect descriptors consumed by the tokenizer.
//!
//! ## Design
//!
//! A [`Dialect`] is pure data: a case-insensitive word classification table
//! plus the lexical switches that differ between SQL flavours (quoting,
//! escaping, comment styles, literal prefixes). Descriptors are built once,
//! either from the builtin table or from a serialized [`DialectSpec`], and
//! then shared read-only for the lifetime of the process.
//!
//! Adding a dialect never requires touching the tokenizer, the completion
//! resolver or the linter, only a new descriptor.
//!
//! ## Builtin Dialects
//!
//! - **Standard SQL**: the defaults
//! - **MySQL** / **MariaDB**: hash comments, backtick identifiers, charset casts
//! - **Microsoft SQL Server**
//! - **SQLite**
//! - **PL/SQL**: `q'[...]'` quoting
//! - **PostgreSQL**: `$$` strings
//!
//! ## Example
//!
//! ```rust
//! use dbdl_dialect::{WordClass, builtin_dialect};
//!
//! let mysql = builtin_dialect("mysql").unwrap();
//! assert_eq!(mysql.classify("BTREE"), Some(WordClass::Keyword));
//! assert_eq!(mysql.classify("varchar"), Some(WordClass::Type));
//! assert!(mysql.hash_comments);
//! ```

pub mod builtin;
pub mod dialect;
pub mod error;

pub use builtin::{builtin_dialect, builtin_dialects, standard};
pub use dialect::{Dialect, DialectSpec, WordClass};
pub use error::{DialectError, DialectResult};
