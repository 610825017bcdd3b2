// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # dbdl - Completion Layer
//!
//! Context-aware completion for dbdl schema documents.
//!
//! ## Overview
//!
//! Completion works on the syntax tree alone: no catalog and no database.
//! The cursor position is first classified into a
//! [`completion::CompletionContext`], then the [`Resolver`] turns that
//! context into a [`CompletionResult`].
//!
//! ## Core Concepts
//!
//! ### Completion Context
//!
//! Error nodes left by the parser drive the strongest contexts: an error
//! under the root wants a `Table` block, one right after a column name
//! wants a data type, one inside an option list wants an option keyword.
//! Without an error the nearest structural ancestor decides (index
//! declaration, column, table body, document).
//!
//! ### Keywords and Snippets
//!
//! The [`keywords`] module holds the static vocabularies and merges in the
//! dialect's words. The [`snippets`] module holds template snippets such
//! as `tb` (table block) and `idx` (indexes block).
//!
//! ## Examples
//!
//! ```rust,ignore
//! use dbdl_context::{CompletionContext, detect_completion_context};
//!
//! match detect_completion_context(text, &tree, offset) {
//!     Some(CompletionContext::IndexColumnList { table, .. }) => {
//!         // suggest the table's columns
//!     }
//!     Some(CompletionContext::DataType { .. }) => {
//!         // suggest data types
//!     }
//!     _ => {}
//! }
//! ```

pub mod completion;
pub mod item;
pub mod keywords;
pub mod resolver;
pub mod snippets;

pub use completion::{CompletionContext, detect_completion_context};
pub use item::{CompletionItem, CompletionKind, CompletionResult};
pub use keywords::{KeywordProvider, KeywordSet};
pub use resolver::Resolver;
pub use snippets::{Snippet, plain_text};
