// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # dbdl - Lint Layer
//!
//! Structural and semantic diagnostics for dbdl schema documents.
//!
//! ## Overview
//!
//! [`lint`] reads a syntax tree and its source text and returns a list of
//! [`Diagnostic`]s. It never fails and never edits the document.
//!
//! ## Core Concepts
//!
//! ### Syntax diagnostics
//!
//! Parse errors arrive as error nodes in the tree. [`ErrorShape`] classifies
//! each one by its parent and previous sibling and maps the shape to a fixed
//! message, sometimes with a [`Fix`]:
//!
//! ```rust
//! use dbdl_semantic::Fix;
//!
//! let fix = Fix::insert(0, "Table ");
//! assert_eq!(fix.apply("users {}"), "Table users {}");
//! ```
//!
//! ### Column references
//!
//! [`ColumnValidator`] checks that every column named in an index
//! declaration is declared by the same table.

pub mod diagnostic;
pub mod linter;
pub mod syntax_diagnostics;
pub mod validator;

pub use diagnostic::{Diagnostic, Fix, Severity};
pub use linter::lint;
pub use syntax_diagnostics::{ErrorShape, syntax_diagnostic};
pub use validator::{COLUMN_NOT_FOUND, ColumnValidator};
