// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the dbdl crates
//!
//! The grammar is an external collaborator, so tests describe trees by hand:
//! - [`MockNode`] builds arbitrary trees, [`Locator`] finds the offsets
//! - [`TableFixture`] renders a well-formed table and its tree together
//! - [`StaticParser`] and [`FnParser`] plug canned trees into the `Parser` seam
//! - cursor marker helpers for `|`-annotated inputs

pub mod cursor;
pub mod fixtures;
pub mod mock_tree;
pub mod static_parser;

pub use cursor::{get_cursor_position, remove_cursor_marker, split_cursor};
pub use fixtures::{Fixture, TableFixture};
pub use mock_tree::{Locator, MockNode};
pub use static_parser::{FnParser, StaticParser};
