// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Cursor marker helpers

/// Byte offset of the `|` cursor marker
pub fn get_cursor_position(input: &str) -> Option<usize> {
    input.find('|')
}

/// Remove the cursor marker from the input
pub fn remove_cursor_marker(input: &str) -> String {
    input.replacen('|', "", 1)
}

/// Split `|`-annotated input into text and cursor offset
///
/// Without a marker the cursor is placed at the end.
pub fn split_cursor(input: &str) -> (String, usize) {
    let text = remove_cursor_marker(input);
    let offset = get_cursor_position(input).unwrap_or(text.len());
    (text, offset)
}
