// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Snippet catalog
//!
//! Templates use LSP snippet syntax: `${1:default}` is a tab stop with a
//! default, `$1` / `${1}` an empty tab stop, `$0` the final cursor.

use crate::item::CompletionItem;

/// A static snippet definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub label: &'static str,
    pub detail: Option<&'static str>,
    pub template: &'static str,
}

impl Snippet {
    const fn new(label: &'static str, detail: Option<&'static str>, template: &'static str) -> Self {
        Self {
            label,
            detail,
            template,
        }
    }

    pub fn to_item(&self, priority: u32) -> CompletionItem {
        CompletionItem::snippet(self.label, self.template, self.detail, priority)
    }
}

/// Offered at document level
pub const SCRIPT_SNIPPETS: &[Snippet] = &[Snippet::new(
    "tb",
    Some("table block"),
    "Table ${1:table_name} {\n\t$0\n}\n",
)];

/// Offered inside a table block
pub const TABLE_SNIPPETS: &[Snippet] = &[
    Snippet::new("idx", Some("indexes block"), "Indexes {\n\t$0\n}\n"),
    Snippet::new("id", Some("id bigint not null pk auto"), "id ${1:bigint} not null pk ${2:auto} $0"),
    Snippet::new(
        "is",
        Some("is_xx tinyint(1) not null default 0"),
        "is_$1 ${2:tinyint(1)} not null default 0",
    ),
];

/// Offered where a data type is expected
pub const DATA_TYPE_SNIPPETS: &[Snippet] = &[
    Snippet::new("utf8mb4", None, "CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci "),
    Snippet::new("utf8", None, "CHARACTER SET utf8 COLLATE utf8_unicode_ci "),
    Snippet::new("varchar", None, "varchar(${1:255}) $0"),
    Snippet::new("int", None, "int(${1:10}) $0"),
    Snippet::new("decimal", None, "decimal(${1:10}, ${2:2}) $0"),
    Snippet::new("string", Some("varchar(255)"), "varchar(${1:255}) $0"),
];

/// Completion items for a snippet list, in catalog order
pub fn snippet_items(snippets: &[Snippet]) -> impl Iterator<Item = CompletionItem> + '_ {
    snippets
        .iter()
        .enumerate()
        .map(|(i, snippet)| snippet.to_item(i as u32))
}

/// Render a template as plain text
///
/// Tab stops become their default text (or nothing) and `\$`, `\}`, `\\`
/// escapes are resolved.
pub fn plain_text(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                Some(&next) if matches!(next, '$' | '}' | '\\') => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push(ch),
            },
            '$' => match chars.peek() {
                Some('{') => {
                    chars.next();
                    while chars.next_if(|c| c.is_ascii_digit()).is_some() {}
                    let has_default = chars.next_if_eq(&':').is_some();
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            break;
                        }
                        if has_default {
                            out.push(inner);
                        }
                    }
                }
                Some(c) if c.is_ascii_digit() => {
                    while chars.next_if(|c| c.is_ascii_digit()).is_some() {}
                }
                _ => out.push(ch),
            },
            _ => out.push(ch),
        }
    }

    out
}
