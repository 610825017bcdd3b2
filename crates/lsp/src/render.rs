// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # LSP rendering
//!
//! Converts byte offsets, completion results and diagnostics into
//! `lsp-types` values. Positions count UTF-16 code units per line, as the
//! protocol requires.

use std::collections::HashMap;

use dbdl_context::{CompletionItem, CompletionKind, CompletionResult};
use dbdl_semantic::{Diagnostic, Severity};
use lsp_types::{
    CodeAction, CodeActionKind, CompletionItemKind, CompletionList, CompletionTextEdit,
    DiagnosticSeverity, InsertTextFormat, Position, Range, TextEdit, Url, WorkspaceEdit,
};

/// `source` of every published diagnostic
pub const DIAGNOSTIC_SOURCE: &str = "dbdl";

/// LSP position of a byte offset
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte
/// character snap to its start.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let character = before[line_start..].encode_utf16().count();
    Position::new(line as u32, character as u32)
}

/// Byte offset of an LSP position
///
/// A character past the end of its line clamps to the line end. Returns
/// `None` when the line does not exist.
pub fn position_to_offset(text: &str, position: Position) -> Option<usize> {
    let mut line_start = 0;
    for _ in 0..position.line {
        line_start += text[line_start..].find('\n')? + 1;
    }
    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |i| line_start + i);

    let mut units = 0;
    for (i, ch) in text[line_start..line_end].char_indices() {
        if units >= position.character as usize {
            return Some(line_start + i);
        }
        units += ch.len_utf16();
    }
    Some(line_end)
}

pub fn offset_range(text: &str, from: usize, to: usize) -> Range {
    Range::new(offset_to_position(text, from), offset_to_position(text, to))
}

/// Completion item replacing `replace_from..cursor`
pub fn completion_item(
    text: &str,
    item: &CompletionItem,
    replace_from: usize,
    cursor: usize,
    snippet_support: bool,
) -> lsp_types::CompletionItem {
    let (kind, format) = match item.kind {
        CompletionKind::Keyword => (CompletionItemKind::KEYWORD, InsertTextFormat::PLAIN_TEXT),
        CompletionKind::Snippet if snippet_support => {
            (CompletionItemKind::SNIPPET, InsertTextFormat::SNIPPET)
        }
        CompletionKind::Snippet => (CompletionItemKind::SNIPPET, InsertTextFormat::PLAIN_TEXT),
    };

    lsp_types::CompletionItem {
        label: item.label.clone(),
        kind: Some(kind),
        detail: item.detail.clone(),
        sort_text: Some(format!("{:05}", item.priority)),
        filter_text: Some(item.label.clone()),
        insert_text_format: Some(format),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit::new(
            offset_range(text, replace_from, cursor),
            item.insert_text(snippet_support),
        ))),
        ..Default::default()
    }
}

pub fn completion_list(
    text: &str,
    result: &CompletionResult,
    cursor: usize,
    snippet_support: bool,
) -> CompletionList {
    CompletionList {
        is_incomplete: false,
        items: result
            .items
            .iter()
            .map(|item| completion_item(text, item, result.replace_from, cursor, snippet_support))
            .collect(),
    }
}

pub fn diagnostic(text: &str, diagnostic: &Diagnostic) -> lsp_types::Diagnostic {
    let severity = match diagnostic.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Hint => DiagnosticSeverity::HINT,
    };
    lsp_types::Diagnostic {
        range: offset_range(text, diagnostic.from, diagnostic.to),
        severity: Some(severity),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// Quick fix applying a diagnostic's fix, if it has one
pub fn code_action(uri: &Url, text: &str, source: &Diagnostic) -> Option<CodeAction> {
    let fix = source.fix.as_ref()?;
    let at = offset_to_position(text, fix.insert_at);
    let edit = TextEdit::new(Range::new(at, at), fix.text.clone());

    Some(CodeAction {
        title: format!("Add '{}'", fix.text.trim()),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic(text, source)]),
        edit: Some(WorkspaceEdit::new(HashMap::from([(uri.clone(), vec![edit])]))),
        is_preferred: Some(true),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdl_semantic::Fix;

    #[test]
    fn test_offset_to_position() {
        let text = "Table t {\n  id int\n}";
        assert_eq!(offset_to_position(text, 0), Position::new(0, 0));
        assert_eq!(offset_to_position(text, 12), Position::new(1, 2));
        assert_eq!(offset_to_position(text, 100), Position::new(2, 1));
    }

    #[test]
    fn test_utf16_columns() {
        // 'é' is one UTF-16 unit, '𝄞' is two
        let text = "é𝄞x";
        assert_eq!(offset_to_position(text, 2), Position::new(0, 1));
        assert_eq!(offset_to_position(text, 6), Position::new(0, 3));
        assert_eq!(offset_to_position(text, 3), Position::new(0, 1));
        assert_eq!(position_to_offset(text, Position::new(0, 3)), Some(6));
        assert_eq!(position_to_offset(text, Position::new(0, 9)), Some(7));
    }

    #[test]
    fn test_position_to_offset() {
        let text = "a\nbc\n";
        assert_eq!(position_to_offset(text, Position::new(1, 1)), Some(3));
        assert_eq!(position_to_offset(text, Position::new(2, 0)), Some(5));
        assert_eq!(position_to_offset(text, Position::new(3, 0)), None);
    }

    #[test]
    fn test_completion_item_edit() {
        let text = "Table t {\n  i\n}";
        let item = CompletionItem::snippet("id", "id ${1:bigint} not null pk ${2:auto} $0", None, 1);
        let lsp = completion_item(text, &item, 12, 13, false);

        assert_eq!(lsp.insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
        assert_eq!(lsp.sort_text.as_deref(), Some("00001"));
        let Some(CompletionTextEdit::Edit(edit)) = lsp.text_edit else {
            panic!("expected a plain text edit");
        };
        assert_eq!(edit.range, Range::new(Position::new(1, 2), Position::new(1, 3)));
        assert_eq!(edit.new_text, "id bigint not null pk auto ");
    }

    #[test]
    fn test_code_action() {
        let uri = Url::parse("file:///schema.dbdl").unwrap();
        let source = Diagnostic::error(0, 5, "Keyword 'Table' is required")
            .with_fix(Fix::insert(0, "Table "));
        let action = code_action(&uri, "users", &source).unwrap();

        assert_eq!(action.title, "Add 'Table'");
        let changes = action.edit.unwrap().changes.unwrap();
        assert_eq!(changes[&uri][0].new_text, "Table ");
        assert!(code_action(&uri, "users", &Diagnostic::error(0, 1, "")).is_none());
    }
}
