// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Language service integration tests

use std::sync::{Arc, Mutex};

use dbdl_grammar::{Parser, SyntaxKind, SyntaxTree};
use dbdl_lexer::{Token, TokenKind};
use dbdl_lsp::{ConfigError, LanguageService, ServiceConfig, ServiceError};
use dbdl_test_utils::{FnParser, MockNode, StaticParser, TableFixture};
use lsp_types::{CompletionItemKind, DiagnosticSeverity, InsertTextFormat, Position, Range, Url};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn service(config: ServiceConfig, tree: SyntaxTree) -> LanguageService {
    init_tracing();
    LanguageService::new(config, Box::new(StaticParser::new(tree))).unwrap()
}

/// `users` on its own: an error directly under the root
fn missing_table_keyword(text: &str) -> SyntaxTree {
    MockNode::new(SyntaxKind::SourceFile)
        .with_child(
            MockNode::new(SyntaxKind::Error)
                .with_child(MockNode::leaf(SyntaxKind::Identifier, 0..text.len())),
        )
        .build()
}

/// Records the tokens each parse receives
#[derive(Clone, Default)]
struct RecordingParser {
    seen: Arc<Mutex<Vec<Vec<TokenKind>>>>,
}

impl Parser for RecordingParser {
    fn parse(&self, source: &str, tokens: &[Token]) -> SyntaxTree {
        self.seen
            .lock()
            .unwrap()
            .push(tokens.iter().map(|t| t.kind).collect());
        SyntaxTree::empty(source.len())
    }
}

#[test]
fn test_completion_request_index_columns() {
    let fixture = TableFixture::new("users")
        .column("id", "bigint")
        .column("name", "varchar")
        .column("email", "varchar")
        .index(&["id", ""], None)
        .render();
    let offset = fixture.offset_after("(id, ");

    let service = service(ServiceConfig::new("MySQL"), fixture.tree.clone());
    let result = service.completion_request(&fixture.source, offset).unwrap();
    assert_eq!(result.labels(), vec!["name", "email"]);
}

#[test]
fn test_completion_list_in_lsp_form() {
    let fixture = TableFixture::new("users").column("id", "bigint").render();
    let cursor = fixture.offset_after("bigint\n");
    let position = Position::new(2, 0);

    let service = service(ServiceConfig::default(), fixture.tree.clone());
    let list = service.completion(&fixture.source, position).unwrap().unwrap();

    assert!(!list.is_incomplete);
    let labels: Vec<_> = list.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["idx", "id", "is"]);
    assert_eq!(cursor, fixture.source.rfind('}').unwrap());

    let idx = &list.items[0];
    assert_eq!(idx.kind, Some(CompletionItemKind::SNIPPET));
    assert_eq!(idx.insert_text_format, Some(InsertTextFormat::SNIPPET));
}

#[test]
fn test_plain_text_snippets_when_unsupported() {
    let text = "";
    let config = ServiceConfig::default().with_snippet_support(false);
    let service = service(config, SyntaxTree::empty(0));

    let list = service.completion(text, Position::new(0, 0)).unwrap().unwrap();
    let Some(lsp_types::CompletionTextEdit::Edit(edit)) = &list.items[0].text_edit else {
        panic!("expected a text edit");
    };
    assert_eq!(edit.new_text, "Table table_name {\n\t\n}\n");
    assert_eq!(list.items[0].insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
}

#[test]
fn test_upper_case_keywords() {
    let text = "Table t {\n  id \n}";
    let slot = text.find("id").unwrap() + 3;
    let tree = MockNode::new(SyntaxKind::SourceFile)
        .with_range(0, text.len())
        .with_child(
            MockNode::new(SyntaxKind::TableBlock)
                .with_range(0, text.len())
                .with_child(MockNode::leaf(SyntaxKind::Table, 0..5))
                .with_child(
                    MockNode::new(SyntaxKind::TableName)
                        .with_child(MockNode::leaf(SyntaxKind::Identifier, 6..7)),
                )
                .with_child(
                    MockNode::new(SyntaxKind::Column)
                        .with_child(
                            MockNode::new(SyntaxKind::ColumnName)
                                .with_child(MockNode::leaf(SyntaxKind::Identifier, 12..14)),
                        )
                        .with_child(MockNode::error(slot)),
                ),
        )
        .build();

    let config = ServiceConfig::new("PostgreSQL").with_upper_case_keywords(true);
    let result = service(config, tree).completion_request(text, slot).unwrap();
    let labels = result.labels();
    assert!(labels.contains(&"BIGINT"));
    assert!(labels.contains(&"UUID"));
    // Snippet labels keep their case
    assert_eq!(labels[0], "utf8mb4");
}

#[test]
fn test_invalid_position() {
    let service = service(ServiceConfig::default(), SyntaxTree::empty(0));
    let err = service.completion("a\nb", Position::new(5, 0)).unwrap_err();
    assert!(err.should_return_empty());
    assert!(matches!(err, ServiceError::InvalidPosition(p) if p.line == 5));
}

#[test]
fn test_lint_request_and_quick_fix() {
    let text = "users";
    let service = service(ServiceConfig::default(), missing_table_keyword(text));

    let diagnostics = service.lint_request(text);
    assert_eq!(diagnostics.len(), 1);
    let fixed = diagnostics[0].fix.as_ref().unwrap().apply(text);
    assert_eq!(fixed, "Table users");

    let lsp = service.diagnostics(text);
    assert_eq!(lsp[0].severity, Some(DiagnosticSeverity::ERROR));
    assert_eq!(lsp[0].source.as_deref(), Some("dbdl"));
    assert_eq!(lsp[0].range, Range::new(Position::new(0, 0), Position::new(0, 5)));

    let uri = Url::parse("file:///schema.dbdl").unwrap();
    let everywhere = Range::new(Position::new(0, 0), Position::new(0, 5));
    let actions = service.code_actions(&uri, text, everywhere);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].title, "Add 'Table'");
}

#[test]
fn test_lint_request_skips_parser_for_empty_text() {
    let parser = RecordingParser::default();
    let seen = parser.seen.clone();
    let service = LanguageService::new(ServiceConfig::default(), Box::new(parser)).unwrap();

    assert!(service.lint_request("").is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_parser_receives_dialect_tokens() {
    let parser = RecordingParser::default();
    let seen = parser.seen.clone();
    let mut service = LanguageService::new(ServiceConfig::new("MySQL"), Box::new(parser)).unwrap();

    service.lint_request("id # note");
    service
        .reconfigure(ServiceConfig::new("PostgreSQL"))
        .unwrap();
    service.lint_request("id # note");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].last(), Some(&TokenKind::LineComment));
    assert_ne!(seen[1].last(), Some(&TokenKind::LineComment));
}

#[test]
fn test_reconfigure_keeps_old_config_on_error() {
    let mut service = service(ServiceConfig::new("SQLite"), SyntaxTree::empty(0));
    let err = service.reconfigure(ServiceConfig::new("db2")).unwrap_err();
    assert!(matches!(err, ServiceError::Config(ConfigError::UnknownDialect(_))));
    assert_eq!(service.dialect().name, "SQLite");
}

#[test]
fn test_parser_sees_each_snapshot() {
    let parser = FnParser(|source: &str| {
        if source.is_empty() {
            SyntaxTree::empty(0)
        } else {
            missing_table_keyword(source)
        }
    });
    let service = LanguageService::new(ServiceConfig::default(), Box::new(parser)).unwrap();

    assert_eq!(service.lint_request("users").len(), 1);
    assert_eq!(service.lint_request("orders")[0].to, 6);
}
