// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Well-formed schema fixtures
//!
//! [`TableFixture`] renders source text and the tree a parser would produce
//! for it in one pass, so offsets always agree.

use dbdl_grammar::{SyntaxKind, SyntaxTree, TreeBuilder};

/// Source text paired with its syntax tree
#[derive(Debug, Clone)]
pub struct Fixture {
    pub source: String,
    pub tree: SyntaxTree,
}

impl Fixture {
    /// Render several tables into one document
    pub fn tables(tables: &[TableFixture]) -> Self {
        let mut w = Writer::default();
        w.builder.start_node(SyntaxKind::SourceFile, 0);
        for table in tables {
            table.write(&mut w);
        }
        let end = w.source.len();
        w.builder.finish_node(end);
        Self {
            source: w.source,
            tree: w.builder.finish(),
        }
    }

    /// Offset of the first occurrence of `needle` at or after `from`
    ///
    /// # Panics
    ///
    /// Panics when `needle` does not occur.
    pub fn offset_of(&self, needle: &str, from: usize) -> usize {
        self.source[from..]
            .find(needle)
            .map(|i| from + i)
            .unwrap_or_else(|| panic!("{needle:?} not found in fixture"))
    }

    /// Offset just past the first occurrence of `needle`
    pub fn offset_after(&self, needle: &str) -> usize {
        self.offset_of(needle, 0) + needle.len()
    }
}

/// One `Table name { ... }` block
///
/// ```text
/// Table users {
///   id bigint
///   name varchar
///   Indexes {
///     (id, name) unique btree
///   }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableFixture {
    name: String,
    columns: Vec<(String, String)>,
    indexes: Vec<(Vec<String>, Option<String>)>,
}

impl TableFixture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a `name type` column
    pub fn column(mut self, name: &str, data_type: &str) -> Self {
        self.columns.push((name.to_string(), data_type.to_string()));
        self
    }

    /// Add an index over `columns`, with optional type words such as
    /// `"unique btree"`. An empty column name leaves an empty slot.
    pub fn index(mut self, columns: &[&str], index_type: Option<&str>) -> Self {
        self.indexes.push((
            columns.iter().map(|c| c.to_string()).collect(),
            index_type.map(str::to_string),
        ));
        self
    }

    /// Render this table as a whole document
    pub fn render(&self) -> Fixture {
        Fixture::tables(std::slice::from_ref(self))
    }

    fn write(&self, w: &mut Writer) {
        w.start(SyntaxKind::TableBlock);
        w.leaf(SyntaxKind::Table, "Table");
        w.text(" ");
        w.start(SyntaxKind::TableName);
        w.leaf(SyntaxKind::Identifier, &self.name);
        w.finish();
        w.text(" ");
        w.leaf(SyntaxKind::BraceOpen, "{");
        w.text("\n");

        for (name, data_type) in &self.columns {
            w.text("  ");
            w.start(SyntaxKind::Column);
            w.start(SyntaxKind::ColumnName);
            w.leaf(SyntaxKind::Identifier, name);
            w.finish();
            w.text(" ");
            w.start(SyntaxKind::DataType);
            w.leaf(SyntaxKind::Type, data_type);
            w.finish();
            w.finish();
            w.text("\n");
        }

        if !self.indexes.is_empty() {
            w.text("  ");
            w.start(SyntaxKind::IndexBlock);
            w.leaf(SyntaxKind::Indexes, "Indexes");
            w.text(" ");
            w.leaf(SyntaxKind::BraceOpen, "{");
            w.text("\n");
            for (columns, index_type) in &self.indexes {
                w.text("    ");
                w.start(SyntaxKind::Index);
                w.start(SyntaxKind::IndexColumnBlock);
                w.leaf(SyntaxKind::ParenOpen, "(");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        w.leaf(SyntaxKind::Punctuation, ",");
                        w.text(" ");
                    }
                    if !column.is_empty() {
                        w.start(SyntaxKind::IndexColumnName);
                        w.leaf(SyntaxKind::Identifier, column);
                        w.finish();
                    }
                }
                w.leaf(SyntaxKind::ParenClose, ")");
                w.finish();
                if let Some(index_type) = index_type {
                    w.text(" ");
                    w.start(SyntaxKind::IndexType);
                    for (i, word) in index_type.split_whitespace().enumerate() {
                        if i > 0 {
                            w.text(" ");
                        }
                        w.leaf(SyntaxKind::Keyword, word);
                    }
                    w.finish();
                }
                w.finish();
                w.text("\n");
            }
            w.text("  ");
            w.leaf(SyntaxKind::BraceClose, "}");
            w.finish();
            w.text("\n");
        }

        w.leaf(SyntaxKind::BraceClose, "}");
        w.finish();
        w.text("\n");
    }
}

#[derive(Default)]
struct Writer {
    source: String,
    builder: TreeBuilder,
}

impl Writer {
    fn text(&mut self, text: &str) {
        self.source.push_str(text);
    }

    fn start(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind, self.source.len());
    }

    fn finish(&mut self) {
        self.builder.finish_node(self.source.len());
    }

    fn leaf(&mut self, kind: SyntaxKind, text: &str) {
        let from = self.source.len();
        self.source.push_str(text);
        self.builder.leaf(kind, from, self.source.len());
    }
}
