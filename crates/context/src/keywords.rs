// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Keyword vocabularies for completion
//!
//! Static word lists for each completion context, plus the words a dialect
//! contributes. Keyword items always sort after snippets.

use std::collections::HashSet;

use dbdl_dialect::{Dialect, WordClass};

use crate::item::CompletionItem;

/// Priority of the first keyword in a set
pub const KEYWORD_PRIORITY: u32 = 100;

/// Column data types offered regardless of dialect
pub const DATA_TYPES: &[&str] = &[
    "integer",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "numeric",
    "float",
    "double",
    "real",
    "bit",
    "char",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "date",
    "datetime",
    "timestamp",
    "time",
    "year",
    "enum",
    "set",
    "binary",
    "varbinary",
    "blob",
    "tinyblob",
    "mediumblob",
    "longblob",
    "json",
    "bool",
    "boolean",
    "unsigned",
    "zerofill",
];

/// Column option keywords
pub const OPTION_KEYWORDS: &[&str] = &[
    "pk", "auto", "not", "null", "unique", "default", "asc", "desc", "true", "false",
];

/// Index access methods
pub const INDEX_METHODS: &[&str] = &["btree", "hash"];

/// Index uniqueness marker
pub const UNIQUE: &str = "unique";

/// An ordered, duplicate-free list of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Append words not yet present
    pub fn extend<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) {
        for word in words {
            let word = word.as_ref();
            if !self.words.iter().any(|w| w == word) {
                self.words.push(word.to_string());
            }
        }
    }

    /// Words not in `exclude`
    pub fn exclude(&self, exclude: &HashSet<&str>) -> Self {
        Self {
            words: self
                .words
                .iter()
                .filter(|w| !exclude.contains(w.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Builds keyword items for one dialect
#[derive(Debug, Clone, Copy)]
pub struct KeywordProvider<'d> {
    dialect: &'d Dialect,
    upper_case: bool,
}

impl<'d> KeywordProvider<'d> {
    pub fn new(dialect: &'d Dialect) -> Self {
        Self {
            dialect,
            upper_case: false,
        }
    }

    /// Render keyword labels in upper case
    pub fn with_upper_case(mut self, upper_case: bool) -> Self {
        self.upper_case = upper_case;
        self
    }

    pub fn dialect(&self) -> &'d Dialect {
        self.dialect
    }

    /// Built-in data types followed by the dialect's type words
    pub fn data_types(&self) -> KeywordSet {
        let mut set = KeywordSet::new(DATA_TYPES);
        set.extend(self.dialect.words_of(WordClass::Type));
        set
    }

    pub fn options(&self) -> KeywordSet {
        KeywordSet::new(OPTION_KEYWORDS)
    }

    /// Index methods and the uniqueness marker
    pub fn index_types(&self) -> KeywordSet {
        let mut set = KeywordSet::new(INDEX_METHODS);
        set.extend([UNIQUE]);
        set
    }

    /// Every word the dialect defines
    pub fn dialect_words(&self) -> KeywordSet {
        KeywordSet::new(self.dialect.words().map(|(word, _)| word))
    }

    /// Completion items for a set, in order
    pub fn items<'s>(&self, set: &'s KeywordSet) -> impl Iterator<Item = CompletionItem> + 's {
        let upper_case = self.upper_case;
        set.words().enumerate().map(move |(i, word)| {
            let label = if upper_case {
                word.to_ascii_uppercase()
            } else {
                word.to_string()
            };
            CompletionItem::keyword(label, KEYWORD_PRIORITY + i as u32)
        })
    }
}
