// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect descriptor
//!
//! [`DialectSpec`] is the serialized, partially-specified form a dialect is
//! distributed in. [`Dialect::define`] fills in the defaults and builds the
//! word classification table once.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builtin::{KEYWORDS, SQL_TYPES};
use crate::error::{DialectError, DialectResult};

/// Default operator characters
pub const DEFAULT_OPERATOR_CHARS: &str = "*+-%<>!=&|~^/";

/// Default special variable prefix characters
pub const DEFAULT_SPECIAL_VAR: &str = "?";

/// Default identifier quote characters
pub const DEFAULT_IDENTIFIER_QUOTES: &str = "\"";

/// Lexical class of a reserved word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordClass {
    Keyword,
    Type,
    Builtin,
    Bool,
    Null,
    Not,
    Default,
}

/// Serializable dialect configuration
///
/// Every field except `name` is optional; absent fields take the standard
/// defaults. Word lists are space-separated strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialectSpec {
    pub name: String,
    /// Space-separated keywords
    pub keywords: Option<String>,
    /// Space-separated type names
    pub types: Option<String>,
    /// Space-separated builtin identifiers
    pub builtin: Option<String>,
    /// Regular strings allow backslash escapes
    pub backslash_escapes: Option<bool>,
    /// `#` starts a line comment
    pub hash_comments: Option<bool>,
    /// `//` starts a line comment
    pub slash_comments: Option<bool>,
    /// `--` only starts a comment when followed by a space
    pub space_after_dashes: Option<bool>,
    /// `"..."` is a string rather than an identifier
    pub double_quoted_strings: Option<bool>,
    /// `$$...$$` is a string
    pub double_dollar_quoted_strings: Option<bool>,
    /// `0b1010` is a bit literal
    pub unquoted_bit_literals: Option<bool>,
    /// `b'...'` may hold arbitrary bytes
    pub treat_bits_as_bytes: Option<bool>,
    /// `_utf8'str'` and `N'str'` are strings
    pub char_set_casts: Option<bool>,
    /// `q'[str]'` quoting
    pub plsql_quoting_mechanism: Option<bool>,
    pub operator_chars: Option<String>,
    pub special_var: Option<String>,
    pub identifier_quotes: Option<String>,
}

impl DialectSpec {
    /// Create an empty spec with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Decode a spec from JSON
    pub fn from_json(source: &str) -> DialectResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Decode a spec from YAML
    pub fn from_yaml(source: &str) -> DialectResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

/// Immutable dialect descriptor
///
/// Built once per dialect and shared by reference. Word lookup is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub name: String,
    words: BTreeMap<String, WordClass>,
    pub backslash_escapes: bool,
    pub hash_comments: bool,
    pub slash_comments: bool,
    pub space_after_dashes: bool,
    pub double_quoted_strings: bool,
    pub double_dollar_quoted_strings: bool,
    pub unquoted_bit_literals: bool,
    pub treat_bits_as_bytes: bool,
    pub charset_casts: bool,
    pub plsql_quoting_mechanism: bool,
    pub operator_chars: String,
    pub special_var_chars: String,
    pub identifier_quote_chars: String,
}

impl Dialect {
    /// Build a descriptor from a spec, applying defaults
    pub fn define(spec: &DialectSpec) -> Self {
        let words = word_table(
            spec.keywords.as_deref().unwrap_or(KEYWORDS),
            spec.types.as_deref().unwrap_or(SQL_TYPES),
            spec.builtin.as_deref().unwrap_or(""),
        );

        Self {
            name: spec.name.clone(),
            words,
            backslash_escapes: spec.backslash_escapes.unwrap_or(false),
            hash_comments: spec.hash_comments.unwrap_or(false),
            slash_comments: spec.slash_comments.unwrap_or(false),
            space_after_dashes: spec.space_after_dashes.unwrap_or(false),
            double_quoted_strings: spec.double_quoted_strings.unwrap_or(false),
            double_dollar_quoted_strings: spec.double_dollar_quoted_strings.unwrap_or(false),
            unquoted_bit_literals: spec.unquoted_bit_literals.unwrap_or(false),
            treat_bits_as_bytes: spec.treat_bits_as_bytes.unwrap_or(false),
            charset_casts: spec.char_set_casts.unwrap_or(false),
            plsql_quoting_mechanism: spec.plsql_quoting_mechanism.unwrap_or(false),
            operator_chars: spec
                .operator_chars
                .clone()
                .unwrap_or_else(|| DEFAULT_OPERATOR_CHARS.to_string()),
            special_var_chars: spec
                .special_var
                .clone()
                .unwrap_or_else(|| DEFAULT_SPECIAL_VAR.to_string()),
            identifier_quote_chars: spec
                .identifier_quotes
                .clone()
                .unwrap_or_else(|| DEFAULT_IDENTIFIER_QUOTES.to_string()),
        }
    }

    /// Build a named descriptor from a spec, rejecting anonymous specs
    pub fn try_define(spec: &DialectSpec) -> DialectResult<Self> {
        if spec.name.trim().is_empty() {
            return Err(DialectError::MissingName);
        }
        Ok(Self::define(spec))
    }

    /// Load a descriptor from a JSON document
    pub fn from_json(source: &str) -> DialectResult<Self> {
        Self::try_define(&DialectSpec::from_json(source)?)
    }

    /// Load a descriptor from a YAML document
    pub fn from_yaml(source: &str) -> DialectResult<Self> {
        Self::try_define(&DialectSpec::from_yaml(source)?)
    }

    /// Classify a word, ignoring case
    pub fn classify(&self, word: &str) -> Option<WordClass> {
        self.words.get(&word.to_ascii_lowercase()).copied()
    }

    /// All classified words in lexicographic order
    pub fn words(&self) -> impl Iterator<Item = (&str, WordClass)> + '_ {
        self.words.iter().map(|(word, class)| (word.as_str(), *class))
    }

    /// Words of a single class in lexicographic order
    pub fn words_of(&self, class: WordClass) -> impl Iterator<Item = &str> + '_ {
        self.words()
            .filter(move |(_, c)| *c == class)
            .map(|(word, _)| word)
    }

    pub fn is_operator_char(&self, ch: char) -> bool {
        self.operator_chars.contains(ch)
    }

    pub fn is_special_var_char(&self, ch: char) -> bool {
        self.special_var_chars.contains(ch)
    }

    pub fn is_identifier_quote(&self, ch: char) -> bool {
        self.identifier_quote_chars.contains(ch)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Build the word table. Later classes override earlier ones.
fn word_table(keywords: &str, types: &str, builtin: &str) -> BTreeMap<String, WordClass> {
    let mut words = BTreeMap::new();
    for word in ["true", "false"] {
        words.insert(word.to_string(), WordClass::Bool);
    }
    for word in ["null", "unknown"] {
        words.insert(word.to_string(), WordClass::Null);
    }
    words.insert("not".to_string(), WordClass::Not);
    words.insert("default".to_string(), WordClass::Default);

    for (list, class) in [
        (builtin, WordClass::Builtin),
        (keywords, WordClass::Keyword),
        (types, WordClass::Type),
    ] {
        for word in list.split_whitespace() {
            words.insert(word.to_ascii_lowercase(), class);
        }
    }
    words
}
