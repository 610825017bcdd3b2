// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Tokenizer
//!
//! Rules are tried in a fixed order at each position because several
//! literal forms share a leading character (`b'..'` vs. a word starting with
//! `b`, `0x1F` vs. a number, `_utf8'..'` vs. an identifier).
//!
//! Structural decisions only ever look at ASCII bytes, so every token
//! boundary falls on a character boundary. Non-ASCII characters outside
//! literals and comments become one `Unknown` token each.

use dbdl_dialect::Dialect;

use crate::token::{Token, TokenKind};

/// Tokenize `text` lazily with the rules of `dialect`
pub fn tokenize<'a>(text: &'a str, dialect: &'a Dialect) -> Tokenizer<'a> {
    Tokenizer::new(text, dialect)
}

/// Lazy token stream over a source text
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    bytes: &'a [u8],
    dialect: &'a Dialect,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, dialect: &'a Dialect) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            dialect,
            pos: 0,
        }
    }

    fn peek(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    fn at(&self, n: usize, byte: u8) -> bool {
        self.peek(n) == Some(byte)
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn skip_to_end(&mut self) {
        self.pos = self.bytes.len();
    }

    fn scan(&mut self, next: u8) -> TokenKind {
        let d = self.dialect;
        let start = self.pos;
        self.pos += 1;

        match next {
            b' ' | b'\t' | b'\r' | b'\n' => {
                self.eat_while(is_space);
                TokenKind::Whitespace
            }
            b'$' if d.double_dollar_quoted_strings && self.at(0, b'$') => {
                self.pos += 1;
                self.read_double_dollar_literal();
                TokenKind::String
            }
            b'\'' => {
                self.read_literal(next, d.backslash_escapes);
                TokenKind::String
            }
            b'"' if d.double_quoted_strings => {
                self.read_literal(next, d.backslash_escapes);
                TokenKind::String
            }
            b'#' if d.hash_comments => {
                self.read_to_eol();
                TokenKind::LineComment
            }
            b'/' if d.slash_comments && self.at(0, b'/') => {
                self.read_to_eol();
                TokenKind::LineComment
            }
            b'-' if self.at(0, b'-') && (!d.space_after_dashes || self.at(1, b' ')) => {
                self.read_to_eol();
                TokenKind::LineComment
            }
            b'/' if self.at(0, b'*') => {
                self.pos += 1;
                self.read_block_comment();
                TokenKind::BlockComment
            }
            b'e' | b'E' if self.at(0, b'\'') => {
                self.pos += 1;
                self.read_literal(b'\'', true);
                TokenKind::String
            }
            b'n' | b'N' if d.charset_casts && self.at(0, b'\'') => {
                self.pos += 1;
                self.read_literal(b'\'', d.backslash_escapes);
                TokenKind::String
            }
            b'_' if d.charset_casts && self.charset_prefix_len().is_some() => {
                let prefix = self.charset_prefix_len().unwrap_or_default();
                self.pos += prefix + 1;
                self.read_literal(b'\'', d.backslash_escapes);
                TokenKind::String
            }
            b'q' | b'Q' if d.plsql_quoting_mechanism && self.at(0, b'\'') => {
                match self.plsql_open_delimiter() {
                    Some(open) => {
                        self.pos += 1 + open.len_utf8();
                        self.read_plsql_literal(open);
                        TokenKind::String
                    }
                    None => self.read_word(start),
                }
            }
            b'0' if d.unquoted_bit_literals && self.at(0, b'b') => {
                self.pos += 1;
                self.read_bits(None);
                TokenKind::Bits
            }
            b'b' | b'B' if self.at(0, b'\'') || self.at(0, b'"') => {
                let quote = self.peek(0).unwrap_or(b'\'');
                self.pos += 1;
                if d.treat_bits_as_bytes {
                    self.read_literal(quote, d.backslash_escapes);
                    TokenKind::Bytes
                } else {
                    self.read_bits(Some(quote));
                    TokenKind::Bits
                }
            }
            b'0' if self.at(0, b'x') || self.at(0, b'X') => {
                self.pos += 1;
                self.eat_while(|b| b.is_ascii_hexdigit());
                TokenKind::Number
            }
            b'x' | b'X' if self.at(0, b'\'') => {
                self.pos += 1;
                self.eat_while(|b| b.is_ascii_hexdigit());
                if self.at(0, b'\'') {
                    self.pos += 1;
                }
                TokenKind::Number
            }
            // `.5` is a number, but the dot in `12.3.4` or `t.5` is not
            b'.' if self.peek(0).is_some_and(|b| b.is_ascii_digit()) && !self.follows_word(start) => {
                self.read_number(true);
                TokenKind::Number
            }
            b'.' => TokenKind::Dot,
            b'0'..=b'9' => {
                self.read_number(false);
                TokenKind::Number
            }
            _ if next.is_ascii() && d.is_identifier_quote(char::from(next)) => {
                self.read_literal(next, false);
                TokenKind::QuotedIdentifier
            }
            _ if is_word_byte(next) => self.read_word(start),
            // Dialect character sets only apply once no literal or word matched
            _ if next.is_ascii() && d.is_operator_char(char::from(next)) => {
                self.eat_while(|b| b.is_ascii() && d.is_operator_char(char::from(b)));
                TokenKind::Operator
            }
            _ if next.is_ascii() && d.is_special_var_char(char::from(next)) => {
                if self.at(0, next) {
                    self.pos += 1;
                }
                self.read_word_or_quoted();
                TokenKind::SpecialVar
            }
            b',' | b';' | b':' => TokenKind::Punctuation,
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            b'{' => TokenKind::BraceOpen,
            b'}' => TokenKind::BraceClose,
            b'[' => TokenKind::BracketOpen,
            b']' => TokenKind::BracketClose,
            _ => {
                let width = self.text[start..].chars().next().map_or(1, char::len_utf8);
                self.pos = start + width;
                TokenKind::Unknown
            }
        }
    }

    /// Read up to and including `end`. With `backslash_escapes`, a backslash
    /// hides the following byte from end-quote recognition.
    fn read_literal(&mut self, end: u8, backslash_escapes: bool) {
        let mut escaped = false;
        while let Some(byte) = self.peek(0) {
            self.pos += 1;
            if byte == end && !escaped {
                return;
            }
            escaped = backslash_escapes && !escaped && byte == b'\\';
        }
    }

    fn read_double_dollar_literal(&mut self) {
        match self.text[self.pos..].find("$$") {
            Some(index) => self.pos += index + 2,
            None => self.skip_to_end(),
        }
    }

    fn read_to_eol(&mut self) {
        self.eat_while(|b| b != b'\n');
    }

    fn read_block_comment(&mut self) {
        let mut depth = 1usize;
        while let Some(cur) = self.peek(0) {
            self.pos += 1;
            if cur == b'*' && self.at(0, b'/') {
                self.pos += 1;
                depth -= 1;
                if depth == 0 {
                    return;
                }
            } else if cur == b'/' && self.at(0, b'*') {
                self.pos += 1;
                depth += 1;
            }
        }
    }

    /// Length of the letters between `_` and the quote of `_utf8'...'`
    fn charset_prefix_len(&self) -> Option<usize> {
        let run = self.bytes[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        (run > 1 && self.at(run, b'\'')).then_some(run)
    }

    /// Opening delimiter of `q'<delim>...<delim>'`
    fn plsql_open_delimiter(&self) -> Option<char> {
        self.text
            .get(self.pos + 1..)?
            .chars()
            .next()
            .filter(|ch| !matches!(ch, ' ' | '\t' | '\r' | '\n'))
    }

    fn read_plsql_literal(&mut self, open: char) {
        let close = match open {
            '[' => ']',
            '{' => '}',
            '<' => '>',
            '(' => ')',
            other => other,
        };
        let terminator = format!("{close}'");
        match self.text[self.pos..].find(&terminator) {
            Some(index) => self.pos += index + terminator.len(),
            None => self.skip_to_end(),
        }
    }

    fn read_bits(&mut self, end_quote: Option<u8>) {
        self.eat_while(|b| b == b'0' || b == b'1');
        if let Some(quote) = end_quote
            && self.at(0, quote)
        {
            self.pos += 1;
        }
    }

    fn read_number(&mut self, mut saw_dot: bool) {
        while let Some(byte) = self.peek(0) {
            if byte == b'.' {
                if saw_dot {
                    break;
                }
                saw_dot = true;
            } else if !byte.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }
        if self.at(0, b'e') || self.at(0, b'E') {
            self.pos += 1;
            if self.at(0, b'+') || self.at(0, b'-') {
                self.pos += 1;
            }
            self.eat_while(|b| b.is_ascii_digit());
        }
    }

    fn read_word_or_quoted(&mut self) {
        match self.peek(0) {
            Some(quote @ (b'\'' | b'"' | b'`')) => {
                self.pos += 1;
                self.read_literal(quote, false);
            }
            _ => self.eat_while(is_word_byte),
        }
    }

    /// Read the rest of a word starting at `start` and classify it
    fn read_word(&mut self, start: usize) -> TokenKind {
        self.eat_while(is_word_byte);
        let qualified = self.at(0, b'.') || (start > 0 && self.bytes[start - 1] == b'.');
        if qualified {
            return TokenKind::Identifier;
        }
        self.dialect
            .classify(&self.text[start..self.pos])
            .map_or(TokenKind::Identifier, TokenKind::from)
    }

    fn follows_word(&self, start: usize) -> bool {
        start > 0 && is_word_byte(self.bytes[start - 1])
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let next = self.peek(0)?;
        let from = self.pos;
        let kind = self.scan(next);
        Some(Token::new(kind, from, self.pos))
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_word_byte(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdl_dialect::{DialectSpec, builtin_dialect, standard};

    fn lex(text: &str, dialect: &Dialect) -> Vec<(TokenKind, String)> {
        tokenize(text, dialect)
            .map(|t| (t.kind, t.text(text).to_string()))
            .collect()
    }

    fn kinds(text: &str, dialect: &Dialect) -> Vec<TokenKind> {
        tokenize(text, dialect).map(|t| t.kind).collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("", standard()).is_empty());
    }

    #[test]
    fn test_column_declaration() {
        use TokenKind::*;
        assert_eq!(
            lex("id int not null pk", standard()),
            vec![
                tok(Identifier, "id"),
                tok(Whitespace, " "),
                tok(Type, "int"),
                tok(Whitespace, " "),
                tok(Not, "not"),
                tok(Whitespace, " "),
                tok(Null, "null"),
                tok(Whitespace, " "),
                tok(Keyword, "pk"),
            ]
        );
    }

    #[test]
    fn test_number_accepts_one_dot() {
        use TokenKind::*;
        assert_eq!(
            lex("12.3.4", standard()),
            vec![tok(Number, "12.3"), tok(Dot, "."), tok(Number, "4")]
        );
    }

    #[test]
    fn test_number_forms() {
        let d = standard();
        assert_eq!(lex(".5", d), vec![tok(TokenKind::Number, ".5")]);
        assert_eq!(lex("1.5e-3", d), vec![tok(TokenKind::Number, "1.5e-3")]);
        assert_eq!(lex("2E+10", d), vec![tok(TokenKind::Number, "2E+10")]);
        assert_eq!(lex("0x1aF", d), vec![tok(TokenKind::Number, "0x1aF")]);
        assert_eq!(lex("X'0f'", d), vec![tok(TokenKind::Number, "X'0f'")]);
    }

    #[test]
    fn test_nested_block_comment() {
        let text = "/* a /* b */ c */";
        assert_eq!(lex(text, standard()), vec![tok(TokenKind::BlockComment, text)]);
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let text = "/* a /* b */ c";
        assert_eq!(lex(text, standard()), vec![tok(TokenKind::BlockComment, text)]);
    }

    #[test]
    fn test_strings_and_escapes() {
        let d = standard();
        assert_eq!(lex("'it''s'", d), vec![tok(TokenKind::String, "'it'"), tok(TokenKind::String, "'s'")]);
        assert_eq!(lex(r"'a\'b", d), vec![tok(TokenKind::String, r"'a\'"), tok(TokenKind::Identifier, "b")]);
        assert_eq!(lex(r"e'a\'b'", d), vec![tok(TokenKind::String, r"e'a\'b'")]);
        assert_eq!(lex("'open", d), vec![tok(TokenKind::String, "'open")]);
    }

    #[test]
    fn test_backslash_escapes_enabled() {
        let spec = DialectSpec {
            backslash_escapes: Some(true),
            ..DialectSpec::named("Escaping")
        };
        let d = Dialect::define(&spec);
        assert_eq!(lex(r"'a\'b'", &d), vec![tok(TokenKind::String, r"'a\'b'")]);
        assert_eq!(lex(r"'a\\'b", &d), vec![tok(TokenKind::String, r"'a\\'"), tok(TokenKind::Identifier, "b")]);
    }

    #[test]
    fn test_double_quotes_depend_on_dialect() {
        assert_eq!(kinds("\"x\"", standard()), vec![TokenKind::QuotedIdentifier]);
        let mysql = builtin_dialect("mysql").unwrap();
        assert_eq!(kinds("\"x\"", mysql), vec![TokenKind::String]);
        assert_eq!(kinds("`x`", mysql), vec![TokenKind::QuotedIdentifier]);
    }

    #[test]
    fn test_comment_styles() {
        use TokenKind::*;
        let mysql = builtin_dialect("mysql").unwrap();
        assert_eq!(kinds("# note", mysql), vec![LineComment]);
        assert_eq!(kinds("-- note", mysql), vec![LineComment]);
        assert_eq!(kinds("--note", mysql), vec![Operator, Identifier]);
        assert_eq!(kinds("--note", standard()), vec![LineComment]);
        assert_eq!(kinds("# note", standard())[0], Unknown);

        let slashy = Dialect::define(&DialectSpec {
            slash_comments: Some(true),
            ..DialectSpec::named("Slashy")
        });
        assert_eq!(kinds("// note\nid", &slashy), vec![LineComment, Whitespace, Identifier]);
    }

    #[test]
    fn test_qualified_words_are_identifiers() {
        use TokenKind::*;
        assert_eq!(
            lex("pk.int", standard()),
            vec![tok(Identifier, "pk"), tok(Dot, "."), tok(Identifier, "int")]
        );
    }

    #[test]
    fn test_bit_and_byte_literals() {
        let mysql = builtin_dialect("mysql").unwrap();
        assert_eq!(lex("0b1012", mysql), vec![tok(TokenKind::Bits, "0b101"), tok(TokenKind::Number, "2")]);
        assert_eq!(lex("b'0110'", standard()), vec![tok(TokenKind::Bits, "b'0110'")]);

        let bytes = Dialect::define(&DialectSpec {
            treat_bits_as_bytes: Some(true),
            ..DialectSpec::named("Bytes")
        });
        assert_eq!(lex("B\"zz\"", &bytes), vec![tok(TokenKind::Bytes, "B\"zz\"")]);
    }

    #[test]
    fn test_charset_casts() {
        let mysql = builtin_dialect("mysql").unwrap();
        assert_eq!(lex("_utf8'x'", mysql), vec![tok(TokenKind::String, "_utf8'x'")]);
        assert_eq!(lex("N'x'", mysql), vec![tok(TokenKind::String, "N'x'")]);
        assert_eq!(
            lex("_a'x'", mysql),
            vec![tok(TokenKind::Identifier, "_a"), tok(TokenKind::String, "'x'")]
        );
        assert_eq!(kinds("_utf8'x'", standard())[0], TokenKind::Identifier);
    }

    #[test]
    fn test_plsql_quoting() {
        let plsql = builtin_dialect("plsql").unwrap();
        assert_eq!(lex("q'[it's]'", plsql), vec![tok(TokenKind::String, "q'[it's]'")]);
        assert_eq!(lex("Q'!a'b!'", plsql), vec![tok(TokenKind::String, "Q'!a'b!'")]);
        assert_eq!(lex("q'(open", plsql), vec![tok(TokenKind::String, "q'(open")]);
    }

    #[test]
    fn test_double_dollar_strings() {
        let pg = builtin_dialect("postgresql").unwrap();
        assert_eq!(
            lex("$$ body $$ x", pg),
            vec![
                tok(TokenKind::String, "$$ body $$"),
                tok(TokenKind::Whitespace, " "),
                tok(TokenKind::Identifier, "x"),
            ]
        );
        assert_eq!(lex("$$abc", pg), vec![tok(TokenKind::String, "$$abc")]);
    }

    #[test]
    fn test_special_vars() {
        let mysql = builtin_dialect("mysql").unwrap();
        assert_eq!(lex("@@session", mysql), vec![tok(TokenKind::SpecialVar, "@@session")]);
        assert_eq!(lex("@'quoted'", mysql), vec![tok(TokenKind::SpecialVar, "@'quoted'")]);
        assert_eq!(lex("?", standard()), vec![tok(TokenKind::SpecialVar, "?")]);
    }

    #[test]
    fn test_structural_characters() {
        use TokenKind::*;
        assert_eq!(
            kinds("[id, name]{(x)};", standard()),
            vec![
                BracketOpen, Identifier, Punctuation, Whitespace, Identifier, BracketClose,
                BraceOpen, ParenOpen, Identifier, ParenClose, BraceClose, Punctuation,
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_unknown_per_char() {
        let text = "é€";
        let tokens: Vec<_> = tokenize(text, standard()).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(TokenKind::Unknown, 0, 2));
        assert_eq!(tokens[1], Token::new(TokenKind::Unknown, 2, 5));
    }
}
