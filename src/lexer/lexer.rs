use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Consumes `len` bytes of matched text and returns the token they form, or
/// `None` when the text is skipped.
pub type RegexHandler = fn(&mut Lexer, usize) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\n\x0B\x0C\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9][0-9.]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
    ];
}

/// On-demand tokenizer. Each call to [`Lexer::next_token`] scans exactly one
/// token from the cursor; nothing ahead of the cursor is examined.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Scans the next token, skipping whitespace. Returns an `EOF` token once
    /// the source is exhausted, and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0)));
            }

            let remaining = self.remainder();
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.end())));

            match matched {
                Some((handler, len)) => {
                    if let Some(token) = handler(self, len) {
                        if token.is_one_of_many(&[TokenKind::Number, TokenKind::Identifier]) {
                            trace!(kind = %token.kind, value = %token.value, "scanned token");
                        } else {
                            trace!(kind = %token.kind, "scanned token");
                        }
                        return Ok(token);
                    }
                }
                None => {
                    let character = remaining.chars().next().unwrap_or('\0');
                    return Err(Error::new(ErrorImpl::UnexpectedCharacter { character }, self.position()));
                }
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    lexer.advance_n(len);
    None
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let matched = lexer.remainder()[..len].to_string();
    let span = lexer.span_of(len);
    lexer.advance_n(len);

    Some(MK_TOKEN!(TokenKind::Number, matched, span))
}

fn symbol_handler(lexer: &mut Lexer, len: usize) -> Option<Token> {
    let value = lexer.remainder()[..len].to_string();
    let span = lexer.span_of(len);
    lexer.advance_n(len);

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        Some(MK_TOKEN!(*kind, value, span))
    } else {
        Some(MK_TOKEN!(TokenKind::Identifier, value, span))
    }
}

/// Drains a fresh lexer into a vector ending with the `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}

/// Converts the text of a number token to its value.
///
/// Number tokens may hold more than one `.`; conversion is lenient and keeps
/// the longest prefix that forms a valid literal, so `1.2.3` is `1.2` and
/// `7.` is `7`.
pub fn parse_number(text: &str) -> Option<f64> {
    let end = text
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    text[..end].trim_end_matches('.').parse().ok()
}
