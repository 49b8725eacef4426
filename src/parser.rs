//! Recursive-descent parser for the dongle configuration format
//!
//! The parser works on the filtered token stream: whitespace and comments
//! are dropped, newlines are kept as structural delimiters, and an
//! [`TokenKind::Eof`] sentinel marks the end. Grammar:
//!
//! ```text
//! config        := (sectionHeader | identLine)* EOF
//! sectionHeader := '[' identRun ']' (identLine)* sectionEnd
//! identLine     := identRun '=' identRun? (NewLine | EOF)
//! identRun      := Ident+
//! sectionEnd    := two consecutive NewLine tokens, or EOF
//! ```
//!
//! Names, keys and values are concatenations of consecutive single-character
//! `Ident` tokens. Entries before any `[` belong to the implicit `main`
//! section, which is always first in the resulting tree. Any grammar
//! violation aborts the parse; no partial tree escapes.

use std::fmt;

use crate::ast::{Ast, Entry, Section, MAIN_SECTION};
use crate::error::Error;
use crate::scanner::{ScanError, Scanner};
use crate::token::{Token, TokenKind};

/// Syntax error: the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken {
        found: String,
        expected: &'static str,
        line: usize,
        column: usize,
    },
    UnexpectedEof { expected: &'static str },
    EmptySectionName { line: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                found,
                expected,
                line,
                column,
            } => write!(
                f,
                "unexpected {} at line {}, column {}, expected {}",
                found, line, column, expected
            ),
            ParseError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            ParseError::EmptySectionName { line } => {
                write!(f, "empty section name at line {}", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one configuration text into an [`Ast`].
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Scans `source` and prepares the filtered token stream.
    pub fn new(source: &str) -> Result<Self, ScanError> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        while let Some(token) = scanner.scan()? {
            if !token.kind.is_trivia() {
                tokens.push(token);
            }
        }
        let (line, column) = scanner.position();
        tokens.push(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            line,
            column,
            span: source.len()..source.len(),
        });
        Ok(Parser { tokens, pos: 0 })
    }

    /// Parses the prepared stream. The implicit `main` section comes first,
    /// followed by explicit sections in discovery order.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let mut main = Section::new(MAIN_SECTION, 0);
        let mut sections = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::NewLine => {
                    self.advance();
                }
                TokenKind::LBrace => sections.push(self.parse_section()?),
                TokenKind::Ident => {
                    let entry = self.parse_entry()?;
                    main.entries.push(entry);
                }
                _ => return Err(self.unexpected("a key or a section header")),
            }
        }
        let mut ast = Ast::new();
        ast.sections.push(main);
        ast.sections.extend(sections);
        Ok(ast)
    }

    fn parse_section(&mut self) -> Result<Section, ParseError> {
        let open = self.advance(); // the '['
        let mut name = String::new();
        loop {
            match self.peek().kind {
                TokenKind::Ident => name.push_str(&self.advance().text),
                TokenKind::RBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => return Err(ParseError::UnexpectedEof { expected: "']'" }),
                _ => return Err(self.unexpected("a section name")),
            }
        }
        if name.is_empty() {
            return Err(ParseError::EmptySectionName { line: open.line });
        }
        let mut section = Section::new(&name, open.line);
        loop {
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::NewLine => {
                    self.advance();
                    // a blank line (two newline tokens in a row) ends the section
                    if self.peek().kind == TokenKind::NewLine {
                        self.advance();
                        break;
                    }
                }
                TokenKind::Ident => {
                    let entry = self.parse_entry()?;
                    section.entries.push(entry);
                }
                _ => return Err(self.unexpected("a key or a blank line")),
            }
        }
        Ok(section)
    }

    fn parse_entry(&mut self) -> Result<Entry, ParseError> {
        let first = self.advance(); // an Ident, guaranteed by the caller
        let line = first.line;
        let mut key = first.text;
        loop {
            match self.peek().kind {
                TokenKind::Ident => key.push_str(&self.advance().text),
                TokenKind::Assign => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => return Err(ParseError::UnexpectedEof { expected: "'='" }),
                _ => return Err(self.unexpected("'='")),
            }
        }
        let mut value = String::new();
        loop {
            match self.peek().kind {
                TokenKind::Ident => value.push_str(&self.advance().text),
                TokenKind::NewLine => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => break,
                _ => return Err(self.unexpected("a value")),
            }
        }
        Ok(Entry { key, value, line })
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the current token and moves past it; the cursor never moves
    /// beyond the `Eof` sentinel.
    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.peek();
        let found = match token.kind {
            TokenKind::Ident => format!("'{}'", token.text),
            kind => kind.to_string(),
        };
        ParseError::UnexpectedToken {
            found,
            expected,
            line: token.line,
            column: token.column,
        }
    }
}

/// Convenience: scan and parse `source` in one call.
pub fn parse(source: &str) -> Result<Ast, Error> {
    Ok(Parser::new(source)?.parse()?)
}
