//! Scanner for the dongle configuration format
//!
//! Raw classification is handled by logos; the [`Scanner`] wrapper adds
//! line/column tracking, one token per [`Scanner::scan`] call, and turns
//! unmatched input into a lexical error. Nothing is filtered here: the
//! scanner reports whitespace and comments like any other token.

use std::fmt;

use logos::{Lexer, Logos};

use crate::token::{Token, TokenKind};

/// Raw lexeme classes. [`TokenKind::Eof`] is a parser-facing sentinel and
/// is never lexed, so the logos derive lives on this private enum rather
/// than on the public kind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    /// One identifier-valid character; runs are deliberately not coalesced.
    #[regex(r"[\p{L}\p{Nd}_+-]")]
    Ident,
    #[token("=")]
    Assign,
    #[token("[")]
    LBrace,
    #[token("]")]
    RBrace,
    #[token("(")]
    LBracket,
    #[token(")")]
    RBracket,
    #[token("!")]
    Exclam,
    #[regex(r"[ \t]+")]
    WhiteSpace,
    #[token(";", scan_comment)]
    Comment,
    /// A single newline character; `\r\n` is two tokens.
    #[regex(r"[\n\r]")]
    NewLine,
}

/// Extends a matched `;` over the rest of the comment.
///
/// The four characters `;-- ` (the `;` included) open a block comment,
/// which runs until a `-` is followed by the next two characters spelling
/// `-;`, or until end of input. The terminator check consumes two
/// characters per candidate `-`, so overlapping dashes do not terminate
/// (`;-- ---;` runs to end of input). Anything else after `;` is a line
/// comment running up to, and excluding, the next newline.
fn scan_comment(lex: &mut Lexer<RawKind>) {
    let rest = lex.remainder();
    if let Some(body) = rest.strip_prefix("-- ") {
        let mut chars = body.char_indices();
        while let Some((_, ch)) = chars.next() {
            if ch != '-' {
                continue;
            }
            match (chars.next(), chars.next()) {
                (Some((_, '-')), Some((at, ';'))) => {
                    lex.bump(3 + at + 1);
                    return;
                }
                (Some(_), Some(_)) => {}
                // end of input inside the terminator check
                _ => break,
            }
        }
        lex.bump(rest.len());
    } else {
        match rest.find(|c| c == '\n' || c == '\r') {
            Some(at) => lex.bump(at),
            None => lex.bump(rest.len()),
        }
    }
}

fn kind_of(raw: RawKind) -> TokenKind {
    match raw {
        RawKind::Ident => TokenKind::Ident,
        RawKind::Assign => TokenKind::Assign,
        RawKind::LBrace => TokenKind::LBrace,
        RawKind::RBrace => TokenKind::RBrace,
        RawKind::LBracket => TokenKind::LBracket,
        RawKind::RBracket => TokenKind::RBracket,
        RawKind::Exclam => TokenKind::Exclam,
        RawKind::WhiteSpace => TokenKind::WhiteSpace,
        RawKind::Comment => TokenKind::Comment,
        RawKind::NewLine => TokenKind::NewLine,
    }
}

/// Lexical error: the input contained a character outside the token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    UnrecognizedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnrecognizedCharacter {
                character,
                line,
                column,
            } => write!(
                f,
                "unrecognized character '{}' at line {}, column {}",
                character, line, column
            ),
        }
    }
}

impl std::error::Error for ScanError {}

/// A stateful scanner producing one positioned [`Token`] per call.
pub struct Scanner<'src> {
    lexer: Lexer<'src, RawKind>,
    line: usize,
    column: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            lexer: RawKind::lexer(source),
            line: 1,
            column: 1,
        }
    }

    /// Current 1-based position; after the last token this is where the
    /// end-of-input sentinel belongs.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Returns the next token, or `None` at end of input. An unrecognized
    /// character aborts with its position; tokens already produced remain
    /// with the caller, but no further scanning is possible.
    pub fn scan(&mut self) -> Result<Option<Token>, ScanError> {
        let Some(result) = self.lexer.next() else {
            return Ok(None);
        };
        let span = self.lexer.span();
        let text = self.lexer.slice();
        let (line, column) = (self.line, self.column);
        for ch in text.chars() {
            if ch == '\n' || ch == '\r' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        match result {
            Ok(raw) => Ok(Some(Token {
                kind: kind_of(raw),
                text: text.to_owned(),
                line,
                column,
                span,
            })),
            Err(()) => Err(ScanError::UnrecognizedCharacter {
                character: text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
                line,
                column,
            }),
        }
    }
}

/// Scans the whole input, returning every token including whitespace and
/// comments.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.scan()? {
        tokens.push(token);
    }
    Ok(tokens)
}
