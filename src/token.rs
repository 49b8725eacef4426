//! Token definitions for the dongle configuration format
//!
//! The scanner classifies every character of the input; nothing is thrown
//! away at this stage. The parser later filters trivia (whitespace and
//! comments) and keeps newlines, which the grammar uses as delimiters.

use std::fmt;
use std::ops::Range;

/// All token kinds of the configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// One identifier-valid character: `_`, `-`, `+`, a letter, or a digit.
    ///
    /// Identifiers are scanned one character at a time; runs are
    /// deliberately not coalesced. The parser reconstructs multi-character
    /// names by concatenating consecutive `Ident` tokens, so deciding where
    /// an identifier ends (at `=`, `[`, `]`, or end of line) stays a
    /// grammar decision rather than a scanning decision.
    Ident,
    /// `=`
    Assign,
    /// `[`
    LBrace,
    /// `]`
    RBrace,
    /// `(`
    LBracket,
    /// `)`
    RBracket,
    /// `!`
    Exclam,
    /// A run of spaces and tabs.
    WhiteSpace,
    /// A line comment (`;` to end of line) or block comment (`;-- ` to `--;`).
    Comment,
    /// A single `\n` or `\r`; consecutive newlines stay separate tokens.
    NewLine,
    /// End-of-input sentinel appended for the parser; never scanned.
    Eof,
}

impl TokenKind {
    /// Whitespace and comments carry no grammar meaning and are dropped
    /// before parsing.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::WhiteSpace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident => "identifier",
            TokenKind::Assign => "'='",
            TokenKind::LBrace => "'['",
            TokenKind::RBrace => "']'",
            TokenKind::LBracket => "'('",
            TokenKind::RBracket => "')'",
            TokenKind::Exclam => "'!'",
            TokenKind::WhiteSpace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::NewLine => "newline",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", name)
    }
}

/// A classified span of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: String,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character.
    pub column: usize,
    /// Byte range in the source.
    pub span: Range<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_predicate() {
        assert!(TokenKind::WhiteSpace.is_trivia());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::NewLine.is_trivia());
        assert!(!TokenKind::Ident.is_trivia());
        assert!(!TokenKind::Eof.is_trivia());
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(TokenKind::Assign.to_string(), "'='");
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }
}
