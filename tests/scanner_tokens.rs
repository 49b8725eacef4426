//! Token classification tests for the configuration scanner

use fconf::scanner::{tokenize, ScanError};
use fconf::token::TokenKind;
use rstest::rstest;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[rstest]
#[case("=", TokenKind::Assign)]
#[case("[", TokenKind::LBrace)]
#[case("]", TokenKind::RBrace)]
#[case("(", TokenKind::LBracket)]
#[case(")", TokenKind::RBracket)]
#[case("!", TokenKind::Exclam)]
#[case("\n", TokenKind::NewLine)]
#[case("\r", TokenKind::NewLine)]
#[case("a", TokenKind::Ident)]
#[case("7", TokenKind::Ident)]
#[case("_", TokenKind::Ident)]
#[case("-", TokenKind::Ident)]
#[case("+", TokenKind::Ident)]
fn single_character_tokens(#[case] source: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(source), vec![expected]);
}

#[rstest]
#[case("; note", "; note")]
#[case("; note\nx", "; note")]
#[case(";--\nx", ";--")]
#[case(";-- a\nb --; x", ";-- a\nb --;")]
#[case(";-- open", ";-- open")]
fn comment_extents(#[case] source: &str, #[case] comment: &str) {
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].text, comment);
}

#[test]
fn a_dongle_line_scans_to_the_expected_stream() {
    let kinds = kinds("imei=49 \n");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::WhiteSpace,
            TokenKind::NewLine,
        ]
    );
}

#[test]
fn unrecognized_character_is_a_lexical_error() {
    let err = tokenize("foo#bar").unwrap_err();
    assert_eq!(
        err,
        ScanError::UnrecognizedCharacter {
            character: '#',
            line: 1,
            column: 4,
        }
    );
}
