use pretty_assertions::assert_eq;

use super::*;
use crate::ParseErrorKind;
use javelin_ir::TokenList;

fn lexed(source: &str) -> TokenList {
    match javelin_lexer::lex(source) {
        Ok(list) => list,
        Err(err) => panic!("Expected {source:?} to lex, got {err}"),
    }
}

#[test]
fn test_lookahead_is_one_based() {
    let list = lexed("a + b");
    let cursor = Cursor::new(&list);
    assert_eq!(cursor.la(1), TokenKind::Ident);
    assert_eq!(cursor.la(2), TokenKind::Plus);
    assert_eq!(cursor.la(3), TokenKind::Ident);
    assert_eq!(cursor.la(4), TokenKind::Eof);
    assert_eq!(cursor.la(50), TokenKind::Eof);
    assert_eq!(cursor.lt(50).kind, TokenKind::Eof);
}

#[test]
fn test_consume_advances_and_stops_at_eof() {
    let list = lexed("x;");
    let mut cursor = Cursor::new(&list);
    assert!(matches!(cursor.consume(), Ok(t) if t.kind == TokenKind::Ident));
    assert!(matches!(cursor.consume(), Ok(t) if t.kind == TokenKind::Semi));
    assert_eq!(cursor.index(), 2);
    let err = match cursor.consume() {
        Ok(token) => panic!("Expected EndOfInput, got {token:?}"),
        Err(err) => err,
    };
    assert!(matches!(err.kind, ParseErrorKind::EndOfInput { .. }));
    assert_eq!(cursor.index(), 2);
}

#[test]
fn test_mark_restore_round_trip() {
    let list = lexed("a b c");
    let mut cursor = Cursor::new(&list);
    let start = cursor.mark();
    let _ = cursor.consume();
    let _ = cursor.consume();
    let middle = cursor.mark();
    assert_eq!(middle.index(), 2);
    assert_eq!(cursor.restore(start), Ok(()));
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.restore(middle), Ok(()));
    assert_eq!(cursor.la(1), TokenKind::Ident);
    assert_eq!(cursor.index(), 2);
}

#[test]
fn test_foreign_checkpoint_rejected() {
    let list = lexed("a b");
    let mut first = Cursor::new(&list);
    let second = Cursor::new(&list);
    let err = match first.restore(second.mark()) {
        Ok(()) => panic!("Expected InvalidCheckpoint"),
        Err(err) => err,
    };
    assert_eq!(err.kind, ParseErrorKind::InvalidCheckpoint);
}

#[test]
fn test_out_of_range_checkpoint_rejected() {
    let list = lexed("a");
    let mut cursor = Cursor::new(&list);
    let mut checkpoint = cursor.mark();
    checkpoint.index = 10;
    assert!(matches!(
        cursor.restore(checkpoint),
        Err(ParseError {
            kind: ParseErrorKind::InvalidCheckpoint,
            ..
        })
    ));
}

#[test]
fn test_list_without_sentinel_reports_eof() {
    let list = TokenList::new("");
    let mut cursor = Cursor::new(&list);
    assert_eq!(cursor.la(1), TokenKind::Eof);
    assert_eq!(cursor.token_count(), 0);
    assert!(cursor.consume().is_err());
    assert_eq!(cursor.restore(cursor.mark()), Ok(()));
}

#[test]
fn test_kind_at_absolute() {
    let list = lexed("( )");
    let cursor = Cursor::new(&list);
    assert_eq!(cursor.kind_at(0), TokenKind::LParen);
    assert_eq!(cursor.kind_at(1), TokenKind::RParen);
    assert_eq!(cursor.kind_at(2), TokenKind::Eof);
    assert_eq!(cursor.kind_at(99), TokenKind::Eof);
}
