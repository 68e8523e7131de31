//! Raw logos token definitions.
//!
//! Keywords are not listed here: they lex as `Ident` and are resolved with
//! `TokenKind::from_keyword` during conversion. Shift operators are not
//! listed either, so `>>` always comes out as two `Gt` tokens.

use javelin_ir::TokenKind;
use logos::{Lexer, Logos};

/// Raw token from logos, before keyword resolution.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0C]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    #[token("/*", block_comment)]
    BlockComment,

    // Literals
    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*[lL]?")]
    #[regex(r"0[bB][01][01_]*[lL]?")]
    IntLiteral,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9][0-9_]*)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9][0-9_]*[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    #[regex(r"0[xX][0-9a-fA-F_]*\.?[0-9a-fA-F_]*[pP][+-]?[0-9]+[fFdD]?")]
    FloatLiteral,

    #[regex(r"'([^'\\\n\r]|\\[^\n\r])+'")]
    CharLiteral,

    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#)]
    StringLiteral,

    // Identifiers and reserved words
    #[regex(r"[a-zA-Z_$\x{80}-\x{10FFFF}][a-zA-Z0-9_$\x{80}-\x{10FFFF}]*")]
    Ident,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("@")]
    At,
    #[token("::")]
    ColonColon,

    // Operators
    #[token("=")]
    Eq,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("!=")]
    NotEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token(">>>=")]
    UShrEq,
}

/// Consume the rest of a `/* ... */` comment.
///
/// Returns `false` (a lex error) when the comment never closes; the error
/// span then runs from `/*` to the end of the source.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    if let Some(end) = lex.remainder().find("*/") {
        lex.bump(end + 2);
        true
    } else {
        lex.bump(lex.remainder().len());
        false
    }
}

impl RawToken {
    /// Map a raw token to its `TokenKind`.
    ///
    /// `slice` is only consulted for identifiers, to resolve reserved words.
    /// Returns `None` for trivia.
    pub(crate) fn to_kind(self, slice: &str) -> Option<TokenKind> {
        let kind = match self {
            RawToken::BlockComment => return None,
            RawToken::Ident => TokenKind::from_keyword(slice).unwrap_or(TokenKind::Ident),
            RawToken::IntLiteral => TokenKind::IntLiteral,
            RawToken::FloatLiteral => TokenKind::FloatLiteral,
            RawToken::CharLiteral => TokenKind::CharLiteral,
            RawToken::StringLiteral => TokenKind::StringLiteral,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Semi => TokenKind::Semi,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Ellipsis => TokenKind::Ellipsis,
            RawToken::At => TokenKind::At,
            RawToken::ColonColon => TokenKind::ColonColon,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Question => TokenKind::Question,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Percent => TokenKind::Percent,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::MinusEq => TokenKind::MinusEq,
            RawToken::StarEq => TokenKind::StarEq,
            RawToken::SlashEq => TokenKind::SlashEq,
            RawToken::AmpEq => TokenKind::AmpEq,
            RawToken::PipeEq => TokenKind::PipeEq,
            RawToken::CaretEq => TokenKind::CaretEq,
            RawToken::PercentEq => TokenKind::PercentEq,
            RawToken::ShlEq => TokenKind::ShlEq,
            RawToken::ShrEq => TokenKind::ShrEq,
            RawToken::UShrEq => TokenKind::UShrEq,
        };
        Some(kind)
    }
}
