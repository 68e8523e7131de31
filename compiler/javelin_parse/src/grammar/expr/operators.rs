//! Operator tables and matching helpers.
//!
//! Binary precedence levels, lowest to highest:
//!
//! | level | operators |
//! |-------|-----------|
//! | 1 | `\|\|` |
//! | 2 | `&&` |
//! | 3 | `\|` |
//! | 4 | `^` |
//! | 5 | `&` |
//! | 6 | `==` `!=` |
//! | 7 | `<` `>` `<=` `>=` `instanceof` |
//! | 8 | `<<` `>>` `>>>` |
//! | 9 | `+` `-` |
//! | 10 | `*` `/` `%` |
//!
//! Shifts span several `<`/`>` tokens and are matched by
//! [`Parser::match_infix`] rather than the per-token table.

use javelin_ir::{AssignOp, BinaryOp, PostfixOp, TokenKind, UnaryOp};

use crate::stream::TokenStream;
use crate::Parser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// What an infix operator builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfixOp {
    Binary(BinaryOp),
    /// Right operand is a reference type, not an expression.
    InstanceOf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorInfo {
    pub level: u8,
    pub op: InfixOp,
    pub assoc: Associativity,
}

impl OperatorInfo {
    const fn left(level: u8, op: InfixOp) -> Self {
        OperatorInfo {
            level,
            op,
            assoc: Associativity::Left,
        }
    }
}

pub const SHIFT_LEVEL: u8 = 8;

/// Single-token binary operators indexed by token discriminant.
pub struct PrecedenceTable {
    entries: [Option<OperatorInfo>; TokenKind::COUNT],
}

impl PrecedenceTable {
    const fn build() -> Self {
        use BinaryOp as B;
        use InfixOp::Binary;
        let mut entries = [None; TokenKind::COUNT];
        let rows: [(TokenKind, u8, InfixOp); 17] = [
            (TokenKind::PipePipe, 1, Binary(B::Or)),
            (TokenKind::AmpAmp, 2, Binary(B::And)),
            (TokenKind::Pipe, 3, Binary(B::BitOr)),
            (TokenKind::Caret, 4, Binary(B::BitXor)),
            (TokenKind::Amp, 5, Binary(B::BitAnd)),
            (TokenKind::EqEq, 6, Binary(B::Eq)),
            (TokenKind::NotEq, 6, Binary(B::NotEq)),
            (TokenKind::Lt, 7, Binary(B::Lt)),
            (TokenKind::Gt, 7, Binary(B::Gt)),
            (TokenKind::LtEq, 7, Binary(B::LtEq)),
            (TokenKind::GtEq, 7, Binary(B::GtEq)),
            (TokenKind::Instanceof, 7, InfixOp::InstanceOf),
            (TokenKind::Plus, 9, Binary(B::Add)),
            (TokenKind::Minus, 9, Binary(B::Sub)),
            (TokenKind::Star, 10, Binary(B::Mul)),
            (TokenKind::Slash, 10, Binary(B::Div)),
            (TokenKind::Percent, 10, Binary(B::Rem)),
        ];
        let mut i = 0;
        while i < rows.len() {
            let (kind, level, op) = rows[i];
            entries[kind.discriminant_index() as usize] = Some(OperatorInfo::left(level, op));
            i += 1;
        }
        PrecedenceTable { entries }
    }

    #[inline]
    pub fn get(&self, kind: TokenKind) -> Option<OperatorInfo> {
        self.entries
            .get(usize::from(kind.discriminant_index()))
            .copied()
            .flatten()
    }
}

pub static PRECEDENCE: PrecedenceTable = PrecedenceTable::build();

impl<S: TokenStream> Parser<S> {
    /// The infix operator at the cursor and how many tokens spell it.
    ///
    /// `<<`, `>>` and `>>>` are recognized from adjacent `<`/`>` tokens;
    /// with whitespace between them they stay relational operators.
    pub(crate) fn match_infix(&self) -> Option<(OperatorInfo, usize)> {
        let shift = |op| OperatorInfo::left(SHIFT_LEVEL, InfixOp::Binary(op));
        match self.la(1) {
            TokenKind::Lt if self.adjacent(1, TokenKind::Lt) => Some((shift(BinaryOp::Shl), 2)),
            TokenKind::Gt if self.adjacent(1, TokenKind::Gt) => {
                if self.adjacent(2, TokenKind::Gt) {
                    Some((shift(BinaryOp::UShr), 3))
                } else {
                    Some((shift(BinaryOp::Shr), 2))
                }
            }
            kind => PRECEDENCE.get(kind).map(|info| (info, 1)),
        }
    }

    /// Whether token `k + 1` is `kind` and starts where token `k` ends.
    fn adjacent(&self, k: usize, kind: TokenKind) -> bool {
        self.la(k + 1) == kind && self.stream.lt(k).span.touches(self.stream.lt(k + 1).span)
    }

    pub(crate) fn match_prefix_op(&self) -> Option<UnaryOp> {
        match self.la(1) {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::PlusPlus => Some(UnaryOp::PreIncrement),
            TokenKind::MinusMinus => Some(UnaryOp::PreDecrement),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        }
    }

    pub(crate) fn match_postfix_op(&self) -> Option<PostfixOp> {
        match self.la(1) {
            TokenKind::PlusPlus => Some(PostfixOp::Increment),
            TokenKind::MinusMinus => Some(PostfixOp::Decrement),
            _ => None,
        }
    }

    pub(crate) fn match_assign_op(&self) -> Option<AssignOp> {
        match self.la(1) {
            TokenKind::Eq => Some(AssignOp::Assign),
            TokenKind::PlusEq => Some(AssignOp::Add),
            TokenKind::MinusEq => Some(AssignOp::Sub),
            TokenKind::StarEq => Some(AssignOp::Mul),
            TokenKind::SlashEq => Some(AssignOp::Div),
            TokenKind::PercentEq => Some(AssignOp::Rem),
            TokenKind::AmpEq => Some(AssignOp::BitAnd),
            TokenKind::PipeEq => Some(AssignOp::BitOr),
            TokenKind::CaretEq => Some(AssignOp::BitXor),
            TokenKind::ShlEq => Some(AssignOp::Shl),
            TokenKind::ShrEq => Some(AssignOp::Shr),
            TokenKind::UShrEq => Some(AssignOp::UShr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_levels_increase_with_binding_strength() {
        let level = |kind| PRECEDENCE.get(kind).map(|info| info.level);
        assert_eq!(level(TokenKind::PipePipe), Some(1));
        assert_eq!(level(TokenKind::AmpAmp), Some(2));
        assert_eq!(level(TokenKind::Pipe), Some(3));
        assert_eq!(level(TokenKind::Caret), Some(4));
        assert_eq!(level(TokenKind::Amp), Some(5));
        assert_eq!(level(TokenKind::NotEq), Some(6));
        assert_eq!(level(TokenKind::Instanceof), Some(7));
        assert_eq!(level(TokenKind::Minus), Some(9));
        assert_eq!(level(TokenKind::Percent), Some(10));
    }

    #[test]
    fn test_non_operators_absent() {
        for kind in [TokenKind::Eq, TokenKind::Question, TokenKind::Ident, TokenKind::Eof] {
            assert_eq!(PRECEDENCE.get(kind), None, "{kind:?}");
        }
    }

    #[test]
    fn test_all_binary_levels_left_associative() {
        for kind in TokenKind::ALL {
            if let Some(info) = PRECEDENCE.get(kind) {
                assert_eq!(info.assoc, Associativity::Left, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_instanceof_is_not_binary() {
        assert_eq!(
            PRECEDENCE.get(TokenKind::Instanceof).map(|info| info.op),
            Some(InfixOp::InstanceOf)
        );
    }
}
