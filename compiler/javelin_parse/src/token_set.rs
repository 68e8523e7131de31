//! Bitset of token kinds.
//!
//! Used for FIRST sets, decision-table patterns and the `expected` payload
//! of parse errors. Membership is one AND against a `u128`.

use std::fmt;

use javelin_ir::TokenKind;

/// A set of token kinds, one bit per `TokenKind` discriminant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        TokenSet(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        TokenSet(1u128 << kind.discriminant_index())
    }

    /// Build a set from a slice of kinds (usable in `const` items).
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u128 << kinds[i].discriminant_index();
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1u128 << kind.discriminant_index()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn insert(&mut self, kind: TokenKind) {
        self.0 |= 1u128 << kind.discriminant_index();
    }

    /// The kinds in this set, in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "trailing_zeros of a non-zero u128 is at most 127"
            )]
            let index = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            TokenKind::from_discriminant_index(index)
        })
    }

    /// Render as "`a`, `b`, or `c`" for error messages.
    pub fn format_expected(self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => format!("`{single}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [rest @ .., last] => {
                let rest = rest
                    .iter()
                    .map(|n| format!("`{n}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{rest}, or `{last}`")
            }
        }
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_expected())
    }
}

impl FromIterator<TokenKind> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

// FIRST sets shared by several rules.

pub const PRIMITIVE_TYPES: TokenSet = TokenSet::of(&[
    TokenKind::Boolean,
    TokenKind::Byte,
    TokenKind::Short,
    TokenKind::Int,
    TokenKind::Long,
    TokenKind::Char,
    TokenKind::Float,
    TokenKind::Double,
]);

pub const LITERALS: TokenSet = TokenSet::of(&[
    TokenKind::IntLiteral,
    TokenKind::FloatLiteral,
    TokenKind::CharLiteral,
    TokenKind::StringLiteral,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
]);

/// Keywords accepted in a declaration's modifier list. `@` starts an
/// annotation and is handled separately.
pub const MODIFIER_KEYWORDS: TokenSet = TokenSet::of(&[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Abstract,
    TokenKind::Static,
    TokenKind::Final,
    TokenKind::Transient,
    TokenKind::Volatile,
    TokenKind::Synchronized,
    TokenKind::Native,
    TokenKind::Strictfp,
    TokenKind::Default,
]);

/// Tokens that can begin a type.
pub const TYPE_START: TokenSet = PRIMITIVE_TYPES
    .with(TokenKind::Ident)
    .with(TokenKind::At);

/// Tokens that can begin a primary expression.
pub const PRIMARY_START: TokenSet = LITERALS.union(PRIMITIVE_TYPES).union(TokenSet::of(&[
    TokenKind::Ident,
    TokenKind::LParen,
    TokenKind::This,
    TokenKind::Super,
    TokenKind::New,
    TokenKind::Void,
]));

/// Tokens that can begin a unary expression, and therefore any expression.
pub const UNARY_EXPR_START: TokenSet = PRIMARY_START.union(TokenSet::of(&[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::Bang,
    TokenKind::Tilde,
]));

/// Tokens after `(Type)` that make it a reference cast rather than a
/// parenthesized expression. `+`, `-`, `++` and `--` are excluded: `(a) - b`
/// is a subtraction.
pub const CAST_OPERAND_START: TokenSet = PRIMARY_START
    .with(TokenKind::Bang)
    .with(TokenKind::Tilde);

pub const ASSIGNMENT_OPERATORS: TokenSet = TokenSet::of(&[
    TokenKind::Eq,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::SlashEq,
    TokenKind::PercentEq,
    TokenKind::AmpEq,
    TokenKind::PipeEq,
    TokenKind::CaretEq,
    TokenKind::ShlEq,
    TokenKind::ShrEq,
    TokenKind::UShrEq,
]);
