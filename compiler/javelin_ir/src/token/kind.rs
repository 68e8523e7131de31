//! The closed set of Java 8 token kinds.

use std::fmt;

/// Java 8 token kinds.
///
/// Fieldless and `#[repr(u8)]`: the discriminant doubles as the bit index in
/// the parser's `TokenSet`, so the variant count must stay below 128.
/// Lexeme text is recovered from the token's span, never stored here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Identifiers and literals
    Ident,
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    True,
    False,
    Null,

    // Reserved words
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,

    // Separators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semi,
    Comma,
    Dot,
    Ellipsis,
    At,
    ColonColon,

    // Operators
    Eq,
    Gt,
    Lt,
    Bang,
    Tilde,
    Question,
    Colon,
    Arrow,
    EqEq,
    LtEq,
    GtEq,
    NotEq,
    AmpAmp,
    PipePipe,
    PlusPlus,
    MinusMinus,
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Caret,
    Percent,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    AmpEq,
    PipeEq,
    CaretEq,
    PercentEq,
    ShlEq,
    ShrEq,
    UShrEq,

    /// End of input. Every `TokenList` ends with exactly one.
    Eof,
}

impl TokenKind {
    /// Number of variants.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Every variant in discriminant order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Ident,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::Abstract,
        TokenKind::Assert,
        TokenKind::Boolean,
        TokenKind::Break,
        TokenKind::Byte,
        TokenKind::Case,
        TokenKind::Catch,
        TokenKind::Char,
        TokenKind::Class,
        TokenKind::Const,
        TokenKind::Continue,
        TokenKind::Default,
        TokenKind::Do,
        TokenKind::Double,
        TokenKind::Else,
        TokenKind::Enum,
        TokenKind::Extends,
        TokenKind::Final,
        TokenKind::Finally,
        TokenKind::Float,
        TokenKind::For,
        TokenKind::Goto,
        TokenKind::If,
        TokenKind::Implements,
        TokenKind::Import,
        TokenKind::Instanceof,
        TokenKind::Int,
        TokenKind::Interface,
        TokenKind::Long,
        TokenKind::Native,
        TokenKind::New,
        TokenKind::Package,
        TokenKind::Private,
        TokenKind::Protected,
        TokenKind::Public,
        TokenKind::Return,
        TokenKind::Short,
        TokenKind::Static,
        TokenKind::Strictfp,
        TokenKind::Super,
        TokenKind::Switch,
        TokenKind::Synchronized,
        TokenKind::This,
        TokenKind::Throw,
        TokenKind::Throws,
        TokenKind::Transient,
        TokenKind::Try,
        TokenKind::Void,
        TokenKind::Volatile,
        TokenKind::While,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Semi,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Ellipsis,
        TokenKind::At,
        TokenKind::ColonColon,
        TokenKind::Eq,
        TokenKind::Gt,
        TokenKind::Lt,
        TokenKind::Bang,
        TokenKind::Tilde,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Arrow,
        TokenKind::EqEq,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::NotEq,
        TokenKind::AmpAmp,
        TokenKind::PipePipe,
        TokenKind::PlusPlus,
        TokenKind::MinusMinus,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Amp,
        TokenKind::Pipe,
        TokenKind::Caret,
        TokenKind::Percent,
        TokenKind::PlusEq,
        TokenKind::MinusEq,
        TokenKind::StarEq,
        TokenKind::SlashEq,
        TokenKind::AmpEq,
        TokenKind::PipeEq,
        TokenKind::CaretEq,
        TokenKind::PercentEq,
        TokenKind::ShlEq,
        TokenKind::ShrEq,
        TokenKind::UShrEq,
        TokenKind::Eof,
    ];

    /// Discriminant used as a bit index by token sets and dense tag arrays.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`discriminant_index`](Self::discriminant_index).
    pub fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        TokenKind::ALL.get(usize::from(index)).copied()
    }

    /// Look up the reserved word spelled `text`.
    ///
    /// Covers all 50 keywords plus the literal words `true`, `false` and
    /// `null`. Returns `None` for anything that lexes as an identifier.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "abstract" => TokenKind::Abstract,
            "assert" => TokenKind::Assert,
            "boolean" => TokenKind::Boolean,
            "break" => TokenKind::Break,
            "byte" => TokenKind::Byte,
            "case" => TokenKind::Case,
            "catch" => TokenKind::Catch,
            "char" => TokenKind::Char,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "continue" => TokenKind::Continue,
            "default" => TokenKind::Default,
            "do" => TokenKind::Do,
            "double" => TokenKind::Double,
            "else" => TokenKind::Else,
            "enum" => TokenKind::Enum,
            "extends" => TokenKind::Extends,
            "final" => TokenKind::Final,
            "finally" => TokenKind::Finally,
            "float" => TokenKind::Float,
            "for" => TokenKind::For,
            "goto" => TokenKind::Goto,
            "if" => TokenKind::If,
            "implements" => TokenKind::Implements,
            "import" => TokenKind::Import,
            "instanceof" => TokenKind::Instanceof,
            "int" => TokenKind::Int,
            "interface" => TokenKind::Interface,
            "long" => TokenKind::Long,
            "native" => TokenKind::Native,
            "new" => TokenKind::New,
            "package" => TokenKind::Package,
            "private" => TokenKind::Private,
            "protected" => TokenKind::Protected,
            "public" => TokenKind::Public,
            "return" => TokenKind::Return,
            "short" => TokenKind::Short,
            "static" => TokenKind::Static,
            "strictfp" => TokenKind::Strictfp,
            "super" => TokenKind::Super,
            "switch" => TokenKind::Switch,
            "synchronized" => TokenKind::Synchronized,
            "this" => TokenKind::This,
            "throw" => TokenKind::Throw,
            "throws" => TokenKind::Throws,
            "transient" => TokenKind::Transient,
            "try" => TokenKind::Try,
            "void" => TokenKind::Void,
            "volatile" => TokenKind::Volatile,
            "while" => TokenKind::While,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => return None,
        };
        Some(kind)
    }

    /// True for the 50 reserved words (not the literal words).
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let index = self as u8;
        index >= TokenKind::Abstract as u8 && index <= TokenKind::While as u8
    }

    /// True for `boolean`, `byte`, `short`, `int`, `long`, `char`, `float`
    /// and `double`.
    #[inline]
    pub const fn is_primitive_type(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Byte
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Char
                | TokenKind::Float
                | TokenKind::Double
        )
    }

    /// True for every literal token, including `true`, `false` and `null`.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Human-readable name used in "expected ..." messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "floating-point literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Abstract => "abstract",
            TokenKind::Assert => "assert",
            TokenKind::Boolean => "boolean",
            TokenKind::Break => "break",
            TokenKind::Byte => "byte",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Char => "char",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Do => "do",
            TokenKind::Double => "double",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Extends => "extends",
            TokenKind::Final => "final",
            TokenKind::Finally => "finally",
            TokenKind::Float => "float",
            TokenKind::For => "for",
            TokenKind::Goto => "goto",
            TokenKind::If => "if",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Int => "int",
            TokenKind::Interface => "interface",
            TokenKind::Long => "long",
            TokenKind::Native => "native",
            TokenKind::New => "new",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Return => "return",
            TokenKind::Short => "short",
            TokenKind::Static => "static",
            TokenKind::Strictfp => "strictfp",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::Synchronized => "synchronized",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Throws => "throws",
            TokenKind::Transient => "transient",
            TokenKind::Try => "try",
            TokenKind::Void => "void",
            TokenKind::Volatile => "volatile",
            TokenKind::While => "while",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semi => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::At => "@",
            TokenKind::ColonColon => "::",
            TokenKind::Eq => "=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Arrow => "->",
            TokenKind::EqEq => "==",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::NotEq => "!=",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Percent => "%",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::ShrEq => ">>=",
            TokenKind::UShrEq => ">>>=",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const _: () = assert!(
    TokenKind::COUNT <= 128,
    "TokenSet uses a u128 bitset; all discriminant indices must be < 128"
);
