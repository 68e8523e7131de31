//! Error codes.
//!
//! Codes are `E` followed by four digits. The leading digit names the
//! [`Phase`]: `0` lexing, `1` parsing, `9` parser bugs.

use std::fmt;

macro_rules! error_codes {
    ($($phase:ident { $($code:ident => $summary:literal,)* })*) => {
        /// Stable identifier of a diagnostic.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        pub enum ErrorCode {
            $($(#[doc = $summary] $code,)*)*
        }

        impl ErrorCode {
            /// Every code, lowest first.
            pub const ALL: &[ErrorCode] = &[$($(ErrorCode::$code,)*)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($(ErrorCode::$code => stringify!($code),)*)*
                }
            }

            /// Short lower-case summary of what the code means.
            pub fn summary(self) -> &'static str {
                match self {
                    $($(ErrorCode::$code => $summary,)*)*
                }
            }

            pub fn phase(self) -> Phase {
                match self {
                    $($(ErrorCode::$code => Phase::$phase,)*)*
                }
            }
        }
    };
}

error_codes! {
    Lex {
        E0001 => "unterminated string literal",
        E0002 => "invalid character in source",
        E0003 => "unterminated character literal",
        E0004 => "unterminated block comment",
        E0005 => "source file too large",
    }
    Parse {
        E1001 => "unexpected token",
        E1002 => "unexpected end of input",
        E1003 => "speculation budget exceeded",
    }
    Internal {
        E9001 => "ambiguous decision table",
        E9002 => "invalid checkpoint",
    }
}

/// Front-end stage that raised a code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lex,
    Parse,
    /// The parser itself is wrong; the input may be fine.
    Internal,
}

impl ErrorCode {
    /// Look a code up by its textual form, e.g. `"E1001"`.
    pub fn lookup(text: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.iter().copied().find(|code| code.as_str() == text)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
