//! Parse failure codes.

use thiserror::Error;

/// The reasons a JSON text can be rejected.
///
/// Every failure is a deterministic function of the input, reported
/// synchronously from [`parse`](crate::parse); the parser never exposes a
/// partially built tree alongside one of these codes.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// A token that cannot start a value, or a malformed literal or number.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was parsed but non-whitespace input remained.
    #[error("root is not singular")]
    RootNotSingular,
    /// The number is syntactically valid but its magnitude overflows a
    /// double.
    #[error("number out of double range")]
    NumberTooBig,
    /// The input ended inside a string literal.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash was followed by an unrecognized escape character.
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    /// A raw control byte below U+0020 appeared inside a string literal.
    #[error("invalid raw character in string")]
    InvalidStringChar,
    /// `\u` was not followed by four hexadecimal digits.
    #[error("invalid hex digits in unicode escape")]
    InvalidUnicodeHex,
    /// A lone or incorrectly paired UTF-16 surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array element was not followed by `,` or `]`, or a comma trailed
    /// the last element.
    #[error("missing comma or ']' in array")]
    MissCommaOrSquareBracket,
    /// An object member did not start with a quoted key.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing ':' after object key")]
    MissColon,
    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or '}}' in object")]
    MissCommaOrCurlyBracket,
    /// Container nesting exceeded
    /// [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}
