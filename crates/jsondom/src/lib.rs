//! An in-memory JSON document model.
//!
//! This crate provides the triad of a mutable [`Value`] tree, a strict
//! recursive-descent [`parse`] function that builds such trees from text
//! while enforcing the full JSON grammar (including the numeric and Unicode
//! edge cases), and a compact [`stringify`] serializer that inverts it.
//!
//! # Examples
//!
//! ```rust
//! use jsondom::{json, parse, stringify};
//!
//! let value = parse(r#"{"language": "JSON", "level": [1, 2, 3]}"#)?;
//! assert_eq!(value["language"], json!("JSON"));
//! assert_eq!(value["level"][2], json!(3));
//! assert_eq!(stringify(&value), r#"{"language":"JSON","level":[1,2,3]}"#);
//! # Ok::<(), jsondom::ParseError>(())
//! ```
//!
//! Malformed input is rejected with a deterministic [`ParseError`] and no
//! partially built tree:
//!
//! ```rust
//! use jsondom::{parse, ParseError};
//!
//! assert_eq!(parse("[1,2,]"), Err(ParseError::MissCommaOrSquareBracket));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod array;
mod error;
mod object;
mod options;
mod parser;
mod storage;
mod stringify;
mod value;

mod macros;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

#[cfg(test)]
mod tests;

pub use array::Array;
pub use error::ParseError;
pub use object::{Member, Object};
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use stringify::stringify;
pub use value::{Value, ValueKind};

#[doc(hidden)]
pub use alloc::vec;
