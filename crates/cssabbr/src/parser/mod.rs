//! Abbreviation parsing.
//!
//! - [`tokenizer`]: splits a raw value into typed [`ValueToken`](crate::ValueToken)s
//! - [`split`](mod@split): separates an abbreviation into name and raw value
//!
//! ## Example
//!
//! ```rust
//! use cssabbr::parser::{parse_value, split};
//!
//! let s = split("bd1-s-blue");
//! assert_eq!(s.name, "bd");
//! assert_eq!(s.value, "1 s blue");
//!
//! assert_eq!(parse_value("#0#333"), ["#0", "#333"]);
//! ```

pub mod split;
pub mod tokenizer;

pub use crate::parser::split::{Split, split, split_at_value};
pub use crate::parser::tokenizer::{parse_value, tokenize};
