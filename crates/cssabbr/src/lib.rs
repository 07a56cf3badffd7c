//! # cssabbr - CSS abbreviation compiler
//!
//! Expands terse CSS shorthand into full declarations:
//!
//! | Abbreviation | Declaration |
//! |---|---|
//! | `p10` | `padding: 10px` |
//! | `bd1-s-blue` | `border: 1px solid blue` |
//! | `c#f.5` | `color: rgba(255, 255, 255, 0.5)` |
//! | `poa!` | `position: absolute !important` |
//! | `bxsh` | `box-shadow: ${1:inset }${2:hoff} ${3:voff} ${4:blur} ${5:color}` |
//!
//! ## Quick Start
//!
//! ```rust
//! use cssabbr::{resolve, split};
//!
//! let parts = split("padding-10--10");
//! assert_eq!(parts.name, "padding");
//! assert_eq!(parts.value, "-10 -10");
//!
//! let decl = resolve("bdt2-s#ED");
//! assert_eq!(decl.to_string(), "border-top: 2px solid #EDEDED");
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser::split`] finds where the value starts (`bd` | `1-s-blue`)
//! 2. [`parser::tokenize`] classifies value atoms (number, color, variable, keyword)
//! 3. [`normalize`] maps atoms to canonical text (`1` -> `1px`, `s` -> `solid`)
//! 4. [`resolver`] maps the name to a property or snippet and assembles the
//!    [`Declaration`]
//!
//! Every operation is total: unknown input passes through rather than failing.
//!
//! ## Modules
//!
//! - [`parser`]: splitting and tokenizing
//! - [`normalize`]: per-token normalization
//! - [`resolver`]: dictionary lookup and declaration assembly
//! - [`dictionary`]: static abbreviation, keyword and unit tables
//! - [`types`]: [`ValueToken`] and [`Declaration`]

pub mod dictionary;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod types;

pub use dictionary::Snippet;
pub use normalize::{NormalizeOptions, normalize_token};
pub use parser::{Split, parse_value, split, tokenize};
pub use resolver::{Resolver, ResolverOptions, normalize_value, parse, resolve};
pub use types::{Declaration, TokenKind, ValueToken};
