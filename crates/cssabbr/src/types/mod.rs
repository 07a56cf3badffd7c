pub mod declaration;
pub mod token;

pub use declaration::Declaration;
pub use token::{TokenKind, ValueToken};
