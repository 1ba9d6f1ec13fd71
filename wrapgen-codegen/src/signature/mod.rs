//! Lenient scanner for C function declarations.
//!
//! Header text is tokenized once, then a declaration is recognized at the
//! start of every line. Lines that do not fit the declaration shape are
//! skipped without error; macros, typedefs, struct bodies and statements
//! inside inline functions all fall through that way.

pub(crate) mod lexer;
mod parser;

pub use parser::parse_signatures;
