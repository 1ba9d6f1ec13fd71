//! Core utilities and types for wrapgen.
//!
//! This crate provides the file writing primitives and the C naming helpers
//! shared by the model loader and the code generator.

mod file;
mod naming;

// File operations
pub use file::{File, WriteResult};
// Naming helpers
pub use naming::{CPP_KEYWORDS, entity_prefix, is_cpp_keyword, validate_identifier};
