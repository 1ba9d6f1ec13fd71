//! Model file parsing and validation for wrapgen.
//!
//! The model describes which C++ classes wrap which C entity types, which
//! templates receive the generated code and which C headers are scanned.
//! It is read from `wrapgen.toml` or from a legacy `model.json`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod model;

pub use error::{Error, Result, SourceContext};
pub use model::{
    ClassDef, CodegenConfig, HeaderFileDef, Model, ModelFile, ModelFormat, Paths, TemplateDef,
    TypeDef, TypeKind,
};
