//! C header parsing and C++ wrapper rendering for wrapgen.
//!
//! # Module Organization
//!
//! - [`registry`] - C type to wrapper type conversion table
//! - [`resolve`] - turns declaration fragments into [`Declaration`]s
//! - [`signature`] - lenient scanner for function declarations in header text
//! - [`function`] - member/free classification and per-function rendering
//! - [`class`] - per-class function aggregation
//! - [`template`] - `%%TOKEN%%` template substitution
//! - [`pipeline`] - load → collect → render orchestration
//! - [`generator`] - preview or write rendered files
//!
//! [`Declaration`]: wrapgen_ir::Declaration

pub mod builder;
pub mod class;
pub mod function;
pub mod generator;
pub mod loader;
pub mod pipeline;
pub mod registry;
pub mod resolve;
pub mod signature;
pub mod template;

pub use class::{ClassKind, ClassModel, ClassSet};
pub use function::{CodegenOptions, Function, RenderContext};
pub use generator::{FileKind, GenerateResult, Generator, RenderedFile};
pub use loader::{FsLoader, MemoryLoader, SourceLoader};
pub use registry::TypeRegistry;
pub use resolve::DeclarationResolver;
pub use signature::parse_signatures;
pub use template::{RenderOutput, Template, TemplateFile, TemplateText};
