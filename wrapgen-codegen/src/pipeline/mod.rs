//! Generation pipeline.
//!
//! A [`Pipeline`] runs three phases over a [`GenerationContext`]:
//!
//! - load: read every header and template through a [`SourceLoader`]
//! - collect: parse headers and accumulate functions into class models
//! - render: render every template against the collected classes
//!
//! Non-fatal problems are collected as [`Diagnostic`]s; unreadable inputs
//! abort the run.
//!
//! # Example
//!
//! ```ignore
//! use wrapgen_codegen::{MemoryLoader, Generator, pipeline::Pipeline};
//!
//! let ctx = Pipeline::new().run(model, &loader)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let generator = Generator::from_context(ctx);
//! ```
//!
//! [`SourceLoader`]: crate::SourceLoader

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{GenerationContext, LoadedHeader};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
