//! Core operations.
//!
//! This module contains the business logic for wrapgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;

use eyre::{Context, Result};
use wrapgen_codegen::{
    FsLoader,
    pipeline::{Diagnostic, GenerationContext, Pipeline},
};
use wrapgen_model::ModelFile;

/// Run the pipeline with sources and templates resolved against the model file.
fn run_pipeline(model_file: &ModelFile) -> Result<GenerationContext> {
    let loader = FsLoader::from_model_file(model_file);
    Pipeline::new()
        .run(model_file.model().clone(), &loader)
        .wrap_err("Pipeline failed")
}

/// Diagnostic message with its location on a second line.
fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
