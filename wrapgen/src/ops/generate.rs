//! Generate operation - render templates and write wrappers.

use std::path::Path;

use eyre::{Context, Result};
use wrapgen_codegen::Generator;
use wrapgen_model::ModelFile;

use super::{describe, run_pipeline};
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is written when the pipeline reports errors.
pub fn generate(model_file: &ModelFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = run_pipeline(model_file)?;

    let errors: Vec<String> = ctx.errors().map(describe).collect();
    let warnings: Vec<String> = ctx.warnings().map(describe).collect();
    let function_count = ctx.classes.iter().map(|c| c.function_count()).sum();

    let generator = Generator::from_context(ctx);
    let result = if !errors.is_empty() {
        GenerationResult::Aborted
    } else if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write generated files")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            unchanged: written.unchanged,
        })
    };

    Ok(GenerateReport {
        errors,
        warnings,
        function_count,
        result,
    })
}
