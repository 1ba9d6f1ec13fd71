//! Preview or write rendered files.

use std::path::Path;

use eyre::{Result, bail};
use serde::Serialize;
use wrapgen_core::{File, WriteResult};

use crate::pipeline::GenerationContext;

/// Which half of a template pair a file comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Header,
    Implementation,
}

/// A rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    /// Relative path from the output directory
    pub path: String,
    pub kind: FileKind,
    /// Name of the template this file belongs to
    pub template: String,
    pub content: String,
}

/// Result of writing the rendered files
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were created or changed
    pub written: Vec<String>,
    /// Files that already had the rendered content
    pub unchanged: Vec<String>,
}

/// Writes the outputs of a finished pipeline run.
#[derive(Debug)]
pub struct Generator {
    ctx: GenerationContext,
}

impl Generator {
    pub fn from_context(ctx: GenerationContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &GenerationContext {
        &self.ctx
    }

    /// Rendered files without writing to disk
    pub fn preview(&self) -> Vec<RenderedFile> {
        self.ctx.outputs.clone()
    }

    /// Write every rendered file under `output_dir`.
    ///
    /// Refuses to write anything when the run recorded errors.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        if self.ctx.has_errors() {
            bail!(
                "generation failed with {} error(s), nothing was written",
                self.ctx.error_count()
            );
        }

        let mut result = GenerateResult::default();
        for output in &self.ctx.outputs {
            let file = File::new(output_dir.join(&output.path), output.content.as_str());
            match file.write()? {
                WriteResult::Written => result.written.push(output.path.clone()),
                WriteResult::Unchanged => result.unchanged.push(output.path.clone()),
            }
        }
        Ok(result)
    }
}
