//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Error messages from the pipeline.
    pub errors: Vec<String>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Number of functions collected across all classes.
    pub function_count: usize,
    /// What happened to the rendered files.
    pub result: GenerationResult,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// The pipeline reported errors, nothing was written.
    Aborted,
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.errors.is_empty() || !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Aborted => {
                out.preformatted(&format!(
                    "Generation failed with {} error(s), nothing was written",
                    self.errors.len()
                ));
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.preformatted(&format!(
                    "Dry run: {} function(s) in {} file(s), nothing was written",
                    self.function_count,
                    files.len()
                ));
            }
            GenerationResult::Written(written) => {
                out.section(&format!(
                    "Generated {} function(s) into {}",
                    self.function_count,
                    written.output_dir.display()
                ));
                for path in &written.written {
                    out.added_item(path);
                }
                for path in &written.unchanged {
                    out.list_item(&format!("{} (unchanged)", path));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            errors: vec![],
            warnings: vec!["token %%Anim%% left unresolved\n  --> Anim.h".into()],
            function_count: 3,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec!["Timer.h".into()],
                unchanged: vec!["Timer.cpp".into()],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: token %%Anim%% left unresolved\n  --> Anim.h",
                "",
                "Generated 3 function(s) into out:",
                "  + Timer.h",
                "  - Timer.cpp (unchanged)",
            ]
        );
    }

    #[test]
    fn test_render_aborted() {
        let report = GenerateReport {
            errors: vec!["template 'misc' has no %%Timer%% token".into()],
            warnings: vec![],
            function_count: 1,
            result: GenerationResult::Aborted,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        assert_eq!(out.lines[0], "error: template 'misc' has no %%Timer%% token");
        assert!(out.lines[2].contains("nothing was written"));
    }
}
