//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a dry pipeline run.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model file.
    pub model_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Every class and free-function group, in render order.
    pub classes: Vec<ClassSummary>,
    /// Number of files a generate run would write.
    pub file_count: usize,
}

/// Function count of one class or group.
#[derive(Debug)]
pub struct ClassSummary {
    pub name: String,
    pub free_group: bool,
    pub function_count: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
        if !self.errors.is_empty() || !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.section("Classes");
        for class in &self.classes {
            let kind = if class.free_group { " (free)" } else { "" };
            out.key_value_indented(
                &class.name,
                &format!("{} function(s){}", class.function_count, kind),
            );
        }
        out.newline();

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid, {} file(s) would be generated",
                self.model_path.display(),
                self.file_count
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            model_path: PathBuf::from("wrapgen.toml"),
            errors: vec![],
            warnings: vec![],
            infos: vec!["2 function(s) belong to no configured class".into()],
            classes: vec![
                ClassSummary {
                    name: "Timer".into(),
                    free_group: false,
                    function_count: 7,
                },
                ClassSummary {
                    name: "misc".into(),
                    free_group: true,
                    function_count: 4,
                },
            ],
            file_count: 2,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "info: 2 function(s) belong to no configured class",
                "",
                "Classes:",
                "  Timer: 7 function(s)",
                "  misc: 4 function(s) (free)",
                "",
                "✓ wrapgen.toml is valid, 2 file(s) would be generated",
            ]
        );
    }

    #[test]
    fn test_render_invalid() {
        let report = CheckReport {
            model_path: PathBuf::from("wrapgen.toml"),
            errors: vec!["template 'misc' has no %%Timer%% token".into()],
            warnings: vec![],
            infos: vec![],
            classes: vec![],
            file_count: 1,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert!(!out.lines.iter().any(|l| l.contains("is valid")));
    }
}
