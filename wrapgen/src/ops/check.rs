//! Check operation - full dry pipeline run.

use eyre::Result;
use wrapgen_codegen::{ClassKind, pipeline::Severity};
use wrapgen_model::ModelFile;

use super::{describe, run_pipeline};
use crate::reports::{CheckReport, ClassSummary};

/// Execute the check operation.
///
/// Parses every header and renders every template, but writes nothing.
pub fn check(model_file: &ModelFile) -> Result<CheckReport> {
    let ctx = run_pipeline(model_file)?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let classes = ctx
        .classes
        .iter()
        .map(|class| ClassSummary {
            name: class.name().to_string(),
            free_group: matches!(class.kind(), ClassKind::FreeGroup),
            function_count: class.function_count(),
        })
        .collect();

    Ok(CheckReport {
        model_path: model_file.path().to_path_buf(),
        errors,
        warnings,
        infos,
        classes,
        file_count: ctx.outputs.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn project(template: &str) -> (TempDir, ModelFile) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lvgl")).unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(
            dir.path().join("lvgl/lv_timer.h"),
            "void lv_timer_pause(lv_timer_t * timer);\nuint32_t lv_timer_handler(void);\n",
        )
        .unwrap();
        fs::write(dir.path().join("templates/Timer.h"), template).unwrap();
        fs::write(
            dir.path().join("wrapgen.toml"),
            r#"
[paths]
sources = "lvgl"
templates = "templates"

[[classes]]
name = "Timer"
c_type = "lv_timer_t"

[[templates]]
name = "misc"
classes = ["Timer"]
header = "Timer.h"

[[files]]
path = "lv_timer.h"
free_func_group = "misc"
"#,
        )
        .unwrap();
        let model_file = ModelFile::open(dir.path().join("wrapgen.toml")).unwrap();
        (dir, model_file)
    }

    #[test]
    fn test_check_counts_functions() {
        let (_dir, model_file) = project("%%Timer%%\n%%misc%%\n");
        let report = check(&model_file).unwrap();

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.file_count, 1);

        let timer = report.classes.iter().find(|c| c.name == "Timer").unwrap();
        assert_eq!(timer.function_count, 1);
        assert!(!timer.free_group);

        let misc = report.classes.iter().find(|c| c.name == "misc").unwrap();
        assert_eq!(misc.function_count, 1);
        assert!(misc.free_group);
    }

    #[test]
    fn test_check_reports_missing_token() {
        let (_dir, model_file) = project("%%misc%%\n");
        let report = check(&model_file).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("%%Timer%%"));
        assert!(report.warnings[0].contains("--> Timer.h"));
    }
}
