//! List command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Wrapper declarations of every class, as `list` prints them.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub classes: Vec<ClassListing>,
}

/// One class or free-function group.
#[derive(Debug, Serialize)]
pub struct ClassListing {
    pub name: String,
    /// `"class"` or `"free"`
    pub kind: &'static str,
    /// Wrapped C type, for classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_type: Option<String>,
    /// Header declarations in render order
    pub declarations: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for class in &self.classes {
            let heading = match &class.c_type {
                Some(c_type) => format!("{} ({})", class.name, c_type),
                None => format!("{} (free functions)", class.name),
            };
            out.section(&heading);
            for declaration in &class.declarations {
                out.list_item(declaration);
            }
            out.newline();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_listing() {
        let report = ListReport {
            classes: vec![
                ClassListing {
                    name: "Timer".into(),
                    kind: "class",
                    c_type: Some("lv_timer_t".into()),
                    declarations: vec!["void pause();".into()],
                },
                ClassListing {
                    name: "misc".into(),
                    kind: "free",
                    c_type: None,
                    declarations: vec![],
                },
            ],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Timer (lv_timer_t):",
                "  - void pause();",
                "",
                "misc (free functions):",
                "",
            ]
        );
    }
}
