//! Generation context passed through pipeline phases.

use wrapgen_model::{HeaderFileDef, Model};

use super::diagnostic::{Diagnostic, Severity};
use crate::class::ClassSet;
use crate::function::{CodegenOptions, RenderContext};
use crate::generator::RenderedFile;
use crate::registry::TypeRegistry;
use crate::template::Template;

/// A header read by the load phase.
#[derive(Debug, Clone)]
pub struct LoadedHeader {
    pub file: HeaderFileDef,
    pub text: String,
}

/// State of a generation run.
///
/// The registry and options are fixed when the context is created; the
/// phases fill in the rest.
#[derive(Debug)]
pub struct GenerationContext {
    pub model: Model,
    pub options: CodegenOptions,
    pub registry: TypeRegistry,
    /// Headers in model order (populated by LoadPhase).
    pub headers: Vec<LoadedHeader>,
    /// Parsed templates in model order (populated by LoadPhase).
    pub templates: Vec<Template>,
    /// Classes and free-function groups (populated by CollectPhase).
    pub classes: ClassSet,
    /// Rendered files (populated by RenderPhase).
    pub outputs: Vec<RenderedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(model: Model, registry: TypeRegistry) -> Self {
        let options = CodegenOptions::from(&model.codegen);
        Self {
            model,
            options,
            registry,
            headers: Vec::new(),
            templates: Vec::new(),
            classes: ClassSet::new(),
            outputs: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Rendering view over the registry and options.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.registry, &self.options)
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context(content: &str) -> GenerationContext {
        let model: Model = content.parse().unwrap();
        GenerationContext::new(model, TypeRegistry::lvgl())
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context("[codegen]\nbody_indent = \"  \"\n");

        assert_eq!(ctx.options.body_indent, "  ");
        assert_eq!(ctx.options.self_arg, "raw_ptr()");
        assert!(ctx.headers.is_empty());
        assert!(ctx.classes.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context("");

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "test info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_context_no_errors() {
        let mut ctx = make_context("");

        ctx.add_diagnostic(Diagnostic::warning("test", "just a warning").at("a.h"));

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
    }
}
