//! Render phase - renders every template against the collected classes.

use eyre::Result;
use tracing::debug;

use crate::generator::{FileKind, RenderedFile};
use crate::pipeline::{Diagnostic, GenerationContext, Phase};
use crate::template::{RenderOutput, Template, TemplateFile};

/// Phase producing one [`RenderedFile`] per configured template file.
///
/// Content without a matching token is reported as a warning, or as an
/// error with `strict_tokens`. Tokens left in the output are warnings.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Render templates"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let render_ctx = ctx.render_context();
        let mut outputs = Vec::new();
        let mut diagnostics = Vec::new();

        for template in &ctx.templates {
            let rendered = [
                (
                    FileKind::Header,
                    template.header(),
                    template.render_header(&ctx.classes, &render_ctx),
                ),
                (
                    FileKind::Implementation,
                    template.implementation(),
                    template.render_impl(&ctx.classes, &render_ctx),
                ),
            ];

            for (kind, file, output) in rendered {
                let (Some(file), Some(output)) = (file, output) else {
                    continue;
                };
                debug!(path = %file.path, "rendered template");
                diagnostics.extend(self.check_tokens(ctx, template, file, &output));
                outputs.push(RenderedFile {
                    path: file.path.clone(),
                    kind,
                    template: template.name().to_string(),
                    content: output.text,
                });
            }
        }

        ctx.outputs = outputs;
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}

impl RenderPhase {
    fn check_tokens(
        &self,
        ctx: &GenerationContext,
        template: &Template,
        file: &TemplateFile,
        output: &RenderOutput,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for token in &output.missing {
            // nothing was lost if the class had nothing to render
            if ctx.classes.get(token).is_none_or(|c| c.is_empty()) {
                continue;
            }
            let message = format!(
                "template '{}' has no %%{}%% token, its functions are dropped",
                template.name(),
                token
            );
            let diagnostic = if ctx.options.strict_tokens {
                Diagnostic::error(self.name(), message)
            } else {
                Diagnostic::warning(self.name(), message)
            };
            diagnostics.push(diagnostic.at(&file.path));
        }

        for token in &output.unresolved {
            diagnostics.push(
                Diagnostic::warning(self.name(), format!("token %%{}%% left unresolved", token))
                    .at(&file.path),
            );
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemoryLoader;
    use crate::pipeline::phases::{CollectPhase, LoadPhase};
    use crate::registry::TypeRegistry;

    fn run(model: &str, loader: &MemoryLoader) -> GenerationContext {
        let mut ctx = GenerationContext::new(model.parse().unwrap(), TypeRegistry::lvgl());
        LoadPhase::new(loader).run(&mut ctx).unwrap();
        CollectPhase.run(&mut ctx).unwrap();
        RenderPhase.run(&mut ctx).unwrap();
        ctx
    }

    fn model(strict: bool) -> String {
        format!(
            r#"
            [codegen]
            strict_tokens = {}

            [[classes]]
            name = "Timer"
            c_type = "lv_timer_t"

            [[templates]]
            name = "misc"
            classes = ["Timer"]
            header = "timer.h"

            [[files]]
            path = "lv_timer.h"
            free_func_group = "misc"
        "#,
            strict
        )
    }

    fn loader(template: &str) -> MemoryLoader {
        MemoryLoader::new()
            .header("lv_timer.h", "void lv_timer_pause(lv_timer_t * timer);\n")
            .template("timer.h", template)
    }

    #[test]
    fn test_render_outputs() {
        let ctx = run(&model(false), &loader("struct Timer {\n\t%%Timer%%\n};\n%%misc%%"));

        assert_eq!(ctx.outputs.len(), 1);
        let output = &ctx.outputs[0];
        assert_eq!(output.kind, FileKind::Header);
        assert_eq!(output.template, "misc");
        assert_eq!(output.content, "struct Timer {\n\tvoid pause();\n};\n");
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_token_warns() {
        let ctx = run(&model(false), &loader("%%misc%%\n%%Other%%\n"));

        let messages: Vec<_> = ctx.diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "warning: template 'misc' has no %%Timer%% token, its functions are dropped (in timer.h)",
                "warning: token %%Other%% left unresolved (in timer.h)",
            ]
        );
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_missing_token_strict() {
        let ctx = run(&model(true), &loader("%%misc%%\n"));

        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_missing_token_for_empty_class_ignored() {
        let loader = MemoryLoader::new()
            .header("lv_timer.h", "")
            .template("timer.h", "%%Timer%%\n");
        let ctx = run(&model(true), &loader);

        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.outputs[0].content, "\n");
    }
}
