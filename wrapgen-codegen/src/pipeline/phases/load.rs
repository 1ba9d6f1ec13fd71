//! Load phase - reads headers and templates.

use eyre::Result;
use tracing::debug;

use crate::loader::SourceLoader;
use crate::pipeline::{GenerationContext, LoadedHeader, Phase};
use crate::template::{Template, TemplateText};

/// Phase that reads every input of the model through a [`SourceLoader`].
pub struct LoadPhase<'a> {
    loader: &'a dyn SourceLoader,
}

impl<'a> LoadPhase<'a> {
    pub fn new(loader: &'a dyn SourceLoader) -> Self {
        Self { loader }
    }
}

impl Phase for LoadPhase<'_> {
    fn name(&self) -> &'static str {
        "load"
    }

    fn description(&self) -> &'static str {
        "Read headers and templates"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        for file in &ctx.model.files {
            let text = self.loader.read_header(&file.path)?;
            debug!(path = %file.path, bytes = text.len(), "loaded header");
            ctx.headers.push(LoadedHeader {
                file: file.clone(),
                text,
            });
        }

        for def in &ctx.model.templates {
            let mut template = Template::new(&def.name, def.classes.clone());
            if let Some(path) = def.header_path() {
                let text = self.loader.read_template(path)?;
                debug!(path, "loaded header template");
                template = template.with_header(path, TemplateText::parse(text));
            }
            if let Some(path) = def.impl_path() {
                let text = self.loader.read_template(path)?;
                debug!(path, "loaded implementation template");
                template = template.with_impl(path, TemplateText::parse(text));
            }
            ctx.templates.push(template);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemoryLoader;
    use crate::registry::TypeRegistry;

    fn make_context(content: &str) -> GenerationContext {
        GenerationContext::new(content.parse().unwrap(), TypeRegistry::lvgl())
    }

    #[test]
    fn test_load_in_model_order() {
        let mut ctx = make_context(
            r#"
            [[templates]]
            name = "core"
            header = "core.h"

            [[files]]
            path = "b.h"
            free_func_group = "core"

            [[files]]
            path = "a.h"
            free_func_group = "core"
        "#,
        );
        let loader = MemoryLoader::new()
            .header("a.h", "A")
            .header("b.h", "B")
            .template("core.h", "%%core%%");

        LoadPhase::new(&loader).run(&mut ctx).unwrap();

        let texts: Vec<_> = ctx.headers.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "A"]);
        assert_eq!(ctx.templates.len(), 1);
        assert_eq!(ctx.templates[0].header().unwrap().path, "core.h");
        assert!(ctx.templates[0].implementation().is_none());
    }

    #[test]
    fn test_empty_template_paths_skipped() {
        let mut ctx = make_context(
            r#"
            [[templates]]
            name = "core"
            header = ""
            impl = "core.cpp"
        "#,
        );
        let loader = MemoryLoader::new().template("core.cpp", "%%core%%");

        LoadPhase::new(&loader).run(&mut ctx).unwrap();

        assert!(ctx.templates[0].header().is_none());
        assert!(ctx.templates[0].implementation().is_some());
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let mut ctx = make_context(
            r#"
            [[templates]]
            name = "core"
            header = "core.h"
        "#,
        );

        let result = LoadPhase::new(&MemoryLoader::new()).run(&mut ctx);
        assert!(result.is_err());
    }
}
