//! Model parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Model, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Serialization format of a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Toml,
    Json,
}

impl ModelFormat {
    /// Pick the format from a file extension (`.json` is JSON, anything else TOML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ModelFormat::Json,
            _ => ModelFormat::Toml,
        }
    }
}

impl FromStr for Model {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "wrapgen.toml", ModelFormat::Toml)
    }
}

impl Model {
    /// Parse a model file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_model(
            &content,
            &path.display().to_string(),
            ModelFormat::from_path(path),
        )
    }

    /// Parse a JSON model from a string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_model(content, "model.json", ModelFormat::Json)
    }

    /// Parse a model from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
        format: ModelFormat,
    ) -> Result<Self> {
        parse_model(content, filename, format)
    }
}

/// Parse a model from content with the given filename for error reporting.
pub fn parse_model(content: &str, filename: &str, format: ModelFormat) -> Result<Model> {
    let source_ctx = SourceContext::new(content, filename);
    let model: Model = match format {
        ModelFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
        ModelFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
    };
    validate_model(&model, content, filename)?;
    Ok(model)
}

/// Validate the model after parsing.
fn validate_model(model: &Model, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (index, class) in model.classes.iter().enumerate() {
        ctx.validate_name(&class.name, "class")?;
        if class.c_type.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("class '{}' has an empty C type", class.name),
                &class.name,
            ));
        }
        if model.classes[..index].iter().any(|c| c.name == class.name) {
            return Err(ctx.duplicate_class(&class.name));
        }
    }

    for file in &model.files {
        ctx.validate_name(&file.free_func_group, "free function group")?;
        if model.class(&file.free_func_group).is_some() {
            return Err(ctx.group_collision(&file.free_func_group));
        }
    }

    for template in &model.templates {
        ctx.validate_name(&template.name, "template")?;
        let tmpl_ctx = ctx.push(&template.name);
        for class in &template.classes {
            tmpl_ctx.validate_name(class, "class")?;
            if model.class(class).is_none() {
                return Err(tmpl_ctx.unknown_class(&template.name, class));
            }
        }
    }

    for (c_type, def) in &model.types {
        if def.wrapper.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("type '{}' has an empty wrapper", c_type),
                c_type,
            ));
        }
    }

    Ok(())
}
