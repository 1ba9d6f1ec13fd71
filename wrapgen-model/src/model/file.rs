use std::path::{Path, PathBuf};

use super::{Model, ModelFormat};
use crate::Result;

/// A model file on disk, with its raw content and the parsed model.
///
/// Relative paths in the model resolve against the directory holding the
/// model file.
pub struct ModelFile {
    path: PathBuf,
    content: String,
    model: Model,
}

impl ModelFile {
    /// Open and parse a model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let model =
            Model::from_str_with_filename(&content, &filename, ModelFormat::from_path(&path))?;

        Ok(Self {
            path,
            content,
            model,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Directory relative model paths resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Resolve a model path against the model directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir().join(path)
    }

    /// Root of the C headers.
    pub fn sources_dir(&self) -> PathBuf {
        self.resolve(&self.model.paths.sources)
    }

    /// Root of the template files.
    pub fn templates_dir(&self) -> PathBuf {
        self.resolve(&self.model.paths.templates)
    }

    /// Root of the generated files.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.model.paths.output)
    }
}
