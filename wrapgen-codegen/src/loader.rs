//! Access to header and template sources.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use indexmap::IndexMap;
use wrapgen_model::ModelFile;

/// Reads the inputs of a generation run.
///
/// Paths are the ones written in the model: header paths relative to the
/// source root, template paths relative to the template root.
pub trait SourceLoader {
    fn read_header(&self, path: &str) -> Result<String>;

    fn read_template(&self, path: &str) -> Result<String>;
}

/// Loads sources from disk.
#[derive(Debug, Clone)]
pub struct FsLoader {
    sources: PathBuf,
    templates: PathBuf,
}

impl FsLoader {
    pub fn new(sources: impl Into<PathBuf>, templates: impl Into<PathBuf>) -> Self {
        Self {
            sources: sources.into(),
            templates: templates.into(),
        }
    }

    /// Loader for the roots configured in a model file.
    pub fn from_model_file(file: &ModelFile) -> Self {
        Self::new(file.sources_dir(), file.templates_dir())
    }

    pub fn sources_dir(&self) -> &Path {
        &self.sources
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates
    }
}

impl SourceLoader for FsLoader {
    fn read_header(&self, path: &str) -> Result<String> {
        let full = self.sources.join(path);
        std::fs::read_to_string(&full)
            .wrap_err_with(|| format!("failed to read header '{}'", full.display()))
    }

    fn read_template(&self, path: &str) -> Result<String> {
        let full = self.templates.join(path);
        std::fs::read_to_string(&full)
            .wrap_err_with(|| format!("failed to read template '{}'", full.display()))
    }
}

/// Serves sources from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    headers: IndexMap<String, String>,
    templates: IndexMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.headers.insert(path.into(), content.into());
        self
    }

    pub fn template(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.templates.insert(path.into(), content.into());
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn read_header(&self, path: &str) -> Result<String> {
        self.headers
            .get(path)
            .cloned()
            .ok_or_else(|| eyre!("header '{}' not found", path))
    }

    fn read_template(&self, path: &str) -> Result<String> {
        self.templates
            .get(path)
            .cloned()
            .ok_or_else(|| eyre!("template '{}' not found", path))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_fs_loader_reads_relative_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/misc")).unwrap();
        fs::create_dir_all(dir.path().join("tpl")).unwrap();
        fs::write(dir.path().join("src/misc/lv_timer.h"), "void lv_init(void);\n").unwrap();
        fs::write(dir.path().join("tpl/timer.h"), "%%Timer%%\n").unwrap();

        let loader = FsLoader::new(dir.path().join("src"), dir.path().join("tpl"));

        assert_eq!(loader.read_header("misc/lv_timer.h").unwrap(), "void lv_init(void);\n");
        assert_eq!(loader.read_template("timer.h").unwrap(), "%%Timer%%\n");
    }

    #[test]
    fn test_fs_loader_missing_file() {
        let dir = TempDir::new().unwrap();
        let loader = FsLoader::new(dir.path(), dir.path());

        let err = loader.read_header("missing.h").unwrap_err();
        assert!(err.to_string().contains("failed to read header"));
    }

    #[test]
    fn test_fs_loader_from_model_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrapgen.toml");
        fs::write(&path, "[paths]\nsources = \"c\"\ntemplates = \"t\"\n").unwrap();

        let file = ModelFile::open(&path).unwrap();
        let loader = FsLoader::from_model_file(&file);

        assert_eq!(loader.sources_dir(), dir.path().join("c"));
        assert_eq!(loader.templates_dir(), dir.path().join("t"));
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new()
            .header("a.h", "void a(void);")
            .template("a.cpp", "%%misc%%");

        assert_eq!(loader.read_header("a.h").unwrap(), "void a(void);");
        assert_eq!(loader.read_template("a.cpp").unwrap(), "%%misc%%");
        assert!(loader.read_header("a.cpp").is_err());
        assert!(loader.read_template("b.cpp").is_err());
    }
}
