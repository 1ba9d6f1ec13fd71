//! Model types and parsing for wrapgen model files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

pub use file::ModelFile;
pub use parse::ModelFormat;

/// Root of a wrapgen model file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Model {
    /// Input and output roots
    #[serde(default)]
    pub paths: Paths,

    /// Code generation options
    #[serde(default)]
    pub codegen: CodegenConfig,

    /// C++ classes and the C entity type each one wraps
    #[serde(default)]
    pub classes: Vec<ClassDef>,

    /// Template files receiving the generated code
    #[serde(default)]
    pub templates: Vec<TemplateDef>,

    /// C headers to scan, in processing order
    #[serde(default)]
    pub files: Vec<HeaderFileDef>,

    /// Extra or overriding entries for the type conversion table
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,
}

impl Model {
    /// Look up a class by its C++ name.
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Free-function group names in first-use order.
    pub fn free_function_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for file in &self.files {
            if !groups.contains(&file.free_func_group.as_str()) {
                groups.push(&file.free_func_group);
            }
        }
        groups
    }
}

/// Directory roots, relative to the model file.
#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    /// Root of the C headers listed in `files`
    #[serde(default = "default_sources")]
    pub sources: PathBuf,

    /// Root of the template files
    #[serde(default = "default_templates")]
    pub templates: PathBuf,

    /// Root where rendered files are written
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_sources() -> PathBuf {
    PathBuf::from("components/lvgl/src")
}

fn default_templates() -> PathBuf {
    PathBuf::from("autogen/template")
}

fn default_output() -> PathBuf {
    PathBuf::from("autogen/build")
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            templates: default_templates(),
            output: default_output(),
        }
    }
}

/// Options controlling the generated C++.
#[derive(Debug, Clone, Deserialize)]
pub struct CodegenConfig {
    /// Expression yielding the wrapped handle inside a member function
    #[serde(default = "default_self_arg")]
    pub self_arg: String,

    /// Indentation of the forwarding statement in function bodies
    #[serde(default = "default_body_indent")]
    pub body_indent: String,

    /// Render every value-returning method `const`, casting constness away
    /// when the C accessor takes a non-const handle
    #[serde(default)]
    pub const_getters: bool,

    /// Treat generated content without a matching template token as an error
    #[serde(default)]
    pub strict_tokens: bool,
}

fn default_self_arg() -> String {
    "raw_ptr()".to_string()
}

fn default_body_indent() -> String {
    "\t ".to_string()
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            self_arg: default_self_arg(),
            body_indent: default_body_indent(),
            const_getters: false,
            strict_tokens: false,
        }
    }
}

/// A C++ wrapper class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDef {
    /// C++ class name, also the template token it renders into
    #[serde(alias = "cpp")]
    pub name: String,

    /// Wrapped C entity type (e.g. `lv_timer_t`)
    #[serde(alias = "c")]
    pub c_type: String,
}

/// A header/implementation template pair.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDef {
    /// Template name; free functions grouped under this name render here too
    pub name: String,

    /// Classes rendered into this template, in order
    #[serde(default)]
    pub classes: Vec<String>,

    /// Header template path, relative to the template root
    #[serde(default, alias = "file_h")]
    pub header: Option<String>,

    /// Implementation template path, relative to the template root
    #[serde(default, rename = "impl", alias = "file_cpp")]
    pub implementation: Option<String>,
}

impl TemplateDef {
    /// Header path, if one is configured.
    pub fn header_path(&self) -> Option<&str> {
        self.header.as_deref().filter(|p| !p.is_empty())
    }

    /// Implementation path, if one is configured.
    pub fn impl_path(&self) -> Option<&str> {
        self.implementation.as_deref().filter(|p| !p.is_empty())
    }
}

/// A C header to scan.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderFileDef {
    /// Header path, relative to the source root
    pub path: String,

    /// Group collecting the functions of this file that belong to no class
    pub free_func_group: String,

    /// Functions to leave out
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl HeaderFileDef {
    /// Check if a function is excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}

/// A type conversion table entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDef {
    /// Wrapper type name
    pub wrapper: String,

    /// Conversion family
    #[serde(default)]
    pub kind: TypeKind,

    /// Override for the argument cast (`{}` is the parameter name)
    #[serde(default)]
    pub value_cast: Option<String>,

    /// Override for the return cast (`{}` is the call expression)
    #[serde(default)]
    pub return_cast: Option<String>,
}

/// Conversion family of a type entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    #[default]
    Handle,
    Text,
    ClassDescriptor,
}
