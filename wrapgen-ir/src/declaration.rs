//! Resolved type declarations.

use std::fmt;

use serde::Serialize;

use crate::Modifier;

/// A parameter or return-type declaration.
///
/// `raw_type` is always the canonical, whitespace-normalized form of the C
/// declaration (`const lv_obj_t * obj`). `wrapper_type` is set only when the
/// base type is known to the type registry and already includes the `const`
/// qualifier when the declaration is const.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub raw_type: String,
    pub base_type: String,
    pub modifier: Modifier,
    pub is_const: bool,
    pub name: String,
    pub wrapper_type: Option<String>,
    /// False when the fragment did not fit the declaration grammar.
    pub resolved: bool,
}

impl Declaration {
    /// Create a resolved declaration without a wrapper type.
    pub fn new(
        base_type: impl Into<String>,
        modifier: Modifier,
        is_const: bool,
        name: impl Into<String>,
    ) -> Self {
        let base_type = base_type.into();
        let name = name.into();
        let raw_type = canonical(&base_type, modifier, is_const, &name);
        Self {
            raw_type,
            base_type,
            modifier,
            is_const,
            name,
            wrapper_type: None,
            resolved: true,
        }
    }

    /// Keep a fragment verbatim.
    ///
    /// The name is the last identifier of the fragment, so the parameter can
    /// still be forwarded by name.
    pub fn unresolved(text: &str) -> Self {
        let text = text.trim();
        let name = text
            .rsplit(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .find(|word| !word.is_empty())
            .unwrap_or_default()
            .to_string();
        Self {
            raw_type: text.to_string(),
            base_type: String::new(),
            modifier: Modifier::None,
            is_const: false,
            name,
            wrapper_type: None,
            resolved: false,
        }
    }

    /// Attach the wrapper-facing type.
    pub fn with_wrapper(mut self, wrapper_type: impl Into<String>) -> Self {
        self.wrapper_type = Some(wrapper_type.into());
        self
    }

    /// True if the base type is `void`, whatever the modifier.
    pub fn has_void_base(&self) -> bool {
        self.resolved && self.base_type == "void"
    }

    /// True for a plain `void` (no modifier).
    pub fn is_void(&self) -> bool {
        self.has_void_base() && self.modifier == Modifier::None
    }

    /// True if the declaration was converted to a wrapper type.
    pub fn is_wrapped(&self) -> bool {
        self.wrapper_type.is_some()
    }
}

/// `[const ]<base>[ <mod>][ <name>]`
fn canonical(base_type: &str, modifier: Modifier, is_const: bool, name: &str) -> String {
    let mut parts = Vec::with_capacity(4);
    if is_const {
        parts.push("const");
    }
    parts.push(base_type);
    if modifier != Modifier::None {
        parts.push(modifier.symbol());
    }
    if !name.is_empty() {
        parts.push(name);
    }
    parts.join(" ")
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.wrapper_type {
            Some(wrapper) if self.name.is_empty() => write!(f, "{}", wrapper),
            Some(wrapper) => write!(f, "{} {}", wrapper, self.name),
            None => write!(f, "{}", self.raw_type),
        }
    }
}
