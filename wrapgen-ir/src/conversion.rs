//! Wrapper type conversion descriptors.

use serde::{Deserialize, Serialize};

use crate::{Modifier, ModifierMap};

/// Family of conversion a registered C type follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionKind {
    /// A managed handle: forwarded with `raw_ptr()`, returned as a
    /// non-owning wrapper.
    #[default]
    Handle,
    /// A text buffer: forwarded with `c_str()`.
    Text,
    /// A class descriptor: forwarded by address and returned as a pointer.
    ClassDescriptor,
}

/// How a C base type maps onto its wrapper type.
///
/// Cast templates use `{}` as the placeholder for the converted expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionDescriptor {
    pub wrapper_type: String,
    pub param_types: ModifierMap<String>,
    pub return_types: ModifierMap<String>,
    pub value_cast: String,
    /// Applied to call results of this type; `None` returns them as is.
    pub return_cast: Option<String>,
}

impl ConversionDescriptor {
    /// Build the descriptor for a wrapper type of the given kind.
    pub fn new(wrapper_type: impl Into<String>, kind: ConversionKind) -> Self {
        let wrapper_type = wrapper_type.into();
        let reference = format!("{} &", wrapper_type);

        // wrapped handles are never null, so C pointers become references
        let param_types = ModifierMap {
            none: wrapper_type.clone(),
            pointer: reference.clone(),
            reference,
        };
        let mut return_types = ModifierMap::uniform(wrapper_type.clone());

        let (value_cast, return_cast) = match kind {
            ConversionKind::Handle => (
                "{}.raw_ptr()".to_string(),
                Some(format!("{}({{}}, false)", wrapper_type)),
            ),
            ConversionKind::Text => (
                "{}.c_str()".to_string(),
                Some(format!("{}({{}})", wrapper_type)),
            ),
            ConversionKind::ClassDescriptor => {
                return_types[Modifier::Pointer] = format!("{} *", wrapper_type);
                ("&{}".to_string(), None)
            }
        };

        Self {
            wrapper_type,
            param_types,
            return_types,
            value_cast,
            return_cast,
        }
    }

    /// Descriptor for a managed handle type.
    pub fn handle(wrapper_type: impl Into<String>) -> Self {
        Self::new(wrapper_type, ConversionKind::Handle)
    }

    /// Descriptor for a text type.
    pub fn text(wrapper_type: impl Into<String>) -> Self {
        Self::new(wrapper_type, ConversionKind::Text)
    }

    /// Descriptor for a class-descriptor type.
    pub fn class_descriptor(wrapper_type: impl Into<String>) -> Self {
        Self::new(wrapper_type, ConversionKind::ClassDescriptor)
    }

    /// Replace the value cast template.
    pub fn with_value_cast(mut self, template: impl Into<String>) -> Self {
        self.value_cast = template.into();
        self
    }

    /// Replace the return cast template.
    pub fn with_return_cast(mut self, template: Option<String>) -> Self {
        self.return_cast = template;
        self
    }

    /// Wrapper-facing parameter type for a modifier.
    pub fn param_type(&self, modifier: Modifier) -> &str {
        &self.param_types[modifier]
    }

    /// Wrapper-facing return type for a modifier.
    pub fn return_type(&self, modifier: Modifier) -> &str {
        &self.return_types[modifier]
    }

    /// Expression passing a wrapper value to the underlying C call.
    pub fn cast_value(&self, expr: &str) -> String {
        self.value_cast.replace("{}", expr)
    }

    /// Expression turning a C call result into the wrapper type.
    pub fn cast_return(&self, expr: &str) -> String {
        match &self.return_cast {
            Some(template) => template.replace("{}", expr),
            None => expr.to_string(),
        }
    }
}
