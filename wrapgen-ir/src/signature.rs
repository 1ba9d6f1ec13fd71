use serde::Serialize;

/// A function declaration as found in header text, before type resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// Function name, without leading underscores.
    pub name: String,
    /// Return type text as written (qualifier keywords removed).
    pub return_text: String,
    /// Parameter texts, trimmed, in declaration order.
    pub params: Vec<String>,
}

impl Signature {
    pub fn new(
        name: impl Into<String>,
        return_text: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            return_text: return_text.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}
