//! Validation context and utilities for model parsing.

use std::sync::Arc;

use miette::SourceSpan;
use wrapgen_core::validate_identifier;

use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content and the current path through the model (e.g.
/// the template being validated) so nested checks can report where they
/// failed.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g. ["templates", "misc"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "class in 'misc'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name, 0)
    }

    /// Validate that a name is a valid C++ identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Create a validation error pointing at `name`.
    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        self.source
            .validation_error(message, self.find_span(name))
    }

    /// Create a duplicate class error pointing at both declarations.
    pub fn duplicate_class(&self, name: &str) -> Box<Error> {
        let src = self.source.src();
        let first = find_name_span(src, name, 0);
        let second = find_name_span(src, name, 1);
        match (first, second) {
            (Some(first), Some(second)) => self.source.duplicate_class_error(name, first, second),
            _ => self.source.validation_error(
                format!("class '{}' is declared twice", name),
                first,
            ),
        }
    }

    /// Create an unknown class error for a template.
    pub fn unknown_class(&self, template: &str, class: &str) -> Box<Error> {
        self.source
            .unknown_class_error(template, class, self.find_span(class))
    }

    /// Create a free-function group collision error.
    pub fn group_collision(&self, name: &str) -> Box<Error> {
        // the class declaration comes first in most models, point at the group use
        let span = find_name_span(self.source.src(), name, 1).or_else(|| self.find_span(name));
        self.source.group_collision_error(name, span)
    }
}

/// Find the span of the `nth` quoted occurrence of a name.
///
/// Matches `"name"` (TOML basic strings and JSON) and `'name'` (TOML literal
/// strings). The span covers the name without its quotes.
pub(crate) fn find_name_span(src: &str, name: &str, nth: usize) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let double = format!("\"{}\"", name);
    let single = format!("'{}'", name);

    let mut positions: Vec<usize> = src
        .match_indices(&double)
        .chain(src.match_indices(&single))
        .map(|(pos, _)| pos + 1)
        .collect();
    positions.sort_unstable();

    positions
        .get(nth)
        .map(|&start| SourceSpan::from((start, name.len())))
}
