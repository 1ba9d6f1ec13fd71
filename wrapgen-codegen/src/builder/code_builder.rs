//! Code builder utility for generating indented C++.

/// Fluent API for building code with a configurable indent unit.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example
///
/// ```
/// use wrapgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::new("\t ")
///     .block_with_close("void Timer::pause() {", "}", |b| {
///         b.line("lv_timer_pause(raw_ptr());")
///     })
///     .build();
///
/// assert_eq!(code, "void Timer::pause() {\n\t lv_timer_pause(raw_ptr());\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder indenting each level with `indent`.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent_level: 0,
            indent: indent.into(),
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the code without its final newline.
    pub fn build_fragment(self) -> String {
        let mut code = self.buffer;
        if code.ends_with('\n') {
            code.pop();
        }
        code
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new("    ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::default().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_custom_indent_unit() {
        let code = CodeBuilder::new("\t")
            .line("namespace lvgl {")
            .indent()
            .line("class Timer;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "namespace lvgl {\n\tclass Timer;\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::new("  ")
            .block_with_close("if (a) {", "}", |b| {
                b.block_with_close("if (b) {", "}", |b| b.line("f();"))
            })
            .build();

        assert_eq!(code, "if (a) {\n  if (b) {\n    f();\n  }\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_line("x;");

        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_build_fragment() {
        let code = CodeBuilder::default().line("a;").line("b;").build_fragment();
        assert_eq!(code, "a;\nb;");
    }
}
