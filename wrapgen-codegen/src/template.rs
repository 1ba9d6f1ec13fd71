//! `%%TOKEN%%` template substitution.
//!
//! Template text is parsed once into token sites. Rendering never touches
//! the parsed template: every render starts from the original source and
//! substitutes in a single pass, so inserted content is not re-scanned and
//! rendering twice gives the same output.

use crate::class::{ClassModel, ClassSet};
use crate::function::RenderContext;

/// Token delimiter.
const DELIMITER: &str = "%%";

/// One `%%NAME%%` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenSite {
    name: String,
    /// Start of the text treated as the token's indent.
    line_start: usize,
    start: usize,
    end: usize,
}

/// Template source with its parsed token sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateText {
    source: String,
    sites: Vec<TokenSite>,
}

/// Result of a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
    /// Tokens that had content but no occurrence in the template.
    pub missing: Vec<String>,
    /// Tokens left in the output.
    pub unresolved: Vec<String>,
}

impl TemplateText {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let sites = scan_tokens(&source);
        Self { source, sites }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Token names in order of appearance.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|site| site.name.as_str())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.sites.iter().any(|site| site.name == token)
    }

    /// Text between the line start and the first occurrence of `token`.
    pub fn indent_of(&self, token: &str) -> Option<&str> {
        self.sites
            .iter()
            .find(|site| site.name == token)
            .map(|site| &self.source[site.line_start..site.start])
    }

    /// Substitute each `(token, content)` pair at the first unused
    /// occurrence of the token, indenting every content line like the
    /// token.
    pub fn render<'a>(
        &self,
        substitutions: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> RenderOutput {
        let mut assigned: Vec<Option<&str>> = vec![None; self.sites.len()];
        let mut missing = Vec::new();

        for (token, content) in substitutions {
            let slot = self
                .sites
                .iter()
                .zip(assigned.iter_mut())
                .find(|(site, slot)| site.name == token && slot.is_none());
            match slot {
                Some((_, slot)) => *slot = Some(content),
                None => missing.push(token.to_string()),
            }
        }

        let mut text = String::with_capacity(self.source.len());
        let mut unresolved: Vec<String> = Vec::new();
        let mut cursor = 0;
        for (site, content) in self.sites.iter().zip(assigned) {
            match content {
                Some(content) => {
                    text.push_str(&self.source[cursor..site.line_start]);
                    let indent = &self.source[site.line_start..site.start];
                    text.push_str(&indent_lines(content, indent));
                    cursor = site.end;
                }
                None => {
                    if !unresolved.contains(&site.name) {
                        unresolved.push(site.name.clone());
                    }
                }
            }
        }
        text.push_str(&self.source[cursor..]);

        RenderOutput {
            text,
            missing,
            unresolved,
        }
    }
}

fn scan_tokens(source: &str) -> Vec<TokenSite> {
    let mut sites: Vec<TokenSite> = Vec::new();
    let mut pos = 0;

    while let Some(offset) = source[pos..].find(DELIMITER) {
        let start = pos + offset;
        let name_start = start + DELIMITER.len();
        let name_len = source[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let name_end = name_start + name_len;

        if name_len == 0 || !source[name_end..].starts_with(DELIMITER) {
            pos = start + 1;
            continue;
        }

        let end = name_end + DELIMITER.len();
        let mut line_start = source[..start].rfind('\n').map_or(0, |nl| nl + 1);
        if let Some(prev) = sites.last() {
            line_start = line_start.max(prev.end);
        }
        sites.push(TokenSite {
            name: source[name_start..name_end].to_string(),
            line_start,
            start,
            end,
        });
        pos = end;
    }

    sites
}

fn indent_lines(content: &str, indent: &str) -> String {
    if indent.is_empty() {
        return content.to_string();
    }
    content
        .split('\n')
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A template file and the path it is read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template and output roots.
    pub path: String,
    pub text: TemplateText,
}

/// A header/implementation template pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    classes: Vec<String>,
    header: Option<TemplateFile>,
    implementation: Option<TemplateFile>,
}

impl Template {
    pub fn new(name: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            classes,
            header: None,
            implementation: None,
        }
    }

    pub fn with_header(mut self, path: impl Into<String>, text: TemplateText) -> Self {
        self.header = Some(TemplateFile {
            path: path.into(),
            text,
        });
        self
    }

    pub fn with_impl(mut self, path: impl Into<String>, text: TemplateText) -> Self {
        self.implementation = Some(TemplateFile {
            path: path.into(),
            text,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn header(&self) -> Option<&TemplateFile> {
        self.header.as_ref()
    }

    pub fn implementation(&self) -> Option<&TemplateFile> {
        self.implementation.as_ref()
    }

    /// Classes rendered into this template: its classes, then its own
    /// free-function group.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        let own = (!self.classes.contains(&self.name)).then_some(self.name.as_str());
        self.classes.iter().map(String::as_str).chain(own)
    }

    /// Render the header template, if there is one.
    pub fn render_header(
        &self,
        classes: &ClassSet,
        ctx: &RenderContext<'_>,
    ) -> Option<RenderOutput> {
        let file = self.header.as_ref()?;
        Some(self.render_with(&file.text, classes, |class| class.render_header(ctx)))
    }

    /// Render the implementation template, if there is one.
    pub fn render_impl(&self, classes: &ClassSet, ctx: &RenderContext<'_>) -> Option<RenderOutput> {
        let file = self.implementation.as_ref()?;
        Some(self.render_with(&file.text, classes, |class| class.render_impl(ctx)))
    }

    fn render_with(
        &self,
        text: &TemplateText,
        classes: &ClassSet,
        render: impl Fn(&ClassModel) -> String,
    ) -> RenderOutput {
        let rendered: Vec<(&str, String)> = self
            .slots()
            .filter_map(|slot| classes.get(slot))
            .map(|class| (class.name(), render(class)))
            .collect();
        text.render(rendered.iter().map(|(name, content)| (*name, content.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let text = TemplateText::parse("class A {\n    %%Timer%%\n};\n%%misc%%\n");

        assert_eq!(text.tokens().collect::<Vec<_>>(), vec!["Timer", "misc"]);
        assert_eq!(text.indent_of("Timer"), Some("    "));
        assert_eq!(text.indent_of("misc"), Some(""));
        assert_eq!(text.indent_of("Other"), None);
    }

    #[test]
    fn test_malformed_tokens_ignored() {
        let text = TemplateText::parse("%%%% 100%% %%a b%% %%x-y%% %%ok%%");

        assert_eq!(text.tokens().collect::<Vec<_>>(), vec!["ok"]);
    }

    #[test]
    fn test_indented_substitution() {
        let text = TemplateText::parse("    %%WIDGET%%");
        let out = text.render([("WIDGET", "a;\nb;")]);

        assert_eq!(out.text, "    a;\n    b;");
        assert!(out.missing.is_empty());
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn test_indent_after_previous_token() {
        let text = TemplateText::parse("  %%A%% %%B%%\n");

        assert_eq!(text.indent_of("A"), Some("  "));
        assert_eq!(text.indent_of("B"), Some(" "));
        assert_eq!(text.render([("A", "x"), ("B", "y\nz")]).text, "  x y\n z\n");
    }

    #[test]
    fn test_missing_and_unresolved() {
        let text = TemplateText::parse("%%A%%\n%%B%%\n");
        let out = text.render([("A", "a"), ("C", "c")]);

        assert_eq!(out.text, "a\n%%B%%\n");
        assert_eq!(out.missing, vec!["C"]);
        assert_eq!(out.unresolved, vec!["B"]);
    }

    #[test]
    fn test_first_unused_occurrence() {
        let text = TemplateText::parse("%%A%%|%%A%%");

        assert_eq!(text.render([("A", "1")]).text, "1|%%A%%");
        assert_eq!(text.render([("A", "1"), ("A", "2")]).text, "1|2");
    }

    #[test]
    fn test_content_not_rescanned() {
        let text = TemplateText::parse("%%A%%\n%%B%%");
        let out = text.render([("A", "%%B%%"), ("B", "b")]);

        assert_eq!(out.text, "%%B%%\nb");
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let text = TemplateText::parse("\t%%A%%\n");
        let first = text.render([("A", "x\ny")]);
        let second = text.render([("A", "x\ny")]);

        assert_eq!(first, second);
        assert_eq!(text.source(), "\t%%A%%\n");
    }

    #[test]
    fn test_template_slots() {
        let template = Template::new("misc", vec!["Timer".into(), "Anim".into()]);

        assert_eq!(template.slots().collect::<Vec<_>>(), vec!["Timer", "Anim", "misc"]);
        assert!(template.header().is_none());
    }

    #[test]
    fn test_template_named_after_its_class() {
        let template = Template::new("Timer", vec!["Timer".into()]);
        assert_eq!(template.slots().collect::<Vec<_>>(), vec!["Timer"]);
    }
}
