//! Function classification and rendering.
//!
//! A [`Function`] is rendered against a target entity prefix: `Some(prefix)`
//! for a wrapper class, `None` for a free-function group. A function that
//! does not belong to the target renders to nothing.

use serde::Serialize;
use wrapgen_core::entity_prefix;
use wrapgen_ir::{Declaration, Signature};
use wrapgen_model::CodegenConfig;

use crate::builder::CodeBuilder;
use crate::registry::TypeRegistry;
use crate::resolve::DeclarationResolver;

/// Options controlling rendered code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Expression yielding the wrapped handle inside a member function.
    pub self_arg: String,
    /// Indentation of the forwarding statement.
    pub body_indent: String,
    /// Render every value-returning method `const`.
    pub const_getters: bool,
    /// Fail generation when rendered content has no template token.
    pub strict_tokens: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self::from(&CodegenConfig::default())
    }
}

impl From<&CodegenConfig> for CodegenOptions {
    fn from(config: &CodegenConfig) -> Self {
        Self {
            self_arg: config.self_arg.clone(),
            body_indent: config.body_indent.clone(),
            const_getters: config.const_getters,
            strict_tokens: config.strict_tokens,
        }
    }
}

/// Shared, read-only state for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub registry: &'a TypeRegistry,
    pub options: &'a CodegenOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a TypeRegistry, options: &'a CodegenOptions) -> Self {
        Self { registry, options }
    }
}

/// A C function with resolved return type and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub ret: Declaration,
    pub params: Vec<Declaration>,
}

impl Function {
    pub fn new(name: impl Into<String>, ret: Declaration, params: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            ret,
            params,
        }
    }

    /// Resolve the return type and parameters of a parsed signature.
    pub fn from_signature(signature: &Signature, resolver: &DeclarationResolver<'_>) -> Self {
        Self {
            name: signature.name.clone(),
            ret: resolver.resolve_return(&signature.return_text),
            params: signature
                .params
                .iter()
                .map(|p| resolver.resolve_param(p))
                .collect(),
        }
    }

    /// Entity prefix of the first parameter's type (`lv_timer_`).
    pub fn entity_prefix(&self) -> Option<&str> {
        self.params
            .first()
            .filter(|p| p.resolved)
            .and_then(|p| entity_prefix(&p.base_type))
    }

    /// Check if the function belongs to the given target.
    ///
    /// `None` is the free-function target: it takes every function without
    /// an entity prefix.
    pub fn is_of_class(&self, target: Option<&str>) -> bool {
        match (self.entity_prefix(), target) {
            (None, None) => true,
            (Some(prefix), Some(target)) => prefix == target,
            _ => false,
        }
    }

    /// True when the first parameter is the entity the name is prefixed with.
    pub fn is_member(&self) -> bool {
        self.entity_prefix()
            .is_some_and(|prefix| self.name.starts_with(prefix))
    }

    /// Wrapper method name: the C name with the entity prefix removed.
    pub fn method_name(&self) -> String {
        match self.entity_prefix() {
            Some(prefix) => self.name.replace(prefix, ""),
            None => self.name.clone(),
        }
    }

    /// Parameters of the wrapper method.
    fn wrapper_params(&self) -> impl Iterator<Item = &Declaration> {
        let skip = usize::from(self.is_member());
        self.params.iter().skip(skip).filter(|p| !p.is_void())
    }

    fn is_const(&self, target: Option<&str>, options: &CodegenOptions) -> bool {
        if target.is_none() || self.ret.has_void_base() {
            return false;
        }
        options.const_getters || self.params.first().is_some_and(|p| p.is_const)
    }

    /// Signature line, qualified with `owner::` when given.
    fn signature_line(
        &self,
        target: Option<&str>,
        owner: Option<&str>,
        ctx: &RenderContext<'_>,
    ) -> String {
        let args: Vec<String> = self.wrapper_params().map(ToString::to_string).collect();
        let qualifier = owner.map(|o| format!("{}::", o)).unwrap_or_default();
        format!(
            "{} {}{}({}){}",
            self.ret,
            qualifier,
            self.method_name(),
            args.join(", "),
            if self.is_const(target, ctx.options) { " const" } else { "" }
        )
    }

    /// Header declaration, or `None` when the function is not of `target`.
    pub fn render_header(&self, target: Option<&str>, ctx: &RenderContext<'_>) -> Option<String> {
        if !self.is_of_class(target) {
            return None;
        }
        Some(format!("{};", self.signature_line(target, None, ctx)))
    }

    /// Forwarding implementation, or `None` when the function is not of
    /// `target`.
    ///
    /// `owner` qualifies the method name; free-function groups pass `None`.
    pub fn render_impl(
        &self,
        target: Option<&str>,
        owner: Option<&str>,
        ctx: &RenderContext<'_>,
    ) -> Option<String> {
        if !self.is_of_class(target) {
            return None;
        }

        let head = format!("{} {{", self.signature_line(target, owner, ctx));
        let statement = self.forward_statement(target, ctx);
        let code = CodeBuilder::new(ctx.options.body_indent.as_str())
            .block_with_close(&head, "}", |b| b.line(&statement))
            .build_fragment();
        Some(code)
    }

    fn forward_statement(&self, target: Option<&str>, ctx: &RenderContext<'_>) -> String {
        let mut args = Vec::with_capacity(self.params.len());
        let mut rest = self.params.iter();

        if self.is_member() {
            if let Some(first) = rest.next() {
                args.push(self.self_arg(first, target, ctx.options));
            }
        }
        args.extend(rest.filter(|p| !p.is_void()).map(|p| value_expr(p, ctx.registry)));

        let mut call = format!("{}({})", self.name, args.join(", "));
        if self.ret.is_wrapped() {
            if let Some(descriptor) = ctx.registry.get(&self.ret.base_type) {
                call = descriptor.cast_return(&call);
            }
        }

        if self.ret.is_void() {
            format!("{};", call)
        } else {
            format!("return {};", call)
        }
    }

    /// The handle passed for the entity parameter of a member function.
    fn self_arg(
        &self,
        first: &Declaration,
        target: Option<&str>,
        options: &CodegenOptions,
    ) -> String {
        if self.is_const(target, options) && !first.is_const {
            let mut pointee = first.base_type.clone();
            if !first.modifier.symbol().is_empty() {
                pointee.push(' ');
                pointee.push_str(first.modifier.symbol());
            }
            format!("const_cast<{}>({})", pointee, options.self_arg)
        } else {
            options.self_arg.clone()
        }
    }
}

/// Expression forwarding a parameter to the C call.
fn value_expr(param: &Declaration, registry: &TypeRegistry) -> String {
    match registry.get(&param.base_type) {
        Some(descriptor) if param.is_wrapped() => descriptor.cast_value(&param.name),
        _ => param.name.clone(),
    }
}
