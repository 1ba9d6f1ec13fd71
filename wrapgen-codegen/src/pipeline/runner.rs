//! Pipeline orchestrator.

use eyre::Result;
use tracing::debug;
use wrapgen_model::Model;

use super::{
    GenerationContext, Phase,
    phases::{CollectPhase, LoadPhase, RenderPhase},
};
use crate::loader::SourceLoader;
use crate::registry::TypeRegistry;

/// The generation pipeline.
///
/// Runs load, collect and render in order over a fresh
/// [`GenerationContext`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    registry: Option<TypeRegistry>,
}

impl Pipeline {
    /// Create a pipeline using the built-in LVGL type table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `registry` instead of the built-in type table.
    ///
    /// Model `[types]` entries are still applied on top.
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Run every phase on a model.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read.
    pub fn run(&self, model: Model, loader: &dyn SourceLoader) -> Result<GenerationContext> {
        let mut registry = self.registry.clone().unwrap_or_else(TypeRegistry::lvgl);
        registry.extend_from_model(&model.types);
        let mut ctx = GenerationContext::new(model, registry);

        let load = LoadPhase::new(loader);
        let phases: [&dyn Phase; 3] = [&load, &CollectPhase, &RenderPhase];
        for phase in phases {
            debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}
