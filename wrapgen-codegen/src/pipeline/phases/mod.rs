//! Built-in pipeline phases.

mod collect;
mod load;
mod render;

pub use collect::CollectPhase;
pub use load::LoadPhase;
pub use render::RenderPhase;
