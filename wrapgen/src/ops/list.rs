//! List operation - wrapper declarations per class.

use eyre::Result;
use wrapgen_codegen::ClassKind;
use wrapgen_model::ModelFile;

use super::run_pipeline;
use crate::reports::{ClassListing, ListReport};

/// Execute the list operation.
pub fn list(model_file: &ModelFile) -> Result<ListReport> {
    let ctx = run_pipeline(model_file)?;
    let render = ctx.render_context();

    let classes = ctx
        .classes
        .iter()
        .map(|class| {
            let (kind, c_type) = match class.kind() {
                ClassKind::Class { c_type } => ("class", Some(c_type.clone())),
                ClassKind::FreeGroup => ("free", None),
            };
            let declarations = class
                .functions()
                .filter_map(|(entity, f)| f.render_header(entity, &render))
                .collect();
            ClassListing {
                name: class.name().to_string(),
                kind,
                c_type,
                declarations,
            }
        })
        .collect();

    Ok(ListReport { classes })
}
