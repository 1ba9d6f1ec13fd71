//! Collect phase - builds class models from the loaded headers.

use eyre::Result;
use tracing::{debug, trace};

use crate::class::ClassSet;
use crate::function::Function;
use crate::pipeline::{GenerationContext, Phase};
use crate::resolve::DeclarationResolver;
use crate::signature::parse_signatures;

/// Phase that parses every header and distributes its functions.
///
/// Headers are processed in model order, so the functions of a class keep
/// the order of the files they come from. Each function goes to every class
/// whose entity prefix it carries, and functions without a prefix go to the
/// file's free-function group.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Parse headers into class models"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let resolver = DeclarationResolver::new(&ctx.registry);
        let mut classes = ClassSet::from_model(&ctx.model);
        let targets: Vec<(String, String)> = classes
            .iter()
            .filter_map(|c| Some((c.name().to_string(), c.entity_prefix()?.to_string())))
            .collect();
        let mut unclaimed = 0;

        for header in &ctx.headers {
            let functions: Vec<Function> = parse_signatures(&header.text)
                .iter()
                .map(|s| Function::from_signature(s, &resolver))
                .filter(|f| {
                    let excluded = header.file.is_excluded(&f.name);
                    if excluded {
                        trace!(name = %f.name, "excluded function");
                    }
                    !excluded
                })
                .collect();
            debug!(path = %header.file.path, count = functions.len(), "collected functions");

            for (name, prefix) in &targets {
                if let Some(class) = classes.get_mut(name) {
                    for f in functions.iter().filter(|f| f.is_of_class(Some(prefix))) {
                        class.add_function(f.clone(), Some(prefix));
                    }
                }
            }

            let group = classes.free_group_mut(&header.file.free_func_group);
            for f in functions.iter().filter(|f| f.is_of_class(None)) {
                group.add_function(f.clone(), None);
            }

            for f in &functions {
                if let Some(prefix) = f.entity_prefix() {
                    if !targets.iter().any(|(_, p)| p == prefix) {
                        trace!(name = %f.name, prefix, "no class for function");
                        unclaimed += 1;
                    }
                }
            }
        }

        ctx.classes = classes;
        if unclaimed > 0 {
            ctx.add_info(
                self.name(),
                format!("{} function(s) belong to no configured class", unclaimed),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::LoadedHeader;
    use crate::registry::TypeRegistry;

    const MODEL: &str = r#"
        [[classes]]
        name = "Timer"
        c_type = "lv_timer_t"

        [[classes]]
        name = "Object"
        c_type = "lv_obj_t"

        [[files]]
        path = "lv_timer.h"
        free_func_group = "misc"
        exclude = ["lv_timer_del"]

        [[files]]
        path = "lv_obj.h"
        free_func_group = "core"
    "#;

    fn collect(headers: &[&str]) -> GenerationContext {
        let mut ctx = GenerationContext::new(MODEL.parse().unwrap(), TypeRegistry::lvgl());
        let files = ctx.model.files.clone();
        for (file, text) in files.into_iter().zip(headers) {
            ctx.headers.push(LoadedHeader {
                file,
                text: text.to_string(),
            });
        }
        CollectPhase.run(&mut ctx).unwrap();
        ctx
    }

    fn names(ctx: &GenerationContext, class: &str) -> Vec<String> {
        ctx.classes
            .get(class)
            .unwrap()
            .functions()
            .map(|(_, f)| f.name.clone())
            .collect()
    }

    #[test]
    fn test_functions_distributed_to_classes() {
        let ctx = collect(&[
            "void lv_timer_pause(lv_timer_t * t);\nvoid lv_timer_del(lv_timer_t * t);\nvoid lv_tick_inc(uint32_t ms);\nvoid lv_init(void);\n",
            "void lv_obj_del(lv_obj_t * obj);\nlv_obj_t * lv_obj_create(lv_obj_t * parent);\n",
        ]);

        assert_eq!(names(&ctx, "Timer"), vec!["lv_timer_pause"]);
        assert_eq!(names(&ctx, "Object"), vec!["lv_obj_del", "lv_obj_create"]);
        assert_eq!(names(&ctx, "misc"), vec!["lv_init"]);
        assert!(ctx.classes.get("core").unwrap().is_empty());
    }

    #[test]
    fn test_unclaimed_functions_reported() {
        let ctx = collect(&[
            "void lv_tick_inc(uint32_t ms);\nvoid lv_anim_start(lv_anim_t * a);\n",
            "",
        ]);

        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(
            ctx.diagnostics[0].message,
            "2 function(s) belong to no configured class"
        );
        assert!(!ctx.has_warnings());
    }

    #[test]
    fn test_order_across_files() {
        let ctx = collect(&[
            "void lv_obj_b(lv_obj_t * obj);\n",
            "void lv_obj_a(lv_obj_t * obj);\nvoid lv_obj_c(lv_obj_t * obj);\n",
        ]);

        assert_eq!(names(&ctx, "Object"), vec!["lv_obj_b", "lv_obj_a", "lv_obj_c"]);
    }
}
