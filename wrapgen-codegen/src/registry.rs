//! Type conversion table.

use indexmap::IndexMap;
use wrapgen_ir::{ConversionDescriptor, ConversionKind};
use wrapgen_model::{TypeDef, TypeKind};

/// LVGL handle types and their wrapper classes.
const LVGL_HANDLES: &[(&str, &str)] = &[
    ("lv_obj_t", "Object"),
    ("lv_disp_t", "Display"),
    ("lv_indev_t", "InputDevice"),
    ("lv_timer_t", "Timer"),
    ("lv_anim_t", "Animation"),
    ("lv_event_t", "Event"),
    ("lv_group_t", "Group"),
    ("lv_style_t", "Style"),
    ("lv_style_transition_dsc_t", "StyleTransition"),
    ("lv_color_filter_dsc_t", "ColorFilter"),
    ("lv_theme_t", "Theme"),
    ("lv_draw_rect_dsc_t", "RectangleDrawDescriptor"),
    ("lv_draw_label_dsc_t", "LabelDrawDescriptor"),
    ("lv_draw_img_dsc_t", "ImageDrawDescriptor"),
    ("lv_draw_line_dsc_t", "LineDrawDescriptor"),
    ("lv_draw_arc_dsc_t", "ArcDrawDescriptor"),
    ("lv_img_decoder_dsc_t", "ImageDecoder"),
    ("lv_img_header_t", "ImageHeader"),
    ("lv_img_dsc_t", "ImageDescriptor"),
    ("lv_draw_mask_line_param_t", "LineMask"),
    ("lv_draw_mask_angle_param_t", "AngleMask"),
    ("lv_draw_mask_radius_param_t", "RadiusMask"),
    ("lv_draw_mask_fade_param_t", "FadeMask"),
    ("lv_draw_mask_map_param_t", "MapMask"),
    ("lv_draw_mask_polygon_param_t", "PolygonMask"),
    ("lv_font_t", "Font"),
    ("lv_area_t", "Area"),
    ("lv_fs_drv_t", "FileSystem"),
    ("lv_fs_file_t", "File"),
    ("lv_fs_dir_t", "Directory"),
];

/// Maps C base type names to their wrapper conversion.
///
/// Built once before parsing starts and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, ConversionDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in LVGL table.
    pub fn lvgl() -> Self {
        let mut registry = Self::new();
        for (c_type, wrapper) in LVGL_HANDLES {
            registry.insert(*c_type, ConversionDescriptor::handle(*wrapper));
        }
        registry.insert("char", ConversionDescriptor::text("std::string"));
        registry.insert(
            "lv_obj_class_t",
            ConversionDescriptor::class_descriptor("lv_obj_class_t"),
        );
        registry
    }

    /// Add model `[types]` entries, replacing built-in ones with the same name.
    pub fn extend_from_model<'a>(
        &mut self,
        types: impl IntoIterator<Item = (&'a String, &'a TypeDef)>,
    ) {
        for (c_type, def) in types {
            let kind = match def.kind {
                TypeKind::Handle => ConversionKind::Handle,
                TypeKind::Text => ConversionKind::Text,
                TypeKind::ClassDescriptor => ConversionKind::ClassDescriptor,
            };
            let mut descriptor = ConversionDescriptor::new(&def.wrapper, kind);
            if let Some(cast) = &def.value_cast {
                descriptor = descriptor.with_value_cast(cast);
            }
            if let Some(cast) = &def.return_cast {
                descriptor = descriptor.with_return_cast(Some(cast.clone()));
            }
            self.insert(c_type.clone(), descriptor);
        }
    }

    /// Register a conversion, returning the one it replaced.
    pub fn insert(
        &mut self,
        c_type: impl Into<String>,
        descriptor: ConversionDescriptor,
    ) -> Option<ConversionDescriptor> {
        self.entries.insert(c_type.into(), descriptor)
    }

    /// Look up the conversion of a C base type.
    pub fn get(&self, c_type: &str) -> Option<&ConversionDescriptor> {
        self.entries.get(c_type)
    }

    pub fn contains(&self, c_type: &str) -> bool {
        self.entries.contains_key(c_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConversionDescriptor)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_ir::Modifier;
    use wrapgen_model::Model;

    use super::*;

    #[test]
    fn test_lvgl_table() {
        let registry = TypeRegistry::lvgl();

        assert_eq!(registry.len(), LVGL_HANDLES.len() + 2);
        assert_eq!(registry.get("lv_timer_t").unwrap().wrapper_type, "Timer");
        assert_eq!(registry.get("char").unwrap().cast_value("txt"), "txt.c_str()");
        assert_eq!(
            registry
                .get("lv_obj_class_t")
                .unwrap()
                .return_type(Modifier::Pointer),
            "lv_obj_class_t *"
        );
        assert!(!registry.contains("uint32_t"));
    }

    #[test]
    fn test_extend_from_model_overrides() {
        let model: Model = r#"
            [types.lv_color_t]
            wrapper = "Color"
            value_cast = "{}.raw()"

            [types.lv_obj_t]
            wrapper = "Widget"
        "#
        .parse()
        .unwrap();

        let mut registry = TypeRegistry::lvgl();
        let before = registry.len();
        registry.extend_from_model(&model.types);

        assert_eq!(registry.len(), before + 1);
        assert_eq!(registry.get("lv_color_t").unwrap().cast_value("c"), "c.raw()");
        assert_eq!(registry.get("lv_obj_t").unwrap().wrapper_type, "Widget");
    }
}
