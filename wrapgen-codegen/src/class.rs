//! Per-class function aggregation.

use indexmap::IndexMap;
use wrapgen_core::entity_prefix;
use wrapgen_model::Model;

use crate::function::{Function, RenderContext};

/// What a [`ClassModel`] renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassKind {
    /// A wrapper class around a C entity type.
    Class { c_type: String },
    /// A group of free functions, rendered unqualified.
    FreeGroup,
}

/// Functions collected for one wrapper class or free-function group.
///
/// Functions are bucketed by the entity prefix they were collected for
/// (`None` for free functions). Buckets keep creation order and functions
/// keep insertion order.
#[derive(Debug, Clone)]
pub struct ClassModel {
    name: String,
    kind: ClassKind,
    functions: IndexMap<Option<String>, Vec<Function>>,
}

impl ClassModel {
    /// A wrapper class named `name` around `c_type`.
    pub fn class(name: impl Into<String>, c_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class {
                c_type: c_type.into(),
            },
            functions: IndexMap::new(),
        }
    }

    /// A free-function group named `name`.
    pub fn free_group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::FreeGroup,
            functions: IndexMap::new(),
        }
    }

    /// Name of the class, also its template token.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ClassKind {
        &self.kind
    }

    /// The wrapped C type, for wrapper classes.
    pub fn underlying_type(&self) -> Option<&str> {
        match &self.kind {
            ClassKind::Class { c_type } => Some(c_type),
            ClassKind::FreeGroup => None,
        }
    }

    /// Prefix selecting this class's functions (`lv_timer_` for
    /// `lv_timer_t`). Falls back to the whole type when it has no prefix.
    pub fn entity_prefix(&self) -> Option<&str> {
        self.underlying_type()
            .map(|c_type| entity_prefix(c_type).unwrap_or(c_type))
    }

    /// Append a function to the bucket of `entity`.
    pub fn add_function(&mut self, function: Function, entity: Option<&str>) {
        self.functions
            .entry(entity.map(String::from))
            .or_default()
            .push(function);
    }

    /// All functions with the entity they were added for, in render order.
    pub fn functions(&self) -> impl Iterator<Item = (Option<&str>, &Function)> {
        self.functions
            .iter()
            .flat_map(|(entity, fns)| fns.iter().map(move |f| (entity.as_deref(), f)))
    }

    pub fn function_count(&self) -> usize {
        self.functions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.function_count() == 0
    }

    /// Header declarations, one per line.
    pub fn render_header(&self, ctx: &RenderContext<'_>) -> String {
        self.functions()
            .filter_map(|(entity, f)| f.render_header(entity, ctx))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Implementations, joined with newlines.
    pub fn render_impl(&self, ctx: &RenderContext<'_>) -> String {
        let owner = match self.kind {
            ClassKind::Class { .. } => Some(self.name.as_str()),
            ClassKind::FreeGroup => None,
        };
        self.functions()
            .filter_map(|(entity, f)| f.render_impl(entity, owner, ctx))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// All class models of a generation run, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ClassSet {
    classes: IndexMap<String, ClassModel>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty wrapper classes for every class of the model, in model order.
    pub fn from_model(model: &Model) -> Self {
        let mut set = Self::new();
        for class in &model.classes {
            set.insert(ClassModel::class(&class.name, &class.c_type));
        }
        set
    }

    pub fn insert(&mut self, class: ClassModel) {
        self.classes.insert(class.name.clone(), class);
    }

    pub fn get(&self, name: &str) -> Option<&ClassModel> {
        self.classes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ClassModel> {
        self.classes.get_mut(name)
    }

    /// The free-function group `name`, created on first use.
    pub fn free_group_mut(&mut self, name: &str) -> &mut ClassModel {
        self.classes
            .entry(name.to_string())
            .or_insert_with(|| ClassModel::free_group(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ClassModel> {
        self.classes.values_mut()
    }
}
