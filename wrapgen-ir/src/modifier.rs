//! Type modifiers and declaration positions.

use std::ops::{Index, IndexMut};

use serde::Serialize;

/// Adornment of a declared C type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    None,
    Pointer,
    Reference,
}

impl Modifier {
    /// All modifiers, in map order.
    pub const ALL: [Modifier; 3] = [Modifier::None, Modifier::Pointer, Modifier::Reference];

    /// Parse a modifier run such as `*` or `&`.
    ///
    /// Runs longer than one character have no representation and yield `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Modifier::None),
            "*" => Some(Modifier::Pointer),
            "&" => Some(Modifier::Reference),
            _ => None,
        }
    }

    /// The C/C++ symbol for this modifier (empty for `None`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Pointer => "*",
            Modifier::Reference => "&",
        }
    }
}

/// Where a declaration appears in a function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Parameter,
    Return,
}

/// A value for each of the three modifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifierMap<T> {
    pub none: T,
    pub pointer: T,
    pub reference: T,
}

impl<T: Clone> ModifierMap<T> {
    /// Map every modifier to the same value.
    pub fn uniform(value: T) -> Self {
        Self {
            none: value.clone(),
            pointer: value.clone(),
            reference: value,
        }
    }
}

impl<T> Index<Modifier> for ModifierMap<T> {
    type Output = T;

    fn index(&self, modifier: Modifier) -> &T {
        match modifier {
            Modifier::None => &self.none,
            Modifier::Pointer => &self.pointer,
            Modifier::Reference => &self.reference,
        }
    }
}

impl<T> IndexMut<Modifier> for ModifierMap<T> {
    fn index_mut(&mut self, modifier: Modifier) -> &mut T {
        match modifier {
            Modifier::None => &mut self.none,
            Modifier::Pointer => &mut self.pointer,
            Modifier::Reference => &mut self.reference,
        }
    }
}
