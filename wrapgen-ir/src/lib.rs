//! Intermediate representation types for wrapgen.
//!
//! These types sit between the header parser and the wrapper renderer:
//!
//! ```text
//! C header text → Signature → Declaration (+ ConversionDescriptor) → rendered C++
//! ```
//!
//! They carry no parsing or rendering logic beyond canonical formatting, and
//! depend on nothing but `serde`.

mod conversion;
mod declaration;
mod modifier;
mod signature;

pub use conversion::{ConversionDescriptor, ConversionKind};
pub use declaration::Declaration;
pub use modifier::{Modifier, ModifierMap, Position};
pub use signature::Signature;
