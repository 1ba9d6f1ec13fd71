//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`] target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, ClassSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use list::{ClassListing, ListReport};
pub use output::{Report, TerminalOutput};
