//! Rendering module for converting parse results to output formats.

mod json;
mod options;
mod text;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
pub use visitor::{walk, InstructionVisitor, TagCounter, VisitorAction};
