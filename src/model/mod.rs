//! Document model types.
//!
//! Input side: the [`Element`] tree built from markup. Output side: the
//! [`Instruction`] tree and the [`Drawing`] bundle. [`Document`] sits in
//! between and carries the per-parse state.

mod document;
mod drawing;
mod element;
mod instruction;

pub use document::{CanvasSize, Document, PageBox};
pub use drawing::Drawing;
pub use element::{ContentNode, Element};
pub use instruction::Instruction;
