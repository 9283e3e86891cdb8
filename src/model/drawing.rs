//! Parse result bundle.

use serde::{Deserialize, Serialize};

use super::{CanvasSize, Instruction};

/// Everything one parse produces: the canvas, the instruction tree rooted at
/// a synthetic `svg` container, the warnings, and the collected style blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Resolved canvas size in points
    pub canvas: CanvasSize,

    /// Root container instruction
    pub root: Instruction,

    /// Non-fatal diagnostics in detection order
    pub warnings: Vec<String>,

    /// Raw style blocks in document order
    pub styles: Vec<String>,
}

impl Drawing {
    /// Top-level drawable instructions.
    pub fn instructions(&self) -> &[Instruction] {
        &self.root.children
    }

    /// Check if the parse recorded any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// All style blocks joined with newlines.
    pub fn stylesheet_text(&self) -> String {
        self.styles.join("\n")
    }
}
