//! Output instruction tree types.

use serde::{Deserialize, Serialize};

use crate::parser::Tag;

/// One validated, unit-resolved drawing operation.
///
/// Numeric arguments are in points, already Y-flipped where the registry says
/// so, and always in the order the tag's [`TagSpec`](crate::parser::TagSpec)
/// declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Drawing primitive or container
    pub tag: Tag,

    /// Numeric arguments in points
    pub args: Vec<f64>,

    /// Opaque payload (path data, image reference, text content)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Nested instructions in document order
    pub children: Vec<Instruction>,
}

impl Instruction {
    /// Create an instruction without children or payload.
    pub fn new(tag: Tag, args: Vec<f64>) -> Self {
        Self {
            tag,
            args,
            data: None,
            children: Vec::new(),
        }
    }

    /// Get the registry name of this instruction's tag.
    pub fn tag_name(&self) -> &'static str {
        self.tag.name()
    }

    /// Add a child instruction.
    pub fn add_child(&mut self, child: Instruction) {
        self.children.push(child);
    }

    /// Check if the instruction has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get the total number of instructions in this tree, including self.
    pub fn total_count(&self) -> usize {
        fn count(instruction: &Instruction) -> usize {
            1 + instruction.children.iter().map(count).sum::<usize>()
        }
        count(self)
    }
}
