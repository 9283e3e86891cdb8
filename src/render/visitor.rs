//! Visitor pattern for walking instruction trees.
//!
//! # Example
//!
//! ```
//! use unsvg::render::visitor::{walk, InstructionVisitor, VisitorAction};
//! use unsvg::model::Instruction;
//! use unsvg::parser::Tag;
//!
//! struct LineCounter(usize);
//!
//! impl InstructionVisitor for LineCounter {
//!     fn visit_instruction(&mut self, instruction: &Instruction, _depth: usize) -> VisitorAction {
//!         if instruction.tag == Tag::Line {
//!             self.0 += 1;
//!         }
//!         VisitorAction::Continue
//!     }
//! }
//!
//! let mut root = Instruction::new(Tag::Svg, vec![]);
//! root.add_child(Instruction::new(Tag::Line, vec![0.0, 0.0, 1.0, 1.0]));
//!
//! let mut counter = LineCounter(0);
//! walk(&root, &mut counter);
//! assert_eq!(counter.0, 1);
//! ```

use std::collections::BTreeMap;

use crate::model::Instruction;
use crate::parser::Tag;

/// Action returned by visitor methods to control the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitorAction {
    /// Descend into the instruction's children.
    #[default]
    Continue,

    /// Do not visit this instruction's children.
    SkipChildren,

    /// End the walk immediately.
    Stop,
}

/// Trait for visiting instructions in pre-order.
pub trait InstructionVisitor {
    /// Called before an instruction's children.
    ///
    /// # Arguments
    /// * `instruction` - The instruction being entered
    /// * `depth` - 0 for the instruction `walk` was called on
    fn visit_instruction(&mut self, instruction: &Instruction, depth: usize) -> VisitorAction;

    /// Called after an instruction's children, unless the walk stopped.
    fn leave_instruction(&mut self, instruction: &Instruction, depth: usize) {
        let _ = (instruction, depth);
    }
}

/// Walk a tree in document order without recursion.
pub fn walk<V: InstructionVisitor + ?Sized>(root: &Instruction, visitor: &mut V) {
    enum Step<'a> {
        Enter(&'a Instruction, usize),
        Leave(&'a Instruction, usize),
    }

    let mut pending = vec![Step::Enter(root, 0)];
    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(instruction, depth) => match visitor.visit_instruction(instruction, depth) {
                VisitorAction::Stop => return,
                VisitorAction::SkipChildren => visitor.leave_instruction(instruction, depth),
                VisitorAction::Continue => {
                    pending.push(Step::Leave(instruction, depth));
                    pending.extend(
                        instruction
                            .children
                            .iter()
                            .rev()
                            .map(|child| Step::Enter(child, depth + 1)),
                    );
                }
            },
            Step::Leave(instruction, depth) => visitor.leave_instruction(instruction, depth),
        }
    }
}

/// Visitor that counts instructions per tag.
#[derive(Debug, Clone, Default)]
pub struct TagCounter {
    counts: BTreeMap<&'static str, usize>,
    skip_root: bool,
}

impl TagCounter {
    /// Create a counter that includes the instruction the walk starts at.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter that ignores the walk's starting instruction.
    pub fn without_root() -> Self {
        Self {
            skip_root: true,
            ..Self::default()
        }
    }

    /// Number of instructions seen with the tag.
    pub fn count(&self, tag: Tag) -> usize {
        self.counts.get(tag.name()).copied().unwrap_or(0)
    }

    /// Total number of instructions counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts by tag name, sorted by name.
    pub fn counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.counts
    }
}

impl InstructionVisitor for TagCounter {
    fn visit_instruction(&mut self, instruction: &Instruction, depth: usize) -> VisitorAction {
        if !(self.skip_root && depth == 0) {
            *self.counts.entry(instruction.tag.name()).or_insert(0) += 1;
        }
        VisitorAction::Continue
    }
}
