//! Plain text listing of instruction trees.

use crate::model::Instruction;

use super::visitor::{walk, InstructionVisitor, VisitorAction};
use super::RenderOptions;

/// Render an instruction tree as one indented line per instruction.
///
/// ```text
/// svg []
///   line [72.00, 648.00, 648.00, 72.00]
///   path [] "M0 0 L10 10"
/// ```
pub fn to_text(root: &Instruction, options: &RenderOptions) -> String {
    let mut writer = TextWriter {
        options,
        output: String::new(),
    };
    walk(root, &mut writer);
    writer.output
}

struct TextWriter<'a> {
    options: &'a RenderOptions,
    output: String,
}

impl InstructionVisitor for TextWriter<'_> {
    fn visit_instruction(&mut self, instruction: &Instruction, depth: usize) -> VisitorAction {
        if self.options.skip_root && depth == 0 {
            return VisitorAction::Continue;
        }
        let level = if self.options.skip_root { depth - 1 } else { depth };
        let precision = self.options.precision;
        let args: Vec<String> = instruction
            .args
            .iter()
            .map(|value| format!("{:.*}", precision, value))
            .collect();

        self.output
            .push_str(&" ".repeat(level * self.options.indent_width));
        self.output.push_str(instruction.tag_name());
        self.output.push_str(" [");
        self.output.push_str(&args.join(", "));
        self.output.push(']');
        if self.options.include_data {
            if let Some(ref data) = instruction.data {
                self.output.push_str(&format!(" {:?}", data));
            }
        }
        self.output.push('\n');
        VisitorAction::Continue
    }
}
