//! SVG element tree to instruction tree conversion.

use crate::error::{Error, Result};
use crate::model::{Document, Element, Instruction};

use super::registry::{lookup, Axis, DataSource, Lookup, Tag, TagSpec, STYLE_TAG};
use super::style::{collect_collapsed_text, collect_style_text, StyleSheet, StyleSink};

/// Value used for numeric attributes the element leaves out.
const ABSENT_VALUE: &str = "0";

/// Converts a document's element tree into drawing instructions.
///
/// The parser borrows the document mutably for its whole lifetime: warnings
/// and style blocks are written straight into it.
pub struct Parser<'d, S: StyleSink = StyleSheet> {
    document: &'d mut Document<S>,
}

/// An element whose instruction is still collecting children.
struct Frame<'e> {
    element: &'e Element,
    instruction: Instruction,
    next_child: usize,
}

impl<'d, S: StyleSink> Parser<'d, S> {
    /// Create a parser over a document.
    pub fn new(document: &'d mut Document<S>) -> Self {
        Self { document }
    }

    /// Convert the whole document.
    ///
    /// Returns a synthetic `svg` container whose children are the
    /// instructions of the root's children, in document order.
    pub fn parse(&mut self) -> Result<Instruction> {
        let root = self.document.root_handle();
        let container = Instruction::new(Tag::Svg, Vec::new());
        let instruction = self.convert(&root, container)?;
        log::debug!(
            "Parsed {} instructions with {} warnings",
            instruction.total_count(),
            self.document.warnings().len()
        );
        Ok(instruction)
    }

    /// Convert a single element and its subtree.
    ///
    /// Returns `None` when the element yields no instruction (style,
    /// metadata, unknown or invalid elements).
    pub fn parse_element(&mut self, element: &Element) -> Result<Option<Instruction>> {
        match self.open(element) {
            Some(instruction) => self.convert(element, instruction).map(Some),
            None => Ok(None),
        }
    }

    /// Walk `element`'s descendants with an explicit stack, attaching their
    /// instructions under `instruction`.
    fn convert(&mut self, element: &Element, instruction: Instruction) -> Result<Instruction> {
        let limit = self.document.options().max_depth;
        let mut root = Frame {
            element,
            instruction,
            next_child: 0,
        };
        // Open descendants; `root` sits below them at depth 1.
        let mut stack: Vec<Frame<'_>> = Vec::new();

        loop {
            let frame = stack.last_mut().unwrap_or(&mut root);
            if let Some(child) = frame.element.children.get(frame.next_child) {
                frame.next_child += 1;
                if stack.len() + 1 >= limit {
                    return Err(Error::DepthExceeded { limit });
                }
                if let Some(instruction) = self.open(child) {
                    stack.push(Frame {
                        element: child,
                        instruction,
                        next_child: 0,
                    });
                }
                continue;
            }

            match stack.pop() {
                Some(finished) => stack
                    .last_mut()
                    .unwrap_or(&mut root)
                    .instruction
                    .add_child(finished.instruction),
                None => return Ok(root.instruction),
            }
        }
    }

    /// Classify and validate one element. `Some` means its children should
    /// be visited next.
    fn open(&mut self, element: &Element) -> Option<Instruction> {
        match lookup(&element.name) {
            Lookup::Style => {
                let block = collect_style_text(&element.content);
                self.document.add_style_block(&block);
                None
            }
            Lookup::Metadata => {
                log::debug!("Skipping <{}>", element.name);
                None
            }
            Lookup::Definitions => {
                self.collect_nested_styles(element);
                None
            }
            Lookup::Unknown => {
                self.document.warn(format!("Unknown tag: {}", element.name));
                None
            }
            Lookup::Drawable(spec) => self.build_instruction(element, spec),
        }
    }

    fn build_instruction(&mut self, element: &Element, spec: &TagSpec) -> Option<Instruction> {
        let missing = spec.missing_attributes(|name| element.has_attribute(name));
        if !missing.is_empty() {
            self.document.warn(format!(
                "Must have attributes {} on tag {}",
                missing.join(", "),
                element.name
            ));
            return None;
        }

        let mut args = Vec::with_capacity(spec.numeric.len());
        for attr in spec.numeric {
            let raw = element.attribute(attr.name).unwrap_or(ABSENT_VALUE);
            match self.resolve(raw, attr.axis, &mut args) {
                Ok(()) => {}
                Err(e) => {
                    self.document.warn(format!(
                        "Invalid value '{}' for attribute {} on tag {}: {}",
                        raw, attr.name, element.name, e
                    ));
                    return None;
                }
            }
        }

        let mut instruction = Instruction::new(spec.tag, args);
        instruction.data = match spec.data {
            Some(DataSource::Attribute(names)) => names
                .iter()
                .find_map(|name| element.attribute(name))
                .map(str::to_string),
            Some(DataSource::TextContent) => {
                let text = collect_collapsed_text(&element.content);
                (!text.is_empty()).then_some(text)
            }
            None => None,
        };
        Some(instruction)
    }

    /// Resolve one numeric attribute and append its value(s).
    fn resolve(&self, raw: &str, axis: Axis, args: &mut Vec<f64>) -> Result<()> {
        let canvas = self.document.canvas();
        let units = self.document.units();
        match axis {
            Axis::X | Axis::Width | Axis::Length => args.push(units.convert(raw, canvas.width)?),
            Axis::Y => args.push(canvas.height - units.convert(raw, canvas.height)?),
            Axis::Height => args.push(units.convert(raw, canvas.height)?),
            Axis::Points => args.extend(units.convert_points(raw, canvas)?),
        }
        Ok(())
    }

    /// Forward every `<style>` below a definitions container, in document
    /// order, without emitting anything else.
    fn collect_nested_styles(&mut self, element: &Element) {
        let mut pending: Vec<&Element> = element.children.iter().rev().collect();
        while let Some(current) = pending.pop() {
            if current.name == STYLE_TAG {
                let block = collect_style_text(&current.content);
                self.document.add_style_block(&block);
            } else {
                pending.extend(current.children.iter().rev());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageBox;
    use crate::parser::ParseOptions;

    fn document(markup: &str, width: f64, height: f64) -> Document {
        Document::new(
            markup,
            PageBox::new(width, height).unwrap(),
            ParseOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_element_unknown() {
        let mut doc = document("<svg></svg>", 100.0, 100.0);
        let mut parser = Parser::new(&mut doc);

        let result = parser.parse_element(&Element::new("unknown")).unwrap();
        assert!(result.is_none());
        assert_eq!(doc.warnings(), ["Unknown tag: unknown"]);
    }

    #[test]
    fn test_parse_element_missing_attributes() {
        let mut doc = document("<svg></svg>", 100.0, 100.0);
        let mut parser = Parser::new(&mut doc);

        let ellipse = Element::new("ellipse").with_attribute("rx", "1");
        assert!(parser.parse_element(&ellipse).unwrap().is_none());
        assert_eq!(doc.warnings(), ["Must have attributes ry on tag ellipse"]);
    }

    #[test]
    fn test_missing_list_is_comma_joined() {
        let mut doc = document("<svg></svg>", 100.0, 100.0);
        let mut parser = Parser::new(&mut doc);

        assert!(parser.parse_element(&Element::new("rect")).unwrap().is_none());
        assert_eq!(
            doc.warnings(),
            ["Must have attributes width, height on tag rect"]
        );
    }

    #[test]
    fn test_absent_optional_attributes_default_to_zero() {
        let mut doc = document("<svg></svg>", 100.0, 80.0);
        let mut parser = Parser::new(&mut doc);

        let circle = Element::new("circle").with_attribute("r", "5");
        let instruction = parser.parse_element(&circle).unwrap().unwrap();
        assert_eq!(instruction.args, vec![0.0, 80.0, 5.0]);
    }

    #[test]
    fn test_axis_references() {
        let mut doc = document("<svg></svg>", 200.0, 100.0);
        let mut parser = Parser::new(&mut doc);

        let rect = Element::new("rect")
            .with_attribute("x", "10%")
            .with_attribute("y", "10%")
            .with_attribute("width", "50%")
            .with_attribute("height", "50%")
            .with_attribute("rx", "1%");
        let instruction = parser.parse_element(&rect).unwrap().unwrap();
        assert_eq!(instruction.args, vec![20.0, 90.0, 100.0, 50.0, 2.0]);
    }

    #[test]
    fn test_invalid_value_skips_subtree() {
        let mut doc = document("<svg></svg>", 100.0, 100.0);
        let mut parser = Parser::new(&mut doc);

        let group = Element::new("g").with_child(
            Element::new("line")
                .with_attribute("x1", "1em")
                .with_child(Element::new("unknown")),
        );
        let instruction = parser.parse_element(&group).unwrap().unwrap();
        assert!(instruction.children.is_empty());
        assert_eq!(
            doc.warnings(),
            ["Invalid value '1em' for attribute x1 on tag line: invalid unit 'em'"]
        );
    }

    #[test]
    fn test_data_sources() {
        let mut doc = document("<svg></svg>", 100.0, 100.0);
        let mut parser = Parser::new(&mut doc);

        let path = Element::new("path").with_attribute("d", "M0 0 L10 10");
        let instruction = parser.parse_element(&path).unwrap().unwrap();
        assert_eq!(instruction.data.as_deref(), Some("M0 0 L10 10"));
        assert!(instruction.args.is_empty());

        let image = Element::new("image")
            .with_attribute("width", "10")
            .with_attribute("height", "10")
            .with_attribute("xlink:href", "logo.png");
        let instruction = parser.parse_element(&image).unwrap().unwrap();
        assert_eq!(instruction.data.as_deref(), Some("logo.png"));

        let text = Element::new("text")
            .with_attribute("x", "5")
            .with_text("  Hello\n   world ");
        let instruction = parser.parse_element(&text).unwrap().unwrap();
        assert_eq!(instruction.data.as_deref(), Some("Hello world"));
        assert_eq!(instruction.args, vec![5.0, 100.0]);
    }

    #[test]
    fn test_depth_limit_during_traversal() {
        let mut doc = Document::new(
            "<svg></svg>",
            PageBox::letter(),
            ParseOptions::new().with_max_depth(2),
        )
        .unwrap();
        let mut parser = Parser::new(&mut doc);

        let nested = Element::new("g").with_child(Element::new("g").with_child(Element::new("g")));
        assert!(matches!(
            parser.parse_element(&nested),
            Err(Error::DepthExceeded { limit: 2 })
        ));
    }

    #[test]
    fn test_depth_limit_records_nothing_for_deep_element() {
        let mut doc = Document::new(
            "<svg></svg>",
            PageBox::letter(),
            ParseOptions::new().with_max_depth(2),
        )
        .unwrap();
        let mut parser = Parser::new(&mut doc);

        let nested = Element::new("g").with_child(
            Element::new("g")
                .with_child(Element::new("blink"))
                .with_child(Element::new("style").with_text("deep{}")),
        );
        assert!(matches!(
            parser.parse_element(&nested),
            Err(Error::DepthExceeded { limit: 2 })
        ));
        assert!(doc.warnings().is_empty());
        assert!(doc.style_sink().is_empty());
    }

    #[test]
    fn test_definitions_only_yield_styles() {
        let mut doc = document(
            "<svg><defs><linearGradient/><g><style>a{}</style></g><style>b{}</style></defs></svg>",
            100.0,
            100.0,
        );
        let root = Parser::new(&mut doc).parse().unwrap();

        assert!(root.children.is_empty());
        assert!(doc.warnings().is_empty());
        assert_eq!(doc.style_sink().blocks(), ["a{}", "b{}"]);
    }
}
