//! # unsvg
//!
//! SVG markup to drawing-instruction compiler.
//!
//! This library reads SVG markup together with a physical page box and
//! produces a resolved canvas size in points, a validated tree of drawing
//! instructions with absolute point coordinates (Y axis flipped to the
//! bottom-up page convention), the raw text of every `<style>` element, and a
//! list of non-fatal warnings.
//!
//! ## Quick Start
//!
//! ```
//! use unsvg::{parse_str, PageBox, Tag};
//!
//! fn main() -> unsvg::Result<()> {
//!     let svg = r#"<svg width="10in" height="10in">
//!         <line x1="1in" y1="1in" x2="9in" y2="9in"/>
//!     </svg>"#;
//!
//!     let drawing = parse_str(svg, PageBox::new(2000.0, 2000.0)?)?;
//!     let line = &drawing.instructions()[0];
//!     assert_eq!(line.tag, Tag::Line);
//!     assert_eq!(line.args, vec![72.0, 648.0, 648.0, 72.0]);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Physical units**: `in`, `cm`, `mm`, `pc`, `pt`, `px` and percentages
//! - **Closed tag registry**: fixed argument order per primitive
//! - **Graceful degradation**: bad elements become warnings, not errors
//! - **Style collection**: `<style>` text with CDATA kept verbatim
//! - **Compressed input**: `.svgz` files are inflated transparently

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{decode_markup, detect_format_from_bytes, detect_format_from_path, is_svg, SvgFormat};
pub use error::{Error, Result};
pub use model::{CanvasSize, ContentNode, Document, Drawing, Element, Instruction, PageBox};
pub use parser::{ParseOptions, Parser, StyleSheet, StyleSink, Tag, UnitConverter};
pub use render::{JsonFormat, RenderOptions};

use std::path::Path;

/// Parse SVG markup against a page box.
///
/// # Example
///
/// ```
/// use unsvg::{parse_str, PageBox};
///
/// let drawing = parse_str("<svg><blink/></svg>", PageBox::letter()).unwrap();
/// assert!(drawing.instructions().is_empty());
/// assert_eq!(drawing.warnings, vec!["Unknown tag: blink".to_string()]);
/// ```
pub fn parse_str(markup: &str, page_box: PageBox) -> Result<Drawing> {
    parse_str_with_options(markup, page_box, ParseOptions::default())
}

/// Parse SVG markup with custom options.
pub fn parse_str_with_options(
    markup: &str,
    page_box: PageBox,
    options: ParseOptions,
) -> Result<Drawing> {
    let mut document = Document::new(markup, page_box, options)?;
    let root = Parser::new(&mut document).parse()?;
    let canvas = document.canvas();
    let (warnings, styles) = document.into_parts();
    Ok(Drawing {
        canvas,
        root,
        warnings,
        styles: styles.into_blocks(),
    })
}

/// Parse SVG or SVGZ bytes.
pub fn parse_bytes(data: &[u8], page_box: PageBox) -> Result<Drawing> {
    parse_bytes_with_options(data, page_box, ParseOptions::default())
}

/// Parse SVG or SVGZ bytes with custom options.
pub fn parse_bytes_with_options(
    data: &[u8],
    page_box: PageBox,
    options: ParseOptions,
) -> Result<Drawing> {
    let markup = decode_markup(data)?;
    parse_str_with_options(&markup, page_box, options)
}

/// Parse an SVG or SVGZ file.
///
/// # Example
///
/// ```no_run
/// use unsvg::{parse_file, PageBox};
///
/// let drawing = parse_file("logo.svg", PageBox::a4()).unwrap();
/// println!("Canvas: {}x{}pt", drawing.canvas.width, drawing.canvas.height);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, page_box: PageBox) -> Result<Drawing> {
    parse_file_with_options(path, page_box, ParseOptions::default())
}

/// Parse an SVG or SVGZ file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    page_box: PageBox,
    options: ParseOptions,
) -> Result<Drawing> {
    let data = std::fs::read(path)?;
    parse_bytes_with_options(&data, page_box, options)
}

/// Builder for parsing SVG documents.
///
/// # Example
///
/// ```
/// use unsvg::{PageBox, Unsvg};
///
/// let drawing = Unsvg::new()
///     .with_page_box(PageBox::new(100.0, 100.0)?)
///     .with_max_depth(32)
///     .with_option("cache_images", "false")
///     .parse_str(r#"<svg><circle r="5"/></svg>"#)?;
/// assert_eq!(drawing.instructions()[0].args, vec![0.0, 100.0, 5.0]);
/// # Ok::<(), unsvg::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unsvg {
    page_box: PageBox,
    parse_options: ParseOptions,
}

impl Unsvg {
    /// Create a new builder (US Letter page box, default options).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page box.
    pub fn with_page_box(mut self, page_box: PageBox) -> Self {
        self.page_box = page_box;
        self
    }

    /// Set the maximum element nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.parse_options = self.parse_options.with_max_depth(depth);
        self
    }

    /// Add a passthrough option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_option(key, value);
        self
    }

    /// Parse markup text.
    pub fn parse_str(self, markup: &str) -> Result<Drawing> {
        parse_str_with_options(markup, self.page_box, self.parse_options)
    }

    /// Parse SVG or SVGZ bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<Drawing> {
        parse_bytes_with_options(data, self.page_box, self.parse_options)
    }

    /// Parse an SVG or SVGZ file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<Drawing> {
        parse_file_with_options(path, self.page_box, self.parse_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsvg_builder() {
        let builder = Unsvg::new()
            .with_page_box(PageBox::a4())
            .with_max_depth(12)
            .with_option("at", "[0, 0]");

        assert_eq!(builder.page_box, PageBox::a4());
        assert_eq!(builder.parse_options.max_depth, 12);
        assert_eq!(builder.parse_options.option("at"), Some("[0, 0]"));
    }

    #[test]
    fn test_unsvg_builder_default() {
        let builder = Unsvg::default();
        assert_eq!(builder.page_box, PageBox::letter());
        assert_eq!(builder.parse_options, ParseOptions::default());
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let result = parse_bytes(&[], PageBox::letter());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_not_svg() {
        let result = parse_bytes(b"%PDF-1.7\n", PageBox::letter());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_str_non_svg_root() {
        let result = parse_str("<html><svg/></html>", PageBox::letter());
        assert!(matches!(result, Err(Error::NotSvg(_))));
    }

    #[test]
    fn test_parse_str_collects_styles() {
        let drawing = parse_str(
            "<svg><style>rect { fill: red }</style><style>a{}</style></svg>",
            PageBox::letter(),
        )
        .unwrap();
        assert_eq!(drawing.styles, vec!["rect { fill: red }", "a{}"]);
        assert!(drawing.instructions().is_empty());
    }

    #[test]
    fn test_builder_depth_limit() {
        let result = Unsvg::new()
            .with_max_depth(2)
            .parse_str("<svg><g><g/></g></svg>");
        assert!(matches!(result, Err(Error::DepthExceeded { limit: 2 })));
    }
}
