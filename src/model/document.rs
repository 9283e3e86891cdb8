//! Document-level types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Element;
use crate::error::{Error, Result};
use crate::parser::{parse_markup, ParseOptions, StyleSheet, StyleSink, UnitConverter};

/// Name of the only element accepted as document root.
const ROOT_TAG: &str = "svg";

/// Physical output area supplied by the caller, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageBox {
    /// Page width in points
    pub width: f64,

    /// Page height in points
    pub height: f64,
}

impl PageBox {
    /// Create a page box, rejecting non-positive or non-finite sides.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidPageBox(width, height));
        }
        Ok(Self { width, height })
    }

    /// US Letter (8.5in x 11in).
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
        }
    }

    /// ISO A4 (210mm x 297mm).
    pub fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
        }
    }
}

impl Default for PageBox {
    fn default() -> Self {
        Self::letter()
    }
}

/// Resolved drawable area in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Canvas width in points
    pub width: f64,

    /// Canvas height in points
    pub height: f64,
}

/// A single parse unit: markup, page box, resolved canvas and the state the
/// parser accumulates while walking it.
///
/// The document owns its style sink. Sinks are injected at construction so
/// separate documents never share collected style text.
#[derive(Debug)]
pub struct Document<S: StyleSink = StyleSheet> {
    markup: String,
    root: Arc<Element>,
    page_box: PageBox,
    canvas: CanvasSize,
    options: ParseOptions,
    units: UnitConverter,
    warnings: Vec<String>,
    style_sink: S,
}

impl Document<StyleSheet> {
    /// Create a document that collects style blocks into a [`StyleSheet`].
    pub fn new(markup: impl Into<String>, page_box: PageBox, options: ParseOptions) -> Result<Self> {
        Self::with_style_sink(markup, page_box, options, StyleSheet::new())
    }
}

impl<S: StyleSink> Document<S> {
    /// Create a document with a caller-supplied style sink.
    ///
    /// Builds the element tree and resolves the canvas size. Malformed markup,
    /// a non-`svg` root and excessive nesting are fatal; a bad root
    /// `width`/`height` only records a warning and falls back to the page box.
    pub fn with_style_sink(
        markup: impl Into<String>,
        page_box: PageBox,
        options: ParseOptions,
        style_sink: S,
    ) -> Result<Self> {
        let markup = markup.into();
        let root = parse_markup(&markup, options.max_depth)?;
        if root.name != ROOT_TAG {
            return Err(Error::NotSvg(root.name));
        }

        let units = UnitConverter::new();
        let mut warnings = Vec::new();
        let width = resolve_canvas_side(&units, &root, "width", page_box.width, &mut warnings);
        let height = resolve_canvas_side(&units, &root, "height", page_box.height, &mut warnings);
        log::debug!(
            "Resolved canvas {}x{}pt for {} elements",
            width,
            height,
            root.subtree_len()
        );

        Ok(Self {
            markup,
            root: Arc::new(root),
            page_box,
            canvas: CanvasSize { width, height },
            options,
            units,
            warnings,
            style_sink,
        })
    }

    /// Get the raw markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Get the root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn root_handle(&self) -> Arc<Element> {
        Arc::clone(&self.root)
    }

    /// Get the page box.
    pub fn page_box(&self) -> PageBox {
        self.page_box
    }

    /// Get the resolved canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Get the parse options, including passthrough entries.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub(crate) fn units(&self) -> &UnitConverter {
        &self.units
    }

    /// Get the warnings recorded so far, in detection order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get the style sink.
    pub fn style_sink(&self) -> &S {
        &self.style_sink
    }

    /// Consume the document, returning its warnings and style sink.
    pub fn into_parts(self) -> (Vec<String>, S) {
        (self.warnings, self.style_sink)
    }

    pub(crate) fn warn(&mut self, message: String) {
        log::warn!("{}", message);
        self.warnings.push(message);
    }

    pub(crate) fn add_style_block(&mut self, block: &str) {
        self.style_sink.add_block(block);
    }
}

/// Resolve the root's `width` or `height` against the page box side.
fn resolve_canvas_side(
    units: &UnitConverter,
    root: &Element,
    attribute: &str,
    page_side: f64,
    warnings: &mut Vec<String>,
) -> f64 {
    let Some(raw) = root.attribute(attribute) else {
        return page_side;
    };
    let reason = match units.convert(raw, page_side) {
        Ok(value) if value > 0.0 => return value,
        Ok(_) => "must be positive".to_string(),
        Err(e) => e.to_string(),
    };
    let message = format!(
        "Invalid value '{}' for attribute {} on tag {}: {}",
        raw, attribute, ROOT_TAG, reason
    );
    log::warn!("{}", message);
    warnings.push(message);
    page_side
}
