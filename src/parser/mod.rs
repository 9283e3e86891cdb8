//! SVG parsing module.
//!
//! Markup is first turned into an [`Element`](crate::model::Element) tree by
//! [`parse_markup`], then [`Parser`] walks that tree against the tag
//! [`registry`] and produces the instruction tree.

mod options;
pub mod registry;
mod style;
mod svg_parser;
mod tree;
mod units;

pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use registry::{lookup, Axis, DataSource, Lookup, NumericAttr, Tag, TagSpec};
pub use style::{collect_style_text, StyleSheet, StyleSink};
pub use svg_parser::Parser;
pub use tree::parse_markup;
pub use units::{Unit, UnitConverter};
