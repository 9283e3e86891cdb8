//! Supported tags and their attribute rules.
//!
//! Every drawable tag is a [`Tag`] variant, and [`Tag::spec`] is an exhaustive
//! match, so adding a variant without declaring its rules fails to compile.

use serde::{Deserialize, Serialize};

/// Tag whose text content is forwarded to the style sink.
pub const STYLE_TAG: &str = "style";

/// Tags skipped together with their subtree, without a warning.
pub const METADATA_TAGS: &[&str] = &["title", "desc", "metadata"];

/// Tags whose subtree is not drawn but may still carry `<style>` elements.
pub const DEFINITION_TAGS: &[&str] = &["defs", "symbol"];

/// Drawable primitives and containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Document root and nested viewport
    Svg,
    /// Group
    G,
    /// Two-point line
    Line,
    /// Circle
    Circle,
    /// Ellipse
    Ellipse,
    /// Rectangle, optionally rounded
    Rect,
    /// Open polyline
    Polyline,
    /// Closed polygon
    Polygon,
    /// Path, data passed through
    Path,
    /// Raster or vector image reference
    Image,
    /// Text block
    Text,
    /// Text span inside a text block
    Tspan,
}

impl Tag {
    /// Every supported tag, in registry order.
    pub const ALL: [Tag; 12] = [
        Tag::Svg,
        Tag::G,
        Tag::Line,
        Tag::Circle,
        Tag::Ellipse,
        Tag::Rect,
        Tag::Polyline,
        Tag::Polygon,
        Tag::Path,
        Tag::Image,
        Tag::Text,
        Tag::Tspan,
    ];

    /// Markup name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Svg => "svg",
            Tag::G => "g",
            Tag::Line => "line",
            Tag::Circle => "circle",
            Tag::Ellipse => "ellipse",
            Tag::Rect => "rect",
            Tag::Polyline => "polyline",
            Tag::Polygon => "polygon",
            Tag::Path => "path",
            Tag::Image => "image",
            Tag::Text => "text",
            Tag::Tspan => "tspan",
        }
    }

    /// Look up a tag by markup name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// Attribute rules for the tag.
    pub fn spec(self) -> &'static TagSpec {
        match self {
            Tag::Svg => &SVG,
            Tag::G => &G,
            Tag::Line => &LINE,
            Tag::Circle => &CIRCLE,
            Tag::Ellipse => &ELLIPSE,
            Tag::Rect => &RECT,
            Tag::Polyline => &POLYLINE,
            Tag::Polygon => &POLYGON,
            Tag::Path => &PATH,
            Tag::Image => &IMAGE,
            Tag::Text => &TEXT,
            Tag::Tspan => &TSPAN,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a numeric attribute is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal coordinate, against canvas width
    X,
    /// Vertical coordinate, against canvas height, Y-flipped
    Y,
    /// Horizontal length, against canvas width
    Width,
    /// Vertical length, against canvas height
    Height,
    /// Non-directional length, against canvas width
    Length,
    /// Coordinate list, expands to `x, y` pairs
    Points,
}

/// One entry of a tag's numeric argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericAttr {
    /// Attribute name
    pub name: &'static str,
    /// Resolution rule
    pub axis: Axis,
}

const fn num(name: &'static str, axis: Axis) -> NumericAttr {
    NumericAttr { name, axis }
}

/// Where an instruction's opaque payload comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// First present attribute among the names
    Attribute(&'static [&'static str]),
    /// Whitespace-collapsed text content of the element
    TextContent,
}

/// Attribute rules for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    /// The tag these rules belong to
    pub tag: Tag,
    /// Attributes that must be present
    pub required: &'static [&'static str],
    /// Numeric arguments in emission order; absent ones default to `0`
    pub numeric: &'static [NumericAttr],
    /// Payload source, if any
    pub data: Option<DataSource>,
}

impl TagSpec {
    /// Required attributes the element lacks, in registry order.
    pub fn missing_attributes(&self, has: impl Fn(&str) -> bool) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|name| !has(*name))
            .collect()
    }
}

const SVG: TagSpec = TagSpec {
    tag: Tag::Svg,
    required: &[],
    numeric: &[],
    data: None,
};

const G: TagSpec = TagSpec {
    tag: Tag::G,
    required: &[],
    numeric: &[],
    data: None,
};

const LINE: TagSpec = TagSpec {
    tag: Tag::Line,
    required: &[],
    numeric: &[
        num("x1", Axis::X),
        num("y1", Axis::Y),
        num("x2", Axis::X),
        num("y2", Axis::Y),
    ],
    data: None,
};

const CIRCLE: TagSpec = TagSpec {
    tag: Tag::Circle,
    required: &["r"],
    numeric: &[
        num("cx", Axis::X),
        num("cy", Axis::Y),
        num("r", Axis::Length),
    ],
    data: None,
};

const ELLIPSE: TagSpec = TagSpec {
    tag: Tag::Ellipse,
    required: &["rx", "ry"],
    numeric: &[
        num("cx", Axis::X),
        num("cy", Axis::Y),
        num("rx", Axis::Width),
        num("ry", Axis::Height),
    ],
    data: None,
};

const RECT: TagSpec = TagSpec {
    tag: Tag::Rect,
    required: &["width", "height"],
    numeric: &[
        num("x", Axis::X),
        num("y", Axis::Y),
        num("width", Axis::Width),
        num("height", Axis::Height),
        num("rx", Axis::Width),
    ],
    data: None,
};

const POLYLINE: TagSpec = TagSpec {
    tag: Tag::Polyline,
    required: &["points"],
    numeric: &[num("points", Axis::Points)],
    data: None,
};

const POLYGON: TagSpec = TagSpec {
    tag: Tag::Polygon,
    required: &["points"],
    numeric: &[num("points", Axis::Points)],
    data: None,
};

const PATH: TagSpec = TagSpec {
    tag: Tag::Path,
    required: &["d"],
    numeric: &[],
    data: Some(DataSource::Attribute(&["d"])),
};

const IMAGE: TagSpec = TagSpec {
    tag: Tag::Image,
    required: &["width", "height"],
    numeric: &[
        num("x", Axis::X),
        num("y", Axis::Y),
        num("width", Axis::Width),
        num("height", Axis::Height),
    ],
    data: Some(DataSource::Attribute(&["href", "xlink:href"])),
};

const TEXT: TagSpec = TagSpec {
    tag: Tag::Text,
    required: &[],
    numeric: &[num("x", Axis::X), num("y", Axis::Y)],
    data: Some(DataSource::TextContent),
};

const TSPAN: TagSpec = TagSpec {
    tag: Tag::Tspan,
    required: &[],
    numeric: &[num("x", Axis::X), num("y", Axis::Y)],
    data: Some(DataSource::TextContent),
};

/// Classification of a markup name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A registered drawable tag
    Drawable(&'static TagSpec),
    /// The style element
    Style,
    /// Descriptive metadata, skipped silently
    Metadata,
    /// Definitions container, searched for styles only
    Definitions,
    /// Not supported
    Unknown,
}

/// Classify a markup name.
pub fn lookup(name: &str) -> Lookup {
    if name == STYLE_TAG {
        return Lookup::Style;
    }
    if METADATA_TAGS.contains(&name) {
        return Lookup::Metadata;
    }
    if DEFINITION_TAGS.contains(&name) {
        return Lookup::Definitions;
    }
    match Tag::from_name(name) {
        Some(tag) => Lookup::Drawable(tag.spec()),
        None => Lookup::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(Tag::from_name(tag.name()), Some(tag));
            assert_eq!(tag.spec().tag, tag);
        }
        assert_eq!(Tag::from_name("filter"), None);
    }

    #[test]
    fn test_required_attributes_are_numeric_or_data() {
        for tag in Tag::ALL {
            let spec = tag.spec();
            for name in spec.required {
                let numeric = spec.numeric.iter().any(|n| n.name == *name);
                let data = matches!(spec.data, Some(DataSource::Attribute(names)) if names.contains(name));
                assert!(numeric || data, "{name} on {tag} is never consumed");
            }
        }
    }

    #[test]
    fn test_line_order() {
        let names: Vec<_> = Tag::Line.spec().numeric.iter().map(|n| n.name).collect();
        assert_eq!(names, ["x1", "y1", "x2", "y2"]);
    }

    #[test]
    fn test_missing_attributes_in_registry_order() {
        let spec = Tag::Ellipse.spec();
        assert_eq!(spec.missing_attributes(|name| name == "rx"), vec!["ry"]);
        assert_eq!(spec.missing_attributes(|_| false), vec!["rx", "ry"]);
        assert!(spec.missing_attributes(|_| true).is_empty());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("style"), Lookup::Style);
        assert_eq!(lookup("title"), Lookup::Metadata);
        assert_eq!(lookup("defs"), Lookup::Definitions);
        assert_eq!(lookup("unknown"), Lookup::Unknown);
        assert!(matches!(lookup("rect"), Lookup::Drawable(spec) if spec.tag == Tag::Rect));
    }

    #[test]
    fn test_tag_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tag::Tspan).unwrap(), "\"tspan\"");
        let tag: Tag = serde_json::from_str("\"polyline\"").unwrap();
        assert_eq!(tag, Tag::Polyline);
    }
}
