//! Integration tests for style block collection.

use unsvg::model::Document;
use unsvg::parser::{Parser, StyleSheet, StyleSink};
use unsvg::{parse_str, PageBox, ParseOptions};

/// Sink that records block lengths only.
#[derive(Default)]
struct LengthSink(Vec<usize>);

impl StyleSink for LengthSink {
    fn add_block(&mut self, block: &str) {
        self.0.push(block.len());
    }
}

fn styles(svg: &str) -> Vec<String> {
    parse_str(svg, PageBox::letter()).unwrap().styles
}

#[test]
fn test_character_references_decoded() {
    assert_eq!(
        styles("<svg><style>p::after { content: &quot;&#x2014;&#65;&quot; }</style></svg>"),
        vec!["p::after { content: \"\u{2014}A\" }"]
    );
}

#[test]
fn test_unknown_entity_kept_alone() {
    assert_eq!(
        styles("<svg><style>a&#x41;&unknown;b</style></svg>"),
        vec!["aA&unknown;b"]
    );
}

#[test]
fn test_cdata_kept_verbatim() {
    assert_eq!(
        styles("<svg><style><![CDATA[a > b { content: '&amp;' }]]></style></svg>"),
        vec!["a > b { content: '&amp;' }"]
    );
}

#[test]
fn test_whitespace_preserved() {
    assert_eq!(
        styles("<svg><style>\n\trect {\n\t\tfill: red;\n\t}\n</style></svg>"),
        vec!["\n\trect {\n\t\tfill: red;\n\t}\n"]
    );
}

#[test]
fn test_empty_style_still_forwarded() {
    assert_eq!(styles("<svg><style/><style></style></svg>"), vec!["", ""]);
}

#[test]
fn test_one_block_per_style_element() {
    let svg = "<svg><style>a{}</style><rect width=\"1\" height=\"1\"/><style>b{}</style></svg>";
    let drawing = parse_str(svg, PageBox::letter()).unwrap();
    assert_eq!(drawing.styles, vec!["a{}", "b{}"]);
    assert_eq!(drawing.instructions().len(), 1);
}

#[test]
fn test_style_inside_symbol() {
    let svg = "<svg><symbol><circle r=\"1\"/><style>s{}</style></symbol></svg>";
    let drawing = parse_str(svg, PageBox::letter()).unwrap();
    assert_eq!(drawing.styles, vec!["s{}"]);
    assert!(drawing.instructions().is_empty());
    assert!(drawing.warnings.is_empty());
}

#[test]
fn test_style_inside_skipped_element_is_dropped() {
    let svg = "<svg><blink><style>lost{}</style></blink></svg>";
    let drawing = parse_str(svg, PageBox::letter()).unwrap();
    assert!(drawing.styles.is_empty());
    assert_eq!(drawing.warnings, vec!["Unknown tag: blink".to_string()]);
}

#[test]
fn test_injected_sink() {
    let svg = "<svg><style>abc</style><style><![CDATA[<>]]></style></svg>";
    let mut document =
        Document::with_style_sink(svg, PageBox::letter(), ParseOptions::default(), LengthSink::default())
            .unwrap();
    Parser::new(&mut document).parse().unwrap();
    assert_eq!(document.style_sink().0, vec![3, 2]);
}

#[test]
fn test_borrowed_sink() {
    let mut sheet = StyleSheet::new();
    {
        let mut document = Document::with_style_sink(
            "<svg><style>x{}</style></svg>",
            PageBox::letter(),
            ParseOptions::default(),
            &mut sheet,
        )
        .unwrap();
        Parser::new(&mut document).parse().unwrap();
    }
    assert_eq!(sheet.blocks(), ["x{}"]);
}
