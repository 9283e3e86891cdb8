//! Style element text collection.
//!
//! Only the literal text of `<style>` elements is gathered here. Nothing in
//! this crate parses the CSS; the blocks go to a [`StyleSink`] supplied by the
//! caller.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::model::ContentNode;

/// Receiver for raw style text blocks.
pub trait StyleSink {
    /// Append one block of raw style text.
    fn add_block(&mut self, block: &str);
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn add_block(&mut self, block: &str) {
        (**self).add_block(block);
    }
}

impl StyleSink for Vec<String> {
    fn add_block(&mut self, block: &str) {
        self.push(block.to_string());
    }
}

/// Default sink: keeps blocks in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    blocks: Vec<String>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected blocks in document order.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Check if no block has been collected.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Take the collected blocks.
    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }
}

impl StyleSink for StyleSheet {
    fn add_block(&mut self, block: &str) {
        self.blocks.push(block.to_string());
    }
}

/// Concatenate content nodes into one string.
///
/// Text nodes are entity-decoded, CDATA nodes are copied verbatim, and
/// nothing is inserted between nodes or trimmed.
pub fn collect_style_text(nodes: &[ContentNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        match node {
            ContentNode::Text(raw) => output.push_str(&decode_text(raw)),
            ContentNode::CData(raw) => output.push_str(raw),
        }
    }
    output
}

/// Text content with runs of whitespace collapsed to single spaces.
pub(crate) fn collect_collapsed_text(nodes: &[ContentNode]) -> String {
    collect_style_text(nodes)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_text(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut output = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';') else {
            log::warn!("Keeping unterminated reference as written: {}", tail);
            output.push_str(tail);
            return Cow::Owned(output);
        };

        // Decoded per reference; an unknown one stays as written.
        let reference = &tail[..=end];
        match quick_xml::escape::unescape(reference) {
            Ok(decoded) => output.push_str(&decoded),
            Err(e) => {
                log::warn!("Keeping undecodable reference {} as written: {}", reference, e);
                output.push_str(reference);
            }
        }
        rest = &tail[end + 1..];
    }
    output.push_str(rest);
    Cow::Owned(output)
}
