//! Element tree construction from markup text.
//!
//! Built on the `quick-xml` event reader. Text and entity-reference events
//! are merged into escaped text nodes while CDATA sections stay separate, so
//! style collection can decode the former and copy the latter verbatim.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{ContentNode, Element};

/// Parse markup into its root element.
///
/// Any well-formedness problem is returned as [`Error::Xml`]; nesting deeper
/// than `max_depth` fails with [`Error::DepthExceeded`].
pub fn parse_markup(markup: &str, max_depth: usize) -> Result<Element> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::with_capacity(16);
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.len() >= max_depth {
                    return Err(Error::DepthExceeded { limit: max_depth });
                }
                if stack.is_empty() && root.is_some() {
                    return Err(Error::Xml("multiple root elements".to_string()));
                }
                stack.push(start_element(&reader, &e)?);
            }
            Ok(Event::Empty(e)) => {
                if stack.len() >= max_depth {
                    return Err(Error::DepthExceeded { limit: max_depth });
                }
                let element = start_element(&reader, &e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("end tag without matching start".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(e)) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.decode().map_err(|err| decode_error("text", err))?;
                    current.push_text(&text);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(current) = stack.last_mut() {
                    let name = e.decode().map_err(|err| decode_error("entity", err))?;
                    current.push_text(&format!("&{};", name));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    let text = reader
                        .decoder()
                        .decode(&e)
                        .map_err(|err| decode_error("cdata", err))?;
                    current.content.push(ContentNode::CData(text.into_owned()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(Error::Xml(format!(
                    "{} at position {}",
                    err,
                    reader.buffer_position()
                )));
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Xml(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| Error::Xml("no root element".to_string()))
}

/// Hand a finished element to its parent, or make it the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(Error::Xml("multiple root elements".to_string()));
    }
    Ok(())
}

fn start_element(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Element> {
    let decoder = reader.decoder();
    let qname = e.name();
    let name = decoder
        .decode(qname.as_ref())
        .map_err(|err| decode_error("tag name", err))?;
    let mut element = Element::new(name.into_owned());

    for attr in e.attributes() {
        let attr = attr.map_err(|err| {
            Error::Xml(format!("malformed attribute on <{}>: {}", element.name, err))
        })?;
        let key = decoder
            .decode(attr.key.as_ref())
            .map_err(|err| decode_error("attribute name", err))?
            .into_owned();
        let raw = decoder
            .decode(&attr.value)
            .map_err(|err| decode_error("attribute value", err))?;
        let value = quick_xml::escape::unescape(&raw)
            .map_err(|err| {
                Error::Xml(format!(
                    "attribute {} on <{}>: {}",
                    key, element.name, err
                ))
            })?
            .into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}

fn decode_error(what: &str, err: impl std::fmt::Display) -> Error {
    Error::Xml(format!("{} decode error: {}", what, err))
}
