//! SVG format detection and input decoding.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Input format of an SVG file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgFormat {
    /// Markup text (`.svg`)
    Plain,
    /// Gzip-compressed markup (`.svgz`)
    Compressed,
}

impl std::fmt::Display for SvgFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgFormat::Plain => write!(f, "SVG"),
            SvgFormat::Compressed => write!(f, "SVGZ"),
        }
    }
}

/// Gzip magic bytes
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];
const SVG_OPEN: &[u8] = b"<svg";
/// How far into the data the `<svg` tag must appear
const SNIFF_LEN: usize = 4096;

/// Detect SVG format from a file path.
///
/// # Example
/// ```no_run
/// use unsvg::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("drawing.svgz").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SvgFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect SVG format from bytes.
///
/// # Returns
/// * `Ok(SvgFormat::Compressed)` for gzip data
/// * `Ok(SvgFormat::Plain)` for markup with an `<svg` tag near the start
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SvgFormat> {
    if data.starts_with(GZIP_MAGIC) {
        return Ok(SvgFormat::Compressed);
    }

    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or(Error::UnknownFormat)?;
    if data[start] != b'<' {
        return Err(Error::UnknownFormat);
    }

    let window = &data[start..data.len().min(start + SNIFF_LEN)];
    if window.windows(SVG_OPEN.len()).any(|w| w == SVG_OPEN) {
        Ok(SvgFormat::Plain)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Turn file bytes into markup text, decompressing gzip input.
pub fn decode_markup(data: &[u8]) -> Result<String> {
    let bytes = match detect_format_from_bytes(data)? {
        SvgFormat::Plain => data.to_vec(),
        SvgFormat::Compressed => {
            let mut inflated = Vec::new();
            GzDecoder::new(data).read_to_end(&mut inflated)?;
            detect_format_from_bytes(&inflated)?;
            inflated
        }
    };
    let text = String::from_utf8(bytes)?;
    Ok(text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text))
}

/// Check if a file is SVG or SVGZ.
pub fn is_svg<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like SVG or SVGZ.
pub fn is_svg_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_detect_plain() {
        let data = b"<?xml version=\"1.0\"?>\n<svg width=\"10\"/>";
        assert_eq!(detect_format_from_bytes(data).unwrap(), SvgFormat::Plain);
    }

    #[test]
    fn test_detect_with_bom_and_whitespace() {
        let data = b"\xef\xbb\xbf  \n<svg/>";
        assert_eq!(detect_format_from_bytes(data).unwrap(), SvgFormat::Plain);
    }

    #[test]
    fn test_detect_compressed() {
        let data = gzip(b"<svg/>");
        assert_eq!(detect_format_from_bytes(&data).unwrap(), SvgFormat::Compressed);
    }

    #[test]
    fn test_detect_invalid_format() {
        assert!(matches!(
            detect_format_from_bytes(b"%PDF-1.7"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_format_from_bytes(b"<html></html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(detect_format_from_bytes(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_decode_compressed() {
        let data = gzip(b"<svg><line/></svg>");
        assert_eq!(decode_markup(&data).unwrap(), "<svg><line/></svg>");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_markup(b"\xef\xbb\xbf<svg/>").unwrap(), "<svg/>");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let data = b"<svg>\xff</svg>";
        assert!(matches!(decode_markup(data), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_is_svg_bytes() {
        assert!(is_svg_bytes(b"<svg/>"));
        assert!(!is_svg_bytes(b"Not an SVG"));
    }
}
