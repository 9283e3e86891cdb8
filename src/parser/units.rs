//! Length token resolution into points.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::CanvasSize;

/// Sign, digits with optional fraction, optional exponent, then the suffix.
const LENGTH_PATTERN: &str = r"^([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)(.*)$";

/// Length units accepted in attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Percentage of a reference length
    Percent,
    /// Inches
    In,
    /// Centimetres
    Cm,
    /// Millimetres
    Mm,
    /// Picas
    Pc,
    /// Points
    Pt,
    /// User units (also used when no suffix is given)
    Px,
}

impl Unit {
    /// Parse a unit suffix. An empty suffix means user units.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" | "px" => Some(Unit::Px),
            "%" => Some(Unit::Percent),
            "in" => Some(Unit::In),
            "cm" => Some(Unit::Cm),
            "mm" => Some(Unit::Mm),
            "pc" => Some(Unit::Pc),
            "pt" => Some(Unit::Pt),
            _ => None,
        }
    }

    /// Convert a value in this unit to points.
    pub fn to_points(self, value: f64, reference: f64) -> f64 {
        match self {
            Unit::Percent => value / 100.0 * reference,
            Unit::In => value * 72.0,
            Unit::Cm => value * 72.0 / 2.54,
            Unit::Mm => value * 72.0 / 25.4,
            Unit::Pc => value * 12.0,
            Unit::Pt | Unit::Px => value,
        }
    }
}

/// Resolves raw length tokens against a reference length.
#[derive(Debug, Clone)]
pub struct UnitConverter {
    length_regex: Regex,
}

impl UnitConverter {
    /// Create a converter.
    pub fn new() -> Self {
        Self {
            length_regex: Regex::new(LENGTH_PATTERN).expect("length pattern is a valid regex"),
        }
    }

    /// Convert a token such as `10%`, `2.5in` or `-3` into points.
    ///
    /// Percentages resolve against `reference`; every other unit ignores it.
    pub fn convert(&self, raw: &str, reference: f64) -> Result<f64> {
        let token = raw.trim();
        let captures = self
            .length_regex
            .captures(token)
            .ok_or_else(|| Error::InvalidNumber(token.to_string()))?;

        let number = &captures[1];
        let suffix = &captures[2];
        let value: f64 = number
            .parse()
            .map_err(|_| Error::InvalidNumber(number.to_string()))?;
        let unit = Unit::from_suffix(suffix).ok_or_else(|| Error::InvalidUnit(suffix.to_string()))?;

        Ok(unit.to_points(value, reference))
    }

    /// Convert a `points` list into a flat `[x, y, x, y, ...]` sequence.
    ///
    /// Coordinates are separated by whitespace and/or commas. X values resolve
    /// against the canvas width, Y values against the canvas height and are
    /// flipped into the bottom-up axis.
    pub fn convert_points(&self, raw: &str, canvas: CanvasSize) -> Result<Vec<f64>> {
        let tokens: Vec<&str> = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() % 2 != 0 {
            return Err(Error::InvalidNumber(format!(
                "odd number of coordinates in '{}'",
                raw.trim()
            )));
        }

        let mut values = Vec::with_capacity(tokens.len());
        for pair in tokens.chunks(2) {
            values.push(self.convert(pair[0], canvas.width)?);
            values.push(canvas.height - self.convert(pair[1], canvas.height)?);
        }
        Ok(values)
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}
