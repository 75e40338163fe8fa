//! 2D world coordinate used as the content-server lookup key.
//!
//! The canonical string form is `"x,y"` with no whitespace and no leading
//! zeros; it is the pointer every remote query is keyed by, so parsing
//! rejects anything that would not round-trip through `Display`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A parcel position in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Creates a coordinate from two integers.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = ContentError;

    /// Parses the canonical `"x,y"` form.
    ///
    /// Non-canonical spellings (`"1, 2"`, `"01,2"`, `"+1,2"`) are rejected
    /// even when they name a valid position, since the string is used
    /// verbatim as a lookup key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x_str, y_str) = s
            .split_once(',')
            .ok_or_else(|| ContentError::InvalidCoordinate(s.to_string()))?;

        let x = parse_axis(x_str).ok_or_else(|| ContentError::InvalidCoordinate(s.to_string()))?;
        let y = parse_axis(y_str).ok_or_else(|| ContentError::InvalidCoordinate(s.to_string()))?;

        Ok(Self { x, y })
    }
}

/// Parses one axis, accepting only the canonical integer spelling.
fn parse_axis(s: &str) -> Option<i32> {
    let value: i32 = s.parse().ok()?;
    // `i32::from_str` tolerates "+1" and "007"; the key format does not.
    if value.to_string() != s {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical() {
        assert_eq!(Coordinate::new(0, 0).to_string(), "0,0");
        assert_eq!(Coordinate::new(-12, 34).to_string(), "-12,34");
    }

    #[test]
    fn parse_roundtrip() {
        for (x, y) in [(0, 0), (1, -1), (-150, 150), (i32::MAX, i32::MIN)] {
            let coord = Coordinate::new(x, y);
            let parsed: Coordinate = coord.to_string().parse().unwrap();
            assert_eq!(parsed, coord);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in [
            "", ",", "1", "1,", ",2", "a,b", "1,2,3", "1 ,2", "1, 2", "1.5,2",
        ] {
            assert!(bad.parse::<Coordinate>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_non_canonical() {
        for bad in ["01,2", "1,02", "+1,2", "1,+2", "-0,0", " 1,2", "1,2 "] {
            assert!(bad.parse::<Coordinate>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_error_carries_input() {
        let err = "nope".parse::<Coordinate>().unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
