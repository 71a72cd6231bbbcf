//! Closed color set for the "status" macro parameter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color accepted by the "status" macro block.
///
/// The set is closed so an invalid color can never reach the wire. The
/// canonical names are mapped explicitly rather than derived from the
/// variant identifiers, so renaming a variant cannot silently change the
/// serialized form.
///
/// # Examples
///
/// ```
/// use macrodoc::domain::StatusColor;
///
/// assert_eq!(StatusColor::Green.as_str(), "Green");
///
/// // Parsing is case-insensitive
/// let color: StatusColor = "green".parse().unwrap();
/// assert_eq!(color, StatusColor::Green);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Grey,
    Red,
    Yellow,
    Green,
    Blue,
}

/// Error returned when parsing an unknown status color.
#[derive(Debug, Clone)]
pub struct ParseStatusColorError(String);

impl fmt::Display for ParseStatusColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseStatusColorError {}

impl StatusColor {
    /// Every supported color, in canonical order.
    pub const ALL: [StatusColor; 5] = [
        StatusColor::Grey,
        StatusColor::Red,
        StatusColor::Yellow,
        StatusColor::Green,
        StatusColor::Blue,
    ];

    /// Returns the canonical name used in the macro parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Grey => "Grey",
            StatusColor::Red => "Red",
            StatusColor::Yellow => "Yellow",
            StatusColor::Green => "Green",
            StatusColor::Blue => "Blue",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusColor {
    type Err = ParseStatusColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grey" => Ok(StatusColor::Grey),
            "red" => Ok(StatusColor::Red),
            "yellow" => Ok(StatusColor::Yellow),
            "green" => Ok(StatusColor::Green),
            "blue" => Ok(StatusColor::Blue),
            _ => Err(ParseStatusColorError(format!(
                "unknown status color '{}': expected one of Grey, Red, Yellow, Green, Blue",
                s
            ))),
        }
    }
}

impl Serialize for StatusColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
