//! Attribute values and their type tags.
//!
//! Attributes registered on a store are either string-valued or
//! numeric-valued; [`AttributeValue`] is the closed tagged value type and
//! [`AttributeType`] the tag checked at call time by the attribute store.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a registered attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// UTF-8 string values; default is the empty string.
    String,
    /// Double-precision numeric values; default is zero.
    Numeric,
}

impl AttributeType {
    /// Returns the default value objects carry before one is set explicitly.
    #[must_use]
    pub fn default_value(self) -> AttributeValue {
        match self {
            Self::String => AttributeValue::String(ArcStr::new()),
            Self::Numeric => AttributeValue::Numeric(0.0),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

/// A dynamically-typed attribute value.
///
/// # Examples
///
/// ```
/// use plexnet_common::types::AttributeValue;
///
/// let kind = AttributeValue::from("pro");
/// let weight = AttributeValue::from(32.4);
///
/// assert_eq!(kind.as_str(), Some("pro"));
/// assert_eq!(weight.as_numeric(), Some(32.4));
/// assert!(kind.as_numeric().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// UTF-8 string (uses ArcStr for cheap cloning).
    String(ArcStr),
    /// 64-bit floating point.
    Numeric(f64),
}

impl AttributeValue {
    /// Returns the type tag this value carries.
    #[must_use]
    pub const fn attribute_type(&self) -> AttributeType {
        match self {
            Self::String(_) => AttributeType::String,
            Self::Numeric(_) => AttributeType::Numeric,
        }
    }

    /// Returns the string value if this is a String, otherwise None.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Numeric(_) => None,
        }
    }

    /// Returns the numeric value if this is a Numeric, otherwise None.
    #[inline]
    #[must_use]
    pub const fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::String(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Numeric(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(ArcStr::from(s))
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(ArcStr::from(s))
    }
}

impl From<ArcStr> for AttributeValue {
    fn from(s: ArcStr) -> Self {
        Self::String(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Numeric(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        assert_eq!(
            AttributeValue::from("x").attribute_type(),
            AttributeType::String
        );
        assert_eq!(
            AttributeValue::from(1.5).attribute_type(),
            AttributeType::Numeric
        );
    }

    #[test]
    fn test_default_values() {
        assert_eq!(
            AttributeType::String.default_value().as_str(),
            Some("")
        );
        assert_eq!(
            AttributeType::Numeric.default_value().as_numeric(),
            Some(0.0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeType::String.to_string(), "string");
        assert_eq!(AttributeType::Numeric.to_string(), "numeric");
        assert_eq!(AttributeValue::from("pro").to_string(), "pro");
    }
}
