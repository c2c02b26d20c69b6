//! Viewport proximity margin in CSS `rootMargin` notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a margin string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum MarginParseError {
    #[error("margin is empty")]
    Empty,

    #[error("margin takes 1 to 4 components, got {count}")]
    ComponentCount { count: usize },

    #[error("invalid margin component `{component}`: expected a px or % length")]
    InvalidComponent { component: String },
}

/// One side of a margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    /// Absolute length in pixels.
    Pixels(f64),
    /// Percentage of the viewport extent along the same axis.
    Percent(f64),
}

impl MarginLength {
    /// Resolves the length against a viewport extent.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl FromStr for MarginLength {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginParseError::InvalidComponent {
            component: s.to_string(),
        };

        let (number, build): (&str, fn(f64) -> Self) = if let Some(n) = s.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Self::Pixels)
        } else {
            (s, Self::Pixels)
        };

        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        // Unitless lengths are only valid for zero.
        if number.len() == s.len() && value != 0.0 {
            return Err(invalid());
        }

        Ok(build(value))
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Buffer around the viewport inside which an element counts as visible.
///
/// Parsed the way a CSS margin shorthand is: one value applies to all sides,
/// two values are `vertical horizontal`, three are `top horizontal bottom`
/// and four are `top right bottom left`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProximityMargin {
    /// Extension above the viewport.
    pub top: MarginLength,
    /// Extension right of the viewport.
    pub right: MarginLength,
    /// Extension below the viewport.
    pub bottom: MarginLength,
    /// Extension left of the viewport.
    pub left: MarginLength,
}

impl ProximityMargin {
    /// Margin that does not extend the viewport.
    pub const ZERO: Self = Self::symmetric(MarginLength::Pixels(0.0), MarginLength::Pixels(0.0));

    /// Creates a margin with the same vertical and horizontal extension on both sides.
    #[must_use]
    pub const fn symmetric(vertical: MarginLength, horizontal: MarginLength) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl Default for ProximityMargin {
    fn default() -> Self {
        Self::symmetric(MarginLength::Percent(50.0), MarginLength::Pixels(0.0))
    }
}

impl FromStr for ProximityMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse::<MarginLength>)
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [] => Err(MarginParseError::Empty),
            [all] => Ok(Self::symmetric(*all, *all)),
            [vertical, horizontal] => Ok(Self::symmetric(*vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(MarginParseError::ComponentCount { count: parts.len() }),
        }
    }
}

impl fmt::Display for ProximityMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.bottom && self.left == self.right {
            if self.top == self.left {
                write!(f, "{}", self.top)
            } else {
                write!(f, "{} {}", self.top, self.right)
            }
        } else {
            write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
        }
    }
}

impl TryFrom<String> for ProximityMargin {
    type Error = MarginParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProximityMargin> for String {
    fn from(value: ProximityMargin) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_is_half_viewport_vertical() {
        let margin = ProximityMargin::default();

        assert_eq!(margin.top, MarginLength::Percent(50.0));
        assert_eq!(margin.bottom, MarginLength::Percent(50.0));
        assert_eq!(margin.left, MarginLength::Pixels(0.0));
        assert_eq!(margin.to_string(), "50% 0px");
    }

    #[test]
    fn test_parse_two_components() {
        let margin: ProximityMargin = "50% 0px".parse().unwrap();
        assert_eq!(margin, ProximityMargin::default());
    }

    #[test]
    fn test_parse_four_components() {
        let margin: ProximityMargin = "10px 20% 30px 0".parse().unwrap();

        assert_eq!(margin.top, MarginLength::Pixels(10.0));
        assert_eq!(margin.right, MarginLength::Percent(20.0));
        assert_eq!(margin.bottom, MarginLength::Pixels(30.0));
        assert_eq!(margin.left, MarginLength::Pixels(0.0));
    }

    #[test]
    fn test_resolve_percent_against_extent() {
        assert!((MarginLength::Percent(50.0).resolve(800.0) - 400.0).abs() < f64::EPSILON);
        assert!((MarginLength::Pixels(12.0).resolve(800.0) - 12.0).abs() < f64::EPSILON);
    }

    #[test_case("" ; "empty")]
    #[test_case("50" ; "unitless_nonzero")]
    #[test_case("abc%" ; "not_a_number")]
    #[test_case("1px 2px 3px 4px 5px" ; "too_many")]
    fn test_parse_rejects(input: &str) {
        assert!(input.parse::<ProximityMargin>().is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            margin: ProximityMargin,
        }

        let parsed: Wrapper = toml::from_str(r#"margin = "25% 10px""#).unwrap();
        assert_eq!(
            parsed.margin,
            ProximityMargin::symmetric(MarginLength::Percent(25.0), MarginLength::Pixels(10.0))
        );

        let out = toml::to_string(&parsed).unwrap();
        assert!(out.contains(r#"margin = "25% 10px""#));
    }
}
