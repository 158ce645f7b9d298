//! Output configuration records
//!
//! Class names are substituted verbatim into markup, selectors and script, so
//! they are validated as CSS identifiers when the record is built. Anything
//! holding a [`ClassNameConfig`] can interpolate it without escaping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_BASE_CLASS: &str = "hamburger-menu";
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";
pub const DEFAULT_WIDTH: f64 = 50.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// How the generated control toggles between its two states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Hidden checkbox inside a label, `:checked` sibling selector, no script
    #[default]
    Checkbox,
    /// Button whose active class is toggled by a click handler
    Class,
}

impl Method {
    pub fn needs_script(self) -> bool {
        matches!(self, Method::Class)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Checkbox => f.write_str("checkbox"),
            Method::Class => f.write_str("class"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkbox" => Ok(Method::Checkbox),
            "class" => Ok(Method::Class),
            other => Err(ConfigError::UnknownMethod(other.to_string())),
        }
    }
}

/// Root and active-state class names
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClassNames", into = "RawClassNames")]
pub struct ClassNameConfig {
    base_class: String,
    active_class: String,
}

#[derive(Clone, Serialize, Deserialize)]
struct RawClassNames {
    base_class: String,
    active_class: String,
}

impl ClassNameConfig {
    pub fn new(
        base_class: impl Into<String>,
        active_class: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_class = base_class.into();
        let active_class = active_class.into();
        validate_class_name(&base_class)?;
        validate_class_name(&active_class)?;
        Ok(Self {
            base_class,
            active_class,
        })
    }

    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }
}

impl Default for ClassNameConfig {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

impl TryFrom<RawClassNames> for ClassNameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawClassNames) -> Result<Self, Self::Error> {
        Self::new(raw.base_class, raw.active_class)
    }
}

impl From<ClassNameConfig> for RawClassNames {
    fn from(c: ClassNameConfig) -> Self {
        Self {
            base_class: c.base_class,
            active_class: c.active_class,
        }
    }
}

/// Check that `name` is a plain CSS identifier.
///
/// Accepts ASCII letters, digits, `-` and `_`; the first character must be a
/// letter, `_` or a `-` followed by a letter or `_`. Escaped and non-ASCII
/// identifiers are rejected.
pub fn validate_class_name(name: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidClassName {
        name: name.to_string(),
        reason,
    };

    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| invalid("must not be empty"))?;

    match first {
        'a'..='z' | 'A'..='Z' | '_' => {}
        '-' => match chars.clone().next() {
            Some('a'..='z' | 'A'..='Z' | '_') => {}
            _ => return Err(invalid("a leading '-' must be followed by a letter or '_'")),
        },
        _ => return Err(invalid("must start with a letter, '_' or '-'")),
    }

    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(invalid("may only contain ASCII letters, digits, '-' and '_'"))
    }
}

/// Rendered size of the generated control
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSize", into = "RawSize")]
pub struct SizeConfig {
    width: f64,
    stroke_width: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawSize {
    width: f64,
    stroke_width: f64,
}

impl SizeConfig {
    pub fn new(width: f64, stroke_width: f64) -> Result<Self, ConfigError> {
        check_positive("width", width)?;
        check_positive("stroke width", stroke_width)?;
        Ok(Self {
            width,
            stroke_width,
        })
    }

    /// Width and height of the control in pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Stroke width in canvas units
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl TryFrom<RawSize> for SizeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.stroke_width)
    }
}

impl From<SizeConfig> for RawSize {
    fn from(s: SizeConfig) -> Self {
        Self {
            width: s.width,
            stroke_width: s.stroke_width,
        }
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_names() {
        let c = ClassNameConfig::default();
        assert_eq!(c.base_class(), "hamburger-menu");
        assert_eq!(c.active_class(), "is-active");
        assert!(validate_class_name(c.base_class()).is_ok());
    }

    #[test]
    fn test_rejects_invalid_class_names() {
        for bad in ["", "1abc", "a b", "-1x", "--", "menu\"", "x{y}", "ünï"] {
            assert!(
                ClassNameConfig::new(bad, "is-active").is_err(),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_accepts_valid_class_names() {
        for good in ["nav", "_x", "-menu", "btn-2", "a_b-C"] {
            assert!(validate_class_name(good).is_ok(), "'{}' should be accepted", good);
        }
    }

    #[test]
    fn test_size_validation() {
        assert!(SizeConfig::new(50.0, 3.0).is_ok());
        assert!(SizeConfig::new(0.0, 3.0).is_err());
        assert!(SizeConfig::new(50.0, -1.0).is_err());
        assert!(SizeConfig::new(f64::NAN, 3.0).is_err());
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let ok: Result<ClassNameConfig, _> =
            serde_json::from_str(r#"{"base_class": "nav", "active_class": "open"}"#);
        assert!(ok.is_ok());

        let bad: Result<ClassNameConfig, _> =
            serde_json::from_str(r#"{"base_class": "9nav", "active_class": "open"}"#);
        assert!(bad.is_err());

        let size: Result<SizeConfig, _> =
            serde_json::from_str(r#"{"width": -5, "stroke_width": 3}"#);
        assert!(size.is_err());
    }

    #[test]
    fn test_method_round_trip_names() {
        assert_eq!("class".parse::<Method>().unwrap(), Method::Class);
        assert_eq!(Method::Checkbox.to_string(), "checkbox");
        assert!("toggle".parse::<Method>().is_err());
        assert!(Method::Class.needs_script());
    }
}
