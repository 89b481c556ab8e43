//! Recognized option tokens.
//!
//! The assemblers insert option values into the prompt verbatim; these
//! tables only describe the tokens the downstream model is known to
//! understand. [`crate::validate`] checks requests against them.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const CORNER_STYLES: &[&str] = &["sharp", "rounded", "mixed"];
pub const COMPLEXITIES: &[&str] = &["simple", "moderate", "detailed"];
pub const FILL_STYLES: &[&str] = &["outline", "filled", "mixed"];
pub const SHAPE_STYLES: &[&str] = &["none", "circle", "square", "rounded_square"];
pub const VISUAL_WEIGHTS: &[&str] = &["light", "regular", "bold"];

/// Border or background shape drawn around an icon.
///
/// Deserializes from the plain token. Unrecognized tokens are kept in
/// [`ShapeStyle::Other`] and rendered unchanged, so the assemblers never
/// reject a value.
///
/// Build values through `From<&str>`/`From<String>`, which map recognized
/// tokens onto their variants. An `Other` holding a recognized token is still
/// classified by its text: `Other("none")` counts as [`ShapeStyle::None`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeStyle {
    #[default]
    None,
    Circle,
    Square,
    RoundedSquare,
    Other(String),
}

impl ShapeStyle {
    /// The token as it appears in prompt text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::RoundedSquare => "rounded_square",
            Self::Other(s) => s,
        }
    }

    pub fn is_none(&self) -> bool {
        self.as_str() == "none"
    }

    /// Whether this is one of the tokens listed in [`SHAPE_STYLES`].
    pub fn is_recognized(&self) -> bool {
        is_recognized(SHAPE_STYLES, self.as_str())
    }
}

impl From<&str> for ShapeStyle {
    fn from(s: &str) -> Self {
        match s {
            "none" => Self::None,
            "circle" => Self::Circle,
            "square" => Self::Square,
            "rounded_square" => Self::RoundedSquare,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ShapeStyle {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<ShapeStyle> for String {
    fn from(style: ShapeStyle) -> Self {
        match style {
            ShapeStyle::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ShapeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `value` is listed in `allowed` (exact, case-sensitive match).
pub fn is_recognized(allowed: &[&str], value: &str) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_parse_to_variants() {
        assert_eq!(ShapeStyle::from("none"), ShapeStyle::None);
        assert_eq!(ShapeStyle::from("circle"), ShapeStyle::Circle);
        assert_eq!(ShapeStyle::from("square"), ShapeStyle::Square);
        assert_eq!(ShapeStyle::from("rounded_square"), ShapeStyle::RoundedSquare);
    }

    #[test]
    fn unknown_token_is_kept_verbatim() {
        let style = ShapeStyle::from("Hexagon");
        assert_eq!(style, ShapeStyle::Other("Hexagon".into()));
        assert_eq!(style.to_string(), "Hexagon");
        assert!(!style.is_recognized());
        assert!(!style.is_none());
    }

    #[test]
    fn none_is_case_sensitive() {
        assert!(ShapeStyle::from("none").is_none());
        assert!(!ShapeStyle::from("None").is_none());
    }

    #[test]
    fn other_holding_known_token_behaves_like_variant() {
        let style = ShapeStyle::Other("none".into());
        assert!(style.is_none());
        assert!(style.is_recognized());
        assert_eq!(crate::fragment::border_fragment(&style), None);
        assert!(ShapeStyle::Other("circle".into()).is_recognized());
    }

    #[test]
    fn serde_uses_plain_token() {
        let json = serde_json::to_string(&ShapeStyle::RoundedSquare).unwrap();
        assert_eq!(json, "\"rounded_square\"");
        let parsed: ShapeStyle = serde_json::from_str("\"octagon\"").unwrap();
        assert_eq!(parsed, ShapeStyle::Other("octagon".into()));
    }

    #[test]
    fn every_shape_table_entry_is_recognized() {
        for token in SHAPE_STYLES {
            assert!(ShapeStyle::from(*token).is_recognized(), "{token}");
        }
    }

    #[test]
    fn recognized_lookup_is_exact() {
        assert!(is_recognized(CORNER_STYLES, "sharp"));
        assert!(!is_recognized(CORNER_STYLES, "Sharp"));
        assert!(is_recognized(VISUAL_WEIGHTS, "bold"));
        assert!(!is_recognized(COMPLEXITIES, "complex"));
        assert!(is_recognized(FILL_STYLES, "outline"));
    }
}
