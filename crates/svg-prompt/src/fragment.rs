//! Optional prompt fragments.
//!
//! Each function maps a request field onto an optional bullet line: `None`
//! when the field holds its default (or is absent), `Some(line)` otherwise.

use crate::options::ShapeStyle;

/// `- Border style: ...` line for a single graphic.
pub fn border_fragment(style: &ShapeStyle) -> Option<String> {
    (!style.is_none()).then(|| format!("- Border style: {style} border around the icon"))
}

/// `- Background shape: ...` line for a single graphic.
pub fn background_shape_fragment(shape: &ShapeStyle) -> Option<String> {
    (!shape.is_none())
        .then(|| format!("- Background shape: {shape} background behind the icon content"))
}

/// `- Reference style: ...` line, present only when a description was given.
///
/// An empty description counts as absent.
pub fn reference_fragment(description: Option<&str>) -> Option<String> {
    description
        .filter(|d| !d.is_empty())
        .map(|d| format!("- Reference style: {d}"))
}

/// `- Border style: ...` line for an icon set.
pub fn icon_border_fragment(style: &ShapeStyle) -> Option<String> {
    (!style.is_none()).then(|| format!("- Border style: Each icon must have a {style} border"))
}

/// `- Background shape: ...` line for an icon set.
pub fn icon_background_fragment(shape: &ShapeStyle) -> Option<String> {
    (!shape.is_none())
        .then(|| format!("- Background shape: Each icon must have a {shape} background shape"))
}

/// Render a fragment for direct appending to a preceding line.
///
/// Absent fragments render as `""`; present ones as a newline followed by the
/// line, so appending never leaves a blank line behind.
pub fn render(fragment: Option<String>) -> String {
    match fragment {
        Some(line) => format!("\n{line}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_shape_yields_no_fragment() {
        assert_eq!(border_fragment(&ShapeStyle::None), None);
        assert_eq!(background_shape_fragment(&ShapeStyle::None), None);
        assert_eq!(icon_border_fragment(&ShapeStyle::None), None);
        assert_eq!(icon_background_fragment(&ShapeStyle::None), None);
    }

    #[test]
    fn shape_fragments_embed_token() {
        assert_eq!(
            border_fragment(&ShapeStyle::RoundedSquare).as_deref(),
            Some("- Border style: rounded_square border around the icon")
        );
        assert_eq!(
            background_shape_fragment(&ShapeStyle::Circle).as_deref(),
            Some("- Background shape: circle background behind the icon content")
        );
        assert_eq!(
            icon_border_fragment(&ShapeStyle::Square).as_deref(),
            Some("- Border style: Each icon must have a square border")
        );
        assert_eq!(
            icon_background_fragment(&ShapeStyle::from("blob")).as_deref(),
            Some("- Background shape: Each icon must have a blob background shape")
        );
    }

    #[test]
    fn reference_fragment_requires_text() {
        assert_eq!(reference_fragment(None), None);
        assert_eq!(reference_fragment(Some("")), None);
        assert_eq!(
            reference_fragment(Some("hand-drawn sketch style")).as_deref(),
            Some("- Reference style: hand-drawn sketch style")
        );
    }

    #[test]
    fn render_maps_absent_to_empty() {
        assert_eq!(render(None), "");
        assert_eq!(render(Some("- x".into())), "\n- x");
    }
}
