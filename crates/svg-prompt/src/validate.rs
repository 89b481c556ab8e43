//! Opt-in strict checks for request records.
//!
//! The assemblers accept anything. Callers that want to reject requests the
//! downstream model is unlikely to handle well call
//! [`SingleGraphicRequest::validate`] or [`IconSetRequest::validate`] first.
//! Checks run in a fixed order and the first failure is returned.

use crate::options::{
    COMPLEXITIES, CORNER_STYLES, FILL_STYLES, SHAPE_STYLES, ShapeStyle, VISUAL_WEIGHTS,
    is_recognized,
};
use crate::request::{IconSetRequest, SingleGraphicRequest};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Minimum trimmed length of a single-graphic prompt.
pub const MIN_PROMPT_CHARS: usize = 10;
/// Minimum trimmed length of an icon-set style prompt.
pub const MIN_STYLE_PROMPT_CHARS: usize = 5;
/// Maximum number of icons in one set.
pub const MAX_ICONS: usize = 20;
/// Recommended stroke widths.
pub const STROKE_WIDTH_RANGE: RangeInclusive<i32> = 1..=5;
/// Recommended viewbox paddings.
pub const VIEWBOX_PADDING_RANGE: RangeInclusive<i32> = 0..=20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters (got {len})")]
    TooShort {
        field: &'static str,
        min: usize,
        len: usize,
    },

    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("unrecognized {field} '{value}' (expected one of: {})", .allowed.join(", "))]
    UnrecognizedOption {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("color palette entry {index} is blank")]
    BlankColor { index: usize },

    #[error("at least one icon concept is required")]
    NoIconConcepts,

    #[error("at most {max} icons can be generated at once (got {count})")]
    TooManyIcons { max: usize, count: usize },

    #[error("icon concept {index} must have a name and description")]
    IncompleteIconConcept { index: usize },
}

impl SingleGraphicRequest {
    /// Check the request against the recognized option tables and ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_min_chars("prompt", &self.prompt, MIN_PROMPT_CHARS)?;
        check_option("corner_style", &self.corner_style, CORNER_STYLES)?;
        check_option("complexity", &self.complexity, COMPLEXITIES)?;
        check_option("fill_style", &self.fill_style, FILL_STYLES)?;
        check_shape("border_style", &self.border_style)?;
        check_shape("background_shape", &self.background_shape)?;
        check_range("stroke_width", self.stroke_width, STROKE_WIDTH_RANGE)?;
        check_range("viewbox_padding", self.viewbox_padding, VIEWBOX_PADDING_RANGE)?;
        check_palette(&self.color_palette)
    }
}

impl IconSetRequest {
    /// Check the request against the recognized option tables, ranges and
    /// icon-count limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_min_chars("style_prompt", &self.style_prompt, MIN_STYLE_PROMPT_CHARS)?;
        if self.reference_style_description.trim().is_empty() {
            return Err(ValidationError::Blank {
                field: "reference_style_description",
            });
        }
        if self.icon_concepts.is_empty() {
            return Err(ValidationError::NoIconConcepts);
        }
        if let Some(index) = self
            .icon_concepts
            .iter()
            .position(|c| c.name.trim().is_empty() || c.description.trim().is_empty())
        {
            return Err(ValidationError::IncompleteIconConcept { index });
        }
        if self.icon_concepts.len() > MAX_ICONS {
            return Err(ValidationError::TooManyIcons {
                max: MAX_ICONS,
                count: self.icon_concepts.len(),
            });
        }
        check_option("visual_weight", &self.visual_weight, VISUAL_WEIGHTS)?;
        check_shape("border_style", &self.border_style)?;
        check_shape("background_shape", &self.background_shape)?;
        check_range("stroke_width", self.stroke_width, STROKE_WIDTH_RANGE)?;
        check_palette(&self.color_palette)
    }
}

fn check_min_chars(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ValidationError::TooShort { field, min, len });
    }
    Ok(())
}

fn check_option(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ValidationError> {
    if is_recognized(allowed, value) {
        Ok(())
    } else {
        Err(ValidationError::UnrecognizedOption {
            field,
            value: value.to_string(),
            allowed,
        })
    }
}

fn check_shape(field: &'static str, shape: &ShapeStyle) -> Result<(), ValidationError> {
    check_option(field, shape.as_str(), SHAPE_STYLES)
}

fn check_range(
    field: &'static str,
    value: i32,
    range: RangeInclusive<i32>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// An empty palette is fine (the default applies); blank entries are not.
fn check_palette(palette: &[String]) -> Result<(), ValidationError> {
    match palette.iter().position(|c| c.trim().is_empty()) {
        Some(index) => Err(ValidationError::BlankColor { index }),
        None => Ok(()),
    }
}
