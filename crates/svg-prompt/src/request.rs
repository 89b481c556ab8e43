//! Request records for the two prompt assemblers.
//!
//! Every optional field carries a documented default, applied both by the
//! constructors and by serde when a field is missing from a JSON request.
//! Values are not validated here; see [`crate::validate`] for strict checks.
//!
//! # Examples
//!
//! ```
//! use svg_prompt::{IconConcept, IconSetRequest, ShapeStyle, SingleGraphicRequest};
//!
//! let single = SingleGraphicRequest::new("a paper airplane")
//!     .with_stroke_width(3)
//!     .with_border_style(ShapeStyle::Circle);
//! assert_eq!(single.style, "minimalist");
//!
//! let icons = IconSetRequest::new(
//!     vec![IconConcept::new("home", "a house shape")],
//!     "thin line icons",
//! );
//! assert_eq!(icons.icon_size, "24x24");
//! ```

use crate::options::ShapeStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Palette used when a single-graphic request has none.
pub const DEFAULT_SINGLE_PALETTE: [&str; 4] = ["#333333", "#666666", "#999999", "#CCCCCC"];
/// Palette used when an icon-set request has none.
pub const DEFAULT_ICON_SET_PALETTE: [&str; 2] = ["#333333", "#666666"];

fn default_single_palette() -> Vec<String> {
    DEFAULT_SINGLE_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_icon_set_palette() -> Vec<String> {
    DEFAULT_ICON_SET_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_style() -> String {
    "minimalist".to_string()
}

fn default_complexity() -> String {
    "simple".to_string()
}

fn default_fill_style() -> String {
    "filled".to_string()
}

fn default_corner_style() -> String {
    "rounded".to_string()
}

fn default_background() -> String {
    "transparent".to_string()
}

fn default_stroke_width() -> i32 {
    2
}

fn default_viewbox_padding() -> i32 {
    10
}

fn default_style_prompt() -> String {
    "consistent minimalist design".to_string()
}

fn default_icon_size() -> String {
    "24x24".to_string()
}

fn default_semantic_group() -> String {
    "interface".to_string()
}

fn default_visual_weight() -> String {
    "regular".to_string()
}

// ── Single graphic ────────────────────────────────────────────────

/// Parameters for a single SVG graphic.
///
/// | Field | Default |
/// |---|---|
/// | `style` | `"minimalist"` |
/// | `complexity` | `"simple"` |
/// | `fill_style` | `"filled"` |
/// | `corner_style` | `"rounded"` |
/// | `stroke_width` | `2` |
/// | `background` | `"transparent"` |
/// | `viewbox_padding` | `10` |
/// | `border_style`, `background_shape` | `none` |
/// | `reference_image_description` | absent |
/// | `color_palette` | [`DEFAULT_SINGLE_PALETTE`] |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SingleGraphicRequest {
    /// Main description of what to draw.
    pub prompt: String,
    /// Visual style, e.g. minimalist, cartoon, realistic.
    #[serde(default = "default_style")]
    pub style: String,
    /// simple | moderate | detailed
    #[serde(default = "default_complexity")]
    pub complexity: String,
    /// outline | filled | mixed
    #[serde(default = "default_fill_style")]
    pub fill_style: String,
    /// sharp | rounded | mixed
    #[serde(default = "default_corner_style")]
    pub corner_style: String,
    /// Line thickness in pixels (1-5 recommended).
    #[serde(default = "default_stroke_width")]
    pub stroke_width: i32,
    /// "transparent", "solid" or a hex color.
    #[serde(default = "default_background")]
    pub background: String,
    /// Padding around the main content in pixels (0-20 recommended).
    #[serde(default = "default_viewbox_padding")]
    pub viewbox_padding: i32,
    #[serde(default)]
    #[schemars(with = "String")]
    pub border_style: ShapeStyle,
    #[serde(default)]
    #[schemars(with = "String")]
    pub background_shape: ShapeStyle,
    /// Description of a reference image, when one was supplied.
    #[serde(default)]
    pub reference_image_description: Option<String>,
    /// Hex colors the graphic may use.
    #[serde(default = "default_single_palette")]
    pub color_palette: Vec<String>,
}

impl SingleGraphicRequest {
    /// Create a request for `prompt` with every other field at its default.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: default_style(),
            complexity: default_complexity(),
            fill_style: default_fill_style(),
            corner_style: default_corner_style(),
            stroke_width: default_stroke_width(),
            background: default_background(),
            viewbox_padding: default_viewbox_padding(),
            border_style: ShapeStyle::None,
            background_shape: ShapeStyle::None,
            reference_image_description: None,
            color_palette: default_single_palette(),
        }
    }

    /// Parse a request from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The palette to render: the configured one, or the default when empty.
    pub fn palette(&self) -> Vec<String> {
        if self.color_palette.is_empty() {
            default_single_palette()
        } else {
            self.color_palette.clone()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = complexity.into();
        self
    }

    pub fn with_fill_style(mut self, fill_style: impl Into<String>) -> Self {
        self.fill_style = fill_style.into();
        self
    }

    pub fn with_corner_style(mut self, corner_style: impl Into<String>) -> Self {
        self.corner_style = corner_style.into();
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: i32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_viewbox_padding(mut self, viewbox_padding: i32) -> Self {
        self.viewbox_padding = viewbox_padding;
        self
    }

    pub fn with_border_style(mut self, border_style: impl Into<ShapeStyle>) -> Self {
        self.border_style = border_style.into();
        self
    }

    pub fn with_background_shape(mut self, background_shape: impl Into<ShapeStyle>) -> Self {
        self.background_shape = background_shape.into();
        self
    }

    pub fn with_reference_image_description(mut self, description: impl Into<String>) -> Self {
        self.reference_image_description = Some(description.into());
        self
    }

    /// Replace the palette. An empty palette falls back to the default when
    /// the prompt is built.
    pub fn with_color_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_palette = colors.into_iter().map(Into::into).collect();
        self
    }
}

// ── Icon set ──────────────────────────────────────────────────────

/// One icon in an icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IconConcept {
    pub name: String,
    pub description: String,
}

impl IconConcept {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Parameters for a cohesive icon set.
///
/// | Field | Default |
/// |---|---|
/// | `style_prompt` | `"consistent minimalist design"` |
/// | `icon_size` | `"24x24"` |
/// | `stroke_width` | `2` |
/// | `semantic_group` | `"interface"` |
/// | `visual_weight` | `"regular"` |
/// | `border_style`, `background_shape` | `none` |
/// | `color_palette` | [`DEFAULT_ICON_SET_PALETTE`] |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IconSetRequest {
    /// Icons to generate, in output order.
    #[serde(default)]
    pub icon_concepts: Vec<IconConcept>,
    /// Description of the reference icon style.
    pub reference_style_description: String,
    /// Overall style direction.
    #[serde(default = "default_style_prompt")]
    pub style_prompt: String,
    /// Size specifier such as "24x24".
    #[serde(default = "default_icon_size")]
    pub icon_size: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: i32,
    /// Category of icons, e.g. navigation, actions.
    #[serde(default = "default_semantic_group")]
    pub semantic_group: String,
    /// light | regular | bold
    #[serde(default = "default_visual_weight")]
    pub visual_weight: String,
    #[serde(default)]
    #[schemars(with = "String")]
    pub border_style: ShapeStyle,
    #[serde(default)]
    #[schemars(with = "String")]
    pub background_shape: ShapeStyle,
    #[serde(default = "default_icon_set_palette")]
    pub color_palette: Vec<String>,
}

impl IconSetRequest {
    /// Create a request for `concepts` with every optional field at its default.
    pub fn new(concepts: Vec<IconConcept>, reference_style_description: impl Into<String>) -> Self {
        Self {
            icon_concepts: concepts,
            reference_style_description: reference_style_description.into(),
            style_prompt: default_style_prompt(),
            icon_size: default_icon_size(),
            stroke_width: default_stroke_width(),
            semantic_group: default_semantic_group(),
            visual_weight: default_visual_weight(),
            border_style: ShapeStyle::None,
            background_shape: ShapeStyle::None,
            color_palette: default_icon_set_palette(),
        }
    }

    /// Parse a request from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The palette to render: the configured one, or the default when empty.
    pub fn palette(&self) -> Vec<String> {
        if self.color_palette.is_empty() {
            default_icon_set_palette()
        } else {
            self.color_palette.clone()
        }
    }

    pub fn with_concept(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.icon_concepts.push(IconConcept::new(name, description));
        self
    }

    pub fn with_style_prompt(mut self, style_prompt: impl Into<String>) -> Self {
        self.style_prompt = style_prompt.into();
        self
    }

    pub fn with_icon_size(mut self, icon_size: impl Into<String>) -> Self {
        self.icon_size = icon_size.into();
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: i32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_semantic_group(mut self, semantic_group: impl Into<String>) -> Self {
        self.semantic_group = semantic_group.into();
        self
    }

    pub fn with_visual_weight(mut self, visual_weight: impl Into<String>) -> Self {
        self.visual_weight = visual_weight.into();
        self
    }

    pub fn with_border_style(mut self, border_style: impl Into<ShapeStyle>) -> Self {
        self.border_style = border_style.into();
        self
    }

    pub fn with_background_shape(mut self, background_shape: impl Into<ShapeStyle>) -> Self {
        self.background_shape = background_shape.into();
        self
    }

    pub fn with_color_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_palette = colors.into_iter().map(Into::into).collect();
        self
    }
}
