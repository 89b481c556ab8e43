//! Command-line argument model and its mapping onto request records.

use clap::{Args, Parser, Subcommand, ValueEnum};
use svg_prompt::{IconConcept, IconSetRequest, SingleGraphicRequest};

/// Build SVG generation prompts and print them to stdout.
#[derive(Debug, Parser)]
#[command(name = "svg-prompt", version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for a single SVG graphic.
    Single(SingleArgs),
    /// Prompt for a cohesive SVG icon set.
    Icons(IconsArgs),
    /// Print the JSON Schema of a request file.
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    Single,
    Icons,
}

/// Options shared by both prompt commands.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Load the whole request from a JSON file. Conflicts with every other request flag.
    #[arg(long, value_name = "FILE")]
    pub request: Option<String>,

    /// Reject requests with unrecognized options or out-of-range values.
    #[arg(long)]
    pub strict: bool,

    /// Stroke width in pixels.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true, conflicts_with = "request")]
    pub stroke_width: i32,

    /// Border drawn around the icon (none, circle, square, rounded_square).
    #[arg(long, default_value = "none", conflicts_with = "request")]
    pub border_style: String,

    /// Shape drawn behind the icon (none, circle, square, rounded_square).
    #[arg(long, default_value = "none", conflicts_with = "request")]
    pub background_shape: String,

    /// Palette color; repeat for several. Omit for the default palette.
    #[arg(long = "color", value_name = "COLOR", conflicts_with = "request")]
    pub colors: Vec<String>,
}

// ── Single graphic ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SingleArgs {
    /// Main description of what to draw.
    #[arg(long, required_unless_present = "request", conflicts_with = "request")]
    pub prompt: Option<String>,

    /// Visual style (minimalist, cartoon, realistic, ...).
    #[arg(long, default_value = "minimalist", conflicts_with = "request")]
    pub style: String,

    /// simple, moderate or detailed.
    #[arg(long, default_value = "simple", conflicts_with = "request")]
    pub complexity: String,

    /// outline, filled or mixed.
    #[arg(long, default_value = "filled", conflicts_with = "request")]
    pub fill_style: String,

    /// sharp, rounded or mixed.
    #[arg(long, default_value = "rounded", conflicts_with = "request")]
    pub corner_style: String,

    /// transparent, solid or a hex color.
    #[arg(long, default_value = "transparent", conflicts_with = "request")]
    pub background: String,

    /// Padding around the content in pixels.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true, conflicts_with = "request")]
    pub viewbox_padding: i32,

    /// Description of a reference image.
    #[arg(long = "reference", value_name = "TEXT", conflicts_with = "request")]
    pub reference: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SingleArgs {
    /// Build the request from flags alone.
    pub fn to_request(&self) -> SingleGraphicRequest {
        let mut request = SingleGraphicRequest::new(self.prompt.clone().unwrap_or_default())
            .with_style(&self.style)
            .with_complexity(&self.complexity)
            .with_fill_style(&self.fill_style)
            .with_corner_style(&self.corner_style)
            .with_stroke_width(self.common.stroke_width)
            .with_background(&self.background)
            .with_viewbox_padding(self.viewbox_padding)
            .with_border_style(self.common.border_style.as_str())
            .with_background_shape(self.common.background_shape.as_str());
        if let Some(reference) = &self.reference {
            request = request.with_reference_image_description(reference);
        }
        if !self.common.colors.is_empty() {
            request = request.with_color_palette(self.common.colors.iter().cloned());
        }
        request
    }
}

// ── Icon set ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct IconsArgs {
    /// Description of the reference icon style.
    #[arg(long, required_unless_present = "request", conflicts_with = "request")]
    pub reference_style: Option<String>,

    /// Icon to generate as NAME=DESCRIPTION; repeat for several.
    #[arg(
        long = "icon",
        value_name = "NAME=DESCRIPTION",
        value_parser = parse_icon,
        conflicts_with = "request"
    )]
    pub icons: Vec<IconConcept>,

    /// Overall style direction.
    #[arg(long, default_value = "consistent minimalist design", conflicts_with = "request")]
    pub style_prompt: String,

    /// Size specifier such as 24x24.
    #[arg(long, default_value = "24x24", conflicts_with = "request")]
    pub icon_size: String,

    /// Category of icons (navigation, actions, ...).
    #[arg(long, default_value = "interface", conflicts_with = "request")]
    pub semantic_group: String,

    /// light, regular or bold.
    #[arg(long, default_value = "regular", conflicts_with = "request")]
    pub visual_weight: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl IconsArgs {
    /// Build the request from flags alone.
    pub fn to_request(&self) -> IconSetRequest {
        let mut request = IconSetRequest::new(
            self.icons.clone(),
            self.reference_style.clone().unwrap_or_default(),
        )
        .with_style_prompt(&self.style_prompt)
        .with_icon_size(&self.icon_size)
        .with_stroke_width(self.common.stroke_width)
        .with_semantic_group(&self.semantic_group)
        .with_visual_weight(&self.visual_weight)
        .with_border_style(self.common.border_style.as_str())
        .with_background_shape(self.common.background_shape.as_str());
        if !self.common.colors.is_empty() {
            request = request.with_color_palette(self.common.colors.iter().cloned());
        }
        request
    }
}

/// Parse `NAME=DESCRIPTION`, splitting on the first `=`.
pub fn parse_icon(value: &str) -> Result<IconConcept, String> {
    match value.split_once('=') {
        Some((name, description)) => Ok(IconConcept::new(name.trim(), description.trim())),
        None => Err(format!("expected NAME=DESCRIPTION, got '{value}'")),
    }
}
