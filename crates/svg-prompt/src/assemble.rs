//! The two prompt assemblers.
//!
//! Both are pure: they read the request, apply palette defaults, and return a
//! freshly built string. No value is validated; unusual tokens and
//! out-of-range numbers are written into the prompt as given.

use crate::builder::{BulletList, PromptBuilder};
use crate::fragment;
use crate::request::{IconSetRequest, SingleGraphicRequest};
use tracing::debug;

pub const SINGLE_GRAPHIC_HEADING: &str =
    "Create a clean, scalable SVG graphic with the following specifications:";
pub const SINGLE_GRAPHIC_CLOSING: &str =
    "Output only the complete SVG code, starting with <svg> and ending with </svg>.";

pub const ICON_SET_HEADING: &str = "Create a cohesive set of SVG icons with consistent styling:";
pub const ICON_SET_CLOSING: &str =
    "Generate each icon as a separate, complete SVG code block, clearly labeled with the icon name.";

const SINGLE_TECHNICAL_REQUIREMENTS: &[&str] = &[
    "Generate valid, optimized SVG code",
    "Use semantic element names and structure",
    "Include proper viewBox for scalability",
    "Ensure accessibility with descriptive titles",
    "Keep code clean and minimal",
    "Make sure all paths are properly closed",
    "Use consistent spacing and indentation",
];

const ICON_SET_TECHNICAL_REQUIREMENTS: &[&str] = &[
    "Each icon should be a complete, valid SVG",
    "Use consistent viewBox dimensions",
    "Maintain visual harmony across the set",
    "Ensure all icons work at small sizes",
    "Use semantic, descriptive element structure",
    "Include accessibility attributes",
];

const ICON_SET_CONSISTENCY_RULES: &[&str] = &[
    "Same stroke width and line endings",
    "Consistent corner radius treatment",
    "Uniform optical sizing and balance",
    "Matching level of detail and complexity",
    "Coherent visual rhythm and spacing",
];

/// Build the prompt for a single SVG graphic.
///
/// ```
/// use svg_prompt::{SingleGraphicRequest, build_single_graphic_prompt};
///
/// let prompt = build_single_graphic_prompt(&SingleGraphicRequest::new("a lighthouse"));
/// assert!(prompt.contains("Main Request: a lighthouse"));
/// assert!(prompt.contains("#333333, #666666, #999999, #CCCCCC"));
/// ```
pub fn build_single_graphic_prompt(request: &SingleGraphicRequest) -> String {
    let palette = request.palette();
    debug!(
        colors = palette.len(),
        border = %request.border_style,
        background_shape = %request.background_shape,
        has_reference = request.reference_image_description.is_some(),
        "assembling single graphic prompt"
    );

    let style = BulletList::new()
        .item("Visual style", &request.style)
        .item("Complexity level", &request.complexity)
        .item("Fill approach", &request.fill_style)
        .item("Corner treatment", &request.corner_style)
        .item("Stroke width", format_args!("{}px", request.stroke_width))
        .item("Background", &request.background)
        .item(
            "Viewbox padding",
            format!(
                "{}px{}{}{}",
                request.viewbox_padding,
                fragment::render(fragment::border_fragment(&request.border_style)),
                fragment::render(fragment::background_shape_fragment(&request.background_shape)),
                fragment::render(fragment::reference_fragment(
                    request.reference_image_description.as_deref()
                )),
            ),
        );

    PromptBuilder::new(SINGLE_GRAPHIC_HEADING)
        .line(format!("Main Request: {}", request.prompt))
        .bullets("Style Requirements", style)
        .section("Color Palette (use only these colors)", palette.join(", "))
        .bullets(
            "Technical Requirements",
            BulletList::new().extend_text(SINGLE_TECHNICAL_REQUIREMENTS),
        )
        .line(SINGLE_GRAPHIC_CLOSING)
        .build()
}

/// Build the prompt for a cohesive icon set.
///
/// An empty concept list is accepted and leaves the "Icons to Generate"
/// block without entries.
///
/// ```
/// use svg_prompt::{IconConcept, IconSetRequest, build_icon_set_prompt};
///
/// let request = IconSetRequest::new(
///     vec![IconConcept::new("home", "a house shape")],
///     "thin outlined icons",
/// );
/// let prompt = build_icon_set_prompt(&request);
/// assert!(prompt.contains("Icons to Generate:\n- home: a house shape"));
/// ```
pub fn build_icon_set_prompt(request: &IconSetRequest) -> String {
    let palette = request.palette();
    debug!(
        icons = request.icon_concepts.len(),
        colors = palette.len(),
        border = %request.border_style,
        background_shape = %request.background_shape,
        "assembling icon set prompt"
    );

    let icons = request
        .icon_concepts
        .iter()
        .fold(BulletList::new(), |list, icon| list.item(&icon.name, &icon.description));

    let consistency = BulletList::new()
        .item("Icon size", format_args!("{} pixels", request.icon_size))
        .item(
            "Stroke width",
            format_args!("{}px consistently across all icons", request.stroke_width),
        )
        .item("Visual weight", &request.visual_weight)
        .item("Semantic group", &request.semantic_group)
        .item(
            "Color palette",
            format!(
                "{}{}{}",
                palette.join(", "),
                fragment::render(fragment::icon_border_fragment(&request.border_style)),
                fragment::render(fragment::icon_background_fragment(&request.background_shape)),
            ),
        );

    PromptBuilder::new(ICON_SET_HEADING)
        .line(format!(
            "Reference Style: {}\nStyle Direction: {}",
            request.reference_style_description, request.style_prompt
        ))
        .bullets("Icons to Generate", icons)
        .bullets("Design Consistency Requirements", consistency)
        .bullets(
            "Technical Requirements",
            BulletList::new().extend_text(ICON_SET_TECHNICAL_REQUIREMENTS),
        )
        .bullets(
            "Style Consistency Rules",
            BulletList::new().extend_text(ICON_SET_CONSISTENCY_RULES),
        )
        .line(ICON_SET_CLOSING)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ShapeStyle;
    use crate::request::IconConcept;

    #[test]
    fn single_graphic_full_text_with_defaults() {
        let prompt = build_single_graphic_prompt(&SingleGraphicRequest::new("a coffee cup"));
        let expected = "\
Create a clean, scalable SVG graphic with the following specifications:

Main Request: a coffee cup

Style Requirements:
- Visual style: minimalist
- Complexity level: simple
- Fill approach: filled
- Corner treatment: rounded
- Stroke width: 2px
- Background: transparent
- Viewbox padding: 10px

Color Palette (use only these colors):
#333333, #666666, #999999, #CCCCCC

Technical Requirements:
- Generate valid, optimized SVG code
- Use semantic element names and structure
- Include proper viewBox for scalability
- Ensure accessibility with descriptive titles
- Keep code clean and minimal
- Make sure all paths are properly closed
- Use consistent spacing and indentation

Output only the complete SVG code, starting with <svg> and ending with </svg>.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn single_graphic_fragments_follow_padding_in_order() {
        let request = SingleGraphicRequest::new("a bell")
            .with_border_style(ShapeStyle::Square)
            .with_background_shape(ShapeStyle::Circle)
            .with_reference_image_description("hand-drawn sketch style");
        let prompt = build_single_graphic_prompt(&request);
        assert!(prompt.contains(
            "- Viewbox padding: 10px\n\
             - Border style: square border around the icon\n\
             - Background shape: circle background behind the icon content\n\
             - Reference style: hand-drawn sketch style\n\n\
             Color Palette"
        ));
    }

    #[test]
    fn single_graphic_passes_values_through_unvalidated() {
        let request = SingleGraphicRequest::new("")
            .with_stroke_width(-3)
            .with_viewbox_padding(0)
            .with_corner_style("wobbly");
        let prompt = build_single_graphic_prompt(&request);
        assert!(prompt.contains("Main Request: \n"));
        assert!(prompt.contains("- Stroke width: -3px"));
        assert!(prompt.contains("- Viewbox padding: 0px"));
        assert!(prompt.contains("- Corner treatment: wobbly"));
    }

    #[test]
    fn icon_set_full_text_with_fragments() {
        let request = IconSetRequest::new(
            vec![
                IconConcept::new("home", "a house shape"),
                IconConcept::new("search", "a magnifying glass"),
            ],
            "thin outlined icons",
        )
        .with_border_style(ShapeStyle::Circle)
        .with_background_shape(ShapeStyle::RoundedSquare)
        .with_color_palette(["#112233", "#445566", "#778899"]);
        let prompt = build_icon_set_prompt(&request);
        let expected = "\
Create a cohesive set of SVG icons with consistent styling:

Reference Style: thin outlined icons
Style Direction: consistent minimalist design

Icons to Generate:
- home: a house shape
- search: a magnifying glass

Design Consistency Requirements:
- Icon size: 24x24 pixels
- Stroke width: 2px consistently across all icons
- Visual weight: regular
- Semantic group: interface
- Color palette: #112233, #445566, #778899
- Border style: Each icon must have a circle border
- Background shape: Each icon must have a rounded_square background shape

Technical Requirements:
- Each icon should be a complete, valid SVG
- Use consistent viewBox dimensions
- Maintain visual harmony across the set
- Ensure all icons work at small sizes
- Use semantic, descriptive element structure
- Include accessibility attributes

Style Consistency Rules:
- Same stroke width and line endings
- Consistent corner radius treatment
- Uniform optical sizing and balance
- Matching level of detail and complexity
- Coherent visual rhythm and spacing

Generate each icon as a separate, complete SVG code block, clearly labeled with the icon name.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn empty_reference_description_leaves_padding_line_alone() {
        let request = SingleGraphicRequest::new("a bell").with_reference_image_description("");
        let prompt = build_single_graphic_prompt(&request);
        assert!(prompt.contains("- Viewbox padding: 10px\n\nColor Palette"));
    }

    #[test]
    fn icon_set_with_no_concepts_has_empty_icon_block() {
        let prompt = build_icon_set_prompt(&IconSetRequest::new(Vec::new(), "flat"));
        assert!(prompt.contains("Icons to Generate:\n\n\nDesign Consistency Requirements:"));
    }

    #[test]
    fn icon_set_default_palette() {
        let prompt = build_icon_set_prompt(&IconSetRequest::new(Vec::new(), "flat"));
        assert!(prompt.contains("- Color palette: #333333, #666666\n"));
    }
}
