//! Block-structured prompt builder.
//!
//! [`PromptBuilder`] assembles a prompt out of blocks separated by a blank
//! line. A block is either a raw line of text or a `Heading:` line followed
//! by its body. [`BulletList`] renders `- ` prefixed lines for section bodies.

/// Builder for blank-line separated prompt blocks.
///
/// # Example
///
/// ```
/// use svg_prompt::builder::{BulletList, PromptBuilder};
///
/// let prompt = PromptBuilder::new("Draw something:")
///     .line("Main Request: a cat")
///     .bullets(
///         "Style Requirements",
///         BulletList::new().item("Visual style", "flat"),
///     )
///     .line("Output only SVG.")
///     .build();
///
/// assert_eq!(
///     prompt,
///     "Draw something:\n\nMain Request: a cat\n\nStyle Requirements:\n- Visual style: flat\n\nOutput only SVG."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    blocks: Vec<String>,
}

impl PromptBuilder {
    /// Create a new builder whose first block is `preamble`, included as-is.
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            blocks: vec![preamble.into()],
        }
    }

    /// Append a raw block without a heading.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(text.into());
        self
    }

    /// Append a `Heading:` block followed by `body` on the next line.
    ///
    /// Unlike a raw block, an empty body is not skipped: the heading line is
    /// still emitted and the body line is left empty.
    pub fn section(mut self, heading: &str, body: impl AsRef<str>) -> Self {
        self.blocks.push(format!("{heading}:\n{}", body.as_ref()));
        self
    }

    /// Append a `Heading:` block whose body is a rendered bullet list.
    pub fn bullets(self, heading: &str, list: BulletList) -> Self {
        self.section(heading, list.render())
    }

    /// Join all blocks with a blank line.
    pub fn build(self) -> String {
        self.blocks.join("\n\n")
    }
}

/// A list of `- ` prefixed lines.
#[derive(Debug, Clone, Default)]
pub struct BulletList {
    lines: Vec<String>,
}

impl BulletList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `- {label}: {value}`.
    pub fn item(mut self, label: &str, value: impl std::fmt::Display) -> Self {
        self.lines.push(format!("- {label}: {value}"));
        self
    }

    /// Append `- {text}`.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.lines.push(format!("- {}", text.as_ref()));
        self
    }

    /// Append every entry of `texts` as a plain bullet.
    pub fn extend_text<I, S>(self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts.into_iter().fold(self, |list, t| list.text(t))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the list as newline-joined lines. An empty list renders as `""`.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_only() {
        let prompt = PromptBuilder::new("Just this.").build();
        assert_eq!(prompt, "Just this.");
    }

    #[test]
    fn blocks_separated_by_blank_line() {
        let prompt = PromptBuilder::new("A").line("B").line("C").build();
        assert_eq!(prompt, "A\n\nB\n\nC");
    }

    #[test]
    fn section_renders_heading_with_colon() {
        let prompt = PromptBuilder::new("P")
            .section("Color Palette", "#000000, #FFFFFF")
            .build();
        assert_eq!(prompt, "P\n\nColor Palette:\n#000000, #FFFFFF");
    }

    #[test]
    fn empty_section_body_keeps_heading() {
        let prompt = PromptBuilder::new("P")
            .bullets("Icons to Generate", BulletList::new())
            .line("Next")
            .build();
        assert_eq!(prompt, "P\n\nIcons to Generate:\n\n\nNext");
    }

    #[test]
    fn items_render_label_and_value() {
        let list = BulletList::new()
            .item("Stroke width", "2px")
            .item("Background", "transparent");
        assert_eq!(list.len(), 2);
        assert_eq!(list.render(), "- Stroke width: 2px\n- Background: transparent");
    }

    #[test]
    fn extend_text_keeps_order() {
        let list = BulletList::new().extend_text(["first", "second"]);
        assert_eq!(list.render(), "- first\n- second");
    }

    #[test]
    fn empty_list_renders_empty_string() {
        let list = BulletList::new();
        assert!(list.is_empty());
        assert_eq!(list.render(), "");
    }
}
