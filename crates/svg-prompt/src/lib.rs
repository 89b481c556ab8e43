//! Prompt assembly for SVG graphic and icon-set generation.
//!
//! `svg-prompt` turns a set of stylistic parameters into the natural-language
//! prompt an image model receives when asked for SVG output. There are two
//! entry points:
//!
//! - [`build_single_graphic_prompt`] for one graphic described by a
//!   [`SingleGraphicRequest`];
//! - [`build_icon_set_prompt`] for a cohesive set of icons described by an
//!   [`IconSetRequest`].
//!
//! Both are pure functions. Unset fields fall back to documented defaults and
//! optional fragments (border, background shape, reference style) appear only
//! when their field is set. Values are never validated by the assemblers;
//! call `validate()` on a request when strict checking is wanted.
//!
//! # Example
//!
//! ```
//! use svg_prompt::{ShapeStyle, SingleGraphicRequest, build_single_graphic_prompt};
//!
//! let request = SingleGraphicRequest::new("a mountain at sunrise")
//!     .with_fill_style("outline")
//!     .with_border_style(ShapeStyle::Circle)
//!     .with_color_palette(["#1D3557", "#E63946"]);
//!
//! let prompt = build_single_graphic_prompt(&request);
//! assert!(prompt.contains("- Border style: circle border around the icon"));
//! assert!(prompt.contains("#1D3557, #E63946"));
//! ```

pub mod assemble;
pub mod builder;
pub mod fragment;
pub mod options;
pub mod request;
pub mod schema;
pub mod validate;

pub use assemble::{build_icon_set_prompt, build_single_graphic_prompt};
pub use options::ShapeStyle;
pub use request::{IconConcept, IconSetRequest, SingleGraphicRequest};
pub use validate::ValidationError;
