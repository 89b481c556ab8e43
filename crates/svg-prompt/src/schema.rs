//! JSON Schema export for request files.

use crate::request::{IconSetRequest, SingleGraphicRequest};
use schemars::schema_for;

/// JSON Schema describing a [`SingleGraphicRequest`] file.
pub fn single_graphic_schema() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(schema_for!(SingleGraphicRequest))
}

/// JSON Schema describing an [`IconSetRequest`] file.
pub fn icon_set_schema() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(schema_for!(IconSetRequest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_schema_requires_only_prompt() {
        let schema = single_graphic_schema().unwrap();
        assert_eq!(schema["title"], "SingleGraphicRequest");
        assert_eq!(schema["required"], serde_json::json!(["prompt"]));
        assert!(schema["properties"]["border_style"].is_object());
    }

    #[test]
    fn icon_set_schema_lists_concepts() {
        let schema = icon_set_schema().unwrap();
        assert_eq!(schema["title"], "IconSetRequest");
        assert_eq!(
            schema["required"],
            serde_json::json!(["reference_style_description"])
        );
        assert!(schema["properties"]["icon_concepts"].is_object());
        assert!(schema["definitions"]["IconConcept"].is_object());
    }
}
