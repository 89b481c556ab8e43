//! Request files.

use std::path::Path;
use svg_prompt::{IconSetRequest, SingleGraphicRequest};
use tracing::debug;

fn read_request_file(path: &Path) -> Result<String, String> {
    debug!(path = %path.display(), "reading request file");
    std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read request file '{}': {e}", path.display()))
}

/// Load a single-graphic request from a JSON file.
pub fn load_single_request(path: &Path) -> Result<SingleGraphicRequest, String> {
    let content = read_request_file(path)?;
    SingleGraphicRequest::from_json(&content)
        .map_err(|e| format!("failed to parse request file '{}': {e}", path.display()))
}

/// Load an icon-set request from a JSON file.
pub fn load_icon_set_request(path: &Path) -> Result<IconSetRequest, String> {
    let content = read_request_file(path)?;
    IconSetRequest::from_json(&content)
        .map_err(|e| format!("failed to parse request file '{}': {e}", path.display()))
}
