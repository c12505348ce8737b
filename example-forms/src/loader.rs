use std::path::Path;

use anyhow::Context;
use simple_form_types::FormConfig;

/// A feedback form described in JSON, as a page would ship it.
pub const FEEDBACK_JSON: &str = include_str!("../forms/feedback.json");

/// Parse the bundled feedback form.
pub fn feedback_form() -> anyhow::Result<FormConfig> {
    FormConfig::from_json_str(FEEDBACK_JSON).context("Bundled feedback form is malformed")
}

/// Read a form description from a JSON file.
pub fn load_form(path: impl AsRef<Path>) -> anyhow::Result<FormConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form description {}", path.display()))?;
    let config = FormConfig::from_json_str(&json)
        .with_context(|| format!("Invalid form description in {}", path.display()))?;
    tracing::debug!(path = %path.display(), controls = config.len(), "loaded form description");
    Ok(config)
}
