use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Control, ControlType};

/// Where and how the form is submitted.
///
/// Both fields are optional so that a caller-supplied action replaces the
/// default one entirely: a missing `method` is omitted from the markup rather
/// than inherited from the default action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAction {
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub method: Option<String>,
}

impl FormAction {
    pub fn new(address: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            method: Some(method.into()),
        }
    }
}

impl Default for FormAction {
    fn default() -> Self {
        Self::new("/rest", "post")
    }
}

/// Attributes of the stylesheet link injected when the framework CSS is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylesheetOptions {
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub integrity: Option<String>,

    #[serde(default)]
    pub crossorigin: Option<String>,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            href: Some(
                "https://stackpath.bootstrapcdn.com/bootstrap/4.3.1/css/bootstrap.min.css".into(),
            ),
            integrity: Some(
                "sha384-ggOyR0iXCbMQv3Xipma34MD+dH/1fQ784/j6cY/iJTQUOhcWr7x9JvoRxT2MZw1T".into(),
            ),
            crossorigin: Some("anonymous".into()),
        }
    }
}

/// The top-level description of a form.
///
/// Deserialization merges the caller's object over [`FormConfig::default`]
/// shallowly: every top-level key the caller gives replaces the default
/// value wholesale, nested objects such as `formAction` included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Submission target.
    pub form_action: FormAction,

    /// Text of the submit button.
    pub submit_button_text: String,

    /// Check the page for the framework stylesheet and inject it if missing.
    #[serde(rename = "checkBootstrapStylesLoaded")]
    pub check_stylesheet_loaded: bool,

    /// Attributes of the injected stylesheet link.
    #[serde(rename = "bootstrapStylesOptions")]
    pub stylesheet: StylesheetOptions,

    /// Header text. `None` (JSON `null`) renders no header at all.
    pub form_header: Option<String>,

    /// Controls in display order.
    pub form_controls: Vec<Control>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_action: FormAction::default(),
            submit_button_text: "Submit".into(),
            check_stylesheet_loaded: true,
            stylesheet: StylesheetOptions::default(),
            form_header: Some("Please fill the form".into()),
            form_controls: Vec::new(),
        }
    }
}

impl FormConfig {
    /// Create a form with default settings and the given controls.
    pub fn new(controls: Vec<Control>) -> Self {
        Self {
            form_controls: controls,
            ..Self::default()
        }
    }

    /// Read a JSON form description, merging it over the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Read a parsed JSON form description, merging it over the defaults.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let Some(object) = value.as_object() else {
            return Err(ConfigError::NotAnObject(json_type_name(&value)));
        };

        if let Some(controls) = object.get("formControls").and_then(|c| c.as_array()) {
            for (index, control) in controls.iter().enumerate() {
                let Some(control_type) = control.get("controlType").and_then(|t| t.as_str())
                else {
                    continue;
                };
                if ControlType::from_str(control_type).is_err() {
                    return Err(ConfigError::UnknownControlType {
                        index,
                        control_type: control_type.to_string(),
                    });
                }
            }
        }

        let config: Self = serde_json::from_value(value)?;
        tracing::debug!(
            controls = config.form_controls.len(),
            header = config.form_header.is_some(),
            "loaded form configuration"
        );
        Ok(config)
    }

    /// Set the submission target.
    pub fn with_action(mut self, address: impl Into<String>, method: impl Into<String>) -> Self {
        self.form_action = FormAction::new(address, method);
        self
    }

    /// Set the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.form_header = Some(header.into());
        self
    }

    /// Render the form without a header.
    pub fn without_header(mut self) -> Self {
        self.form_header = None;
        self
    }

    pub fn with_submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_button_text = text.into();
        self
    }

    /// Enable or disable the stylesheet check.
    pub fn check_stylesheet(mut self, check: bool) -> Self {
        self.check_stylesheet_loaded = check;
        self
    }

    /// Append a control.
    pub fn with_control(mut self, control: Control) -> Self {
        self.form_controls.push(control);
        self
    }

    /// Get the controls.
    pub fn controls(&self) -> &[Control] {
        &self.form_controls
    }

    /// Check if the form has any controls.
    pub fn is_empty(&self) -> bool {
        self.form_controls.is_empty()
    }

    /// Get the number of controls.
    pub fn len(&self) -> usize {
        self.form_controls.len()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
