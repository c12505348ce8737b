/// Error type for reading form configurations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The description is not valid JSON or does not fit the form schema.
    #[error("Invalid form configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value is not a JSON object.
    #[error("Form configuration must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A control names a `controlType` outside the registry.
    #[error("Unknown control type '{control_type}' for control #{index}")]
    UnknownControlType { index: usize, control_type: String },
}

impl ConfigError {
    /// Check if this error was caused by an unregistered control type.
    pub fn is_unknown_control_type(&self) -> bool {
        matches!(self, Self::UnknownControlType { .. })
    }
}
