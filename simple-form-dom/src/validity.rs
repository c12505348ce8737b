//! Native constraint validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Document, NodeId};

/// Addresses accepted by `input[type=email]`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

/// Input types never subject to constraint validation.
const BARRED_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "image"];

/// Input types the `pattern` attribute applies to.
const PATTERN_INPUT_TYPES: &[&str] = &["text", "search", "url", "tel", "email", "password"];

/// The constraint a control failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityState {
    ValueMissing,
    TypeMismatch,
    PatternMismatch,
}

impl fmt::Display for ValidityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ValueMissing => "value missing",
            Self::TypeMismatch => "type mismatch",
            Self::PatternMismatch => "pattern mismatch",
        })
    }
}

/// A control that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityIssue {
    pub node: NodeId,
    pub name: Option<String>,
    pub state: ValidityState,
}

impl fmt::Display for ValidityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}: {}", self.state),
            None => write!(f, "{:?}: {}", self.node, self.state),
        }
    }
}

impl Document {
    /// Check if a control takes part in constraint validation.
    pub fn is_validation_candidate(&self, node: NodeId) -> bool {
        let candidate = match self.tag(node) {
            Some("input") => self
                .input_type(node)
                .is_some_and(|t| !BARRED_INPUT_TYPES.contains(&t.as_str())),
            Some("select" | "textarea") => true,
            _ => false,
        };
        candidate && !self.is_disabled(node)
    }

    /// The first constraint the control currently fails, if any.
    pub fn validity(&self, node: NodeId) -> Option<ValidityState> {
        if !self.is_validation_candidate(node) {
            return None;
        }
        let required = self.has_attribute(node, "required");
        let input_type = self.input_type(node);

        match input_type.as_deref() {
            Some("checkbox") => {
                return (required && !self.checked(node)).then_some(ValidityState::ValueMissing);
            }
            Some("radio") => {
                let group_required = self
                    .radio_group(node)
                    .into_iter()
                    .any(|id| self.has_attribute(id, "required"));
                let any_checked = self.radio_group(node).into_iter().any(|id| self.checked(id));
                return (group_required && !any_checked).then_some(ValidityState::ValueMissing);
            }
            // A color input always has a value.
            Some("color") => return None,
            _ => {}
        }

        let value = self.value(node);
        if value.is_empty() {
            return required.then_some(ValidityState::ValueMissing);
        }

        let input_type = input_type?;
        if input_type == "email" && !EMAIL.is_match(&value) {
            return Some(ValidityState::TypeMismatch);
        }
        if PATTERN_INPUT_TYPES.contains(&input_type.as_str()) {
            if let Some(pattern) = self.attribute(node, "pattern") {
                if !matches_whole(pattern, &value) {
                    return Some(ValidityState::PatternMismatch);
                }
            }
        }
        None
    }

    /// Validate every candidate control inside a form.
    pub fn check_validity(&self, form: NodeId) -> Result<(), Vec<ValidityIssue>> {
        let issues: Vec<_> = self
            .descendants(form)
            .into_iter()
            .filter_map(|node| {
                self.validity(node).map(|state| ValidityIssue {
                    node,
                    name: self.attribute(node, "name").map(str::to_string),
                    state,
                })
            })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Match the entire value against a `pattern` attribute.
///
/// A pattern that does not compile imposes no constraint.
fn matches_whole(pattern: &str, value: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => regex.is_match(value),
        Err(err) => {
            tracing::warn!(pattern, %err, "ignoring invalid pattern");
            true
        }
    }
}
