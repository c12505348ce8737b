//! Class names the generated markup relies on.
//!
//! The page-side code locates forms, checkboxes and the hidden-input
//! container through these, so they are shared rather than repeated.

/// Marks the outer container of every generated form.
pub const FORM_ROOT: &str = "bootstrap-simple-form";

/// Container receiving the hidden inputs synthesized on submit.
pub const HIDDEN_INPUTS: &str = "invisible-inputs-container";

/// Class of plain value-holding controls.
pub const FORM_CONTROL: &str = "form-control";

/// Class of checkbox and radio elements.
pub const FORM_CHECK_INPUT: &str = "form-check-input";

/// Class of checkbox and radio labels.
pub const FORM_CHECK_LABEL: &str = "form-check-label";

/// Wrapper around a single checkbox or radio button.
pub const FORM_CHECK: &str = "form-check";

/// Row holding every control cell.
pub const FORM_ROW: &str = "form-row";
