#![doc = include_str!("../README.md")]

pub use simple_form_dom::{
    ClickOutcome, Document, DomError, Event, EventKind, FormData, ListenerHandle, NodeId,
    Submission, ValidityIssue, ValidityState,
};
pub use simple_form_html::{assemble_form, classes, render_control_html, render_form_html};
pub use simple_form_types::*;

mod controller;
pub use controller::FormController;

mod submit;
pub use submit::{NormalizeReport, SubmitError, normalize_submission};

mod stylesheet;
pub use stylesheet::{KNOWN_STYLESHEETS, StylesheetStatus, ensure_stylesheet, is_stylesheet_loaded};
