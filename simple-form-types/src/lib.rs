//! Core types for the simple-form crates.
//!
//! This crate provides the foundational types for describing forms:
//! - `FormConfig` - The top-level form description (action, header, controls)
//! - `Control` and `ControlKind` - Individual controls and their kind-specific fields
//! - `ControlType` and `InputPattern` - The static registry of control kinds and patterns
//! - `ConfigError` - Errors raised while reading a JSON form description

mod control_type;
pub use control_type::{COLOR_INPUT_STYLE, ControlType, DEFAULT_DATE_TITLE, InputPattern};

mod lenient;

mod control;
pub use control::{
    Checkbox, ColorPicker, Control, ControlKind, GRID_COLUMNS, Radio, RadioOption, Select,
    Textarea, TextInput,
};

mod form_config;
pub use form_config::{FormAction, FormConfig, StylesheetOptions};

mod error;
pub use error::ConfigError;
