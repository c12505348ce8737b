use serde::{Deserialize, Serialize};

use crate::ControlType;

/// Number of grid units in one form row.
pub const GRID_COLUMNS: u8 = 12;

/// A single control in a form.
///
/// Fields shared by every kind live here; kind-specific fields live in
/// [`ControlKind`]. Every optional field may be absent, in which case the
/// rendered markup simply omits the matching attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// The kind of control and the fields only that kind uses.
    #[serde(flatten)]
    pub kind: ControlKind,

    /// Label text shown next to the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Submitted field name. Falls back to the element id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Element id. Derived from the position in the form when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Tooltip text (`title` attribute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Help text rendered under the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Width in grid units (1-12, default 12). Out-of-range widths are clamped.
    #[serde(
        default,
        deserialize_with = "crate::lenient::grid_units",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns: Option<i64>,

    /// Offset in grid units (0-11, default 0). Out-of-range offsets are clamped.
    #[serde(
        default,
        deserialize_with = "crate::lenient::grid_units",
        skip_serializing_if = "Option::is_none"
    )]
    pub offset: Option<i64>,

    /// Pad the rest of the row so the next control starts on a new line.
    #[serde(default)]
    pub full_width: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub required: bool,
}

impl Control {
    /// Create a new control of the given kind with every common field unset.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            label: None,
            name: None,
            id: None,
            title: None,
            help: None,
            columns: None,
            offset: None,
            full_width: false,
            disabled: false,
            required: false,
        }
    }

    pub fn input() -> Self {
        Self::new(ControlKind::Input(TextInput::default()))
    }

    pub fn date() -> Self {
        Self::new(ControlKind::Date(TextInput::default()))
    }

    pub fn email() -> Self {
        Self::new(ControlKind::Email(TextInput::default()))
    }

    pub fn textarea() -> Self {
        Self::new(ControlKind::Textarea(Textarea::default()))
    }

    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ControlKind::Select(Select {
            options: options.into_iter().map(Into::into).collect(),
        }))
    }

    pub fn checkbox(checked: bool) -> Self {
        Self::new(ControlKind::Checkbox(Checkbox { value: checked }))
    }

    pub fn radio(options: Vec<RadioOption>) -> Self {
        Self::new(ControlKind::Radio(Radio { options }))
    }

    pub fn color_picker() -> Self {
        Self::new(ControlKind::ColorPicker(ColorPicker::default()))
    }

    /// Get the registry entry for this control's kind.
    pub fn control_type(&self) -> ControlType {
        self.kind.control_type()
    }

    /// Set the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the submitted field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the layout width in grid units.
    pub fn with_columns(mut self, columns: u8) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Set the layout offset in grid units.
    pub fn with_offset(mut self, offset: u8) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Force the next control onto a new row.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the current value.
    ///
    /// Applies to text-like kinds and color pickers; other kinds keep their value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            ControlKind::Input(text) | ControlKind::Date(text) | ControlKind::Email(text) => {
                text.value = Some(value.into());
            }
            ControlKind::Textarea(textarea) => textarea.value = Some(value.into()),
            ControlKind::ColorPicker(color) => color.value = Some(value.into()),
            ControlKind::Select(_) | ControlKind::Checkbox(_) | ControlKind::Radio(_) => {
                tracing::warn!(
                    control_type = %self.kind.control_type(),
                    "control kind has no text value, ignoring"
                );
            }
        }
        self
    }

    /// Set the placeholder text for text-like kinds.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        match &mut self.kind {
            ControlKind::Input(text) | ControlKind::Date(text) | ControlKind::Email(text) => {
                text.placeholder = Some(placeholder.into());
            }
            ControlKind::Textarea(textarea) => textarea.placeholder = Some(placeholder.into()),
            _ => {
                tracing::warn!(
                    control_type = %self.kind.control_type(),
                    "control kind has no placeholder, ignoring"
                );
            }
        }
        self
    }

    /// Override the input pattern for text-like kinds.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        match &mut self.kind {
            ControlKind::Input(text) | ControlKind::Date(text) | ControlKind::Email(text) => {
                text.pattern = Some(pattern.into());
            }
            _ => {
                tracing::warn!(
                    control_type = %self.kind.control_type(),
                    "control kind has no pattern, ignoring"
                );
            }
        }
        self
    }

    /// Set the visible row count of a textarea.
    pub fn with_rows(mut self, rows: u32) -> Self {
        if let ControlKind::Textarea(textarea) = &mut self.kind {
            textarea.rows = Some(rows);
        } else {
            tracing::warn!(
                control_type = %self.kind.control_type(),
                "only textareas have rows, ignoring"
            );
        }
        self
    }

    /// Effective width in grid units, clamped into `1..=12`.
    pub fn columns(&self) -> u8 {
        let Some(columns) = self.columns else {
            return GRID_COLUMNS;
        };
        let clamped = columns.clamp(1, i64::from(GRID_COLUMNS)) as u8;
        if i64::from(clamped) != columns {
            tracing::warn!(columns, clamped, "control width out of grid range");
        }
        clamped
    }

    /// Effective offset in grid units, clamped into `0..=11`.
    pub fn offset(&self) -> u8 {
        let Some(offset) = self.offset else {
            return 0;
        };
        let clamped = offset.clamp(0, i64::from(GRID_COLUMNS - 1)) as u8;
        if i64::from(clamped) != offset {
            tracing::warn!(offset, clamped, "control offset out of grid range");
        }
        clamped
    }

    /// Width of the filler cell that follows a full-width control.
    ///
    /// `None` when the control is not full width or already fills the row.
    pub fn filler_columns(&self) -> Option<u8> {
        let remaining = GRID_COLUMNS - self.columns();
        (self.full_width && remaining > 0).then_some(remaining)
    }
}

/// The kind of control, carrying the fields only that kind uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "controlType", rename_all = "camelCase")]
pub enum ControlKind {
    /// Single-line text input.
    Input(TextInput),

    /// Text input constrained to `DD.MM.YYYY` unless a pattern is given.
    Date(TextInput),

    /// Text input with `type="email"`.
    Email(TextInput),

    /// Multi-line text input.
    Textarea(Textarea),

    /// Drop-down list.
    Select(Select),

    /// Single checkbox submitting `"true"` or `"false"`.
    Checkbox(Checkbox),

    /// Group of radio buttons sharing one field name.
    Radio(Radio),

    /// Color swatch input.
    ColorPicker(ColorPicker),
}

impl ControlKind {
    /// Get the registry entry for this kind.
    pub fn control_type(&self) -> ControlType {
        match self {
            Self::Input(_) => ControlType::Input,
            Self::Date(_) => ControlType::Date,
            Self::Email(_) => ControlType::Email,
            Self::Textarea(_) => ControlType::Textarea,
            Self::Select(_) => ControlType::Select,
            Self::Checkbox(_) => ControlType::Checkbox,
            Self::Radio(_) => ControlType::Radio,
            Self::ColorPicker(_) => ControlType::ColorPicker,
        }
    }
}

/// Fields of the text-like kinds (`input`, `date`, `email`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Pattern the whole value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Textarea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Initial text, rendered as element content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

/// Drop-down options.
///
/// Each option is label text only; the submitted value is the label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Select {
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkbox {
    /// Whether the checkbox starts checked. Any truthy JSON value counts.
    #[serde(deserialize_with = "crate::lenient::truthy")]
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Radio {
    pub options: Vec<RadioOption>,
}

/// One button in a radio group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    pub checked: bool,

    pub disabled: bool,
}

impl RadioOption {
    /// Create a new option with the given label and submitted value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value.into()),
            checked: false,
            disabled: false,
        }
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPicker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_tagged_kind_next_to_common_fields() {
        let control: Control = serde_json::from_value(json!({
            "controlType": "textarea",
            "label": "Comment",
            "rows": 4,
            "value": "hello",
            "columns": 6,
            "fullWidth": true,
            "required": true
        }))
        .unwrap();

        assert_eq!(control.control_type(), ControlType::Textarea);
        assert_eq!(control.label.as_deref(), Some("Comment"));
        assert_eq!(control.columns(), 6);
        assert!(control.full_width);
        assert!(control.required);
        assert!(!control.disabled);
        let ControlKind::Textarea(textarea) = &control.kind else {
            panic!("Expected textarea kind");
        };
        assert_eq!(textarea.rows, Some(4));
        assert_eq!(textarea.value.as_deref(), Some("hello"));
    }

    #[test]
    fn deserializes_radio_options() {
        let control: Control = serde_json::from_value(json!({
            "controlType": "radio",
            "name": "size",
            "options": [
                { "label": "Small", "value": "s" },
                { "label": "Large", "value": "l", "checked": true, "disabled": true }
            ]
        }))
        .unwrap();

        let ControlKind::Radio(radio) = &control.kind else {
            panic!("Expected radio kind");
        };
        assert_eq!(radio.options.len(), 2);
        assert_eq!(radio.options[1], RadioOption::new("Large", "l").checked().disabled());
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let control: Control = serde_json::from_value(json!({ "controlType": "select" })).unwrap();
        assert_eq!(control.kind, ControlKind::Select(Select::default()));
        assert_eq!(control.label, None);
        assert_eq!(control.columns(), GRID_COLUMNS);
        assert_eq!(control.offset(), 0);
    }

    #[test]
    fn color_picker_wire_name() {
        let control: Control =
            serde_json::from_value(json!({ "controlType": "colorPicker", "value": "#ff0000" }))
                .unwrap();
        assert_eq!(control.control_type(), ControlType::ColorPicker);

        let value = serde_json::to_value(&control).unwrap();
        assert_eq!(value["controlType"], "colorPicker");
        assert_eq!(value["value"], "#ff0000");
    }

    #[rstest]
    #[case(None, 12)]
    #[case(Some(0), 1)]
    #[case(Some(4), 4)]
    #[case(Some(12), 12)]
    #[case(Some(40), 12)]
    #[case(Some(-3), 1)]
    fn columns_are_clamped(#[case] columns: Option<i64>, #[case] expected: u8) {
        let mut control = Control::input();
        control.columns = columns;
        assert_eq!(control.columns(), expected);
    }

    #[rstest]
    #[case(None, 0)]
    #[case(Some(0), 0)]
    #[case(Some(5), 5)]
    #[case(Some(11), 11)]
    #[case(Some(12), 11)]
    #[case(Some(300), 11)]
    #[case(Some(-1), 0)]
    fn offset_is_clamped(#[case] offset: Option<i64>, #[case] expected: u8) {
        let mut control = Control::input();
        control.offset = offset;
        assert_eq!(control.offset(), expected);
    }

    #[test]
    fn wrong_typed_layout_and_checkbox_values_degrade() {
        let wide: Control =
            serde_json::from_value(json!({ "controlType": "input", "columns": 300, "offset": "2" }))
                .unwrap();
        assert_eq!(wide.columns(), 12);
        assert_eq!(wide.offset(), 2);

        let checkbox: Control =
            serde_json::from_value(json!({ "controlType": "checkbox", "value": "true" })).unwrap();
        assert_eq!(checkbox.kind, ControlKind::Checkbox(Checkbox { value: true }));

        let unchecked: Control =
            serde_json::from_value(json!({ "controlType": "checkbox", "value": "" })).unwrap();
        assert_eq!(unchecked.kind, ControlKind::Checkbox(Checkbox { value: false }));
    }

    #[rstest]
    #[case(6, true, Some(6))]
    #[case(6, false, None)]
    #[case(12, true, None)]
    #[case(1, true, Some(11))]
    fn filler_width(#[case] columns: u8, #[case] full_width: bool, #[case] expected: Option<u8>) {
        let mut control = Control::email().with_columns(columns);
        control.full_width = full_width;
        assert_eq!(control.filler_columns(), expected);
    }

    #[test]
    fn builder_sets_kind_fields() {
        let control = Control::input()
            .with_value("x")
            .with_placeholder("type here")
            .with_pattern("[a-z]+");
        let ControlKind::Input(text) = &control.kind else {
            panic!("Expected input kind");
        };
        assert_eq!(text.value.as_deref(), Some("x"));
        assert_eq!(text.placeholder.as_deref(), Some("type here"));
        assert_eq!(text.pattern.as_deref(), Some("[a-z]+"));
    }

    #[test]
    fn builder_ignores_fields_the_kind_does_not_have() {
        let control = Control::checkbox(true).with_value("nope").with_rows(3);
        assert_eq!(control.kind, ControlKind::Checkbox(Checkbox { value: true }));
    }
}
