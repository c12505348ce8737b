use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Inline style applied to color pickers so they stay a compact swatch.
pub const COLOR_INPUT_STYLE: &str = "width: 50px; padding: 0 4px;";

/// Title hint shown on date inputs that carry the default date pattern.
pub const DEFAULT_DATE_TITLE: &str = "Enter date as DD.MM.YYYY";

/// The set of control kinds a form can contain.
///
/// The string form (`Display`, `FromStr`, serde) is the wire spelling used in
/// JSON form descriptions, e.g. `"colorPicker"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ControlType {
    Input,
    Date,
    Email,
    Checkbox,
    Select,
    Textarea,
    Radio,
    ColorPicker,
}

impl ControlType {
    /// Iterate over every registered control kind, in declaration order.
    pub fn all() -> impl Iterator<Item = ControlType> {
        Self::iter()
    }

    /// Get the wire spelling of this control kind.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The element tag the control renders as.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Textarea => "textarea",
            Self::Select => "select",
            _ => "input",
        }
    }

    /// The `type` attribute the rendered element carries, if any.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Email => Some("email"),
            Self::Checkbox => Some("checkbox"),
            Self::Radio => Some("radio"),
            Self::ColorPicker => Some("color"),
            Self::Input | Self::Date | Self::Select | Self::Textarea => None,
        }
    }

    /// Check if this kind renders as a checkable control (checkbox or radio).
    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// Check if the element carries its content between opening and closing tags.
    pub fn has_closing_tag(self) -> bool {
        matches!(self, Self::Textarea | Self::Select)
    }
}

/// Input patterns understood by native constraint validation.
///
/// Patterns are matched against the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum InputPattern {
    /// `DD.MM.YYYY`
    Date,
    /// `HH:MM:SS`
    Time,
}

impl InputPattern {
    pub const DATE: &'static str = r"(0[1-9]|1[0-9]|2[0-9]|3[01])\.(0[1-9]|1[012])\.[0-9]{4}";
    pub const TIME: &'static str = "(0[0-9]|1[0-9]|2[0-3])(:[0-5][0-9]){2}";

    /// Get the pattern source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => Self::DATE,
            Self::Time => Self::TIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[test]
    fn enumerates_every_kind_once() {
        let kinds: Vec<_> = ControlType::all().collect();
        assert_eq!(kinds.len(), 8);
        assert_eq!(kinds.first(), Some(&ControlType::Input));
        assert_eq!(kinds.last(), Some(&ControlType::ColorPicker));
    }

    #[rstest]
    #[case(ControlType::Input, "input")]
    #[case(ControlType::Date, "date")]
    #[case(ControlType::Email, "email")]
    #[case(ControlType::Checkbox, "checkbox")]
    #[case(ControlType::Select, "select")]
    #[case(ControlType::Textarea, "textarea")]
    #[case(ControlType::Radio, "radio")]
    #[case(ControlType::ColorPicker, "colorPicker")]
    fn wire_spelling(#[case] kind: ControlType, #[case] spelled: &str) {
        assert_eq!(kind.as_str(), spelled);
        assert_eq!(kind.to_string(), spelled);
        assert_eq!(ControlType::from_str(spelled).unwrap(), kind);
    }

    #[test]
    fn unknown_spelling_is_rejected() {
        assert!(ControlType::from_str("color_picker").is_err());
        assert!(ControlType::from_str("").is_err());
    }

    #[test]
    fn tags_and_types() {
        assert_eq!(ControlType::Date.tag(), "input");
        assert_eq!(ControlType::Date.input_type(), None);
        assert_eq!(ControlType::Textarea.tag(), "textarea");
        assert_eq!(ControlType::ColorPicker.input_type(), Some("color"));
        assert!(ControlType::Radio.is_checkable());
        assert!(!ControlType::Select.is_checkable());
        assert!(ControlType::Select.has_closing_tag());
    }

    #[test]
    fn patterns() {
        assert_eq!(InputPattern::Date.as_str(), InputPattern::DATE);
        assert_eq!(InputPattern::Time.as_str(), InputPattern::TIME);
    }
}
