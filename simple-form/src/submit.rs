//! Submit-time normalization.
//!
//! Browsers leave unchecked checkboxes, disabled controls and radio groups
//! without a selection out of the submitted data. Before the form is sent,
//! [`normalize_submission`] mirrors each of those into a hidden input so every
//! declared name reaches the server.

use simple_form_dom::{Document, DomError, NodeId, ValidityIssue};
use simple_form_html::classes;

/// Reasons a submission is aborted.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The submit control is not inside a generated form.
    #[error("can't find form to submit")]
    FormNotFound,

    /// Native validation rejected at least one control.
    #[error("make sure form is valid before submit")]
    InvalidForm(Vec<ValidityIssue>),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// What a successful normalization added to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// The form that is about to be submitted.
    pub form: Option<NodeId>,
    /// Every hidden input created, in document order.
    pub shadow_inputs: Vec<NodeId>,
    /// Names mirrored from unchecked or disabled controls.
    pub mirrored: Vec<String>,
    /// Radio group names submitted with an empty value.
    pub empty_radio_groups: Vec<String>,
}

/// Prepare the form owning `submit_control` for native submission.
///
/// Clears hidden inputs from earlier attempts, so running it again replaces
/// rather than duplicates them. Nothing is changed when the form is missing
/// or invalid.
pub fn normalize_submission(
    doc: &mut Document,
    submit_control: NodeId,
) -> Result<NormalizeReport, SubmitError> {
    let form = find_form(doc, submit_control).ok_or(SubmitError::FormNotFound)?;
    doc.check_validity(form).map_err(SubmitError::InvalidForm)?;

    let container = hidden_container(doc, form)?;
    doc.clear_children(container)?;

    let mut report = NormalizeReport {
        form: Some(form),
        ..NormalizeReport::default()
    };

    for source in mirror_sources(doc, form) {
        let shadow = shadow_input(doc, source)?;
        doc.append_child(container, shadow)?;
        report.shadow_inputs.push(shadow);
        if let Some(name) = doc.attribute(shadow, "name") {
            report.mirrored.push(name.to_string());
        }
    }

    for name in unchecked_radio_groups(doc, form) {
        let shadow = doc.create_element("input");
        doc.set_attribute(shadow, "type", "hidden")?;
        doc.set_attribute(shadow, "name", &name)?;
        doc.set_attribute(shadow, "value", "")?;
        doc.append_child(container, shadow)?;
        report.shadow_inputs.push(shadow);
        report.empty_radio_groups.push(name);
    }

    tracing::debug!(
        shadows = report.shadow_inputs.len(),
        mirrored = ?report.mirrored,
        empty_radio_groups = ?report.empty_radio_groups,
        "normalized submission"
    );
    Ok(report)
}

/// The nearest `form` around the control that belongs to a generated form.
fn find_form(doc: &Document, control: NodeId) -> Option<NodeId> {
    if !doc.contains(control) {
        return None;
    }
    let form = doc.closest(control, |doc, id| doc.tag(id) == Some("form"))?;
    doc.closest(form, |doc, id| doc.has_class(id, classes::FORM_ROOT))
        .map(|_| form)
}

/// The hidden-input container of a form, recreated if it went missing.
fn hidden_container(doc: &mut Document, form: NodeId) -> Result<NodeId, DomError> {
    if let Some(container) = doc.query(form, |doc, id| doc.has_class(id, classes::HIDDEN_INPUTS)) {
        return Ok(container);
    }
    tracing::debug!(?form, "hidden input container missing, recreating it");
    let container = doc.create_element("div");
    doc.set_attribute(container, "class", classes::HIDDEN_INPUTS)?;
    doc.append_child(form, container)?;
    Ok(container)
}

/// Controls the browser would drop: unchecked checkboxes, disabled
/// non-radio controls and checked disabled radios. Each appears once.
fn mirror_sources(doc: &Document, form: NodeId) -> Vec<NodeId> {
    doc.query_all(form, |doc, id| {
        if !matches!(doc.tag(id), Some("input" | "select" | "textarea")) {
            return false;
        }
        match doc.input_type(id).as_deref() {
            Some("hidden" | "submit" | "button" | "reset" | "image") => false,
            Some("checkbox") => !doc.checked(id) || doc.is_disabled(id),
            Some("radio") => doc.checked(id) && doc.is_disabled(id),
            _ => doc.is_disabled(id),
        }
    })
}

/// A hidden input carrying the source's name and current value.
///
/// Inputs are shallow-cloned; selects and textareas get a fresh input.
fn shadow_input(doc: &mut Document, source: NodeId) -> Result<NodeId, DomError> {
    let value = doc.value(source);
    let shadow = if doc.tag(source) == Some("input") {
        let shadow = doc.clone_node(source)?;
        doc.remove_attribute(shadow, "disabled")?;
        doc.remove_attribute(shadow, "id")?;
        shadow
    } else {
        let shadow = doc.create_element("input");
        if let Some(name) = doc.attribute(source, "name").map(str::to_string) {
            doc.set_attribute(shadow, "name", &name)?;
        }
        shadow
    };
    doc.set_attribute(shadow, "type", "hidden")?;
    doc.set_attribute(shadow, "value", &value)?;
    Ok(shadow)
}

/// Radio group names in the form with no checked member, in document order.
fn unchecked_radio_groups(doc: &Document, form: NodeId) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for radio in doc.query_all(form, |doc, id| doc.is_input_of_type(id, "radio")) {
        let Some(name) = doc.attribute(radio, "name").filter(|n| !n.is_empty()) else {
            continue;
        };
        if names.iter().any(|n| n == name) {
            continue;
        }
        if !doc.radio_group(radio).into_iter().any(|id| doc.checked(id)) {
            names.push(name.to_string());
        }
    }
    names
}
