//! The form controller: mounts a generated form on a page and wires it up.

use simple_form_dom::{Document, DomError, EventKind, ListenerHandle, NodeId};
use simple_form_html::{assemble_form, classes};
use simple_form_types::FormConfig;

use crate::stylesheet::{StylesheetStatus, ensure_stylesheet};
use crate::submit::normalize_submission;

/// Nodes and listeners of a form that was rendered into its container.
#[derive(Debug)]
struct Mounted {
    root: NodeId,
    form: NodeId,
    submit_button: Option<NodeId>,
    listeners: Vec<ListenerHandle>,
    stylesheet: Option<StylesheetStatus>,
}

/// A form rendered into a page container.
///
/// Created with [`FormController::mount`]. A controller whose container was
/// not a live element is inert: nothing was rendered and
/// [`is_mounted`](Self::is_mounted) returns `false`.
#[derive(Debug)]
pub struct FormController {
    config: FormConfig,
    mounted: Option<Mounted>,
}

impl FormController {
    /// Render the form into `container` and attach its behavior.
    ///
    /// Replaces the container's children, keeps each checkbox's `value`
    /// attribute in sync with its checked state, runs
    /// [`normalize_submission`] when the submit button is clicked, and, if
    /// the configuration asks for it, injects the stylesheet when no known
    /// one is loaded.
    pub fn mount(doc: &mut Document, container: NodeId, config: FormConfig) -> Self {
        if !doc.is_element(container) {
            tracing::debug!(?container, "container is not a live element, form not mounted");
            return Self {
                config,
                mounted: None,
            };
        }

        let mounted = match Self::try_mount(doc, container, &config) {
            Ok(mounted) => Some(mounted),
            Err(err) => {
                tracing::debug!(%err, "form not mounted");
                None
            }
        };
        Self { config, mounted }
    }

    fn try_mount(
        doc: &mut Document,
        container: NodeId,
        config: &FormConfig,
    ) -> Result<Mounted, DomError> {
        let inserted = doc.replace_children(container, &[assemble_form(config).into()])?;
        let root = inserted
            .first()
            .copied()
            .ok_or(DomError::InvalidNode(container))?;
        let form = doc
            .query(root, |doc, id| doc.tag(id) == Some("form"))
            .ok_or(DomError::NotAnElement(root))?;

        let mut listeners = Vec::new();
        let checkboxes = doc.query_all(form, |doc, id| doc.is_input_of_type(id, "checkbox"));
        for checkbox in checkboxes {
            listeners.push(doc.add_event_listener(
                checkbox,
                EventKind::Click,
                sync_checkbox_value,
            )?);
        }

        let submit_button = doc.query(form, |doc, id| {
            doc.tag(id) == Some("button") && doc.is_submit_button(id)
        });
        if let Some(button) = submit_button {
            listeners.push(doc.add_event_listener(button, EventKind::Click, |doc, event| {
                if let Err(err) = normalize_submission(doc, event.current_target()) {
                    tracing::error!(%err, "submission aborted");
                    event.prevent_default();
                }
            })?);
        }

        let stylesheet = if config.check_stylesheet_loaded {
            Some(ensure_stylesheet(doc, &config.stylesheet)?)
        } else {
            None
        };

        tracing::debug!(
            ?container,
            controls = config.len(),
            listeners = listeners.len(),
            "mounted form"
        );
        Ok(Mounted {
            root,
            form,
            submit_button,
            listeners,
            stylesheet,
        })
    }

    /// Remove every listener the controller registered.
    ///
    /// The rendered markup stays on the page.
    pub fn dispose(self, doc: &mut Document) {
        if let Some(mounted) = self.mounted {
            let count = mounted.listeners.len();
            for handle in mounted.listeners {
                handle.dispose(doc);
            }
            tracing::debug!(listeners = count, "disposed form controller");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// The configuration the form was rendered from.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The outer `div.bootstrap-simple-form` element.
    pub fn root(&self) -> Option<NodeId> {
        self.mounted.as_ref().map(|m| m.root)
    }

    pub fn form(&self) -> Option<NodeId> {
        self.mounted.as_ref().map(|m| m.form)
    }

    pub fn submit_button(&self) -> Option<NodeId> {
        self.mounted.as_ref().and_then(|m| m.submit_button)
    }

    /// The hidden-input container inside the form.
    pub fn hidden_inputs(&self, doc: &Document) -> Option<NodeId> {
        let form = self.form()?;
        doc.query(form, |doc, id| doc.has_class(id, classes::HIDDEN_INPUTS))
    }

    /// What the stylesheet check did, if it ran.
    pub fn stylesheet(&self) -> Option<StylesheetStatus> {
        self.mounted.as_ref().and_then(|m| m.stylesheet)
    }

    /// Number of listeners the controller holds.
    pub fn listener_count(&self) -> usize {
        self.mounted.as_ref().map_or(0, |m| m.listeners.len())
    }
}

/// Copy a checkbox's checked state into its `value` attribute.
fn sync_checkbox_value(doc: &mut Document, event: &mut simple_form_dom::Event) {
    let checkbox = event.current_target();
    let value = if doc.checked(checkbox) { "true" } else { "false" };
    if let Err(err) = doc.set_attribute(checkbox, "value", value) {
        tracing::warn!(%err, "failed to sync checkbox value");
    }
}
