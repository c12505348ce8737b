//! Click and submit events, listeners and activation behavior.

use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::form_data::Submission;
use crate::validity::ValidityIssue;
use crate::{Document, DomError, NodeId};

new_key_type! {
    struct ListenerId;
}

/// The events the page model dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

/// An event travelling from its target up through the target's ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
    current_target: NodeId,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The node the event was dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node whose listener is currently running.
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    /// Cancel the default action (activation, submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Keep the event from reaching further ancestors.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Callback invoked with the page and the event being dispatched.
pub type Listener = Rc<dyn Fn(&mut Document, &mut Event)>;

struct ListenerEntry {
    node: NodeId,
    kind: EventKind,
    seq: u64,
    callback: Listener,
}

/// Every listener registered on a document, in registration order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    entries: SlotMap<ListenerId, ListenerEntry>,
    next_seq: u64,
}

impl ListenerRegistry {
    fn insert(&mut self, node: NodeId, kind: EventKind, callback: Listener) -> ListenerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(ListenerEntry {
            node,
            kind,
            seq,
            callback,
        })
    }

    /// Listeners on a node for a kind, ordered by registration.
    fn snapshot(&self, node: NodeId, kind: EventKind) -> Vec<(ListenerId, Listener)> {
        let mut matching: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, e)| e.node == node && e.kind == kind)
            .map(|(id, e)| (e.seq, id, Rc::clone(&e.callback)))
            .collect();
        matching.sort_by_key(|(seq, _, _)| *seq);
        matching.into_iter().map(|(_, id, cb)| (id, cb)).collect()
    }

    /// Drop listeners attached to any of the given nodes.
    pub(crate) fn remove_for_nodes(&mut self, nodes: &[NodeId]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| !nodes.contains(&e.node));
        before - self.entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Registration of a single listener.
///
/// Dropping the handle keeps the listener registered; call
/// [`dispose`](Self::dispose) to remove it.
#[must_use = "a listener can only be removed through its handle"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle {
    id: ListenerId,
    node: NodeId,
    kind: EventKind,
}

impl ListenerHandle {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Remove the listener. Returns whether it was still registered.
    pub fn dispose(self, doc: &mut Document) -> bool {
        doc.remove_event_listener(self)
    }
}

/// What a [`Document::click`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The node is disabled or gone; nothing was dispatched.
    Ignored,
    /// Listeners ran; no submission was attempted.
    Dispatched { default_prevented: bool },
    /// The owning form passed validation and was submitted.
    Submitted(Submission),
    /// Native validation rejected the owning form.
    SubmissionBlocked(Vec<ValidityIssue>),
    /// A submit listener prevented the submission.
    SubmissionCanceled,
}

/// Checkedness to restore when a click's default action is canceled.
enum Activation {
    None,
    Checkbox { was_checked: bool },
    Radio { group: Vec<(NodeId, bool)> },
}

impl Document {
    /// Register a listener for events of `kind` reaching `node`.
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: impl Fn(&mut Document, &mut Event) + 'static,
    ) -> Result<ListenerHandle, DomError> {
        if !self.contains(node) {
            return Err(DomError::InvalidNode(node));
        }
        let id = self.listeners.insert(node, kind, Rc::new(listener));
        tracing::trace!(?node, ?kind, ?id, "added listener");
        Ok(ListenerHandle { id, node, kind })
    }

    /// Remove a listener. Returns whether it was still registered.
    pub fn remove_event_listener(&mut self, handle: ListenerHandle) -> bool {
        let removed = self.listeners.entries.remove(handle.id).is_some();
        tracing::trace!(node = ?handle.node, kind = ?handle.kind, removed, "removed listener");
        removed
    }

    /// Number of listeners registered on a node.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners
            .entries
            .values()
            .filter(|e| e.node == node)
            .count()
    }

    /// Number of listeners registered anywhere in the document.
    pub fn total_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch an event at `target`, bubbling to its ancestors.
    ///
    /// Listeners removed while the event is in flight do not run.
    pub fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> Result<Event, DomError> {
        if !self.contains(target) {
            return Err(DomError::InvalidNode(target));
        }

        let mut event = Event::new(kind, target);
        for node in self.inclusive_ancestors(target) {
            event.current_target = node;
            for (id, callback) in self.listeners.snapshot(node, kind) {
                if self.listeners.entries.contains_key(id) {
                    callback(self, &mut event);
                }
            }
            if event.propagation_stopped {
                break;
            }
        }
        Ok(event)
    }

    /// Simulate a user click.
    ///
    /// Checkboxes toggle and radios become checked before listeners run; both
    /// revert if a listener prevents the default. A submit button that belongs
    /// to a form then submits it.
    pub fn click(&mut self, node: NodeId) -> Result<ClickOutcome, DomError> {
        if !self.contains(node) {
            return Err(DomError::InvalidNode(node));
        }
        if self.is_disabled(node) {
            tracing::trace!(?node, "click on disabled control ignored");
            return Ok(ClickOutcome::Ignored);
        }

        let activation = self.activate(node)?;
        let event = self.dispatch_event(node, EventKind::Click)?;

        if event.default_prevented {
            self.revert_activation(node, activation)?;
            return Ok(ClickOutcome::Dispatched {
                default_prevented: true,
            });
        }

        if self.contains(node) && self.is_submit_button(node) {
            if let Some(form) = self.form_owner(node) {
                return self.request_submit(form);
            }
        }
        Ok(ClickOutcome::Dispatched {
            default_prevented: false,
        })
    }

    fn activate(&mut self, node: NodeId) -> Result<Activation, DomError> {
        match self.input_type(node).as_deref() {
            Some("checkbox") => {
                let was_checked = self.checked(node);
                self.set_checked(node, !was_checked)?;
                Ok(Activation::Checkbox { was_checked })
            }
            Some("radio") => {
                let group = self
                    .radio_group(node)
                    .into_iter()
                    .map(|id| (id, self.checked(id)))
                    .collect();
                self.set_checked(node, true)?;
                Ok(Activation::Radio { group })
            }
            _ => Ok(Activation::None),
        }
    }

    fn revert_activation(&mut self, node: NodeId, activation: Activation) -> Result<(), DomError> {
        match activation {
            Activation::None => {}
            Activation::Checkbox { was_checked } => self.set_checked(node, was_checked)?,
            Activation::Radio { group } => {
                for &(id, _) in &group {
                    if self.contains(id) {
                        self.set_checked(id, false)?;
                    }
                }
                for (id, was_checked) in group {
                    if was_checked && self.contains(id) {
                        self.set_checked(id, true)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Check if the node submits its form when clicked.
    pub fn is_submit_button(&self, node: NodeId) -> bool {
        match self.tag(node) {
            Some("button") => self
                .attribute(node, "type")
                .is_none_or(|t| t.eq_ignore_ascii_case("submit")),
            Some("input") => self.is_input_of_type(node, "submit"),
            _ => false,
        }
    }

    /// The form a control belongs to: its nearest `form` ancestor.
    pub fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        self.closest(parent, |doc, id| doc.tag(id) == Some("form"))
    }

    /// Submit a form the way a submit button would.
    ///
    /// Runs native validation unless the form has `novalidate`, dispatches a
    /// submit event, and records the submission if nothing canceled it.
    pub fn request_submit(&mut self, form: NodeId) -> Result<ClickOutcome, DomError> {
        if self.tag(form) != Some("form") {
            return Err(DomError::NotAnElement(form));
        }

        if !self.has_attribute(form, "novalidate") {
            if let Err(issues) = self.check_validity(form) {
                tracing::debug!(?form, issues = issues.len(), "submission blocked by validation");
                return Ok(ClickOutcome::SubmissionBlocked(issues));
            }
        }

        let event = self.dispatch_event(form, EventKind::Submit)?;
        if event.default_prevented {
            return Ok(ClickOutcome::SubmissionCanceled);
        }
        if !self.contains(form) {
            return Ok(ClickOutcome::SubmissionCanceled);
        }

        let submission = Submission {
            action: self.attribute(form, "action").unwrap_or_default().to_string(),
            method: self
                .attribute(form, "method")
                .map(str::to_ascii_lowercase)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "get".to_string()),
            data: self.form_data(form),
        };
        tracing::debug!(
            action = %submission.action,
            method = %submission.method,
            entries = submission.data.len(),
            "form submitted"
        );
        self.submissions.push(submission.clone());
        Ok(ClickOutcome::Submitted(submission))
    }
}
