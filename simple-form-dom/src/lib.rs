//! # simple-form-dom
//!
//! A minimal, single-threaded model of a browser page, sufficient to mount
//! generated forms and exercise them without a real browser:
//!
//! - an arena of element and text nodes addressed by [`NodeId`]
//! - attributes plus live control state (`checked`, `value`, selectedness)
//! - click and submit events with bubbling and disposable listeners
//! - native constraint validation (`required`, `pattern`, `type="email"`)
//! - form data collection and a log of completed submissions
//!
//! Every handler runs to completion before the call that triggered it
//! returns; there is no event loop.

mod error;
pub use error::DomError;

mod document;
pub use document::{Document, NodeId};

mod events;
pub use events::{ClickOutcome, Event, EventKind, Listener, ListenerHandle};

mod validity;
pub use validity::{ValidityIssue, ValidityState};

mod form_data;
pub use form_data::{FormData, Submission};
