pub mod contact;
pub mod loader;
pub mod registration;

pub use contact::contact_form;
pub use loader::{FEEDBACK_JSON, feedback_form, load_form};
pub use registration::registration_form;
