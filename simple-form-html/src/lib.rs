//! # simple-form-html
//!
//! Turns a [`FormConfig`](simple_form_types::FormConfig) into markup following
//! the Bootstrap grid and card conventions.
//!
//! Rendering builds a small markup tree ([`Element`]/[`Node`]) first. The tree
//! serializes to an HTML string via [`Element::to_html`], and the page model
//! can insert it directly without re-parsing.
//!
//! ## Usage
//!
//! ```rust
//! use simple_form_html::render_form_html;
//! use simple_form_types::{Control, FormConfig};
//!
//! let config = FormConfig::new(vec![
//!     Control::input().with_label("Name").with_name("name").required(),
//!     Control::checkbox(false).with_label("Subscribe").with_name("subscribe"),
//! ]);
//!
//! let html = render_form_html(&config);
//! assert!(html.contains(r#"<form action="/rest" method="post">"#));
//! assert!(html.contains(r#"value="false""#));
//! ```

pub mod classes;

mod markup;
pub use markup::{Attribute, Element, Node, escape_html, render_nodes};

mod fragments;
pub use fragments::{ShellOptions, control_shell, header, help, label};

mod renderer;
pub use renderer::{render_control, render_control_html};

mod assembler;
pub use assembler::{assemble_form, control_id, render_form_html};

pub use simple_form_types as types;
