//! Render one of the bundled example forms to HTML.
//!
//! Run with: cargo run -p simple-form-html --example render_form [contact|registration|feedback|<path.json>]

use anyhow::bail;
use example_forms::{contact_form, feedback_form, load_form, registration_form};
use simple_form_html::render_form_html;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let which = std::env::args().nth(1).unwrap_or_else(|| "registration".to_string());
    let config = match which.as_str() {
        "contact" => contact_form(),
        "registration" => registration_form(),
        "feedback" => feedback_form()?,
        path if path.ends_with(".json") => load_form(path)?,
        other => bail!(
            "Unknown form {other:?}; expected contact, registration, feedback or a .json path"
        ),
    };

    let html = render_form_html(&config);
    println!("{html}");
    Ok(())
}
