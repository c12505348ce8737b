use simple_form_types::{Control, FormConfig};

/// A minimal contact form: one required text field and one checkbox.
pub fn contact_form() -> FormConfig {
    FormConfig::new(vec![
        Control::input()
            .with_label("Your name")
            .with_name("name")
            .with_placeholder("Jane Doe")
            .required(),
        Control::checkbox(false)
            .with_label("Keep me posted")
            .with_name("newsletter"),
    ])
    .with_header("Contact us")
    .with_action("/contact", "post")
}
