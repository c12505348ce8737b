use simple_form_types::{Control, FormConfig, RadioOption};

/// A registration form using every control kind.
pub fn registration_form() -> FormConfig {
    FormConfig::new(vec![
        Control::input()
            .with_label("First name")
            .with_name("first_name")
            .with_columns(6)
            .required(),
        Control::input()
            .with_label("Last name")
            .with_name("last_name")
            .with_columns(6)
            .required(),
        Control::email()
            .with_label("Email")
            .with_name("email")
            .with_placeholder("you@example.com")
            .with_help("We never share your address.")
            .with_columns(8)
            .full_width(),
        Control::date()
            .with_label("Date of birth")
            .with_name("birthday")
            .with_columns(4),
        Control::input()
            .with_label("Member number")
            .with_name("member")
            .with_value("M-0001")
            .with_columns(4)
            .with_offset(4)
            .disabled(),
        Control::select(["Beginner", "Intermediate", "Expert"])
            .with_label("Experience")
            .with_name("experience")
            .with_columns(6),
        Control::color_picker()
            .with_label("Favourite color")
            .with_name("color")
            .with_value("#336699")
            .with_columns(6),
        Control::radio(vec![
            RadioOption::new("Monthly", "monthly"),
            RadioOption::new("Yearly", "yearly"),
            RadioOption::new("Lifetime", "lifetime").disabled(),
        ])
        .with_label("Plan")
        .with_name("plan"),
        Control::textarea()
            .with_label("About you")
            .with_name("about")
            .with_rows(4),
        Control::checkbox(true)
            .with_label("Accept the terms")
            .with_name("terms")
            .required(),
        Control::checkbox(false)
            .with_label("Send me offers")
            .with_name("offers"),
    ])
    .with_header("Create your account")
    .with_submit_text("Register")
    .with_action("/register", "post")
}
