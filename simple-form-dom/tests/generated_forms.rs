//! The page model driving markup produced by the form assembler.

use pretty_assertions::assert_eq;
use simple_form_dom::{ClickOutcome, Document, NodeId};
use simple_form_html::types::{Control, FormConfig, RadioOption};
use simple_form_html::{assemble_form, classes};

fn load(config: &FormConfig) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let root = doc.insert_markup(body, &[assemble_form(config).into()]).unwrap()[0];
    let form = doc.query(root, |doc, id| doc.tag(id) == Some("form")).unwrap();
    (doc, form)
}

#[test]
fn serialized_page_matches_rendered_markup() {
    let config = FormConfig::new(vec![
        Control::input().with_label("Name").with_name("name"),
        Control::select(["A", "B"]).with_name("pick"),
    ]);
    let (doc, form) = load(&config);
    let root = doc.parent(form).unwrap();

    assert_eq!(doc.to_html(root), simple_form_html::render_form_html(&config));
}

#[test]
fn native_submission_drops_unchecked_and_disabled() {
    let config = FormConfig::new(vec![
        Control::input().with_name("name").with_value("Ada"),
        Control::input().with_name("locked").with_value("x").disabled(),
        Control::checkbox(false).with_name("news"),
        Control::checkbox(true).with_name("terms"),
    ]);
    let (mut doc, form) = load(&config);

    let button = doc.query(form, |doc, id| doc.is_submit_button(id)).unwrap();
    let ClickOutcome::Submitted(submission) = doc.click(button).unwrap() else {
        panic!("Expected a submission");
    };

    assert_eq!(submission.data.names(), vec!["name", "terms"]);
    assert_eq!(submission.data.get("terms"), Some("true"));
}

#[test]
fn radio_groups_are_scoped_to_their_form() {
    let config = FormConfig::new(vec![
        Control::radio(vec![RadioOption::new("A", "a").checked(), RadioOption::new("B", "b")])
            .with_name("choice"),
    ]);
    let mut doc = Document::new();
    let body = doc.body();
    doc.insert_markup(body, &[assemble_form(&config).into(), assemble_form(&config).into()])
        .unwrap();

    let radios = doc.query_all(doc.root(), |doc, id| doc.is_input_of_type(id, "radio"));
    assert_eq!(radios.len(), 4);
    doc.set_checked(radios[1], true).unwrap();

    let checked: Vec<bool> = radios.iter().map(|&r| doc.checked(r)).collect();
    assert_eq!(checked, vec![false, true, true, false]);
}

#[test]
fn hidden_input_container_starts_empty() {
    let (doc, form) = load(&FormConfig::new(vec![Control::checkbox(false)]));
    let container = doc
        .query(form, |doc, id| doc.has_class(id, classes::HIDDEN_INPUTS))
        .unwrap();
    assert!(doc.children(container).is_empty());
}
