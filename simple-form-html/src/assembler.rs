//! Form assembler: folds every control into one complete form.

use simple_form_types::{Control, FormConfig};

use crate::classes;
use crate::fragments;
use crate::markup::{Element, Node};
use crate::renderer::render_control;

/// Element id of a control: its own id, or `<controlType>-<index>`.
pub fn control_id(control: &Control, index: usize) -> String {
    match control.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => format!("{}-{index}", control.control_type()),
    }
}

/// Build the complete form markup tree.
///
/// The submit button carries no inline handler; the page side registers the
/// submit handling as an event listener.
pub fn assemble_form(config: &FormConfig) -> Element {
    let controls: Vec<Node> = config
        .controls()
        .iter()
        .enumerate()
        .flat_map(|(index, control)| render_control(control, &control_id(control, index)))
        .collect();

    tracing::trace!(
        controls = config.len(),
        nodes = controls.len(),
        "assembled form controls"
    );

    let card = Element::new("div")
        .class("card")
        .children(fragments::header(config.form_header.as_deref()))
        .child(
            Element::new("div")
                .class("card-body")
                .child(Element::new("div").class(classes::FORM_ROW).children(controls)),
        )
        .child(
            Element::new("div").class("card-footer text-center").child(
                Element::new("button")
                    .attr("type", "submit")
                    .class("btn btn-primary")
                    .text(&config.submit_button_text),
            ),
        );

    let form = Element::new("form")
        .attr_opt("action", config.form_action.address.as_deref())
        .attr_opt("method", config.form_action.method.as_deref())
        .child(card)
        .child(Element::new("div").class(classes::HIDDEN_INPUTS));

    Element::new("div")
        .class(format!("container {}", classes::FORM_ROOT))
        .attr("style", "padding-top: 36px")
        .child(form)
}

/// Render the complete form to an HTML string.
pub fn render_form_html(config: &FormConfig) -> String {
    assemble_form(config).to_html()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use simple_form_types::{Control, FormConfig};

    use super::*;

    #[test]
    fn ids_derive_from_kind_and_position() {
        let config = FormConfig::new(vec![
            Control::input(),
            Control::checkbox(false),
            Control::email().with_id("contact"),
            Control::color_picker(),
        ]);
        let ids: Vec<_> = config
            .controls()
            .iter()
            .enumerate()
            .map(|(i, c)| control_id(c, i))
            .collect();
        assert_eq!(ids, ["input-0", "checkbox-1", "contact", "colorPicker-3"]);
    }

    #[test]
    fn empty_form_markup() {
        let config = FormConfig::default()
            .with_action("/signup", "post")
            .with_header("Join")
            .with_submit_text("Send");

        assert_eq!(
            render_form_html(&config),
            r#"<div class="container bootstrap-simple-form" style="padding-top: 36px">
  <form action="/signup" method="post">
    <div class="card">
      <div class="card-header text-center">
        <h3>Join</h3>
      </div>
      <div class="card-body">
        <div class="form-row"></div>
      </div>
      <div class="card-footer text-center">
        <button type="submit" class="btn btn-primary">Send</button>
      </div>
    </div>
    <div class="invisible-inputs-container"></div>
  </form>
</div>
"#
        );
    }

    #[test]
    fn missing_header_is_omitted() {
        let html = render_form_html(&FormConfig::default().without_header());
        assert!(!html.contains("card-header"));
    }

    #[test]
    fn missing_method_is_omitted() {
        let mut config = FormConfig::default();
        config.form_action.method = None;
        let form = assemble_form(&config);
        let form = form.find_all(|e| e.tag() == "form")[0];
        assert_eq!(form.attribute("action"), Some("/rest"));
        assert!(!form.has_attribute("method"));
    }

    #[test]
    fn controls_share_one_row() {
        let config = FormConfig::new(vec![
            Control::input().with_columns(6).full_width(),
            Control::textarea(),
        ]);
        let root = assemble_form(&config);
        let rows = root.find_all(|e| e.has_class(classes::FORM_ROW));
        assert_eq!(rows.len(), 1);

        let cells: Vec<_> = rows[0]
            .child_nodes()
            .iter()
            .filter_map(Node::as_element)
            .map(|e| e.attribute("class").unwrap_or_default())
            .collect();
        assert_eq!(
            cells,
            ["form-group col-6 offset-0", "col-6", "form-group col-12 offset-0"]
        );
    }

    #[test]
    fn submit_button_has_no_inline_handler() {
        let root = assemble_form(&FormConfig::default());
        let button = root.find_all(|e| e.tag() == "button")[0];
        assert!(!button.has_attribute("onclick"));
        assert_eq!(button.attribute("type"), Some("submit"));
    }
}
