//! Control renderer: one control description in, one grid cell out.

use simple_form_types::{
    COLOR_INPUT_STYLE, Control, ControlKind, ControlType, DEFAULT_DATE_TITLE, InputPattern,
};

use crate::classes;
use crate::fragments::{self, ShellOptions};
use crate::markup::{Element, Node, render_nodes};

/// Render a control as its grid cell, followed by a filler cell when the
/// control is full width.
///
/// Never fails: absent fields simply leave out the matching attributes.
pub fn render_control(control: &Control, id: &str) -> Vec<Node> {
    let control_type = control.control_type();
    let label = fragments::label(control.label.as_deref(), control_type, Some(id));
    let name = control
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(id);

    let mut shell = ShellOptions {
        tag: control_type.tag(),
        class: classes::FORM_CONTROL,
        name,
        input_type: control_type.input_type(),
        title: control.title.as_deref(),
        disabled: control.disabled,
        id: Some(id),
        required: control.required,
        help: control.help.as_deref(),
        ..Default::default()
    };

    let inner = match &control.kind {
        ControlKind::Input(text) | ControlKind::Email(text) => {
            shell.pre_label = label;
            shell.placeholder = text.placeholder.as_deref();
            shell.pattern = text.pattern.as_deref();
            shell.value = text.value.as_deref();
            fragments::control_shell(shell)
        }
        ControlKind::Date(text) => {
            shell.pre_label = label;
            shell.placeholder = text.placeholder.as_deref();
            shell.pattern = Some(text.pattern.as_deref().unwrap_or(InputPattern::DATE));
            shell.title = Some(shell.title.unwrap_or(DEFAULT_DATE_TITLE));
            shell.value = text.value.as_deref();
            fragments::control_shell(shell)
        }
        ControlKind::Textarea(textarea) => {
            shell.pre_label = label;
            shell.placeholder = textarea.placeholder.as_deref();
            shell.rows = textarea.rows;
            shell.content = textarea.value.iter().map(Node::text).collect();
            fragments::control_shell(shell)
        }
        ControlKind::Select(select) => {
            shell.pre_label = label;
            shell.content = select
                .options
                .iter()
                .map(|option| Node::from(Element::new("option").text(option)))
                .collect();
            fragments::control_shell(shell)
        }
        ControlKind::ColorPicker(color) => {
            shell.pre_label = label;
            shell.style = Some(COLOR_INPUT_STYLE);
            shell.value = color.value.as_deref();
            fragments::control_shell(shell)
        }
        ControlKind::Checkbox(checkbox) => {
            shell.class = classes::FORM_CHECK_INPUT;
            shell.post_label = label;
            shell.checked = checkbox.value;
            shell.value = Some(if checkbox.value { "true" } else { "false" });
            vec![Node::from(
                Element::new("div")
                    .class(classes::FORM_CHECK)
                    .children(fragments::control_shell(shell)),
            )]
        }
        ControlKind::Radio(radio) => {
            let mut nodes: Vec<Node> = label.into_iter().map(Node::from).collect();
            // A group has at most one checked button; the last one marked wins.
            let checked_index = radio.options.iter().rposition(|option| option.checked);
            for (index, option) in radio.options.iter().enumerate() {
                let button_id = format!("{id}_{index}");
                let button = ShellOptions {
                    class: classes::FORM_CHECK_INPUT,
                    id: Some(&button_id),
                    post_label: fragments::label(
                        option.label.as_deref(),
                        ControlType::Radio,
                        Some(&button_id),
                    ),
                    checked: checked_index == Some(index),
                    disabled: control.disabled || option.disabled,
                    value: option.value.as_deref(),
                    help: None,
                    ..shell.clone()
                };
                nodes.push(Node::from(
                    Element::new("div")
                        .class(classes::FORM_CHECK)
                        .children(fragments::control_shell(button)),
                ));
            }
            nodes.extend(fragments::help(control.help.as_deref()).map(Node::from));
            nodes
        }
    };

    let columns = control.columns();
    let mut cell = vec![Node::from(
        Element::new("div")
            .class(format!("form-group col-{columns} offset-{}", control.offset()))
            .children(inner),
    )];
    if let Some(filler) = control.filler_columns() {
        cell.push(Node::from(Element::new("div").class(format!("col-{filler}"))));
    }
    cell
}

/// Render a control straight to an HTML string.
pub fn render_control_html(control: &Control, id: &str) -> String {
    render_nodes(&render_control(control, id))
}
