//! Markup fragment builders shared by every control kind.

use simple_form_types::ControlType;

use crate::classes;
use crate::markup::{Element, Node};

/// Everything needed to render one form element and its surroundings.
///
/// Every optional attribute is emitted only when present (non-empty for text,
/// `true` for flags); the same rule applies to every control kind.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions<'a> {
    /// Element tag (`input`, `select` or `textarea`).
    pub tag: &'a str,
    pub class: &'a str,
    pub name: &'a str,
    /// Label placed before the element.
    pub pre_label: Option<Element>,
    /// Label placed after the element.
    pub post_label: Option<Element>,
    /// Children of non-void elements (select options, textarea text).
    pub content: Vec<Node>,
    pub style: Option<&'a str>,
    pub input_type: Option<&'a str>,
    pub title: Option<&'a str>,
    pub disabled: bool,
    pub rows: Option<u32>,
    pub id: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub checked: bool,
    pub required: bool,
    pub pattern: Option<&'a str>,
    pub value: Option<&'a str>,
    pub help: Option<&'a str>,
}

/// Build a label for a control, or nothing if the label text is empty.
pub fn label(
    text: Option<&str>,
    control_type: ControlType,
    for_id: Option<&str>,
) -> Option<Element> {
    let text = text.filter(|t| !t.is_empty())?;
    let mut element = Element::new("label");
    if control_type.is_checkable() {
        element = element.class(classes::FORM_CHECK_LABEL);
    }
    Some(element.attr_opt("for", for_id).text(text))
}

/// Build the muted help line shown under a control.
pub fn help(text: Option<&str>) -> Option<Element> {
    let text = text.filter(|t| !t.is_empty())?;
    Some(Element::new("small").class("form-text text-muted").text(text))
}

/// Build the card header, or nothing when the form has no header.
pub fn header(text: Option<&str>) -> Option<Element> {
    let text = text.filter(|t| !t.is_empty())?;
    Some(
        Element::new("div")
            .class("card-header text-center")
            .child(Element::new("h3").text(text)),
    )
}

/// Build one element wrapped by its labels and help text.
pub fn control_shell(options: ShellOptions<'_>) -> Vec<Node> {
    let ShellOptions {
        tag,
        class,
        name,
        pre_label,
        post_label,
        content,
        style,
        input_type,
        title,
        disabled,
        rows,
        id,
        placeholder,
        checked,
        required,
        pattern,
        value,
        help: help_text,
    } = options;

    let rows = rows.map(|r| r.to_string());
    let element = Element::new(tag)
        .class(class)
        .attr_opt("name", Some(name))
        .attr_opt("style", style)
        .attr_opt("type", input_type)
        .attr_opt("title", title)
        .flag("disabled", disabled)
        .attr_opt("rows", rows.as_deref())
        .attr_opt("id", id)
        .attr_opt("placeholder", placeholder)
        .flag("checked", checked)
        .flag("required", required)
        .attr_opt("pattern", pattern)
        .attr_opt("value", value);

    let element = if element.is_void() {
        element
    } else {
        element.children(content)
    };

    let mut nodes = Vec::with_capacity(4);
    nodes.extend(pre_label.map(Node::from));
    nodes.push(Node::from(element));
    nodes.extend(post_label.map(Node::from));
    nodes.extend(help(help_text).map(Node::from));
    nodes
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::markup::render_nodes;

    #[test]
    fn checkable_labels_get_check_class() {
        let plain = label(Some("Name"), ControlType::Input, Some("input-0")).unwrap();
        assert_eq!(plain.to_html(), "<label for=\"input-0\">Name</label>\n");

        let check = label(Some("Agree"), ControlType::Checkbox, Some("checkbox-1")).unwrap();
        assert_eq!(
            check.to_html(),
            "<label class=\"form-check-label\" for=\"checkbox-1\">Agree</label>\n"
        );
    }

    #[test]
    fn empty_text_builds_nothing() {
        assert!(label(None, ControlType::Input, Some("x")).is_none());
        assert!(label(Some(""), ControlType::Input, Some("x")).is_none());
        assert!(help(Some("")).is_none());
        assert!(header(None).is_none());
    }

    #[test]
    fn header_markup() {
        let header = header(Some("Contact us")).unwrap();
        assert_eq!(
            header.to_html(),
            "<div class=\"card-header text-center\">\n  <h3>Contact us</h3>\n</div>\n"
        );
    }

    #[test]
    fn shell_emits_attributes_in_fixed_order() {
        let nodes = control_shell(ShellOptions {
            tag: "input",
            class: "form-control",
            name: "email",
            input_type: Some("email"),
            title: Some(""),
            id: Some("email-0"),
            placeholder: Some("you@example.com"),
            required: true,
            value: None,
            help: Some("We never share it"),
            pre_label: label(Some("Email"), ControlType::Email, Some("email-0")),
            ..Default::default()
        });

        assert_eq!(
            render_nodes(&nodes),
            "<label for=\"email-0\">Email</label>\n\
             <input class=\"form-control\" name=\"email\" type=\"email\" id=\"email-0\" placeholder=\"you@example.com\" required>\n\
             <small class=\"form-text text-muted\">We never share it</small>\n"
        );
    }

    #[test]
    fn shell_keeps_content_for_closing_tags() {
        let nodes = control_shell(ShellOptions {
            tag: "textarea",
            class: "form-control",
            name: "bio",
            rows: Some(3),
            content: vec![Node::text("hi")],
            ..Default::default()
        });

        assert_eq!(
            render_nodes(&nodes),
            "<textarea class=\"form-control\" name=\"bio\" rows=\"3\">hi</textarea>\n"
        );
    }
}
