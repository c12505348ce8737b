//! Form data collection and the submission log.

use crate::{Document, NodeId};

/// Ordered name/value pairs a form would send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// The first value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`, in order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Distinct names in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (name, _) in &self.entries {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// A form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub action: String,
    /// Lowercase method, `"get"` when the form has none.
    pub method: String,
    pub data: FormData,
}

impl Document {
    /// Collect the entries a form submits.
    ///
    /// Disabled controls, controls without a name, unchecked checkboxes and
    /// radios, and buttons contribute nothing.
    pub fn form_data(&self, form: NodeId) -> FormData {
        let mut data = FormData::new();
        for node in self.descendants(form) {
            if !self.is_submittable(node) {
                continue;
            }
            let Some(name) = self.attribute(node, "name").filter(|n| !n.is_empty()) else {
                continue;
            };
            data.append(name, self.value(node));
        }
        data
    }

    fn is_submittable(&self, node: NodeId) -> bool {
        if self.is_disabled(node) {
            return false;
        }
        match self.tag(node) {
            Some("select" | "textarea") => true,
            Some("input") => match self.input_type(node).as_deref() {
                Some("checkbox" | "radio") => self.checked(node),
                Some("submit" | "button" | "reset" | "image") => false,
                _ => true,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use simple_form_html::{Element, Node};

    use super::*;

    #[test]
    fn collects_enabled_named_values_in_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let form = doc
            .insert_markup(
                body,
                &[Node::from(Element::new("form").children([
                    Element::new("input").attr("name", "name").attr("value", "Ada"),
                    Element::new("input").attr("value", "unnamed"),
                    Element::new("input")
                        .attr("name", "locked")
                        .attr("value", "x")
                        .flag("disabled", true),
                    Element::new("input")
                        .attr("type", "checkbox")
                        .attr("name", "news")
                        .attr("value", "false"),
                    Element::new("input")
                        .attr("type", "checkbox")
                        .attr("name", "terms")
                        .attr("value", "true")
                        .flag("checked", true),
                    Element::new("input")
                        .attr("type", "hidden")
                        .attr("name", "news")
                        .attr("value", "false"),
                    Element::new("select")
                        .attr("name", "color")
                        .children([
                            Element::new("option").text("Red"),
                            Element::new("option").text("Blue"),
                        ]),
                    Element::new("button").attr("name", "go").text("Go"),
                ]))],
            )
            .unwrap()[0];

        let data = doc.form_data(form);
        let entries: Vec<_> = data.iter().collect();
        assert_eq!(
            entries,
            vec![("name", "Ada"), ("terms", "true"), ("news", "false"), ("color", "Red")]
        );
        assert_eq!(data.names(), vec!["name", "terms", "news", "color"]);
    }

    #[test]
    fn repeated_names_keep_every_value() {
        let mut data = FormData::new();
        data.append("tag", "a");
        data.append("tag", "b");

        assert_eq!(data.get("tag"), Some("a"));
        assert_eq!(data.get_all("tag"), vec!["a", "b"]);
        assert!(!data.has("other"));
        assert_eq!(data.len(), 2);
    }
}
