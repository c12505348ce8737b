//! Markup tree and HTML serialization.

use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["input", "link", "br", "meta", "hr", "img"];

/// A single attribute. Boolean attributes carry no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Get the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute with a value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Add an attribute only if the value is present and non-empty.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Add a valueless boolean attribute if `set` is true.
    pub fn flag(mut self, name: impl Into<String>, set: bool) -> Self {
        if set {
            self.attributes.push(Attribute {
                name: name.into(),
                value: None,
            });
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Get an attribute's value. Boolean attributes yield `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Check if the `class` attribute lists the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => text.push_str(t),
                Node::Element(e) => text.push_str(&e.text_content()),
            }
        }
        text
    }

    /// Collect every descendant element (in document order) matching the predicate.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(&predicate, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: &dyn Fn(&Element) -> bool,
        found: &mut Vec<&'a Element>,
    ) {
        for child in &self.children {
            if let Node::Element(element) = child {
                if predicate(element) {
                    found.push(element);
                }
                element.collect_matching(predicate, found);
            }
        }
    }

    /// Check if the element is a void element (no closing tag).
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serialize to indented HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html, 0);
        html
    }

    fn write_html(&self, html: &mut String, indent: usize) {
        let ind = "  ".repeat(indent);

        html.push_str(&ind);
        self.write_open_tag(html);

        if self.is_void() {
            html.push('\n');
            return;
        }

        let inline = self.children.iter().all(|c| matches!(c, Node::Text(_)));
        if inline {
            for child in &self.children {
                if let Node::Text(text) = child {
                    html.push_str(&escape_html(text));
                }
            }
        } else {
            html.push('\n');
            for child in &self.children {
                match child {
                    Node::Element(element) => element.write_html(html, indent + 1),
                    Node::Text(text) => {
                        html.push_str(&format!("{ind}  {}\n", escape_html(text)));
                    }
                }
            }
            html.push_str(&ind);
        }

        html.push_str(&format!("</{}>\n", self.tag));
    }

    fn write_open_tag(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        for attribute in &self.attributes {
            match &attribute.value {
                Some(value) => {
                    html.push_str(&format!(" {}=\"{}\"", attribute.name, escape_html(value)));
                }
                None => html.push_str(&format!(" {}", attribute.name)),
            }
        }
        html.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Serialize a sequence of sibling nodes.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut html = String::new();
    for node in nodes {
        match node {
            Node::Element(element) => element.write_html(&mut html, 0),
            Node::Text(text) => {
                html.push_str(&escape_html(text));
                html.push('\n');
            }
        }
    }
    html
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
