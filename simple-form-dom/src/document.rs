//! Node arena, tree operations, attributes and live control state.

use simple_form_html::{Element, Node};
use slotmap::{SlotMap, new_key_type};

use crate::DomError;
use crate::events::ListenerRegistry;
use crate::form_data::Submission;

new_key_type! {
    /// A handle to a node in a [`Document`].
    ///
    /// Handles stay valid while the node is alive and become invalid once the
    /// node (or one of its ancestors) is removed.
    pub struct NodeId;
}

/// Element payload: attributes plus the live state form controls carry.
#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    tag: String,
    attributes: Vec<(String, Option<String>)>,
    /// Checkedness for inputs, selectedness for options.
    checked: bool,
    /// Set once checkedness was changed directly rather than via attribute.
    dirty_checked: bool,
    /// Value typed into a text control, overriding the `value` attribute.
    dirty_value: Option<String>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            checked: false,
            dirty_checked: false,
            dirty_value: None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Attribute that seeds checkedness for this element, if any.
    fn checkedness_attribute(&self) -> Option<&'static str> {
        match self.tag.as_str() {
            "input" => Some("checked"),
            "option" => Some("selected"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An in-memory page: `html > head + body`.
pub struct Document {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    pub(crate) listeners: ListenerRegistry,
    pub(crate) submissions: Vec<Submission>,
}

impl Document {
    /// Create an empty page with `head` and `body`.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::new(NodeKind::Element(ElementData::new("html"))));
        let head = nodes.insert(NodeData::new(NodeKind::Element(ElementData::new("head"))));
        let body = nodes.insert(NodeData::new(NodeKind::Element(ElementData::new("body"))));
        for child in [head, body] {
            nodes[child].parent = Some(root);
            nodes[root].children.push(child);
        }

        Self {
            nodes,
            root,
            head,
            body,
            listeners: ListenerRegistry::default(),
            submissions: Vec::new(),
        }
    }

    /// The `html` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Check if the handle refers to a live node.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Check if the handle refers to a live element.
    pub fn is_element(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    /// Check if the node is attached to the document tree.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(node) && self.inclusive_ancestors(node).last() == Some(&self.root)
    }

    /// Lowercase tag name of an element.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(node)?.kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, DomError> {
        match &mut self.nodes.get_mut(node).ok_or(DomError::InvalidNode(node))?.kind {
            NodeKind::Element(element) => Ok(element),
            NodeKind::Text(_) => Err(DomError::NotAnElement(node)),
        }
    }

    fn require_element(&self, node: NodeId) -> Result<&ElementData, DomError> {
        match &self.nodes.get(node).ok_or(DomError::InvalidNode(node))?.kind {
            NodeKind::Element(element) => Ok(element),
            NodeKind::Text(_) => Err(DomError::NotAnElement(node)),
        }
    }

    // === Tree ===

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self
            .nodes
            .insert(NodeData::new(NodeKind::Element(ElementData::new(tag))));
        tracing::trace!(?id, tag, "created element");
        id
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.nodes.insert(NodeData::new(NodeKind::Text(text.into())))
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.require_element(parent)?;
        if !self.contains(child) {
            return Err(DomError::InvalidNode(child));
        }
        if self.inclusive_ancestors(parent).contains(&child) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);

        // Later checked radios win over earlier ones in the same group.
        for node in std::iter::once(child).chain(self.descendants(child)) {
            self.settle_radio_group(node);
        }
        Ok(())
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent.take() {
            self.nodes[parent].children.retain(|&c| c != node);
        }
    }

    /// Remove a node and its whole subtree, invalidating their handles.
    ///
    /// Listeners registered on removed nodes are dropped with them.
    pub fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        if node == self.root {
            return Err(DomError::RootRemoval);
        }
        if !self.contains(node) {
            return Err(DomError::InvalidNode(node));
        }

        self.detach(node);
        let mut removed = self.descendants(node);
        removed.push(node);
        for id in &removed {
            self.nodes.remove(*id);
        }
        let dropped = self.listeners.remove_for_nodes(&removed);
        tracing::trace!(?node, nodes = removed.len(), listeners = dropped, "removed subtree");
        Ok(())
    }

    /// Remove every child of a node.
    pub fn clear_children(&mut self, node: NodeId) -> Result<(), DomError> {
        self.require_element(node)?;
        for child in self.nodes[node].children.clone() {
            self.remove(child)?;
        }
        Ok(())
    }

    /// Materialize markup nodes as the last children of `parent`.
    ///
    /// Returns the handles of the top-level inserted nodes.
    pub fn insert_markup(
        &mut self,
        parent: NodeId,
        markup: &[Node],
    ) -> Result<Vec<NodeId>, DomError> {
        self.require_element(parent)?;
        let mut inserted = Vec::with_capacity(markup.len());
        for node in markup {
            let id = self.build_markup(node)?;
            self.append_child(parent, id)?;
            inserted.push(id);
        }
        Ok(inserted)
    }

    /// Replace all children of `parent` with the given markup.
    pub fn replace_children(
        &mut self,
        parent: NodeId,
        markup: &[Node],
    ) -> Result<Vec<NodeId>, DomError> {
        self.clear_children(parent)?;
        self.insert_markup(parent, markup)
    }

    fn build_markup(&mut self, node: &Node) -> Result<NodeId, DomError> {
        match node {
            Node::Text(text) => Ok(self.create_text(text.clone())),
            Node::Element(element) => {
                let id = self.create_element(element.tag());
                for attribute in element.attributes() {
                    self.store_attribute(id, &attribute.name, attribute.value.clone())?;
                }
                for child in element.child_nodes() {
                    let child_id = self.build_markup(child)?;
                    self.append_child(id, child_id)?;
                }
                Ok(id)
            }
        }
    }

    /// Children of a node (empty for invalid handles).
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node)?.parent
    }

    /// The node itself followed by its ancestors up to the topmost one.
    pub fn inclusive_ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.contains(node).then_some(node);
        while let Some(id) = current {
            chain.push(id);
            current = self.parent(id);
        }
        chain
    }

    /// All descendants in document order, excluding the node itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            found.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        found
    }

    /// Descendant elements matching the predicate, in document order.
    pub fn query_all(
        &self,
        node: NodeId,
        predicate: impl Fn(&Self, NodeId) -> bool,
    ) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|&id| self.is_element(id) && predicate(self, id))
            .collect()
    }

    /// First descendant element matching the predicate.
    pub fn query(&self, node: NodeId, predicate: impl Fn(&Self, NodeId) -> bool) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|&id| self.is_element(id) && predicate(self, id))
    }

    /// Nearest inclusive ancestor element matching the predicate.
    pub fn closest(
        &self,
        node: NodeId,
        predicate: impl Fn(&Self, NodeId) -> bool,
    ) -> Option<NodeId> {
        self.inclusive_ancestors(node)
            .into_iter()
            .find(|&id| self.is_element(id) && predicate(self, id))
    }

    /// Find an attached element by its `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(self.root, |doc, node| doc.attribute(node, "id") == Some(id))
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = String::new();
        for id in std::iter::once(node).chain(self.descendants(node)) {
            if let Some(NodeData {
                kind: NodeKind::Text(t),
                ..
            }) = self.nodes.get(id)
            {
                text.push_str(t);
            }
        }
        text
    }

    /// Serialize a subtree as HTML.
    pub fn to_html(&self, node: NodeId) -> String {
        match self.to_markup(node) {
            Some(Node::Element(element)) => element.to_html(),
            Some(Node::Text(text)) => simple_form_html::escape_html(&text),
            None => String::new(),
        }
    }

    fn to_markup(&self, node: NodeId) -> Option<Node> {
        let data = self.nodes.get(node)?;
        match &data.kind {
            NodeKind::Text(text) => Some(Node::text(text.clone())),
            NodeKind::Element(element) => {
                let mut markup = Element::new(element.tag.clone());
                for (name, value) in &element.attributes {
                    markup = match value {
                        Some(value) => markup.attr(name.clone(), value.clone()),
                        None => markup.flag(name.clone(), true),
                    };
                }
                let children = data.children.iter().filter_map(|&c| self.to_markup(c));
                Some(Node::Element(markup.children(children)))
            }
        }
    }

    // === Attributes ===

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attribute(name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.store_attribute(node, name, Some(value.to_string()))
    }

    /// Set a valueless boolean attribute such as `disabled`.
    pub fn set_flag(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        self.store_attribute(node, name, None)
    }

    fn store_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: Option<String>,
    ) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        let name = name.to_ascii_lowercase();
        if element.checkedness_attribute() == Some(name.as_str()) && !element.dirty_checked {
            element.checked = true;
        }
        let regroups = matches!(name.as_str(), "checked" | "name" | "type");
        match element.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => element.attributes.push((name, value)),
        }
        if regroups {
            self.settle_radio_group(node);
        }
        Ok(())
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<bool, DomError> {
        let element = self.element_mut(node)?;
        let name = name.to_ascii_lowercase();
        if element.checkedness_attribute() == Some(name.as_str()) && !element.dirty_checked {
            element.checked = false;
        }
        let before = element.attributes.len();
        element.attributes.retain(|(n, _)| *n != name);
        Ok(element.attributes.len() != before)
    }

    /// Check if the `class` attribute lists the given class.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Effective `type` of an `input` (lowercase, `"text"` when absent).
    pub fn input_type(&self, node: NodeId) -> Option<String> {
        if self.tag(node)? != "input" {
            return None;
        }
        Some(
            self.attribute(node, "type")
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "text".to_string()),
        )
    }

    /// Check if the node is an `input` of the given type.
    pub fn is_input_of_type(&self, node: NodeId, input_type: &str) -> bool {
        self.input_type(node).as_deref() == Some(input_type)
    }

    /// Check if the node is a form control (`input`, `select`, `textarea`, `button`).
    pub fn is_form_control(&self, node: NodeId) -> bool {
        matches!(self.tag(node), Some("input" | "select" | "textarea" | "button"))
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.is_form_control(node) && self.has_attribute(node, "disabled")
    }

    /// Copy an element with its attributes and live state, without children.
    pub fn clone_node(&mut self, node: NodeId) -> Result<NodeId, DomError> {
        let kind = self.nodes.get(node).ok_or(DomError::InvalidNode(node))?.kind.clone();
        Ok(self.nodes.insert(NodeData::new(kind)))
    }

    // === Live state ===

    /// Current checkedness of a checkbox or radio (selectedness for options).
    pub fn checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|e| e.checked)
    }

    /// Set checkedness directly, as user interaction would.
    ///
    /// Checking a radio button unchecks the rest of its group.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) -> Result<(), DomError> {
        if checked && self.is_input_of_type(node, "radio") {
            for other in self.radio_group(node) {
                if other != node {
                    let element = self.element_mut(other)?;
                    element.checked = false;
                    element.dirty_checked = true;
                }
            }
        }
        let element = self.element_mut(node)?;
        element.checked = checked;
        element.dirty_checked = true;
        Ok(())
    }

    /// If the node is a checked radio, uncheck the rest of its group.
    ///
    /// Only checkedness changes; whether a radio was touched directly stays
    /// as it was.
    fn settle_radio_group(&mut self, node: NodeId) {
        if !self.is_input_of_type(node, "radio") || !self.checked(node) {
            return;
        }
        for other in self.radio_group(node) {
            if other == node {
                continue;
            }
            if let Some(NodeData {
                kind: NodeKind::Element(element),
                ..
            }) = self.nodes.get_mut(other)
            {
                element.checked = false;
            }
        }
    }

    /// Radio buttons sharing the node's name within the same form (or page).
    pub fn radio_group(&self, node: NodeId) -> Vec<NodeId> {
        let Some(name) = self.attribute(node, "name").filter(|n| !n.is_empty()) else {
            return if self.is_input_of_type(node, "radio") {
                vec![node]
            } else {
                Vec::new()
            };
        };
        let scope = self
            .closest(node, |doc, id| doc.tag(id) == Some("form"))
            .unwrap_or_else(|| *self.inclusive_ancestors(node).last().unwrap_or(&node));

        std::iter::once(scope)
            .chain(self.descendants(scope))
            .filter(|&id| {
                self.is_input_of_type(id, "radio") && self.attribute(id, "name") == Some(name)
            })
            .collect()
    }

    /// Current value of a control.
    ///
    /// Checkboxes and radios report their `value` attribute (`"on"` when
    /// absent); text controls report typed text over the attribute; selects
    /// report the selected option's value.
    pub fn value(&self, node: NodeId) -> String {
        let Some(element) = self.element(node) else {
            return String::new();
        };
        match element.tag.as_str() {
            "input" => match self.input_type(node).as_deref() {
                Some("checkbox" | "radio") => {
                    element.attribute("value").unwrap_or("on").to_string()
                }
                _ => element
                    .dirty_value
                    .as_deref()
                    .or(element.attribute("value"))
                    .unwrap_or_default()
                    .to_string(),
            },
            "textarea" => element
                .dirty_value
                .clone()
                .unwrap_or_else(|| self.text_content(node)),
            "select" => self
                .selected_option(node)
                .map(|option| self.value(option))
                .unwrap_or_default(),
            "option" => element
                .attribute("value")
                .map(str::to_string)
                .unwrap_or_else(|| self.text_content(node)),
            _ => element.attribute("value").unwrap_or_default().to_string(),
        }
    }

    /// Set the current value of a control, as typing or script would.
    pub fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), DomError> {
        let tag = self.require_element(node)?.tag.clone();
        match tag.as_str() {
            "input" if matches!(self.input_type(node).as_deref(), Some("checkbox" | "radio")) => {
                self.set_attribute(node, "value", value)
            }
            "input" | "textarea" => {
                self.element_mut(node)?.dirty_value = Some(value.to_string());
                Ok(())
            }
            "select" => {
                let options = self.options(node);
                let mut matched = false;
                for option in options {
                    let selected = !matched && self.value(option) == value;
                    matched |= selected;
                    let element = self.element_mut(option)?;
                    element.checked = selected;
                    element.dirty_checked = true;
                }
                Ok(())
            }
            _ => self.set_attribute(node, "value", value),
        }
    }

    /// The `option` descendants of a select.
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.query_all(select, |doc, id| doc.tag(id) == Some("option"))
    }

    /// The selected option: the last one marked selected, or the first option.
    pub fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.options(select);
        options
            .iter()
            .rev()
            .find(|&&option| self.checked(option))
            .or(options.first())
            .copied()
    }

    // === Page ===

    /// `href` of every stylesheet link in the page, in document order.
    pub fn stylesheet_hrefs(&self) -> Vec<String> {
        self.query_all(self.root, |doc, id| {
            doc.tag(id) == Some("link")
                && doc.attribute(id, "rel").is_some_and(|rel| {
                    rel.split_whitespace()
                        .any(|r| r.eq_ignore_ascii_case("stylesheet"))
                })
        })
        .into_iter()
        .filter_map(|id| self.attribute(id, "href").map(str::to_string))
        .collect()
    }

    /// Submissions that passed validation and were sent, oldest first.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Take the submission log, leaving it empty.
    pub fn take_submissions(&mut self) -> Vec<Submission> {
        std::mem::take(&mut self.submissions)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.len())
            .field("submissions", &self.submissions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use simple_form_html::Element;

    use super::*;

    fn mount(doc: &mut Document, element: Element) -> NodeId {
        let body = doc.body();
        doc.insert_markup(body, &[Node::from(element)]).unwrap()[0]
    }

    #[test]
    fn new_document_has_head_and_body() {
        let doc = Document::new();
        assert_eq!(doc.tag(doc.root()), Some("html"));
        assert_eq!(doc.children(doc.root()), &[doc.head(), doc.body()]);
        assert!(doc.is_connected(doc.body()));
    }

    #[test]
    fn append_moves_nodes() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        assert!(!doc.is_connected(div));

        doc.append_child(doc.head(), div).unwrap();
        doc.append_child(doc.body(), div).unwrap();
        assert!(doc.children(doc.head()).is_empty());
        assert_eq!(doc.children(doc.body()), &[div]);
        assert_eq!(doc.parent(div), Some(doc.body()));
    }

    #[test]
    fn append_rejects_cycles_and_text_parents() {
        let mut doc = Document::new();
        let body = doc.body();
        let root = doc.root();
        assert_eq!(
            doc.append_child(body, root),
            Err(DomError::HierarchyRequest { parent: body, child: root })
        );

        let text = doc.create_text("hi");
        let div = doc.create_element("div");
        assert_eq!(doc.append_child(text, div), Err(DomError::NotAnElement(text)));
    }

    #[test]
    fn removal_invalidates_subtree() {
        let mut doc = Document::new();
        let outer = mount(
            &mut doc,
            Element::new("div").child(Element::new("span").text("x")),
        );
        let span = doc.children(outer)[0];

        doc.remove(outer).unwrap();
        assert!(!doc.contains(outer));
        assert!(!doc.contains(span));
        assert_eq!(doc.remove(outer), Err(DomError::InvalidNode(outer)));
        assert_eq!(doc.remove(doc.root()), Err(DomError::RootRemoval));
    }

    #[test]
    fn markup_round_trips_through_the_page() {
        let mut doc = Document::new();
        let element = Element::new("div")
            .class("box")
            .child(Element::new("input").attr("name", "a").flag("required", true))
            .child(Element::new("p").text("Hello"));
        let id = mount(&mut doc, element.clone());

        assert_eq!(doc.to_html(id), element.to_html());
        assert_eq!(doc.text_content(id), "Hello");
    }

    #[test]
    fn queries_follow_document_order() {
        let mut doc = Document::new();
        let root = mount(
            &mut doc,
            Element::new("form").children([
                Element::new("input").attr("id", "first").class("a"),
                Element::new("div").child(Element::new("input").attr("id", "second").class("a b")),
            ]),
        );

        let found = doc.query_all(root, |doc, id| doc.has_class(id, "a"));
        assert_eq!(found.len(), 2);
        assert_eq!(doc.attribute(found[0], "id"), Some("first"));
        assert_eq!(doc.find_by_id("second"), Some(found[1]));
        assert_eq!(
            doc.closest(found[1], |doc, id| doc.tag(id) == Some("form")),
            Some(root)
        );
    }

    #[test]
    fn checked_attribute_seeds_checkedness_until_dirty() {
        let mut doc = Document::new();
        let input = mount(
            &mut doc,
            Element::new("input").attr("type", "checkbox").flag("checked", true),
        );
        assert!(doc.checked(input));

        doc.set_checked(input, false).unwrap();
        doc.set_attribute(input, "checked", "").unwrap();
        assert!(!doc.checked(input));
    }

    #[test]
    fn checking_a_radio_unchecks_its_group() {
        let mut doc = Document::new();
        let form = mount(
            &mut doc,
            Element::new("form").children([
                Element::new("input").attr("type", "radio").attr("name", "g").flag("checked", true),
                Element::new("input").attr("type", "radio").attr("name", "g"),
                Element::new("input")
                    .attr("type", "radio")
                    .attr("name", "other")
                    .flag("checked", true),
            ]),
        );
        let radios = doc.children(form).to_vec();

        doc.set_checked(radios[1], true).unwrap();
        assert!(!doc.checked(radios[0]));
        assert!(doc.checked(radios[1]));
        assert!(doc.checked(radios[2]));
        assert_eq!(doc.radio_group(radios[0]), &radios[..2]);
    }

    #[test]
    fn last_checked_radio_wins_when_markup_marks_several() {
        let mut doc = Document::new();
        let form = mount(
            &mut doc,
            Element::new("form").children([
                Element::new("input")
                    .attr("type", "radio")
                    .attr("name", "g")
                    .flag("checked", true),
                Element::new("input")
                    .attr("type", "radio")
                    .attr("name", "g")
                    .flag("checked", true),
            ]),
        );
        let radios = doc.children(form).to_vec();
        assert!(!doc.checked(radios[0]));
        assert!(doc.checked(radios[1]));

        doc.set_attribute(radios[0], "checked", "").unwrap();
        assert!(doc.checked(radios[0]));
        assert!(!doc.checked(radios[1]));

        let late = doc.create_element("input");
        doc.set_attribute(late, "type", "radio").unwrap();
        doc.set_attribute(late, "name", "g").unwrap();
        doc.set_flag(late, "checked").unwrap();
        doc.append_child(form, late).unwrap();
        assert!(!doc.checked(radios[0]));
        assert!(doc.checked(late));
    }

    #[test]
    fn values_of_each_control_kind() {
        let mut doc = Document::new();
        let form = mount(
            &mut doc,
            Element::new("form").children([
                Element::new("input").attr("value", "preset"),
                Element::new("input").attr("type", "checkbox"),
                Element::new("textarea").text("notes"),
                Element::new("select").children([
                    Element::new("option").text("Red"),
                    Element::new("option").attr("value", "g").text("Green"),
                ]),
            ]),
        );
        let controls = doc.children(form).to_vec();
        let [text, checkbox, textarea, select] = controls[..] else {
            panic!("Expected four controls");
        };

        assert_eq!(doc.value(text), "preset");
        doc.set_value(text, "typed").unwrap();
        assert_eq!(doc.value(text), "typed");
        assert_eq!(doc.attribute(text, "value"), Some("preset"));

        assert_eq!(doc.value(checkbox), "on");
        doc.set_value(checkbox, "true").unwrap();
        assert_eq!(doc.attribute(checkbox, "value"), Some("true"));

        assert_eq!(doc.value(textarea), "notes");

        assert_eq!(doc.value(select), "Red");
        doc.set_value(select, "g").unwrap();
        assert_eq!(doc.value(select), "g");
    }

    #[test]
    fn clone_copies_attributes_and_state_but_not_position() {
        let mut doc = Document::new();
        let input = mount(
            &mut doc,
            Element::new("input").attr("name", "n").attr("value", "v").flag("disabled", true),
        );
        doc.set_value(input, "typed").unwrap();

        let copy = doc.clone_node(input).unwrap();
        assert_eq!(doc.parent(copy), None);
        assert_eq!(doc.attribute(copy, "name"), Some("n"));
        assert!(doc.is_disabled(copy));
        assert_eq!(doc.value(copy), "typed");
    }

    #[test]
    fn lists_stylesheets() {
        let mut doc = Document::new();
        let head = doc.head();
        doc.insert_markup(
            head,
            &[
                Node::from(Element::new("link").attr("rel", "stylesheet").attr("href", "/a.css")),
                Node::from(Element::new("link").attr("rel", "icon").attr("href", "/favicon.ico")),
            ],
        )
        .unwrap();

        assert_eq!(doc.stylesheet_hrefs(), ["/a.css"]);
    }
}
