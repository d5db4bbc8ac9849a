//! A headless [`Document`] keeping its elements in memory
//!
//! Used by drivers that don't have a real page to render to, they read the
//! state of the elements back once a lookup is done.

use super::surface::{Document, Element};
use super::surface::{
    ERROR, ERROR_MESSAGE, IP_INPUT, LOADING, LOOKUP_FORM, RESULTS, RESULT_FIELDS,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    pub hidden: bool,
    pub value: String,
}

type Nodes = Rc<RefCell<BTreeMap<String, Node>>>;

#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    nodes: Nodes,
}

impl MemoryDocument {
    /// Creates a document with all the elements of the lookup page, every region hidden.
    pub fn with_template() -> Self {
        let document = Self::default();
        for id in [LOADING, RESULTS, ERROR] {
            document.insert(
                id,
                Node {
                    hidden: true,
                    ..Default::default()
                },
            );
        }
        for id in [ERROR_MESSAGE, LOOKUP_FORM, IP_INPUT]
            .into_iter()
            .chain(RESULT_FIELDS)
        {
            document.insert(id, Node::default());
        }
        document
    }

    pub fn insert(&self, id: impl Into<String>, node: Node) {
        self.nodes.borrow_mut().insert(id.into(), node);
    }

    pub fn remove(&self, id: &str) -> Option<Node> {
        self.nodes.borrow_mut().remove(id)
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.nodes.borrow().get(id).map(|node| node.text.clone())
    }

    /// Whether the element is displayed, `false` when it doesn't exist.
    pub fn is_visible(&self, id: &str) -> bool {
        self.nodes
            .borrow()
            .get(id)
            .map(|node| !node.hidden)
            .unwrap_or(false)
    }

    /// Types in an input element, as a user would.
    pub fn set_value(&self, id: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(id) {
            node.value = value.into();
        }
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.nodes
            .borrow()
            .contains_key(id)
            .then(|| MemoryElement {
                id: id.to_string(),
                nodes: Rc::clone(&self.nodes),
            })
    }
}

/// Handle on a node of a [`MemoryDocument`].
///
/// Writing to an element removed from the document since it was resolved does nothing.
#[derive(Clone, Debug)]
pub struct MemoryElement {
    id: String,
    nodes: Nodes,
}

impl MemoryElement {
    fn update(&self, func: impl FnOnce(&mut Node)) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(&self.id) {
            func(node);
        }
    }
}

impl Element for MemoryElement {
    fn set_text(&self, text: &str) {
        self.update(|node| node.text = text.to_string());
    }

    fn set_hidden(&self, hidden: bool) {
        self.update(|node| node.hidden = hidden);
    }

    fn value(&self) -> String {
        self.nodes
            .borrow()
            .get(&self.id)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }
}
