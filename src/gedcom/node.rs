//! In-memory GEDCOM document graph.

use std::collections::HashMap;

/// The value carried on a GEDCOM line after its tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    None,
    /// Free text; `@` is escaped when written.
    Text(String),
    /// A cross-reference to another record, written as `@X@`.
    Pointer(String),
}

/// One GEDCOM line and its subordinate lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub xref: Option<String>,
    pub tag: &'static str,
    pub value: Value,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            xref: None,
            tag,
            value: Value::None,
            children: Vec::new(),
        }
    }

    pub fn text(tag: &'static str, text: impl Into<String>) -> Self {
        Self {
            value: Value::Text(text.into()),
            ..Self::new(tag)
        }
    }

    pub fn pointer(tag: &'static str, pointer: impl Into<String>) -> Self {
        Self {
            value: Value::Pointer(pointer.into()),
            ..Self::new(tag)
        }
    }

    /// A top-level record identified by `xref`.
    pub fn record(tag: &'static str, xref: impl Into<String>) -> Self {
        Self {
            xref: Some(xref.into()),
            ..Self::new(tag)
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Returns the first direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Returns all direct children with the given tag.
    pub fn children_with<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Returns the text or pointer value as a string slice.
    pub fn value_str(&self) -> Option<&str> {
        match &self.value {
            Value::None => None,
            Value::Text(s) | Value::Pointer(s) => Some(s),
        }
    }
}

/// Top-level records keyed by pointer, kept in insertion order.
#[derive(Debug, Clone, Default)]
struct RecordList {
    nodes: Vec<Node>,
    by_pointer: HashMap<String, usize>,
}

impl RecordList {
    /// Inserts a record unless one with the same pointer exists.
    /// Returns true if the record was created.
    fn insert(&mut self, node: Node) -> bool {
        let Some(pointer) = node.xref.clone() else {
            return false;
        };
        if self.by_pointer.contains_key(&pointer) {
            return false;
        }
        self.by_pointer.insert(pointer, self.nodes.len());
        self.nodes.push(node);
        true
    }

    fn get(&self, pointer: &str) -> Option<&Node> {
        self.by_pointer.get(pointer).map(|&i| &self.nodes[i])
    }

    fn get_mut(&mut self, pointer: &str) -> Option<&mut Node> {
        match self.by_pointer.get(pointer) {
            Some(&i) => self.nodes.get_mut(i),
            None => None,
        }
    }
}

/// A complete GEDCOM document: header, individuals, families.
///
/// The trailer is implicit and added by the writer.
#[derive(Debug, Clone)]
pub struct Document {
    pub header: Node,
    individuals: RecordList,
    families: RecordList,
}

impl Document {
    pub fn new(header: Node) -> Self {
        Self {
            header,
            individuals: RecordList::default(),
            families: RecordList::default(),
        }
    }

    /// Adds an `INDI` record. Returns false if the pointer is already taken.
    pub fn add_individual(&mut self, node: Node) -> bool {
        self.individuals.insert(node)
    }

    /// Adds an empty `FAM` record for `pointer` unless it already exists.
    /// Returns true if the record was created.
    pub fn add_family(&mut self, pointer: &str) -> bool {
        self.families.insert(Node::record(super::tags::tag::FAM, pointer))
    }

    pub fn individual(&self, pointer: &str) -> Option<&Node> {
        self.individuals.get(pointer)
    }

    pub fn family(&self, pointer: &str) -> Option<&Node> {
        self.families.get(pointer)
    }

    pub fn family_mut(&mut self, pointer: &str) -> Option<&mut Node> {
        self.families.get_mut(pointer)
    }

    pub fn individuals(&self) -> &[Node] {
        &self.individuals.nodes
    }

    pub fn families(&self) -> &[Node] {
        &self.families.nodes
    }

    /// Pointers of all family records, in document order.
    pub fn family_pointers(&self) -> Vec<String> {
        self.families
            .nodes
            .iter()
            .filter_map(|n| n.xref.clone())
            .collect()
    }
}
