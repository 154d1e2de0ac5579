// src/link/tree.rs
// =============================================================================
// The node tree the link extractor walks.
//
// scraper (html5ever underneath) does the actual HTML parsing. We convert its
// tree once into this small arena so the rest of the extractor only has to
// deal with four kinds of node:
// - Document: the root
// - Element: a tag with its attributes, in source order
// - Text: character data
// - Comment: ignored by every text operation
//
// All nodes live in one flat Vec and refer to their children by index, so
// building and dropping a tree never recurses, no matter how deeply the
// markup is nested.
// =============================================================================

use scraper::Html;
use std::fmt;

/// Index of a node inside its `Tree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The Document node every tree starts with
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A single name="value" pair on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// What a node is, plus the payload that only makes sense for that kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        tag: String,
        // A Vec rather than a map: names may repeat and the first one wins
        attributes: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
}

impl NodeKind {
    /// An element with no attributes
    pub fn element(tag: impl Into<String>) -> Self {
        NodeKind::Element {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// An element with the given attributes, kept in the order given
    pub fn element_with<I, N, V>(tag: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        NodeKind::Element {
            tag: tag.into(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| Attribute::new(name, value))
                .collect(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        NodeKind::Text(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        NodeKind::Comment(text.into())
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    children: Vec<NodeId>,
}

/// An immutable-once-built document tree
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

impl Tree {
    /// Creates a tree holding only the Document root
    pub fn new() -> Self {
        Tree {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                children: Vec::new(),
            }],
        }
    }

    /// Converts a parsed scraper document into our tree
    ///
    /// Doctype and processing-instruction nodes are dropped; they carry no
    /// text and no links.
    pub fn from_html(html: &Html) -> Self {
        let mut tree = Tree::new();

        // (scraper node, parent in our tree). Children are pushed in reverse
        // so they pop off in document order.
        let mut stack: Vec<_> = html
            .tree
            .root()
            .children()
            .rev()
            .map(|child| (child, NodeId::ROOT))
            .collect();

        while let Some((node, parent)) = stack.pop() {
            let kind = match node.value() {
                scraper::Node::Element(element) => NodeKind::Element {
                    tag: element.name().to_string(),
                    attributes: element
                        .attrs()
                        .map(|(name, value)| Attribute::new(name, value))
                        .collect(),
                },
                scraper::Node::Text(text) => NodeKind::Text((**text).to_owned()),
                scraper::Node::Comment(comment) => NodeKind::Comment((**comment).to_owned()),
                _ => continue,
            };

            let id = tree.append(parent, kind);
            stack.extend(node.children().rev().map(|child| (child, id)));
        }

        tree
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        if id.0 < self.nodes.len() {
            Some(Node { tree: self, id })
        } else {
            None
        }
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds `kind` as the last child of `parent` and returns its id
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        assert!(
            parent.0 < self.nodes.len(),
            "parent {:?} is not a node of this tree",
            parent
        );

        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

/// A borrowed handle to one node of a `Tree`
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.data().kind
    }

    /// Tag name, for elements only
    pub fn tag(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// True for an element whose tag is exactly `tag`
    pub fn is_element(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// Attributes in source order; empty for anything but an element
    pub fn attributes(&self) -> &'a [Attribute] {
        match self.kind() {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Value of the first attribute called `name`
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attributes()
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Payload of a text node
    pub fn text(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Children in document order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Node<'a>> + ExactSizeIterator + 'a {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", self.kind())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an arena instead of Box<Node> children?
//    - A tree of boxes is dropped recursively, one stack frame per level
//    - Here every node sits in one Vec and children are just indices
//    - Dropping the tree frees a single Vec, whatever the depth
//
// 2. What is Node<'a>?
//    - A tiny handle: a reference to the tree plus an index
//    - It is Copy, so passing it around costs nothing
//    - The 'a lifetime ties it to the tree, so it can't outlive the tree
//
// 3. Why a newtype NodeId(usize)?
//    - Plain usize could be mixed up with any other number
//    - The private field means ids only come from a Tree
// -----------------------------------------------------------------------------
