// src/link/anchor.rs
// =============================================================================
// Finds the <a> elements in a tree and turns each one into a Link.
//
// anchor_nodes is a pre-order depth-first search. When it reaches an <a> it
// reports it and does not look inside it for more anchors: an inner <a> is
// never reported on its own, its text simply becomes part of the outer
// link's text.
//
// The search keeps its own stack of pending nodes, so the order is exactly
// what a recursive walk would give but deep documents cost heap, not call
// stack.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::text;
use super::tree::Node;

/// A link found in an HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Value of the first href attribute, or "" when there is none
    pub href: String,
    /// Text inside the anchor with whitespace collapsed and trimmed
    pub text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Link {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// All outermost <a> elements reachable from `root`, in pre-order
pub fn anchor_nodes(root: Node<'_>) -> Vec<Node<'_>> {
    let mut anchors = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_element("a") {
            anchors.push(node);
            continue;
        }
        stack.extend(node.children().rev());
    }

    anchors
}

/// Builds the Link for one anchor element
pub fn build_link(anchor: Node<'_>) -> Link {
    Link {
        href: anchor.attr("href").unwrap_or_default().to_string(),
        text: text::label(anchor),
    }
}
