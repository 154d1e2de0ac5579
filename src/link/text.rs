// src/link/text.rs
// =============================================================================
// Turns the contents of a node into the label shown for a link.
//
// Two steps:
// 1. flatten_text: glue together every text node under a node, in document
//    order, with nothing inserted between them
// 2. normalize_whitespace: collapse whitespace runs to one space and trim
//
// Flattening walks the tree with an explicit stack instead of recursion, so a
// very deeply nested anchor cannot blow the call stack.
// =============================================================================

use super::tree::{Node, NodeKind};

/// Concatenates the text of every text node under `node`, in document order
///
/// A text node returns its own payload. Anything that is not an element
/// (comments, the document itself) contributes nothing.
pub fn flatten_text(node: Node<'_>) -> String {
    let mut out = String::new();
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        match current.kind() {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => stack.extend(current.children().rev()),
            NodeKind::Document | NodeKind::Comment(_) => {}
        }
    }

    out
}

/// Collapses every whitespace run into a single space and trims both ends
pub fn normalize_whitespace(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}

/// Flattened and normalized text of `node`
pub fn label(node: Node<'_>) -> String {
    normalize_whitespace(&flatten_text(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::tree::{NodeId, Tree};

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_whitespace("  hello \n world  "), "hello world");
        assert_eq!(normalize_whitespace("a\t\tb\r\nc"), "a b c");
    }

    #[test]
    fn test_normalize_blank_input() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t\r "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = ["", "one", "  one  two ", "x\n\ny\tz", "already normal"];
        for sample in samples {
            let once = normalize_whitespace(sample);
            assert_eq!(normalize_whitespace(&once), once);
            assert!(!once.contains("  "));
            assert_eq!(once.trim(), once);
        }
    }

    #[test]
    fn test_flatten_keeps_raw_spacing() {
        let mut tree = Tree::new();
        let a = tree.append(NodeId::ROOT, NodeKind::element("a"));
        tree.append(a, NodeKind::text("  First "));
        let b = tree.append(a, NodeKind::element("b"));
        tree.append(b, NodeKind::text("Link"));
        tree.append(a, NodeKind::text("\n"));

        let a = tree.get(a).unwrap();
        assert_eq!(flatten_text(a), "  First Link\n");
        assert_eq!(label(a), "First Link");
    }

    #[test]
    fn test_flatten_inserts_no_separator() {
        let mut tree = Tree::new();
        let a = tree.append(NodeId::ROOT, NodeKind::element("a"));
        let one = tree.append(a, NodeKind::element("span"));
        tree.append(one, NodeKind::text("foo"));
        let two = tree.append(a, NodeKind::element("span"));
        tree.append(two, NodeKind::text("bar"));

        assert_eq!(label(tree.get(a).unwrap()), "foobar");
    }

    #[test]
    fn test_flatten_skips_comments() {
        let mut tree = Tree::new();
        let a = tree.append(NodeId::ROOT, NodeKind::element("a"));
        tree.append(a, NodeKind::comment("hidden"));

        assert_eq!(flatten_text(tree.get(a).unwrap()), "");
    }

    #[test]
    fn test_flatten_text_node_returns_payload() {
        let mut tree = Tree::new();
        let text = tree.append(NodeId::ROOT, NodeKind::text(" raw "));
        assert_eq!(flatten_text(tree.get(text).unwrap()), " raw ");
    }

    #[test]
    fn test_flatten_document_is_empty() {
        let mut tree = Tree::new();
        tree.append(NodeId::ROOT, NodeKind::text("top level"));
        assert_eq!(flatten_text(tree.root()), "");
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let mut tree = Tree::new();
        let a = tree.append(NodeId::ROOT, NodeKind::element("a"));
        let mut parent = a;
        for _ in 0..200_000 {
            parent = tree.append(parent, NodeKind::element("span"));
        }
        tree.append(parent, NodeKind::text(" bottom "));

        assert_eq!(label(tree.get(a).unwrap()), "bottom");
    }
}
