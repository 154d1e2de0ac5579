// src/link/outline.rs
// Prints a tree one node per line, indented by depth. Handy for seeing what
// the parser actually built out of a page before blaming the extractor.

use std::fmt::Write;

use super::tree::{NodeKind, Tree};

const INDENT: &str = "  ";

pub fn render_outline(tree: &Tree) -> String {
    let mut out = String::new();
    let mut stack = vec![(tree.root(), 0usize)];

    while let Some((node, depth)) = stack.pop() {
        out.push_str(&INDENT.repeat(depth));
        // Writing into a String cannot fail
        let _ = match node.kind() {
            NodeKind::Document => writeln!(out, "#document"),
            NodeKind::Element { tag, .. } => writeln!(out, "<{}>", tag),
            NodeKind::Text(text) => writeln!(out, "{:?}", text),
            NodeKind::Comment(text) => writeln!(out, "<!--{}-->", text),
        };
        stack.extend(node.children().rev().map(|child| (child, depth + 1)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::tree::NodeId;

    #[test]
    fn test_outline_of_empty_tree() {
        assert_eq!(render_outline(&Tree::new()), "#document\n");
    }

    #[test]
    fn test_outline_indents_by_depth() {
        let mut tree = Tree::new();
        let div = tree.append(NodeId::ROOT, NodeKind::element("div"));
        let a = tree.append(div, NodeKind::element_with("a", [("href", "/x")]));
        tree.append(a, NodeKind::text("go\n"));
        tree.append(div, NodeKind::comment(" note "));

        let expected = "#document\n  <div>\n    <a>\n      \"go\\n\"\n    <!-- note -->\n";
        assert_eq!(render_outline(&tree), expected);
    }
}
