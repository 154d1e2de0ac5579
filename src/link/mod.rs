// src/link/mod.rs
// =============================================================================
// The HTML link extractor.
//
// Pipeline:
// 1. Read the whole input stream
// 2. Parse it with scraper (html5ever) and convert to our own Tree (tree.rs)
// 3. Find the <a> elements in pre-order (anchor.rs)
// 4. Build a Link for each: first href + normalized text (anchor.rs, text.rs)
//
// Hrefs are returned exactly as written. Nothing is resolved against a base
// URL and the markup is not validated beyond what the parser does.
//
// Submodules:
// - tree: the node tree and the conversion from scraper's DOM
// - text: text flattening and whitespace normalization
// - anchor: anchor search and Link building
// - outline: a printable dump of the tree
// =============================================================================

mod anchor;
mod outline;
mod text;
mod tree;

use std::io::Read;

use scraper::Html;

use crate::error::{LinkError, Result};

pub use anchor::{anchor_nodes, build_link, Link};
pub use outline::render_outline;
pub use text::{flatten_text, label, normalize_whitespace};
pub use tree::{Attribute, Node, NodeId, NodeKind, Tree};

/// Knobs for `parse_with` and `parse_tree`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Reject documents the parser had to repair instead of accepting
    /// whatever tree it recovered
    pub strict: bool,
}

impl ExtractOptions {
    pub fn strict() -> Self {
        ExtractOptions { strict: true }
    }
}

/// Extracts every link from an HTML document using the default (lenient)
/// options
///
/// Example:
///   input  = `<a href="/a">First <b>Link</b></a><a>Second</a>`
///   result = [Link { href: "/a", text: "First Link" }, Link { href: "", text: "Second" }]
pub fn parse<R: Read>(reader: R) -> Result<Vec<Link>> {
    parse_with(reader, &ExtractOptions::default())
}

/// Extracts every link from an HTML document
pub fn parse_with<R: Read>(reader: R, options: &ExtractOptions) -> Result<Vec<Link>> {
    let tree = parse_tree(reader, options)?;
    let links = extract_links(&tree);
    tracing::debug!(links = links.len(), "extracted links");
    Ok(links)
}

/// Reads and parses an HTML document into a `Tree`
pub fn parse_tree<R: Read>(mut reader: R, options: &ExtractOptions) -> Result<Tree> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    tracing::debug!(bytes = bytes.len(), "read HTML input");

    // html5ever works on Unicode text; invalid UTF-8 becomes U+FFFD
    let markup = String::from_utf8_lossy(&bytes);
    let html = Html::parse_document(&markup);

    if options.strict && !html.errors.is_empty() {
        return Err(LinkError::parse(html.errors.join("; ")));
    }
    if !html.errors.is_empty() {
        tracing::debug!(errors = html.errors.len(), "parser recovered from malformed markup");
    }

    let tree = Tree::from_html(&html);
    tracing::debug!(nodes = tree.node_count(), "built node tree");
    Ok(tree)
}

/// Runs the anchor search and link builder over an existing tree
pub fn extract_links(tree: &Tree) -> Vec<Link> {
    anchor_nodes(tree.root()).into_iter().map(build_link).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream dropped"))
        }
    }

    #[test]
    fn test_parse_scenario() {
        let html = r#"<a href="/a">First <b>Link</b></a><p>ignored</p><a>Second</a>"#;
        let links = parse(html.as_bytes()).unwrap();
        assert_eq!(links, vec![Link::new("/a", "First Link"), Link::new("", "Second")]);
    }

    #[test]
    fn test_parse_empty_input() {
        let links = parse(&b""[..]).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_parse_read_failure() {
        let err = parse(FailingReader).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_href_kept_verbatim() {
        let html = r#"<a href="../up?q=1#frag">Up</a><a href="mailto:me@example.com">Mail</a>"#;
        let links = parse(html.as_bytes()).unwrap();
        assert_eq!(links[0].href, "../up?q=1#frag");
        assert_eq!(links[1].href, "mailto:me@example.com");
    }

    #[test]
    fn test_duplicate_href_first_wins() {
        let html = r#"<a href="/first" href="/second">Dup</a>"#;
        let links = parse(html.as_bytes()).unwrap();
        assert_eq!(links, vec![Link::new("/first", "Dup")]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = br#"<a href="/x">caf"#.to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"</a>");

        let links = parse(&bytes[..]).unwrap();
        assert_eq!(links, vec![Link::new("/x", "caf\u{fffd}")]);
    }

    #[test]
    fn test_strict_rejects_repaired_markup() {
        // No doctype, so html5ever reports an error before recovering
        let err = parse_with(&b"<p><a href=\"/x\">x</a>"[..], &ExtractOptions::strict())
            .unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_lenient_accepts_repaired_markup() {
        let links = parse(&b"<p><a href=\"/x\">x"[..]).unwrap();
        assert_eq!(links, vec![Link::new("/x", "x")]);
    }

    #[test]
    fn test_extract_links_on_parsed_tree() {
        let tree = parse_tree(
            &b"<ul><li><a href=\"1\">one</a></li><li><a href=\"2\">two</a></li></ul>"[..],
            &ExtractOptions::default(),
        )
        .unwrap();
        let hrefs: Vec<_> = extract_links(&tree).into_iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["1", "2"]);
    }
}
