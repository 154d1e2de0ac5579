// src/lib.rs
// =============================================================================
// linkscan: pull links out of HTML documents and audit URL status codes.
//
// Modules:
// - link: the HTML link extractor (parse a document, get back its links)
// - status: the HTTP status auditor used by `linkscan status`
// - error: error types for the link extractor
// - logging: tracing subscriber setup for the binary
// =============================================================================

pub mod error;
pub mod link;
pub mod logging;
pub mod status;

pub use error::{LinkError, Result};
pub use link::{parse, parse_with, ExtractOptions, Link};
