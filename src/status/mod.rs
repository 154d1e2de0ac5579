// src/status/mod.rs
// =============================================================================
// The URL status auditor behind `linkscan status`.
//
// Submodules:
// - http: requests each URL and records its final status code
// - report: reads the URL list from CSV and writes results back as CSV
// =============================================================================

mod http;
mod report;

pub use http::{check_statuses, CheckConfig, StatusRecord};
pub use report::{read_urls, write_records};
