// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - links: print the links found in an HTML document
// - tree: print the parsed node tree as an indented outline
// - status: request every URL in a CSV file and record the status codes
//
// Most flags can also be set through LINKSCAN_* environment variables, which
// is convenient in CI where the command line is fixed.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linkscan",
    version,
    about = "Extract links from HTML documents and audit URL status codes",
    long_about = "linkscan lists every <a> link in an HTML document together with its text, \
                  and can check a list of URLs for their HTTP status codes."
)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG overrides this when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the links in an HTML document
    ///
    /// Example: linkscan links page.html --json
    Links {
        /// HTML file to read, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Fail if the parser had to repair malformed markup
        #[arg(long, env = "LINKSCAN_STRICT")]
        strict: bool,
    },

    /// Print the parsed document as an indented node outline
    ///
    /// Example: curl -s https://example.com | linkscan tree
    Tree {
        /// HTML file to read, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Check the HTTP status of every URL in a CSV file
    ///
    /// Example: linkscan status --csv urls.csv --out results.csv
    Status {
        /// CSV file whose first column holds the URLs to check
        #[arg(long, default_value = "404.csv")]
        csv: PathBuf,

        /// Where to write the `url,status` results
        #[arg(long, default_value = "404result.csv")]
        out: PathBuf,

        /// Maximum number of requests in flight
        #[arg(long, default_value_t = 10, env = "LINKSCAN_CONCURRENCY")]
        concurrency: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10, env = "LINKSCAN_TIMEOUT")]
        timeout: u64,

        /// Also print the results as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}
