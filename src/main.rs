// src/main.rs
// =============================================================================
// This is the entry point of the linkscan CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging on stderr
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = broken URLs, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::time::Duration;

use cli::{Cli, Commands};
use linkscan::link::{self, ExtractOptions, Link};
use linkscan::status::{self, CheckConfig, StatusRecord};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success
//   Ok(1) = broken URLs found by `status`
//   Err = anything went wrong (mapped to exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    linkscan::logging::init(cli.verbose);

    match cli.command {
        Commands::Links { input, json, strict } => handle_links(&input, json, strict),
        Commands::Tree { input } => handle_tree(&input),
        Commands::Status {
            csv,
            out,
            concurrency,
            timeout,
            json,
        } => {
            let config = CheckConfig {
                concurrency,
                timeout: Duration::from_secs(timeout),
                ..CheckConfig::default()
            };
            handle_status(&csv, &out, &config, json).await
        }
    }
}

// Opens a file, or stdin when the path is '-'
fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

// Handles the 'links' subcommand
fn handle_links(input: &Path, json: bool, strict: bool) -> Result<i32> {
    let options = ExtractOptions { strict };
    let links = link::parse_with(open_input(input)?, &options)
        .with_context(|| format!("failed to extract links from {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        print_links_table(&links);
    }

    Ok(0)
}

// Handles the 'tree' subcommand
fn handle_tree(input: &Path) -> Result<i32> {
    let tree = link::parse_tree(open_input(input)?, &ExtractOptions::default())
        .with_context(|| format!("failed to parse {}", input.display()))?;

    print!("{}", link::render_outline(&tree));
    Ok(0)
}

// Handles the 'status' subcommand
async fn handle_status(csv: &Path, out: &Path, config: &CheckConfig, json: bool) -> Result<i32> {
    let file = File::open(csv).with_context(|| format!("failed to open {}", csv.display()))?;
    let urls = status::read_urls(BufReader::new(file))
        .with_context(|| format!("failed to read URLs from {}", csv.display()))?;

    tracing::info!(count = urls.len(), file = %csv.display(), "checking URLs");
    let records = status::check_statuses(urls, config).await?;

    let output = File::create(out).with_context(|| format!("failed to create {}", out.display()))?;
    status::write_records(output, &records)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_status_lines(&records);
    }

    let broken_count = records.iter().filter(|r| r.is_broken()).count();
    if broken_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn print_links_table(links: &[Link]) {
    println!("{:<50} {}", "HREF", "TEXT");
    println!("{}", "=".repeat(80));

    for link in links {
        let href = if link.href.chars().count() > 47 {
            format!("{}...", link.href.chars().take(47).collect::<String>())
        } else {
            link.href.clone()
        };
        println!("{:<50} {}", href, link.text);
    }

    println!();
    println!("{} link(s) found", links.len());
}

fn print_status_lines(records: &[StatusRecord]) {
    for record in records {
        match &record.message {
            Some(message) => println!("{} {} ({})", record.status, record.url, message),
            None => println!("{} {}", record.status, record.url),
        }
    }
}
