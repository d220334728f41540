//! Sift CLI - Main Entry Point
//!
//! Reduces a rendered HTML document (file or stdin) to its JSON forest.
//! Acquiring the rendered HTML in the first place is someone else's job;
//! this tool starts where the renderer stops.

use anyhow::{Context, Result};
use sift_core::{count_forest, filter_forest, reduce_page, ContentKind};
use std::io::Read;

struct Args {
    input: String,
    url: Option<String>,
    filter: Option<ContentKind>,
    pretty: bool,
}

fn usage() -> ! {
    eprintln!("Usage: sift <file|-> [--url <url>] [--filter text|image|video] [--pretty]");
    std::process::exit(2);
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut url = None;
    let mut filter = None;
    let mut pretty = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => url = Some(args.next().unwrap_or_else(|| usage())),
            "--filter" => {
                let name = args.next().unwrap_or_else(|| usage());
                filter = Some(
                    ContentKind::from_name(&name)
                        .with_context(|| format!("unknown content kind: {name}"))?,
                );
            }
            "--pretty" => pretty = true,
            "--help" | "-h" => usage(),
            _ if input.is_none() => input = Some(arg),
            _ => usage(),
        }
    }

    match input {
        Some(input) => Ok(Args { input, url, filter, pretty }),
        None => usage(),
    }
}

fn main() -> Result<()> {
    // Initialize logging before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let mut doc = if args.input == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("failed to read stdin")?;
        let url = args.url.as_deref().unwrap_or("about:stdin");
        sift_html::HtmlParser::new().parse_with_url(&html, url)
    } else {
        match &args.url {
            Some(url) => {
                let html = std::fs::read_to_string(&args.input)
                    .with_context(|| format!("failed to read {}", args.input))?;
                sift_html::HtmlParser::new().parse_with_url(&html, url)
            }
            None => sift_html::HtmlParser::new().parse_file(&args.input)?,
        }
    };

    let page = reduce_page(&mut doc);
    tracing::info!(
        "reduced \"{}\" to {} top-level nodes, {} content elements",
        page.title,
        page.data.len(),
        count_forest(&page.data)
    );

    let json = match args.filter {
        Some(kind) => {
            let nodes = filter_forest(&page.data, kind);
            to_json(&nodes, args.pretty)?
        }
        None => to_json(&page, args.pretty)?,
    };
    println!("{json}");

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.context("failed to serialize output")
}
