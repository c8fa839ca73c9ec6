//! chronica-export - print the filtered timeline
//!
//! Fetches the event feed once, applies a single filter and writes the
//! result to stdout in the chosen format. Logs go to stderr so output stays
//! pipeable.

use std::path::Path;

use clap::Parser;

use libchronica::feed;
use libchronica::gallery::gallery_fragment;
use libchronica::render::{
    format::format_category, node::to_html, timeline_fragment, timeline_rows, TimelineRow,
};
use libchronica::store::TimelineStore;
use libchronica::types::FilterState;
use libchronica::viz::{bars, pie, slider, span};
use libchronica::{logging, ChronicaError, Config};

#[derive(Parser, Debug)]
#[command(name = "chronica-export")]
#[command(version, about = "Export the console-history timeline")]
#[command(long_about = r#"Fetch the timeline feed, apply one filter and print the result.

EXAMPLES:
    # Whole timeline as text
    chronica-export

    # Only Nintendo events
    chronica-export --filter manufacturer-nintendo

    # Only console releases, as JSON for scripting
    chronica-export --filter console-release --format json | jq '.[].title'

    # HTML fragment with the reference visualizations appended
    chronica-export --format html --reference data/reference.json > timeline.html

    # Explicit feed location and a short timeout
    chronica-export --feed https://example.com/timeline-data.json --timeout 5

FILTERS:
    all                  - every event (default)
    manufacturer-<name>  - case-insensitive manufacturer match
    <category>           - exact category key, e.g. console-release

EXIT CODES:
    0 - Success
    2 - Feed error (network, timeout, malformed payload)
    3 - Invalid input
"#)]
struct Args {
    /// Feed URL or file path (defaults to the configured feed)
    #[arg(long, value_name = "URL|PATH")]
    feed: Option<String>,

    /// Filter token: all, manufacturer-<name>, or a category key
    #[arg(short = 'F', long, default_value = "all", value_name = "TOKEN")]
    filter: String,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "html"])]
    format: String,

    /// Reference document for the visualization fragments (html only)
    #[arg(long, value_name = "PATH")]
    reference: Option<String>,

    /// Feed timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() {
    logging::init_from_env();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> Result<(), ChronicaError> {
    let config = Config::load().unwrap_or_else(|_| Config::default_config());

    let source_spec = args.feed.unwrap_or_else(|| config.feed.source.clone());
    let timeout_secs = args.timeout.unwrap_or(config.feed.timeout_secs);

    let source = feed::source_for(&source_spec, timeout_secs);
    let events = source.fetch().await?;
    tracing::info!(count = events.len(), source = %source.describe(), "feed loaded");

    let mut store = TimelineStore::new(events);
    store.set_filter(FilterState::parse(&args.filter));

    let output = match args.format.as_str() {
        "text" => render_text(&store),
        "json" => render_json(&store)?,
        "html" => render_html(&store, args.reference.as_deref()),
        other => return Err(ChronicaError::Invalid(format!("unknown format: {}", other))),
    };

    println!("{}", output);
    Ok(())
}

fn render_text(store: &TimelineStore) -> String {
    let mut out = Vec::new();

    for row in timeline_rows(store) {
        match row {
            TimelineRow::Divider { label, .. } => {
                out.push(format!("== {} ==", label));
            }
            TimelineRow::Item(event) => {
                out.push(format!(
                    "{}  {}  [{} · {}]",
                    event.year,
                    event.title,
                    format_category(&event.category),
                    event.manufacturer
                ));
            }
        }
    }

    if out.is_empty() {
        out.push(format!("No events match filter '{}'", store.filter()));
    }

    out.join("\n")
}

fn render_json(store: &TimelineStore) -> Result<String, ChronicaError> {
    let visible: Vec<_> = store.visible_events().collect();
    serde_json::to_string_pretty(&visible)
        .map_err(|e| ChronicaError::Invalid(format!("serialization failed: {}", e)))
}

fn render_html(store: &TimelineStore, reference_path: Option<&str>) -> String {
    let mut out = to_html(&timeline_fragment(store));

    if let Some(path) = reference_path {
        let reference = feed::load_reference(Path::new(path));

        for chart in bars::spec_charts(&reference.consoles) {
            out.push('\n');
            out.push_str(&to_html(&bars::bars_fragment(&chart)));
        }

        if !reference.market_share.is_empty() {
            out.push('\n');
            out.push_str(&to_html(&pie::pie_fragment(&reference.market_share)));
        }

        for generation in &reference.generations {
            out.push('\n');
            out.push_str(&to_html(&slider::slide_fragment(generation)));
        }

        if !reference.gallery.is_empty() {
            out.push('\n');
            out.push_str(&to_html(&gallery_fragment(&reference.gallery)));
        }
    }

    // The era span is laid out over the filtered events themselves
    let visible: Vec<_> = store.visible_events().cloned().collect();
    if let Some(era_span) = span::era_span(&visible) {
        out.push('\n');
        out.push_str(&to_html(&span::span_fragment(&era_span)));
    }

    out
}
