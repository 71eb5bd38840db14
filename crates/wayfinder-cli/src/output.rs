//! Output formatting for command results.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use wayfinder_lib::{RouteSummary, TraversalOrder};

/// Presentation format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

/// Result of an `explore` run, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub start: String,
    pub order: TraversalOrder,
    pub locations: Vec<String>,
}

/// Result of a `check` run, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkReport {
    pub locations: usize,
    pub links: usize,
    pub connected: bool,
}

impl OutputFormat {
    /// Render a planned route.
    pub fn render_route(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                println!(
                    "Route from {} to {} ({} hops):",
                    summary.start.display_name(),
                    summary.goal.display_name(),
                    summary.hops
                );
                for step in &summary.steps {
                    println!(" - {}", step.display_name());
                }
                println!("\nTotal distance: {}", summary.total_distance);
                Ok(())
            }
            OutputFormat::Json => render_json(summary),
        }
    }

    /// Render a traversal listing.
    pub fn render_traversal(self, report: &TraversalReport) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                println!(
                    "Reachable from {} ({}, {} locations):",
                    report.start,
                    report.order,
                    report.locations.len()
                );
                for location in &report.locations {
                    println!(" - {}", location);
                }
                Ok(())
            }
            OutputFormat::Json => render_json(report),
        }
    }

    /// Render a network report.
    pub fn render_report(self, report: &NetworkReport) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                println!("Network: {} locations, {} links", report.locations, report.links);
                println!("Connected: {}", if report.connected { "yes" } else { "no" });
                Ok(())
            }
            OutputFormat::Json => render_json(report),
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
