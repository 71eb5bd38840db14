use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_lib::{
    is_connected, load_network, plan_route, traverse, Error as LibError, LocationGraph,
    RouteRequest, RouteSummary, TraversalOrder,
};

mod output;

use output::{NetworkReport, OutputFormat, TraversalReport};

#[derive(Parser, Debug)]
#[command(author, version, about = "Wayfinder transit network utilities")]
struct Cli {
    /// Path to the network document (JSON).
    #[arg(long)]
    network: PathBuf,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the lowest-weight route between two locations.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
    /// List every location reachable from a starting point.
    Explore {
        /// Starting location name.
        #[arg(long)]
        start: String,
        /// Traversal order.
        #[arg(long, value_enum, default_value_t = ExploreOrder::BreadthFirst)]
        order: ExploreOrder,
    },
    /// Report network size and connectivity.
    Check,
}

/// CLI-side mirror of [`TraversalOrder`] so clap can parse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ExploreOrder {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl From<ExploreOrder> for TraversalOrder {
    fn from(order: ExploreOrder) -> Self {
        match order {
            ExploreOrder::BreadthFirst => TraversalOrder::BreadthFirst,
            ExploreOrder::DepthFirst => TraversalOrder::DepthFirst,
        }
    }
}

impl std::fmt::Display for ExploreOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TraversalOrder::from(*self))
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_network(&cli.network)
        .with_context(|| format!("failed to load network from {}", cli.network.display()))?;

    match cli.command {
        Command::Route { from, to } => handle_route(&graph, cli.format, &from, &to),
        Command::Explore { start, order } => {
            handle_explore(&graph, cli.format, &start, order.into())
        }
        Command::Check => handle_check(&graph, cli.format),
    }
}

fn handle_route(graph: &LocationGraph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let request = RouteRequest::new(from, to);
    let plan = match plan_route(graph, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary = RouteSummary::from_plan(graph, &plan)
        .context("failed to build route summary for display")?;
    format.render_route(&summary)?;
    Ok(())
}

fn handle_explore(
    graph: &LocationGraph,
    format: OutputFormat,
    start: &str,
    order: TraversalOrder,
) -> Result<()> {
    if !graph.contains(start) {
        let suggestions = graph.fuzzy_matches(start, 3);
        return Err(anyhow::anyhow!(format_unknown_location_message(
            start,
            &suggestions
        )));
    }

    let report = TraversalReport {
        start: graph
            .canonical_name(start)
            .unwrap_or(start)
            .to_string(),
        order,
        locations: traverse(graph, start, order),
    };
    format.render_traversal(&report)?;
    Ok(())
}

fn handle_check(graph: &LocationGraph, format: OutputFormat) -> Result<()> {
    let report = NetworkReport {
        locations: graph.node_count(),
        links: graph.edge_count(),
        connected: is_connected(graph),
    };
    format.render_report(&report)?;
    Ok(())
}

fn handle_route_failure(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        LibError::RouteNotFound { start, goal } => anyhow::anyhow!(
            "No route found between {} and {}. The locations are not connected in this network.",
            start,
            goal
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = if suggestions.len() == 1 {
            let suggestion = suggestions.first().expect("len checked above");
            format!("Did you mean '{suggestion}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
