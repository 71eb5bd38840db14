use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::LocationGraph;

/// On-disk network document.
///
/// Declared locations are registered before any links so isolated stops are
/// representable and the file controls canonical casing. Links may reference
/// locations the document never declares; those are registered on first use.
#[derive(Debug, Deserialize)]
struct NetworkDocument {
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    links: Vec<LinkRecord>,
}

#[derive(Debug, Deserialize)]
struct LinkRecord {
    from: String,
    to: String,
    weight: u64,
}

/// Load a location graph from a JSON network document.
///
/// Links are applied in file order, which fixes the adjacency insertion
/// order that traversal output depends on. Self-loop links are skipped;
/// repeated links between one pair overwrite the weight as usual.
pub fn load_network(path: &Path) -> Result<LocationGraph> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let document: NetworkDocument =
        serde_json::from_str(&contents).map_err(|err| Error::MalformedNetwork {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let mut graph = LocationGraph::with_capacity(document.locations.len());
    for location in &document.locations {
        graph.register(location);
    }

    let mut skipped_links = 0usize;
    for link in &document.links {
        let from = graph.register(&link.from);
        let to = graph.register(&link.to);
        if from == to {
            skipped_links += 1;
            continue;
        }
        graph.connect(&link.from, &link.to, link.weight);
    }

    if skipped_links > 0 {
        warn!(skipped_links, "ignored self-loop links in network document");
    }

    debug!(
        path = %path.display(),
        locations = graph.node_count(),
        links = graph.edge_count(),
        "loaded network"
    );

    Ok(graph)
}
