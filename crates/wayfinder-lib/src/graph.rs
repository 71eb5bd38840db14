use std::collections::HashMap;

/// Numeric identifier for a location. Ids are dense, assigned in insertion
/// order, and stable for the lifetime of the graph.
pub type NodeId = usize;

/// Minimum Jaro-Winkler similarity for a name to qualify as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Edge within the location graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: u64,
}

/// Undirected, weighted location graph with case-insensitive name identity.
///
/// Every public operation that accepts a name funnels through the same
/// lowercase fold before touching the index, so `"Mumbai"`, `"mumbai"`, and
/// `"MUMBAI"` all resolve to one node. The casing used at first registration
/// is the canonical display form for that node from then on.
///
/// Each undirected edge is stored once in each endpoint's adjacency list and
/// the two entries always carry the same weight; reconnecting an existing
/// pair overwrites both entries instead of appending duplicates.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
}

impl LocationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with preallocated space for `capacity` locations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
        }
    }

    /// Register a location, returning its id.
    ///
    /// Names that differ only in case resolve to the same node; the casing of
    /// the first registration is preserved as the canonical display name.
    pub fn register(&mut self, name: &str) -> NodeId {
        let key = fold_key(name);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(key, id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Lookup a location id by name without registering it.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(&fold_key(name)).copied()
    }

    /// Whether a location with this name (under case-insensitive comparison)
    /// is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// The canonical display form of a name, if registered.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.resolve(name).map(|id| self.names[id].as_str())
    }

    /// Lookup a location name by identifier.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Canonical names in id order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Connect two locations with an undirected weighted edge, registering
    /// either endpoint that is not yet known.
    ///
    /// Reconnecting an already-linked pair overwrites the stored weight in
    /// both adjacency lists; it never appends a second edge. Connecting a
    /// name to itself registers the location but stores no edge.
    pub fn connect(&mut self, name_a: &str, name_b: &str, weight: u64) {
        let a = self.register(name_a);
        let b = self.register(name_b);
        if a == b {
            return;
        }

        if self.adjacency[a].iter().any(|edge| edge.target == b) {
            // Each direction holds its own copy of the weight; update both.
            overwrite_weight(&mut self.adjacency[a], b, weight);
            overwrite_weight(&mut self.adjacency[b], a, weight);
            return;
        }

        self.adjacency[a].push(Edge { target: b, weight });
        self.adjacency[b].push(Edge { target: a, weight });
    }

    /// Return the neighbours for a given location id, in insertion order.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of registered locations.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges.
    ///
    /// Half the sum of adjacency-list lengths, which is exact because every
    /// edge appears in both endpoint lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph holds no locations.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return up to `limit` canonical names similar to `name`, ranked by
    /// descending similarity. Used to build "did you mean" suggestions for
    /// unknown-location errors.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = fold_key(name);
        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .filter_map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &fold_key(candidate));
                (score >= SUGGESTION_THRESHOLD).then_some((score, candidate))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

fn fold_key(name: &str) -> String {
    name.to_lowercase()
}

fn overwrite_weight(edges: &mut [Edge], target: NodeId, weight: u64) {
    if let Some(edge) = edges.iter_mut().find(|edge| edge.target == target) {
        edge.weight = weight;
    }
}
