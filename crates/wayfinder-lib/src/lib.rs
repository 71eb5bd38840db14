//! Wayfinder library entry points.
//!
//! This crate models a transit network as an undirected, weighted location
//! graph with case-insensitive name identity, and exposes traversal,
//! connectivity, and shortest-path routing over it. Higher-level consumers
//! (the CLI, embedders) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod traverse;

pub use error::{Error, Result};
pub use graph::{Edge, LocationGraph, NodeId};
pub use network::load_network;
pub use output::{RouteEndpoint, RouteStep, RouteSummary};
pub use path::shortest_path;
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use traverse::{breadth_first, depth_first, is_connected, traverse, TraversalOrder};
