use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use wayfinder_lib::{is_connected, load_network, Error};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/metro_network.json")
}

fn write_document(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write document");
    file
}

#[test]
fn fixture_network_loads() {
    let graph = load_network(&fixture_path()).expect("fixture loads");

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.canonical_name("mumbai"), Some("Mumbai"));
    assert!(graph.contains("Port Blair"));
    assert!(!is_connected(&graph), "fixture keeps Port Blair isolated");
}

#[test]
fn declared_locations_precede_linked_ones() {
    let file = write_document(
        r#"{
            "locations": ["Harbour"],
            "links": [{ "from": "Depot", "to": "Harbour", "weight": 4 }]
        }"#,
    );

    let graph = load_network(file.path()).expect("document loads");
    assert_eq!(graph.resolve("Harbour"), Some(0));
    assert_eq!(graph.resolve("Depot"), Some(1));
}

#[test]
fn repeated_links_overwrite_weight() {
    let file = write_document(
        r#"{
            "links": [
                { "from": "Depot", "to": "Harbour", "weight": 4 },
                { "from": "harbour", "to": "DEPOT", "weight": 9 }
            ]
        }"#,
    );

    let graph = load_network(file.path()).expect("document loads");
    assert_eq!(graph.edge_count(), 1);

    let depot = graph.resolve("Depot").unwrap();
    let harbour = graph.resolve("Harbour").unwrap();
    let edge = graph
        .neighbours(depot)
        .iter()
        .find(|edge| edge.target == harbour)
        .expect("edge present");
    assert_eq!(edge.weight, 9);
}

#[test]
fn self_loop_links_are_skipped() {
    let file = write_document(
        r#"{
            "links": [
                { "from": "Depot", "to": "depot", "weight": 4 },
                { "from": "Depot", "to": "Harbour", "weight": 2 }
            ]
        }"#,
    );

    let graph = load_network(file.path()).expect("document loads");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn missing_file_reports_network_not_found() {
    let error = load_network(&PathBuf::from("/nonexistent/network.json"))
        .expect_err("missing file fails");
    assert!(matches!(error, Error::NetworkNotFound { .. }));
}

#[test]
fn malformed_document_reports_parse_failure() {
    let file = write_document("{ not json");
    let error = load_network(file.path()).expect_err("malformed document fails");
    assert!(matches!(error, Error::MalformedNetwork { .. }));
}

#[test]
fn empty_document_yields_empty_graph() {
    let file = write_document("{}");
    let graph = load_network(file.path()).expect("document loads");
    assert!(graph.is_empty());
    assert!(is_connected(&graph));
}
