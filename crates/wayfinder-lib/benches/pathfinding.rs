use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

use wayfinder_lib::{breadth_first, load_network, plan_route, LocationGraph, RouteRequest};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/metro_network.json")
}

static METRO: Lazy<LocationGraph> =
    Lazy::new(|| load_network(&fixture_path()).expect("fixture loads"));

// 32x32 grid with mildly uneven weights so Dijkstra has real work to do.
static GRID: Lazy<LocationGraph> = Lazy::new(|| {
    const SIDE: usize = 32;
    let mut graph = LocationGraph::with_capacity(SIDE * SIDE);
    for row in 0..SIDE {
        for col in 0..SIDE {
            let here = format!("Cell {row}x{col}");
            if col + 1 < SIDE {
                let east = format!("Cell {row}x{}", col + 1);
                graph.connect(&here, &east, ((row + col) % 7 + 1) as u64);
            }
            if row + 1 < SIDE {
                let south = format!("Cell {}x{col}", row + 1);
                graph.connect(&here, &south, ((row * col) % 5 + 1) as u64);
            }
        }
    }
    graph
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let metro = &*METRO;
    let grid = &*GRID;

    c.bench_function("dijkstra_metro_mumbai_chennai", |b| {
        let request = RouteRequest::new("Mumbai", "Chennai");
        b.iter(|| {
            let plan = plan_route(metro, &request).expect("route exists");
            black_box(plan.total_distance)
        });
    });

    c.bench_function("dijkstra_grid_corner_to_corner", |b| {
        let request = RouteRequest::new("Cell 0x0", "Cell 31x31");
        b.iter(|| {
            let plan = plan_route(grid, &request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("bfs_grid_sweep", |b| {
        b.iter(|| {
            let order = breadth_first(grid, "Cell 0x0");
            black_box(order.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
