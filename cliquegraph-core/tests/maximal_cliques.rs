// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

use std::collections::BTreeSet;
use std::path::PathBuf;

use cliquegraph_core::metrics::{average_clustering, degrees};
use cliquegraph_core::{
    find_maximal_cliques, load_graph, CliqueSearch, Graph, SearchConfig, SetBackend, Traversal,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

fn random_graph(n: usize, density: f64, seed: u64) -> Graph {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 1..=n as u32 {
        for v in u + 1..=n as u32 {
            if rng.random_bool(density) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(n, edges).unwrap()
}

fn is_clique(graph: &Graph, members: &[u32]) -> bool {
    members.iter().enumerate().all(|(i, &u)| {
        members[i + 1..]
            .iter()
            .all(|&v| graph.contains_edge(u, v))
    })
}

fn is_maximal(graph: &Graph, members: &[u32]) -> bool {
    graph
        .vertices()
        .filter(|vertex| !members.contains(vertex))
        .all(|vertex| !members.iter().all(|&m| graph.contains_edge(vertex, m)))
}

/// Every maximal clique, found by checking all vertex subsets.
fn brute_force_maximal_cliques(graph: &Graph) -> BTreeSet<Vec<u32>> {
    let n = graph.vertex_count();
    let mut result = BTreeSet::new();
    for mask in 0u32..(1u32 << n) {
        let members: Vec<u32> = (0..n as u32)
            .filter(|bit| mask & (1 << bit) != 0)
            .map(|bit| bit + 1)
            .collect();
        if is_clique(graph, &members) && is_maximal(graph, &members) {
            result.insert(members);
        }
    }
    result
}

fn all_configs() -> Vec<SearchConfig> {
    let mut configs = Vec::new();
    for backend in [SetBackend::Auto, SetBackend::Hashed, SetBackend::Bitset] {
        for traversal in [Traversal::Recursive, Traversal::WorkStack] {
            configs.push(SearchConfig { backend, traversal });
        }
    }
    configs
}

fn discovered(graph: &Graph, config: SearchConfig) -> Vec<Vec<u32>> {
    CliqueSearch::new(graph)
        .with_config(config)
        .collect()
        .unwrap()
        .discovery_order()
        .iter()
        .map(|clique| clique.members().to_vec())
        .collect()
}

#[test]
fn matches_brute_force_on_random_graphs() {
    for (seed, density) in (0..40u64).zip([0.15, 0.35, 0.5, 0.75].into_iter().cycle()) {
        let n = 1 + (seed as usize % 11);
        let graph = random_graph(n, density, seed);
        let expected = brute_force_maximal_cliques(&graph);

        let cliques = discovered(&graph, SearchConfig::default());
        let found: BTreeSet<Vec<u32>> = cliques.iter().cloned().collect();
        assert_eq!(found.len(), cliques.len(), "duplicate clique, seed {seed}");
        assert_eq!(found, expected, "seed {seed}, n {n}, density {density}");
    }
}

#[test]
fn every_clique_is_valid_and_maximal() {
    for seed in 100..120u64 {
        let graph = random_graph(25, 0.4, seed);
        for clique in find_maximal_cliques(&graph).discovery_order() {
            assert!(is_clique(&graph, clique.members()), "seed {seed}: {clique}");
            assert!(is_maximal(&graph, clique.members()), "seed {seed}: {clique}");
        }
    }
}

#[test]
fn no_clique_contains_another() {
    let graph = random_graph(30, 0.3, 7);
    let report = find_maximal_cliques(&graph);
    let cliques = report.discovery_order();
    for (i, a) in cliques.iter().enumerate() {
        for b in &cliques[i + 1..] {
            assert!(!a.members().iter().all(|&v| b.contains(v)));
            assert!(!b.members().iter().all(|&v| a.contains(v)));
        }
    }
}

#[test]
fn output_order_is_independent_of_configuration() {
    for seed in 200..210u64 {
        let graph = random_graph(40, 0.3, seed);
        let reference = discovered(&graph, SearchConfig::default());
        for config in all_configs() {
            assert_eq!(discovered(&graph, config), reference, "seed {seed}, {config:?}");
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let graph = random_graph(35, 0.45, 99);
    let first = find_maximal_cliques(&graph);
    let second = find_maximal_cliques(&graph);
    assert_eq!(first, second);
}

#[test]
fn hashed_backend_on_graph_above_bitset_threshold() {
    // Disjoint triangles, well past the automatic bitset cut-off.
    let triangles = 400u32;
    let n = (triangles * 3) as usize;
    let edges: Vec<(u32, u32)> = (0..triangles)
        .flat_map(|t| {
            let base = t * 3;
            [(base + 1, base + 2), (base + 2, base + 3), (base + 1, base + 3)]
        })
        .collect();
    let graph = Graph::from_edges(n, edges).unwrap();
    let report = find_maximal_cliques(&graph);
    assert_eq!(report.len(), triangles as usize);
    assert_eq!(report.discovery_order()[0].members(), &[1, 2, 3]);
    assert!(report.by_size().iter().all(|(size, _)| *size == 3));
}

#[test]
fn size_sorted_pairs_keep_discovery_order_for_ties() {
    // {1,2,3} first, then the edge {3,4}, then the isolated 5.
    let graph = Graph::from_edges(5, [(1, 2), (2, 3), (1, 3), (3, 4)]).unwrap();
    let report = find_maximal_cliques(&graph);
    let discovery: Vec<Vec<u32>> = report
        .discovery_order()
        .iter()
        .map(|c| c.members().to_vec())
        .collect();
    assert_eq!(discovery, vec![vec![1, 2, 3], vec![3, 4], vec![5]]);
    let pairs: Vec<(usize, Vec<u32>)> = report
        .by_size()
        .iter()
        .map(|(size, c)| (*size, c.members().to_vec()))
        .collect();
    assert_eq!(
        pairs,
        vec![(1, vec![5]), (2, vec![3, 4]), (3, vec![1, 2, 3])]
    );
}

#[test]
fn petersen_fixture() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/petersen.mtx");
    let graph = load_graph(path).unwrap();
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 15);
    assert!(degrees(&graph).iter().all(|(_, degree)| *degree == 3));
    assert_eq!(average_clustering(&graph), 0.0);

    // Triangle free, so the maximal cliques are exactly the edges.
    let report = find_maximal_cliques(&graph);
    assert_eq!(report.len(), 15);
    assert_eq!(report.clique_number(), 2);
    let cliques: BTreeSet<(u32, u32)> = report
        .discovery_order()
        .iter()
        .map(|c| (c.members()[0], c.members()[1]))
        .collect();
    let edges: BTreeSet<(u32, u32)> = graph.edges().collect();
    assert_eq!(cliques, edges);
}
