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

//! # cliquegraph-core
//!
//! Pure Rust building blocks for analysing simple undirected graphs read from
//! sparse-matrix files: an immutable adjacency store, an exhaustive maximal
//! clique search (non-pivoted Bron–Kerbosch) and a handful of numeric
//! summaries (degrees, adjacency matrices, clustering coefficients).
//!
//! ```
//! use cliquegraph_core::{find_maximal_cliques, Graph};
//!
//! let graph = Graph::from_edges(3, [(1, 2), (2, 3)]).unwrap();
//! let report = find_maximal_cliques(&graph);
//! let members: Vec<&[u32]> = report.discovery_order().iter().map(|c| c.members()).collect();
//! assert_eq!(members, vec![&[1, 2][..], &[2, 3][..]]);
//! ```

pub mod cliques;
pub mod error;
pub mod graph;
pub mod io;
pub mod metrics;

pub use cliques::{
    find_maximal_cliques, Clique, CliqueCollector, CliqueReport, CliqueSearch, CliqueVisitor,
    SearchConfig, SetBackend, SizedClique, Traversal,
};
pub use error::{GraphError, ParseError, SearchError};
pub use graph::{Graph, MAX_VERTICES};
pub use io::{
    load_graph, matrix_market_from_bytes, parse_matrix_market, read_matrix_market, MatrixMarket,
};

/// Vertex identifier. Valid vertices of a graph with `n` vertices are `1..=n`.
pub type Vertex = u32;
