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

//! Per-vertex summaries of a [`Graph`]: degrees, adjacency matrices and
//! clustering coefficients.

use ndarray::Array2;
use rayon::prelude::*;
use sprs::{CsMat, TriMat};

use crate::graph::Graph;
use crate::Vertex;

/// `(vertex, degree)` for every vertex, ascending by vertex.
pub fn degrees(graph: &Graph) -> Vec<(Vertex, usize)> {
    graph
        .vertices()
        .map(|vertex| (vertex, graph.degree(vertex)))
        .collect()
}

/// Dense 0/1 adjacency matrix. Row and column `i` belong to vertex `i + 1`.
pub fn adjacency_matrix(graph: &Graph) -> Array2<u8> {
    let n = graph.vertex_count();
    let mut matrix = Array2::<u8>::zeros((n, n));
    for (u, v) in graph.edges() {
        let (i, j) = (u as usize - 1, v as usize - 1);
        matrix[[i, j]] = 1;
        matrix[[j, i]] = 1;
    }
    matrix
}

/// Adjacency matrix in compressed sparse row form, same indexing as
/// [`adjacency_matrix`].
pub fn sparse_adjacency(graph: &Graph) -> CsMat<u8> {
    let n = graph.vertex_count();
    let mut triplets = TriMat::with_capacity((n, n), 2 * graph.edge_count());
    for (u, v) in graph.edges() {
        let (i, j) = (u as usize - 1, v as usize - 1);
        triplets.add_triplet(i, j, 1u8);
        triplets.add_triplet(j, i, 1u8);
    }
    triplets.to_csr()
}

/// Number of triangles through `vertex`.
///
/// # Panics
/// Panics if `vertex` is not a vertex of `graph`.
pub fn triangles(graph: &Graph, vertex: Vertex) -> usize {
    let neighbors = graph.neighbors(vertex);
    let closed: usize = neighbors
        .iter()
        .map(|&u| sorted_intersection_len(neighbors, graph.neighbors(u)))
        .sum();
    // every triangle {vertex, u, w} is seen from both u and w
    closed / 2
}

fn sorted_intersection_len(a: &[Vertex], b: &[Vertex]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Local clustering coefficient of `vertex`: the fraction of pairs of its
/// neighbors that are adjacent. Vertices with fewer than two neighbors
/// score `0.0`.
pub fn local_clustering(graph: &Graph, vertex: Vertex) -> f64 {
    let degree = graph.degree(vertex);
    if degree < 2 {
        return 0.0;
    }
    let pairs = degree * (degree - 1) / 2;
    triangles(graph, vertex) as f64 / pairs as f64
}

/// `(vertex, clustering coefficient)` for every vertex, ascending by vertex.
pub fn clustering(graph: &Graph) -> Vec<(Vertex, f64)> {
    (0..graph.vertex_count())
        .into_par_iter()
        .map(|index| {
            let vertex = index as Vertex + 1;
            (vertex, local_clustering(graph, vertex))
        })
        .collect()
}

/// Mean clustering coefficient over all vertices, isolated ones included.
/// `0.0` for a graph without vertices.
pub fn average_clustering(graph: &Graph) -> f64 {
    mean_coefficient(&clustering(graph))
}

/// Mean of coefficients already computed by [`clustering`]. `0.0` when empty.
pub fn mean_coefficient(coefficients: &[(Vertex, f64)]) -> f64 {
    if coefficients.is_empty() {
        return 0.0;
    }
    let total: f64 = coefficients.iter().map(|(_, value)| value).sum();
    total / coefficients.len() as f64
}
