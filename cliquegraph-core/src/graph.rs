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

use foldhash::{HashSet, HashSetExt};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::error::GraphError;
use crate::Vertex;

/// Largest vertex count [`Graph::from_edges`] accepts. Every declared vertex
/// is materialized up front, isolated or not.
pub const MAX_VERTICES: usize = 1 << 24;

/// An immutable simple undirected graph over the vertices `1..=n`.
///
/// The structure lives in a petgraph [`UnGraph`] whose node `i` carries
/// vertex `i + 1`. Next to it every vertex keeps its neighbors as a sorted
/// list, which gives ascending neighbor iteration and `O(log d)` membership
/// tests without touching the edge lists.
#[derive(Clone, Debug)]
pub struct Graph {
    graph: UnGraph<Vertex, ()>,
    adjacency: Vec<Vec<Vertex>>,
}

impl Graph {
    /// Build a graph with `vertex_count` vertices from an edge list.
    ///
    /// Edges are unordered pairs: `(u, v)` and `(v, u)` denote the same edge
    /// and repeated edges are collapsed into one.
    ///
    /// # Errors
    /// * [`GraphError::VertexOutOfRange`] if an endpoint is `0` or greater
    ///   than `vertex_count`.
    /// * [`GraphError::SelfLoop`] if an edge joins a vertex to itself.
    /// * [`GraphError::TooManyVertices`] if `vertex_count` exceeds
    ///   [`MAX_VERTICES`].
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices(vertex_count));
        }
        let edges = edges.into_iter();
        let mut graph = UnGraph::with_capacity(vertex_count, edges.size_hint().0);
        for vertex in 1..=vertex_count as Vertex {
            graph.add_node(vertex);
        }
        let mut adjacency: Vec<Vec<Vertex>> = vec![Vec::new(); vertex_count];
        let mut seen: HashSet<(Vertex, Vertex)> = HashSet::new();
        let mut duplicates = 0usize;

        for (u, v) in edges {
            for endpoint in [u, v] {
                if endpoint == 0 || endpoint as usize > vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex: endpoint as u64,
                        vertex_count,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            let (low, high) = if u < v { (u, v) } else { (v, u) };
            if !seen.insert((low, high)) {
                duplicates += 1;
                continue;
            }
            graph.add_edge(node_index(low), node_index(high), ());
            adjacency[low as usize - 1].push(high);
            adjacency[high as usize - 1].push(low);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }
        if duplicates > 0 {
            debug!(duplicates, "collapsed repeated edges");
        }
        debug!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            "built graph"
        );

        Ok(Graph { graph, adjacency })
    }

    /// The graph with no vertices.
    pub fn empty() -> Self {
        Graph {
            graph: UnGraph::default(),
            adjacency: Vec::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + Clone {
        1..=self.vertex_count() as Vertex
    }

    #[inline]
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex != 0 && vertex as usize <= self.vertex_count()
    }

    /// Every edge once as `(u, v)` with `u < v`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()], self.graph[edge.target()]))
    }

    /// Neighbors of `vertex` in ascending order.
    ///
    /// # Panics
    /// Panics if `vertex` is not a vertex of this graph.
    #[inline]
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        &self.adjacency[vertex as usize - 1]
    }

    /// Number of neighbors of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is not a vertex of this graph.
    #[inline]
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Whether `u` and `v` are adjacent. Unknown vertices are never adjacent.
    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.contains_vertex(u)
            && self.contains_vertex(v)
            && self.neighbors(u).binary_search(&v).is_ok()
    }

    /// The underlying petgraph structure.
    pub fn as_petgraph(&self) -> &UnGraph<Vertex, ()> {
        &self.graph
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::empty()
    }
}

#[inline]
fn node_index(vertex: Vertex) -> NodeIndex {
    NodeIndex::new(vertex as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::{Graph, MAX_VERTICES};
    use crate::error::GraphError;

    #[test]
    fn neighbors_are_sorted_and_symmetric() {
        let graph = Graph::from_edges(4, [(3, 1), (1, 2), (4, 1), (2, 3)]).unwrap();
        assert_eq!(graph.neighbors(1), &[2, 3, 4]);
        assert_eq!(graph.neighbors(3), &[1, 2]);
        assert!(graph.contains_edge(4, 1));
        assert!(graph.contains_edge(1, 4));
        assert!(!graph.contains_edge(2, 4));
        assert_eq!(graph.degree(4), 1);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn repeated_edges_are_collapsed() {
        let graph = Graph::from_edges(2, [(1, 2), (2, 1), (1, 2)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(1), &[2]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn edges_are_reported_low_high() {
        let graph = Graph::from_edges(3, [(3, 2), (2, 1)]).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(2, 3), (1, 2)]);
    }

    #[test]
    fn rejects_out_of_range_vertices() {
        assert_eq!(
            Graph::from_edges(3, [(1, 4)]).unwrap_err(),
            GraphError::VertexOutOfRange {
                vertex: 4,
                vertex_count: 3
            }
        );
        assert_eq!(
            Graph::from_edges(3, [(0, 2)]).unwrap_err(),
            GraphError::VertexOutOfRange {
                vertex: 0,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn rejects_self_loops() {
        assert_eq!(
            Graph::from_edges(3, [(1, 2), (2, 2)]).unwrap_err(),
            GraphError::SelfLoop(2)
        );
    }

    #[test]
    fn isolated_vertices_are_kept() {
        let graph = Graph::from_edges(5, [(1, 2)]).unwrap();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(graph.neighbors(5).is_empty());
        assert!(!graph.contains_edge(5, 6));
    }

    #[test]
    fn rejects_oversized_vertex_counts() {
        assert_eq!(
            Graph::from_edges(MAX_VERTICES + 1, [(1, 2)]).unwrap_err(),
            GraphError::TooManyVertices(MAX_VERTICES + 1)
        );
        assert_eq!(
            Graph::from_edges(4_000_000_000, [(1, 2)]).unwrap_err(),
            GraphError::TooManyVertices(4_000_000_000)
        );
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
