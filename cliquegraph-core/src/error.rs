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

//! Error types for graph construction, file parsing and clique search.

use thiserror::Error;

use crate::Vertex;

/// Rejected edge lists. Raised by [`Graph::from_edges`](crate::Graph::from_edges)
/// before any algorithm runs on the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not in `1..=vertex_count`.
    #[error("vertex {vertex} is outside the declared range 1..={vertex_count}")]
    VertexOutOfRange { vertex: u64, vertex_count: usize },

    /// An edge connects a vertex to itself.
    #[error("self-loop on vertex {0} is not supported")]
    SelfLoop(Vertex),

    /// The declared vertex count is above [`MAX_VERTICES`](crate::graph::MAX_VERTICES).
    #[error("vertex count {0} exceeds the supported maximum of {max}", max = crate::graph::MAX_VERTICES)]
    TooManyVertices(usize),
}

/// Failures while reading a Matrix Market description.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read matrix market input: {0}")]
    Io(#[from] std::io::Error),

    /// Only comments or blank lines were found.
    #[error("matrix market input has no size line")]
    MissingHeader,

    #[error("line {line}: malformed size line {content:?}")]
    MalformedHeader { line: usize, content: String },

    /// Adjacency matrices must be square.
    #[error("matrix is {rows}x{cols}, expected a square adjacency matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("line {line}: malformed entry {content:?}")]
    MalformedEntry { line: usize, content: String },

    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Reasons a clique search ends without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("maximal clique search was cancelled")]
    Cancelled,
}
