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

use cliquegraph_core::{metrics, Graph, Vertex};
use numpy::{PyArray2, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

fn build_graph(num_vertices: usize, edges: Vec<(Vertex, Vertex)>) -> PyResult<Graph> {
    Graph::from_edges(num_vertices, edges).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Find all maximal cliques of an undirected graph.
///
/// Vertices are numbered ``1..=num_vertices``. Every maximal clique is
/// reported once, as a ``(size, members)`` pair; the list is sorted by size
/// and cliques of equal size keep the order in which they were found.
///
/// Args:
///     num_vertices (int): Number of vertices.
///     edges (list[tuple[int, int]]): Undirected edges.
///
/// Returns:
///     list[tuple[int, list[int]]]: The maximal cliques.
///
/// Raises:
///     ValueError: If an edge references an unknown vertex or is a self-loop.
#[pyfunction]
#[pyo3(signature = (num_vertices, edges, /), text_signature = "(num_vertices, edges, /)")]
pub fn find_maximal_cliques(
    py: Python,
    num_vertices: usize,
    edges: Vec<(Vertex, Vertex)>,
) -> PyResult<Vec<(usize, Vec<Vertex>)>> {
    let graph = build_graph(num_vertices, edges)?;
    let report = py.allow_threads(|| cliquegraph_core::find_maximal_cliques(&graph));
    Ok(report
        .into_parts()
        .1
        .into_iter()
        .map(|(size, clique)| (size, clique.into_vec()))
        .collect())
}

/// Local clustering coefficient of every vertex, as ``(vertex, value)`` pairs.
#[pyfunction]
#[pyo3(signature = (num_vertices, edges, /), text_signature = "(num_vertices, edges, /)")]
pub fn clustering(
    py: Python,
    num_vertices: usize,
    edges: Vec<(Vertex, Vertex)>,
) -> PyResult<Vec<(Vertex, f64)>> {
    let graph = build_graph(num_vertices, edges)?;
    Ok(py.allow_threads(|| metrics::clustering(&graph)))
}

/// Dense ``uint8`` adjacency matrix; row ``i`` belongs to vertex ``i + 1``.
#[pyfunction]
#[pyo3(signature = (num_vertices, edges, /), text_signature = "(num_vertices, edges, /)")]
pub fn adjacency_matrix(
    py: Python,
    num_vertices: usize,
    edges: Vec<(Vertex, Vertex)>,
) -> PyResult<Py<PyArray2<u8>>> {
    let graph = build_graph(num_vertices, edges)?;
    Ok(metrics::adjacency_matrix(&graph).to_pyarray(py).unbind())
}

#[pymodule]
pub fn cliquegraph(m: &Bound<PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_maximal_cliques, m)?)?;
    m.add_function(wrap_pyfunction!(clustering, m)?)?;
    m.add_function(wrap_pyfunction!(adjacency_matrix, m)?)?;
    Ok(())
}
