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

use std::io::{self, Write};

use cliquegraph_core::metrics;
use cliquegraph_core::{CliqueSearch, Graph, SearchConfig, SearchError, SizedClique, Vertex};
use ndarray::Array2;
use serde::{Serialize, Serializer};
use tracing::instrument;

/// Default for [`AnalysisOptions::matrix_limit`]. Text output elides the
/// middle rows and columns of large matrices.
pub const DEFAULT_MATRIX_LIMIT: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub search: SearchConfig,
    /// Largest vertex count for which the dense adjacency matrix is kept.
    pub matrix_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            search: SearchConfig::default(),
            matrix_limit: DEFAULT_MATRIX_LIMIT,
        }
    }
}

/// Everything computed for one graph.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    #[serde(serialize_with = "serialize_matrix")]
    pub adjacency: Option<Array2<u8>>,
    pub degrees: Vec<(Vertex, usize)>,
    /// Maximal cliques as `(size, members)`, ascending by size.
    pub cliques: Vec<SizedClique>,
    pub clique_number: usize,
    pub clustering: Vec<(Vertex, f64)>,
    pub average_clustering: f64,
}

impl AnalysisReport {
    #[instrument(skip_all, fields(vertices = graph.vertex_count()))]
    pub fn analyze(graph: &Graph, options: &AnalysisOptions) -> Result<Self, SearchError> {
        let cliques = CliqueSearch::new(graph)
            .with_config(options.search)
            .collect()?;
        let adjacency = (graph.vertex_count() <= options.matrix_limit)
            .then(|| metrics::adjacency_matrix(graph));
        let clustering = metrics::clustering(graph);
        Ok(AnalysisReport {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            adjacency,
            degrees: metrics::degrees(graph),
            clique_number: cliques.clique_number(),
            cliques: cliques.into_parts().1,
            average_clustering: metrics::mean_coefficient(&clustering),
            clustering,
        })
    }

    /// Human readable rendering, one section per statistic.
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Graph: {} vertices, {} edges",
            self.vertex_count, self.edge_count
        )?;
        writeln!(out)?;

        writeln!(out, "Adjacency matrix:")?;
        match &self.adjacency {
            Some(matrix) => writeln!(out, "{matrix}")?,
            None => writeln!(out, "(omitted for {} vertices)", self.vertex_count)?,
        }
        writeln!(out)?;

        writeln!(out, "Vertex degrees:")?;
        for (vertex, degree) in &self.degrees {
            writeln!(out, "  {vertex}: {degree}")?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "Maximal cliques (size, vertices): {} found, largest has {} vertices",
            self.cliques.len(),
            self.clique_number
        )?;
        for (size, clique) in &self.cliques {
            writeln!(out, "  ({size}, {clique})")?;
        }
        writeln!(out)?;

        writeln!(out, "Clustering coefficients:")?;
        for (vertex, value) in &self.clustering {
            writeln!(out, "  {vertex}: {value:.6}")?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "Average clustering coefficient: {:.6}",
            self.average_clustering
        )
    }
}

fn serialize_matrix<S>(matrix: &Option<Array2<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rows: Option<Vec<Vec<u8>>> = matrix
        .as_ref()
        .map(|matrix| matrix.rows().into_iter().map(|row| row.to_vec()).collect());
    rows.serialize(serializer)
}
