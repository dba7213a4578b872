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

//! Graph analysis front end: loads a Matrix Market graph, runs the maximal
//! clique search and the clustering summaries from `cliquegraph-core`, and
//! renders the combined [`AnalysisReport`].
//!
//! Building with the `python` feature additionally produces the
//! `cliquegraph` Python extension module.

#[cfg(feature = "python")]
pub mod python;
pub mod report;

pub use cliquegraph_core::{
    find_maximal_cliques, load_graph, Clique, CliqueReport, CliqueSearch, Graph, GraphError,
    ParseError, SearchConfig, SearchError, SetBackend, Traversal, Vertex,
};
pub use report::{AnalysisOptions, AnalysisReport};
