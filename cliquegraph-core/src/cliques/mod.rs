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

//! Maximal clique enumeration.
//!
//! [`CliqueSearch`] walks the graph depth first and hands every maximal
//! clique to a [`CliqueVisitor`] as soon as it is found. [`CliqueCollector`]
//! is the visitor that keeps them and turns them into a [`CliqueReport`].

mod collector;
mod search;
mod vertex_set;

pub use collector::{Clique, CliqueCollector, CliqueReport, CliqueVisitor, SizedClique};
pub use search::{
    find_maximal_cliques, CliqueSearch, SearchConfig, SetBackend, Traversal, MAX_NODES_FOR_BITSET,
};
