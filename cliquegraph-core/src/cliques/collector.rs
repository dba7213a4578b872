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

use std::fmt;

use serde::Serialize;

use crate::Vertex;

/// A maximal clique, members in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Clique(Vec<Vertex>);

impl Clique {
    pub fn new(mut members: Vec<Vertex>) -> Self {
        members.sort_unstable();
        Clique(members)
    }

    #[inline]
    pub fn members(&self) -> &[Vertex] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.0.binary_search(&vertex).is_ok()
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.0
    }
}

impl From<Clique> for Vec<Vertex> {
    fn from(clique: Clique) -> Self {
        clique.0
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, vertex) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("}")
    }
}

/// A clique paired with its cardinality.
pub type SizedClique = (usize, Clique);

/// Receives maximal cliques as the search discovers them.
pub trait CliqueVisitor {
    fn visit(&mut self, clique: Clique);
}

impl<F> CliqueVisitor for F
where
    F: FnMut(Clique),
{
    fn visit(&mut self, clique: Clique) {
        self(clique)
    }
}

/// Accumulates cliques in discovery order.
#[derive(Clone, Debug, Default)]
pub struct CliqueCollector {
    discovered: Vec<Clique>,
}

impl CliqueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Cliques received so far, in the order they arrived.
    pub fn discovered(&self) -> &[Clique] {
        &self.discovered
    }

    /// Close the collection and sort it by size.
    pub fn finish(self) -> CliqueReport {
        CliqueReport::from_discovery_order(self.discovered)
    }
}

impl CliqueVisitor for CliqueCollector {
    fn visit(&mut self, clique: Clique) {
        self.discovered.push(clique);
    }
}

/// The outcome of a maximal clique search.
///
/// Holds the cliques twice: once in the order the depth-first search found
/// them and once as `(size, clique)` pairs sorted ascending by size. The sort
/// is stable, so cliques of equal size keep their discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CliqueReport {
    discovery_order: Vec<Clique>,
    by_size: Vec<SizedClique>,
}

impl CliqueReport {
    pub fn from_discovery_order(discovery_order: Vec<Clique>) -> Self {
        let mut sorted = discovery_order.clone();
        sorted.sort_by_key(Clique::len);
        let by_size = sorted
            .into_iter()
            .map(|clique| (clique.len(), clique))
            .collect();
        CliqueReport {
            discovery_order,
            by_size,
        }
    }

    pub fn discovery_order(&self) -> &[Clique] {
        &self.discovery_order
    }

    pub fn by_size(&self) -> &[SizedClique] {
        &self.by_size
    }

    pub fn len(&self) -> usize {
        self.discovery_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovery_order.is_empty()
    }

    /// Size of the largest clique, `0` when there are none.
    pub fn clique_number(&self) -> usize {
        self.by_size.last().map_or(0, |(size, _)| *size)
    }

    /// All cliques of maximum size, in discovery order.
    pub fn largest(&self) -> impl Iterator<Item = &Clique> + '_ {
        let size = self.clique_number();
        self.discovery_order
            .iter()
            .filter(move |clique| clique.len() == size)
    }

    pub fn into_parts(self) -> (Vec<Clique>, Vec<SizedClique>) {
        (self.discovery_order, self.by_size)
    }
}
