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

//! Set containers used for the candidate and excluded sets of the search.
//!
//! Both backings iterate in ascending vertex order as long as every set is
//! derived from an ascending one by [`VertexSet::restrict`] and
//! [`VertexSet::remove`], which is all the search ever does with candidates.
//! That keeps the discovery order independent of the backing.

use fixedbitset::FixedBitSet;
use foldhash::fast::RandomState;
use indexmap::IndexSet;

use crate::graph::Graph;
use crate::Vertex;

/// Insertion-ordered hash set of vertices.
pub(crate) type HashedSet = IndexSet<Vertex, RandomState>;

pub(crate) trait VertexSet: Clone {
    /// An empty set able to hold vertices `1..=universe`.
    fn empty(universe: usize) -> Self;

    /// The set `1..=universe`, in ascending order.
    fn full(universe: usize) -> Self;

    /// The neighbors of `vertex` in `graph`.
    fn neighborhood(graph: &Graph, vertex: Vertex) -> Self;

    fn is_empty(&self) -> bool;

    /// Whether every member of `self` is also in `other`.
    fn is_subset(&self, other: &Self) -> bool;

    fn insert(&mut self, vertex: Vertex);

    /// Removes `vertex` keeping the relative order of the remaining members.
    fn remove(&mut self, vertex: Vertex);

    /// A new set with the members of `self` that are also in `other`, in the
    /// order they appear in `self`.
    fn restrict(&self, other: &Self) -> Self;

    /// Members in iteration order.
    fn members(&self) -> impl Iterator<Item = Vertex> + '_;

    /// Members in iteration order, detached from the set.
    fn snapshot(&self) -> Vec<Vertex> {
        self.members().collect()
    }
}

impl VertexSet for HashedSet {
    fn empty(_universe: usize) -> Self {
        IndexSet::default()
    }

    fn full(universe: usize) -> Self {
        (1..=universe as Vertex).collect()
    }

    fn neighborhood(graph: &Graph, vertex: Vertex) -> Self {
        graph.neighbors(vertex).iter().copied().collect()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        IndexSet::is_empty(self)
    }

    fn is_subset(&self, other: &Self) -> bool {
        IndexSet::is_subset(self, other)
    }

    #[inline]
    fn insert(&mut self, vertex: Vertex) {
        IndexSet::insert(self, vertex);
    }

    #[inline]
    fn remove(&mut self, vertex: Vertex) {
        self.shift_remove(&vertex);
    }

    fn restrict(&self, other: &Self) -> Self {
        self.iter()
            .copied()
            .filter(|vertex| IndexSet::contains(other, vertex))
            .collect()
    }

    fn members(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.iter().copied()
    }
}

// Bit `i` stands for vertex `i + 1`.
impl VertexSet for FixedBitSet {
    fn empty(universe: usize) -> Self {
        FixedBitSet::with_capacity(universe)
    }

    fn full(universe: usize) -> Self {
        let mut set = FixedBitSet::with_capacity(universe);
        set.insert_range(..);
        set
    }

    fn neighborhood(graph: &Graph, vertex: Vertex) -> Self {
        let mut set = FixedBitSet::with_capacity(graph.vertex_count());
        for &neighbor in graph.neighbors(vertex) {
            set.insert(bit(neighbor));
        }
        set
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.ones().next().is_none()
    }

    #[inline]
    fn is_subset(&self, other: &Self) -> bool {
        FixedBitSet::is_subset(self, other)
    }

    #[inline]
    fn insert(&mut self, vertex: Vertex) {
        FixedBitSet::insert(self, bit(vertex));
    }

    #[inline]
    fn remove(&mut self, vertex: Vertex) {
        self.set(bit(vertex), false);
    }

    fn restrict(&self, other: &Self) -> Self {
        let mut set = self.clone();
        set.intersect_with(other);
        set
    }

    fn members(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.ones().map(|index| index as Vertex + 1)
    }
}

#[inline]
fn bit(vertex: Vertex) -> usize {
    vertex as usize - 1
}

#[cfg(test)]
mod tests {
    use fixedbitset::FixedBitSet;

    use super::{HashedSet, VertexSet};
    use crate::graph::Graph;

    fn exercise<S: VertexSet>() {
        let graph = Graph::from_edges(5, [(1, 3), (1, 5), (2, 3)]).unwrap();
        let mut set = S::full(5);
        assert_eq!(set.snapshot(), vec![1, 2, 3, 4, 5]);

        set.remove(1);
        set.remove(4);
        assert_eq!(set.snapshot(), vec![2, 3, 5]);

        let restricted = set.restrict(&S::neighborhood(&graph, 1));
        assert_eq!(restricted.members().collect::<Vec<_>>(), vec![3, 5]);
        // restrict never touches the receiver
        assert_eq!(set.snapshot(), vec![2, 3, 5]);

        assert!(restricted.is_subset(&set));
        assert!(restricted.is_subset(&S::neighborhood(&graph, 1)));
        assert!(!set.is_subset(&S::neighborhood(&graph, 1)));
        assert!(S::empty(5).is_subset(&S::neighborhood(&graph, 4)));

        let mut excluded = S::empty(5);
        assert!(excluded.is_empty());
        excluded.insert(4);
        assert!(!excluded.is_empty());
        assert!(excluded.restrict(&S::neighborhood(&graph, 2)).is_empty());
    }

    #[test]
    fn hashed_set_operations() {
        exercise::<HashedSet>();
    }

    #[test]
    fn bitset_operations() {
        exercise::<FixedBitSet>();
    }

    #[test]
    fn empty_universe() {
        assert!(VertexSet::is_empty(&<HashedSet as VertexSet>::full(0)));
        assert!(VertexSet::is_empty(&<FixedBitSet as VertexSet>::full(0)));
        assert!(VertexSet::is_empty(&<FixedBitSet as VertexSet>::empty(8)));
    }
}
