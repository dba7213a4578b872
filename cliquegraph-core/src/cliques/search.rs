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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

use std::sync::atomic::{AtomicBool, Ordering};

use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::collector::{Clique, CliqueCollector, CliqueReport, CliqueVisitor};
use super::vertex_set::{HashedSet, VertexSet};
use crate::error::SearchError;
use crate::graph::Graph;
use crate::Vertex;

/// Largest graph for which [`SetBackend::Auto`] picks the bitset backing.
pub const MAX_NODES_FOR_BITSET: usize = 1024;

/// Container used for the candidate and excluded sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetBackend {
    /// Bitset up to [`MAX_NODES_FOR_BITSET`] vertices, hashed above that.
    #[default]
    Auto,
    /// Insertion-ordered hash sets. Memory proportional to the set sizes.
    Hashed,
    /// Dense bitsets. One bit per vertex per set.
    Bitset,
}

impl SetBackend {
    fn resolve(self, vertex_count: usize) -> SetBackend {
        match self {
            SetBackend::Auto if vertex_count <= MAX_NODES_FOR_BITSET => SetBackend::Bitset,
            SetBackend::Auto => SetBackend::Hashed,
            backend => backend,
        }
    }
}

/// How the depth-first search keeps its frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// One native call per search level.
    Recursive,
    /// Frames live on a heap-allocated stack, so the search depth is not
    /// limited by the thread's stack size.
    #[default]
    WorkStack,
}

/// Tuning knobs for [`CliqueSearch`]. None of them changes the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub backend: SetBackend,
    pub traversal: Traversal,
}

/// Find all maximal cliques of `graph`.
///
/// Every maximal clique is reported exactly once. A graph without vertices
/// has a single maximal clique, the empty one.
///
/// ```
/// use cliquegraph_core::{find_maximal_cliques, Graph};
///
/// let graph = Graph::from_edges(3, [(1, 2)]).unwrap();
/// let report = find_maximal_cliques(&graph);
/// let pairs: Vec<(usize, Vec<u32>)> = report
///     .by_size()
///     .iter()
///     .map(|(size, clique)| (*size, clique.members().to_vec()))
///     .collect();
/// assert_eq!(pairs, vec![(1, vec![3]), (2, vec![1, 2])]);
/// ```
pub fn find_maximal_cliques(graph: &Graph) -> CliqueReport {
    // Without a cancel flag the search always runs to completion.
    CliqueSearch::new(graph).collect().unwrap_or_default()
}

/// Exhaustive maximal clique search over an immutable [`Graph`].
///
/// This is the Bron–Kerbosch backtracking search without pivoting. Every
/// level tries each remaining candidate in ascending vertex order, so the
/// discovery order is fully determined by the graph and does not depend on
/// the configured backend or traversal. A level is skipped outright when an
/// excluded vertex is adjacent to all of its candidates, since it cannot
/// yield a maximal clique; this leaves the output unchanged.
pub struct CliqueSearch<'a> {
    graph: &'a Graph,
    config: SearchConfig,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> CliqueSearch<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        CliqueSearch {
            graph,
            config: SearchConfig::default(),
            cancel: None,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop the search once `flag` is set.
    ///
    /// The flag is polled before each top-level candidate is explored.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Stream every maximal clique to `visitor` in discovery order and return
    /// how many were emitted.
    ///
    /// On [`SearchError::Cancelled`] the visitor may already have received
    /// part of the cliques.
    #[instrument(level = "debug", skip_all, fields(vertices = self.graph.vertex_count()))]
    pub fn run<V>(&self, visitor: &mut V) -> Result<usize, SearchError>
    where
        V: CliqueVisitor + ?Sized,
    {
        let backend = self.config.backend.resolve(self.graph.vertex_count());
        debug!(
            ?backend,
            traversal = ?self.config.traversal,
            edges = self.graph.edge_count(),
            "starting maximal clique search"
        );
        let mut counter = Counting {
            inner: visitor,
            count: 0,
        };
        match backend {
            SetBackend::Bitset => self.run_with::<FixedBitSet, _>(&mut counter)?,
            _ => self.run_with::<HashedSet, _>(&mut counter)?,
        }
        info!(cliques = counter.count, "maximal clique search finished");
        Ok(counter.count)
    }

    /// Run the search and gather the results into a [`CliqueReport`].
    pub fn collect(&self) -> Result<CliqueReport, SearchError> {
        let mut collector = CliqueCollector::new();
        self.run(&mut collector)?;
        Ok(collector.finish())
    }

    fn run_with<S, V>(&self, visitor: &mut V) -> Result<(), SearchError>
    where
        S: VertexSet,
        V: CliqueVisitor + ?Sized,
    {
        let context = Context::<S>::new(self.graph, self.cancel);
        let vertex_count = self.graph.vertex_count();
        let candidates = S::full(vertex_count);
        let excluded = S::empty(vertex_count);
        match self.config.traversal {
            Traversal::Recursive => expand_recursive(
                &context,
                &CliqueBuf::new(),
                candidates,
                excluded,
                0,
                visitor,
            ),
            Traversal::WorkStack => expand_with_stack(&context, candidates, excluded, visitor),
        }
    }
}

/// Clique under construction. Most cliques of sparse graphs fit inline.
type CliqueBuf = SmallVec<[Vertex; 16]>;

struct Context<'a, S> {
    /// Neighborhood of vertex `v` at index `v - 1`.
    adjacency: Vec<S>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, S: VertexSet> Context<'a, S> {
    fn new(graph: &Graph, cancel: Option<&'a AtomicBool>) -> Self {
        let adjacency = graph
            .vertices()
            .map(|vertex| S::neighborhood(graph, vertex))
            .collect();
        Context { adjacency, cancel }
    }

    #[inline]
    fn neighbors(&self, vertex: Vertex) -> &S {
        &self.adjacency[vertex as usize - 1]
    }

    /// Whether some excluded vertex is adjacent to every candidate. Any clique
    /// grown from such a level extends to that vertex, so none is maximal.
    fn is_dominated(&self, candidates: &S, excluded: &S) -> bool {
        excluded
            .members()
            .any(|vertex| candidates.is_subset(self.neighbors(vertex)))
    }

    #[inline]
    fn check_cancelled(&self) -> Result<(), SearchError> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(SearchError::Cancelled),
            _ => Ok(()),
        }
    }
}

struct Counting<'v, V: ?Sized> {
    inner: &'v mut V,
    count: usize,
}

impl<V: CliqueVisitor + ?Sized> CliqueVisitor for Counting<'_, V> {
    fn visit(&mut self, clique: Clique) {
        self.count += 1;
        self.inner.visit(clique);
    }
}

#[inline]
fn emit<V: CliqueVisitor + ?Sized>(visitor: &mut V, clique: &CliqueBuf) {
    visitor.visit(Clique::new(clique.to_vec()));
}

fn expand_recursive<S, V>(
    context: &Context<'_, S>,
    clique: &CliqueBuf,
    mut candidates: S,
    mut excluded: S,
    depth: usize,
    visitor: &mut V,
) -> Result<(), SearchError>
where
    S: VertexSet,
    V: CliqueVisitor + ?Sized,
{
    if candidates.is_empty() && excluded.is_empty() {
        emit(visitor, clique);
        return Ok(());
    }
    if context.is_dominated(&candidates, &excluded) {
        return Ok(());
    }

    // `candidates` shrinks while we loop, so walk a detached copy.
    for vertex in candidates.snapshot() {
        if depth == 0 {
            context.check_cancelled()?;
        }
        let neighbors = context.neighbors(vertex);
        let mut next_clique = clique.clone();
        next_clique.push(vertex);
        expand_recursive(
            context,
            &next_clique,
            candidates.restrict(neighbors),
            excluded.restrict(neighbors),
            depth + 1,
            visitor,
        )?;
        candidates.remove(vertex);
        excluded.insert(vertex);
    }
    Ok(())
}

/// One suspended level of the search.
struct Frame<S> {
    clique: CliqueBuf,
    candidates: S,
    excluded: S,
    /// Candidates as they were when the level was entered.
    pending: Vec<Vertex>,
    next: usize,
}

impl<S: VertexSet> Frame<S> {
    fn new(clique: CliqueBuf, candidates: S, excluded: S) -> Self {
        let pending = candidates.snapshot();
        Frame {
            clique,
            candidates,
            excluded,
            pending,
            next: 0,
        }
    }
}

// Same visiting order as `expand_recursive`. A child only reads its own
// copies of the sets, so the parent can retire `vertex` into the excluded set
// as soon as the child is created instead of after it returns.
fn expand_with_stack<S, V>(
    context: &Context<'_, S>,
    candidates: S,
    excluded: S,
    visitor: &mut V,
) -> Result<(), SearchError>
where
    S: VertexSet,
    V: CliqueVisitor + ?Sized,
{
    if candidates.is_empty() && excluded.is_empty() {
        emit(visitor, &CliqueBuf::new());
        return Ok(());
    }

    let mut stack = vec![Frame::new(CliqueBuf::new(), candidates, excluded)];
    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let Some(&vertex) = frame.pending.get(frame.next) else {
            stack.pop();
            continue;
        };
        if depth == 1 {
            context.check_cancelled()?;
        }
        frame.next += 1;

        let neighbors = context.neighbors(vertex);
        let mut clique = frame.clique.clone();
        clique.push(vertex);
        let child_candidates = frame.candidates.restrict(neighbors);
        let child_excluded = frame.excluded.restrict(neighbors);
        frame.candidates.remove(vertex);
        frame.excluded.insert(vertex);

        if child_candidates.is_empty() {
            if child_excluded.is_empty() {
                emit(visitor, &clique);
            }
            // With no candidates left the child level has nothing to try.
            continue;
        }
        if context.is_dominated(&child_candidates, &child_excluded) {
            continue;
        }
        stack.push(Frame::new(clique, child_candidates, child_excluded));
    }
    Ok(())
}
