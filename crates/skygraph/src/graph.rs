//! Fixed-capacity graph container.
//!
//! Vertices are appended until the graph is full and are never removed, so a vertex index is
//! stable for the lifetime of the graph. Callers address vertices by payload key; every
//! key-taking operation resolves keys to indices with a linear scan (first match wins).

mod kind;
mod neighbors;
mod vertex;

pub use kind::GraphKind;
pub use neighbors::{Neighbor, NeighborList};
pub use vertex::{Color, Vertex};

use crate::error::{Error, Result};
use crate::payload::Payload;

/// Weight reported by [`Graph::get_weight`] when there is no such edge.
pub const NO_EDGE: f64 = -1.0;

#[derive(Debug)]
pub struct Graph<P> {
    vertices: Vec<Vertex<P>>,
    capacity: usize,
    kind: GraphKind,
}

/// A clone reserves the full capacity again, so it can be filled without reallocating.
impl<P: Clone> Clone for Graph<P> {
    fn clone(&self) -> Self {
        let mut vertices = Vec::with_capacity(self.capacity);
        vertices.extend(self.vertices.iter().cloned());
        Self {
            vertices,
            capacity: self.capacity,
            kind: self.kind,
        }
    }
}

impl<P: Payload> Graph<P> {
    /// Creates an empty graph that holds at most `capacity` vertices.
    ///
    /// Storage for every vertex slot is reserved up front; the graph never reallocates.
    pub fn new(capacity: usize, kind: GraphKind) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(capacity)
            .map_err(|source| Error::Allocation { capacity, source })?;
        Ok(Self {
            vertices,
            capacity,
            kind,
        })
    }

    /// Adds a vertex and returns its index, which equals the insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the graph is already full.
    pub fn add_vertex(&mut self, payload: P) -> usize {
        assert!(
            !self.is_full(),
            "add_vertex on a full graph (capacity {})",
            self.capacity
        );
        self.push_vertex(payload)
    }

    /// Like [`add_vertex`](Self::add_vertex), but reports a full graph as an error.
    pub fn try_add_vertex(&mut self, payload: P) -> Result<usize> {
        if self.is_full() {
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }
        Ok(self.push_vertex(payload))
    }

    fn push_vertex(&mut self, payload: P) -> usize {
        let idx = self.vertices.len();
        tracing::trace!(index = idx, key = ?payload.key(), "add_vertex");
        self.vertices.push(Vertex::new(payload));
        idx
    }

    fn find(&self, key: &P::Key) -> Option<usize> {
        self.vertices.iter().position(|v| v.payload().key() == key)
    }

    fn resolve_pair(&self, op: &str, start: &P::Key, finish: &P::Key) -> Option<(usize, usize)> {
        assert!(!self.is_empty(), "{op} on an empty graph");
        let start_idx = self.find(start);
        let finish_idx = self.find(finish);
        match (start_idx, finish_idx) {
            (Some(s), Some(f)) => Some((s, f)),
            _ => {
                tracing::debug!(
                    op,
                    start = ?start,
                    finish = ?finish,
                    ?start_idx,
                    ?finish_idx,
                    "unresolved vertex key"
                );
                None
            }
        }
    }

    fn insert(&mut self, from: usize, to: usize, weight: f64) {
        if self.vertices[from].insert_neighbor(to, weight) {
            tracing::debug!(from, to, weight, "inserted neighbor");
        } else {
            tracing::debug!(from, to, "duplicate neighbor ignored");
        }
    }

    /// Unweighted edge; same as [`add_weighted_edge`](Self::add_weighted_edge) with weight 0.
    pub fn add_edge(&mut self, start: &P::Key, finish: &P::Key) -> bool {
        self.add_weighted_edge(start, finish, 0.0)
    }

    /// Inserts an edge from `start` to `finish` (and the mirror edge for undirected graphs).
    ///
    /// Returns `false` without touching the graph if either key is unknown. Re-inserting an
    /// existing edge is a no-op that keeps the first weight.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no vertices.
    pub fn add_weighted_edge(&mut self, start: &P::Key, finish: &P::Key, weight: f64) -> bool {
        let Some((start_idx, finish_idx)) = self.resolve_pair("add_edge", start, finish) else {
            return false;
        };

        self.insert(start_idx, finish_idx, weight);
        if !self.kind.is_directed() {
            self.insert(finish_idx, start_idx, weight);
        }
        true
    }

    /// Weight of the edge from `start` to `finish`, or `None` if either vertex or the edge is
    /// missing.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no vertices.
    pub fn weight(&self, start: &P::Key, finish: &P::Key) -> Option<f64> {
        let (start_idx, finish_idx) = self.resolve_pair("weight", start, finish)?;
        self.vertices[start_idx]
            .neighbor_entry(finish_idx)
            .map(|n| n.weight)
    }

    /// [`weight`](Self::weight) with [`NO_EDGE`] standing in for a missing edge.
    pub fn get_weight(&self, start: &P::Key, finish: &P::Key) -> f64 {
        self.weight(start, finish).unwrap_or(NO_EDGE)
    }

    /// Whether `dest` appears in the neighbor list of `src`.
    ///
    /// Only `src`'s list is consulted, so on a directed graph this is one-way.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no vertices.
    pub fn is_neighbor_of(&self, dest: &P::Key, src: &P::Key) -> bool {
        self.resolve_pair("is_neighbor_of", src, dest)
            .is_some_and(|(src_idx, dest_idx)| {
                self.vertices[src_idx].neighbor_entry(dest_idx).is_some()
            })
    }

    pub fn vertex_by_key(&self, key: &P::Key) -> Option<&Vertex<P>> {
        self.find(key).map(|idx| &self.vertices[idx])
    }

    pub fn vertex_by_key_mut(&mut self, key: &P::Key) -> Option<&mut Vertex<P>> {
        self.find(key).map(move |idx| &mut self.vertices[idx])
    }
}

impl<P> Graph<P> {
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Maximum number of vertices, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of vertices inserted so far.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    /// # Panics
    ///
    /// Panics unless `idx < self.len()`.
    pub fn data_by_index(&self, idx: usize) -> &P {
        self.vertex_by_index(idx).payload()
    }

    /// # Panics
    ///
    /// Panics unless `idx < self.len()`.
    pub fn vertex_by_index(&self, idx: usize) -> &Vertex<P> {
        assert!(
            idx < self.vertices.len(),
            "vertex index {idx} out of range (len {})",
            self.vertices.len()
        );
        &self.vertices[idx]
    }

    /// Mutable access for cursor traversal and scratch-field updates.
    ///
    /// # Panics
    ///
    /// Panics unless `idx < self.len()`.
    pub fn vertex_by_index_mut(&mut self, idx: usize) -> &mut Vertex<P> {
        let len = self.vertices.len();
        assert!(idx < len, "vertex index {idx} out of range (len {len})");
        &mut self.vertices[idx]
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<P>> {
        self.vertices.iter()
    }

    /// Total number of stored adjacency entries (mirrored undirected edges count twice).
    pub fn neighbor_entry_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reserves_every_slot() {
        let g: Graph<i32> = Graph::new(64, GraphKind::Directed).expect("graph");
        assert!(g.vertices.capacity() >= 64);
    }

    #[test]
    fn clone_reserves_the_full_capacity() {
        let mut g: Graph<i32> = Graph::new(64, GraphKind::Directed).expect("graph");
        g.add_vertex(1);
        g.add_vertex(2);

        let c = g.clone();
        assert!(c.vertices.capacity() >= 64);
        assert_eq!(c.len(), 2);
        assert_eq!(c.capacity(), 64);
    }
}
