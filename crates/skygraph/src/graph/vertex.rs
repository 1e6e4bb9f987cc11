//! Vertex storage and the neighbor cursor protocol.

use super::neighbors::{Neighbor, NeighborList};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traversal marks used by search algorithms run on top of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Not yet discovered.
    #[default]
    Black,
    /// Discovered, still queued.
    Gray,
    /// Fully visited.
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "black",
            Color::Gray => "gray",
            Color::White => "white",
        })
    }
}

/// A graph node: its payload, owned adjacency list and traversal scratch fields.
///
/// The scratch fields are plain data. The graph never reads them; they exist so that an
/// external traversal can record its state next to each vertex.
#[derive(Debug, Clone)]
pub struct Vertex<P> {
    payload: P,
    neighbors: Option<NeighborList>,
    color: Color,
    distance: i32,
    predecessor: Option<usize>,
}

impl<P> Vertex<P> {
    pub(in crate::graph) fn new(payload: P) -> Self {
        Self {
            payload,
            neighbors: None,
            color: Color::default(),
            distance: 0,
            predecessor: None,
        }
    }

    /// Appends `(index, weight)` unless `index` is already listed. Returns whether it was added.
    pub(in crate::graph) fn insert_neighbor(&mut self, index: usize, weight: f64) -> bool {
        let list = self.neighbors.get_or_insert_with(NeighborList::new);
        if list.contains(index) {
            return false;
        }
        list.push_back(index, weight);
        true
    }

    pub(in crate::graph) fn neighbor_entry(&self, index: usize) -> Option<&Neighbor> {
        self.neighbors.as_ref().and_then(|list| list.find(index))
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The adjacency list, or `None` if no edge was ever inserted from this vertex.
    pub fn neighbor_list(&self) -> Option<&NeighborList> {
        self.neighbors.as_ref()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.as_ref().map_or(0, NeighborList::len)
    }

    /// Neighbors in insertion order. Does not touch the cursor.
    pub fn neighbors(&self) -> impl Iterator<Item = Neighbor> + '_ {
        self.neighbors.iter().flat_map(|list| list.iter().copied())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: i32) {
        self.distance = distance;
    }

    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    pub fn set_predecessor(&mut self, predecessor: Option<usize>) {
        self.predecessor = predecessor;
    }

    /// Moves the cursor to the first neighbor. Call before every cursor traversal.
    ///
    /// ```
    /// use skygraph::{Graph, GraphKind};
    ///
    /// let mut g: Graph<i32> = Graph::new(3, GraphKind::Directed).unwrap();
    /// g.add_vertex(100);
    /// g.add_vertex(200);
    /// g.add_weighted_edge(&100, &200, 1.5);
    ///
    /// let v = g.vertex_by_index_mut(0);
    /// v.start();
    /// while !v.end() {
    ///     let n = v.current_neighbor();
    ///     assert_eq!((n.index, n.weight), (1, 1.5));
    ///     v.next();
    /// }
    /// ```
    pub fn start(&mut self) {
        if let Some(list) = self.neighbors.as_mut() {
            list.cursor_front();
        }
    }

    /// True once the cursor moved past the last neighbor, or if there are no neighbors.
    pub fn end(&self) -> bool {
        self.neighbors.as_ref().is_none_or(NeighborList::cursor_end)
    }

    /// Advances the cursor.
    ///
    /// # Panics
    ///
    /// Panics if [`end`](Self::end) is already true.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        match self.neighbors.as_mut() {
            Some(list) => list.cursor_next(),
            None => panic!("neighbor cursor advanced on a vertex without neighbors"),
        }
    }

    /// The neighbor under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if [`end`](Self::end) is true.
    pub fn current_neighbor(&self) -> Neighbor {
        match self.neighbors.as_ref() {
            Some(list) => list.cursor_get(),
            None => panic!("neighbor cursor read on a vertex without neighbors"),
        }
    }
}
