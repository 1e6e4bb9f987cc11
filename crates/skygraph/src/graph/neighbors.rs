//! Per-vertex adjacency storage used by [`Vertex`](super::Vertex).
//!
//! Entries reference other vertices by their index in the owning graph, never by pointer, so a
//! list can be moved or dropped without touching any other vertex.

/// One adjacency entry: the neighbor's vertex index and the weight of the edge leading to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub weight: f64,
}

/// Ordered `(index, weight)` pairs with a single movable cursor.
///
/// The cursor is not reentrant: starting a new traversal resets any traversal in progress.
#[derive(Debug, Clone, Default)]
pub struct NeighborList {
    entries: Vec<Neighbor>,
    cursor: usize,
}

impl NeighborList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push_back(&mut self, index: usize, weight: f64) {
        self.entries.push(Neighbor { index, weight });
    }

    /// Linear membership test by vertex index; weights are not compared.
    pub fn contains(&self, index: usize) -> bool {
        self.entries.iter().any(|n| n.index == index)
    }

    /// First entry pointing at `index`, if any.
    pub fn find(&self, index: usize) -> Option<&Neighbor> {
        self.entries.iter().find(|n| n.index == index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor> {
        self.entries.iter()
    }

    pub fn cursor_front(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    pub fn cursor_next(&mut self) {
        assert!(
            !self.cursor_end(),
            "neighbor cursor advanced past the end of the list"
        );
        self.cursor += 1;
    }

    pub fn cursor_get(&self) -> Neighbor {
        match self.entries.get(self.cursor) {
            Some(n) => *n,
            None => panic!("neighbor cursor read past the end of the list"),
        }
    }
}

impl<'a> IntoIterator for &'a NeighborList {
    type Item = &'a Neighbor;
    type IntoIter = std::slice::Iter<'a, Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
