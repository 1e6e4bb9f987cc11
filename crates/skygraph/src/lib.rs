//! Fixed-capacity, insertion-only graph with weighted edges.
//!
//! A [`Graph`] is created with a fixed number of vertex slots and a [`GraphKind`]. Vertices are
//! appended in order and addressed afterwards by the key of their [`Payload`]; edges are stored
//! as per-vertex neighbor lists of `(index, weight)` pairs. Each [`Vertex`] also carries
//! color/distance/predecessor fields for traversal algorithms implemented outside this crate.
//!
//! ```
//! use skygraph::{Graph, GraphKind, NO_EDGE};
//!
//! let mut g: Graph<i32> = Graph::new(3, GraphKind::Directed)?;
//! for key in [100, 120, 130] {
//!     g.add_vertex(key);
//! }
//! assert!(g.add_weighted_edge(&100, &120, 9.0));
//! assert_eq!(g.get_weight(&100, &120), 9.0);
//! assert_eq!(g.get_weight(&120, &100), NO_EDGE);
//! # Ok::<(), skygraph::Error>(())
//! ```

mod error;
pub mod graph;
pub mod payload;

pub use error::{AirportError, Error, Result};
pub use graph::{Color, Graph, GraphKind, NO_EDGE, Neighbor, NeighborList, Vertex};
pub use payload::{Airport, Payload};
