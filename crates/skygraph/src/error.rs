use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures of the graph container.
///
/// Contract violations (adding to a full graph through [`Graph::add_vertex`], querying an empty
/// graph, reading a cursor past its end) are not represented here: they panic.
///
/// [`Graph::add_vertex`]: crate::Graph::add_vertex
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph capacity must be greater than zero")]
    ZeroCapacity,

    #[error("unable to allocate storage for {capacity} vertices")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("graph is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error(transparent)]
    Airport(#[from] AirportError),
}

/// Validation failures for [`Airport`](crate::Airport) records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AirportError {
    #[error("airport {id}: IATA code {code:?} must be exactly 3 ASCII letters or digits")]
    InvalidIataCode { id: i32, code: String },

    #[error("airport {id}: {field} is {len} bytes long (max {max})")]
    FieldTooLong {
        id: i32,
        field: &'static str,
        len: usize,
        max: usize,
    },
}
