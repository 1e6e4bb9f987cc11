//! Demo networks: the built-in key and airport graphs, and JSON network files.

use crate::CliError;
use serde::Deserialize;
use skygraph::{Airport, Graph, GraphKind};

const KEY_EDGES: [(i32, i32); 6] = [
    (100, 200),
    (100, 400),
    (200, 300),
    (200, 500),
    (300, 500),
    (400, 500),
];

/// Undirected graph over the keys 100..=500.
pub(crate) fn key_network() -> Result<Graph<i32>, CliError> {
    let mut g: Graph<i32> = Graph::new(5, GraphKind::Undirected)?;
    for key in (100..=500).step_by(100) {
        g.add_vertex(key);
    }
    for (a, b) in KEY_EDGES {
        if !g.add_edge(&a, &b) {
            return Err(CliError::Config {
                message: format!("key edge {a} - {b} references an unknown key"),
            });
        }
    }
    Ok(g)
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Route {
    pub from: i32,
    pub to: i32,
    #[serde(default)]
    pub weight: f64,
}

/// On-disk description of an airport network.
///
/// `capacity` defaults to the number of airports.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NetworkConfig {
    #[serde(default)]
    pub kind: GraphKind,
    #[serde(default)]
    pub capacity: Option<usize>,
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl NetworkConfig {
    pub(crate) fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    pub(crate) fn builtin() -> Self {
        let airports = vec![
            Airport::new(
                100,
                "MEX",
                "MEXICO",
                "MEXICO CITY",
                "AEROPUERTO INTERNACIONAL BENITO JUAREZ",
                -6,
            ),
            Airport::new(120, "LHR", "UNITED KINGDOM", "LONDON", "LONDON HEATHROW", 0),
            Airport::new(130, "MAD", "SPAIN", "MADRID", "MADRID-BARAJAS", 1),
            Airport::new(
                140,
                "FRA",
                "GERMANY",
                "FRANKFURT",
                "FLUGHAFEN FRANKFURT AM MAIN",
                1,
            ),
            Airport::new(150, "CDG", "FRANCE", "PARIS", "CHARLES DE GAULLE", 1),
        ];
        let routes = [
            (100, 120, 9.00),
            (100, 130, 2.50),
            (120, 140, 1.80),
            (130, 150, 1.50),
            (140, 150, 1.20),
        ]
        .into_iter()
        .map(|(from, to, weight)| Route { from, to, weight })
        .collect();

        Self {
            kind: GraphKind::Directed,
            capacity: None,
            airports,
            routes,
        }
    }

    pub(crate) fn build(self) -> Result<Graph<Airport>, CliError> {
        let capacity = self.capacity.unwrap_or(self.airports.len());
        let mut g: Graph<Airport> = Graph::new(capacity, self.kind)?;

        for airport in self.airports {
            airport.validate().map_err(skygraph::Error::from)?;
            if g.vertex_by_key(&airport.id).is_some() {
                return Err(CliError::Config {
                    message: format!("duplicate airport id {}", airport.id),
                });
            }
            g.try_add_vertex(airport)?;
        }

        if g.is_empty() {
            return match self.routes.first() {
                Some(r) => Err(unknown_route(r)),
                None => Ok(g),
            };
        }
        for r in &self.routes {
            if !g.add_weighted_edge(&r.from, &r.to, r.weight) {
                return Err(unknown_route(r));
            }
        }
        tracing::debug!(
            vertices = g.len(),
            capacity = g.capacity(),
            entries = g.neighbor_entry_count(),
            "built airport network"
        );
        Ok(g)
    }
}

fn unknown_route(r: &Route) -> CliError {
    CliError::Config {
        message: format!("route {} -> {} references an unknown airport", r.from, r.to),
    }
}
