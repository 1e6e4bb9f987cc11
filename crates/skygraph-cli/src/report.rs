//! Text and JSON reports built from the graph's read accessors.

use serde::Serialize;
use skygraph::{Airport, Color, Graph, GraphKind, Payload, Vertex};
use std::io::{self, Write};

/// One line per vertex: `[index]key=>n1->n2->Nil`.
///
/// Walks each list with the vertex cursor.
pub(crate) fn write_key_report(g: &mut Graph<i32>, out: &mut impl Write) -> io::Result<()> {
    for idx in 0..g.len() {
        let key = *g.data_by_index(idx);
        write!(out, "[{idx}]{key}=>")?;

        let mut neighbor_keys = Vec::new();
        let v = g.vertex_by_index_mut(idx);
        v.start();
        while !v.end() {
            neighbor_keys.push(v.current_neighbor().index);
            v.next();
        }
        for n in neighbor_keys {
            write!(out, "{}->", g.data_by_index(n))?;
        }
        writeln!(out, "Nil")?;
    }
    writeln!(out)
}

pub(crate) fn write_airport_report(g: &Graph<Airport>, out: &mut impl Write) -> io::Result<()> {
    for v in g.vertices() {
        writeln!(
            out,
            "Vertex {} - Color: {}, Distance: {}",
            v.payload().id,
            v.color(),
            v.distance()
        )?;
        write_airport_details(g, v, out)?;
    }
    Ok(())
}

/// Full record and neighbor list for one airport, or a not-found line.
pub(crate) fn write_airport_query(
    g: &Graph<Airport>,
    id: i32,
    out: &mut impl Write,
) -> io::Result<()> {
    match g.vertex_by_key(&id) {
        Some(v) => {
            writeln!(out, "Airport {id}: {}", v.payload())?;
            write_airport_details(g, v, out)
        }
        None => writeln!(out, "airport {id} not found"),
    }
}

fn write_airport_details(
    g: &Graph<Airport>,
    v: &Vertex<Airport>,
    out: &mut impl Write,
) -> io::Result<()> {
    let a = v.payload();
    writeln!(out, "  ID: {}", a.id)?;
    writeln!(out, "  IATA Code: {}", a.iata_code)?;
    writeln!(out, "  Country: {}", a.country)?;
    writeln!(out, "  City: {}", a.city)?;
    writeln!(out, "  Name: {}", a.name)?;
    writeln!(out, "  UTC Offset: {}", a.utc_offset)?;
    write!(out, "  Neighbors:")?;
    for n in v.neighbors() {
        write!(
            out,
            " {}(W:{:.2})",
            g.data_by_index(n.index).iata_code,
            n.weight
        )?;
    }
    writeln!(out)
}

#[derive(Serialize)]
#[serde(bound(serialize = "P: Serialize, P::Key: Serialize"))]
pub(crate) struct GraphReport<'a, P: Payload> {
    kind: GraphKind,
    capacity: usize,
    len: usize,
    vertices: Vec<VertexReport<'a, P>>,
}

#[derive(Serialize)]
#[serde(bound(serialize = "P: Serialize, P::Key: Serialize"))]
struct VertexReport<'a, P: Payload> {
    index: usize,
    payload: &'a P,
    color: Color,
    distance: i32,
    predecessor: Option<usize>,
    neighbors: Vec<NeighborReport<'a, P::Key>>,
}

#[derive(Serialize)]
struct NeighborReport<'a, K> {
    index: usize,
    key: &'a K,
    weight: f64,
}

impl<'a, P> GraphReport<'a, P>
where
    P: Payload + Serialize,
    P::Key: Serialize,
{
    pub(crate) fn new(g: &'a Graph<P>) -> Self {
        let vertices = g
            .vertices()
            .enumerate()
            .map(|(index, v)| VertexReport {
                index,
                payload: v.payload(),
                color: v.color(),
                distance: v.distance(),
                predecessor: v.predecessor(),
                neighbors: v
                    .neighbors()
                    .map(|n| NeighborReport {
                        index: n.index,
                        key: g.data_by_index(n.index).key(),
                        weight: n.weight,
                    })
                    .collect(),
            })
            .collect();

        Self {
            kind: g.kind(),
            capacity: g.capacity(),
            len: g.len(),
            vertices,
        }
    }
}
