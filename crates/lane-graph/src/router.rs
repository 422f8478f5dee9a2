//! The time-expanded Dijkstra engine and path reconstruction (spec §4.4).
//!
//! # Direction dispatch
//!
//! The engine is one generic function parameterized by a [`Direction`]
//! marker type ([`Forward`]/[`Reverse`]) rather than a runtime mode enum —
//! the weight closure, comparator, and "infinity" sentinel are all resolved
//! at compile time. A private [`Traverse`] trait extends `Direction` with
//! the graph-specific half: which adjacency list to walk and which endpoint
//! of an edge is "the other end".

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use lane_core::{EdgeId, Instant, NodeId, Vehicle};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::route::{get_next_departure, Direction, Forward, Reverse};

// ── Traverse ─────────────────────────────────────────────────────────────────

trait Traverse: Direction {
    fn adjacency(graph: &Graph, node: NodeId) -> &[EdgeId];
    fn endpoint(graph: &Graph, edge: EdgeId) -> NodeId;
}

impl Traverse for Forward {
    #[inline]
    fn adjacency(graph: &Graph, node: NodeId) -> &[EdgeId] {
        graph.fwd_adj(node)
    }

    #[inline]
    fn endpoint(graph: &Graph, edge: EdgeId) -> NodeId {
        graph.edge_target(edge)
    }
}

impl Traverse for Reverse {
    #[inline]
    fn adjacency(graph: &Graph, node: NodeId) -> &[EdgeId] {
        graph.rev_adj(node)
    }

    #[inline]
    fn endpoint(graph: &Graph, edge: EdgeId) -> NodeId {
        graph.edge_source(edge)
    }
}

// ── Priority queue entry ─────────────────────────────────────────────────────

struct HeapItem<D>(Instant, NodeId, PhantomData<D>);

impl<D> PartialEq for HeapItem<D> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}
impl<D> Eq for HeapItem<D> {}

impl<D: Direction> PartialOrd for HeapItem<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Direction> Ord for HeapItem<D> {
    /// `BinaryHeap` pops the greatest element; "greatest" here means "the
    /// entry `D` considers the better one to expand next", so a standard
    /// max-heap doubles as both the forward min-heap and the reverse
    /// max-heap depending on `D::improves`.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            self.1.cmp(&other.1)
        } else if D::improves(self.0, other.0) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

// ── Path / Segment ────────────────────────────────────────────────────────────

/// One stop along a reconstructed path (spec §3 "Segment").
#[derive(Clone, Debug)]
pub struct Segment {
    pub facility: NodeId,
    pub inbound: Option<EdgeId>,
    pub outbound: Option<EdgeId>,
    pub arrival: Instant,
    pub departure: Option<Instant>,
}

/// A reconstructed path, source facility first.
#[derive(Clone, Debug, Default)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Run the generalized Dijkstra described in spec §4.4.
///
/// `root` is where the search starts (`dist[root] = start`); `dest` is the
/// node the caller actually wants reached. For forward mode `root` is the
/// shipment's true source and `dest` its true target; for reverse mode the
/// roles swap (`root` is the true target, searched backwards from the
/// deadline, `dest` the true source) — see the solver facade.
pub fn shortest_path<D: Traverse>(
    graph: &Graph,
    vehicle_filter: Option<Vehicle>,
    root: NodeId,
    dest: NodeId,
    start: Instant,
) -> Result<Path, GraphError> {
    let n = graph.node_count();
    let mut dist = vec![D::infinity(); n];
    let mut pred: Vec<Option<EdgeId>> = vec![None; n];
    dist[root.index()] = start;

    let mut heap = BinaryHeap::new();
    heap.push(HeapItem::<D>(start, root, PhantomData));

    while let Some(HeapItem(d, u, _)) = heap.pop() {
        if d != dist[u.index()] {
            continue; // stale entry
        }
        if d == D::infinity() {
            break; // remaining nodes unreachable
        }
        if u == dest {
            break;
        }

        for &edge in D::adjacency(graph, u) {
            if let Some(wanted) = vehicle_filter {
                if graph.route(edge).vehicle != wanted {
                    continue;
                }
            }

            let neighbor = D::endpoint(graph, edge);
            let candidate = D::weight(&graph.route(edge).cost, d);
            if candidate == D::infinity() {
                continue;
            }

            if D::improves(candidate, dist[neighbor.index()]) {
                dist[neighbor.index()] = candidate;
                pred[neighbor.index()] = Some(edge);
                heap.push(HeapItem::<D>(candidate, neighbor, PhantomData));
            }
        }
    }

    if dist[dest.index()] == D::infinity() {
        return Err(GraphError::NoPath {
            from: graph.facility(root).code.clone(),
            to: graph.facility(dest).code.clone(),
        });
    }

    Ok(reconstruct::<D>(graph, &dist, &pred, root, dest))
}

fn reconstruct<D: Traverse>(
    graph: &Graph,
    dist: &[Instant],
    pred: &[Option<EdgeId>],
    root: NodeId,
    dest: NodeId,
) -> Path {
    let mut nodes = vec![dest];
    let mut edges = Vec::new();
    let mut cur = dest;

    while let Some(edge) = pred[cur.index()] {
        edges.push(edge);
        cur = if graph.edge_source(edge) == cur {
            graph.edge_target(edge)
        } else {
            graph.edge_source(edge)
        };
        nodes.push(cur);
    }
    debug_assert_eq!(cur, root);

    // The chain above is built walking from `dest` to `root`. Whichever of
    // the two is chronologically earlier determines whether that chain is
    // already in source-to-target order or needs reversing.
    if D::ROOT_IS_EARLIER {
        nodes.reverse();
        edges.reverse();
    }

    let segments = nodes
        .iter()
        .enumerate()
        .map(|(i, &facility)| {
            let inbound = if i > 0 { Some(edges[i - 1]) } else { None };
            let outbound = edges.get(i).copied();
            let arrival = dist[facility.index()];
            let departure = outbound.map(|e| {
                let route = graph.route(e);
                if route.cost.transient {
                    arrival
                } else {
                    get_next_departure(arrival, route.cost.departure)
                }
            });
            Segment {
                facility,
                inbound,
                outbound,
                arrival,
                departure,
            }
        })
        .collect();

    Path { segments }
}

/// Convenience entry points so callers don't need to name `Forward`/`Reverse`
/// at every call site.
pub fn shortest_path_forward(
    graph: &Graph,
    vehicle_filter: Option<Vehicle>,
    source: NodeId,
    target: NodeId,
    t0: Instant,
) -> Result<Path, GraphError> {
    shortest_path::<Forward>(graph, vehicle_filter, source, target, t0)
}

pub fn shortest_path_reverse(
    graph: &Graph,
    vehicle_filter: Option<Vehicle>,
    target: NodeId,
    source: NodeId,
    deadline: Instant,
) -> Result<Path, GraphError> {
    shortest_path::<Reverse>(graph, vehicle_filter, target, source, deadline)
}
