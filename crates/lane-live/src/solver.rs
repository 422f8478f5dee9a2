//! The solver facade (spec §4.6): turns a decoded [`ShipmentRequest`] into a
//! [`ResultDocument`] by running forward and reverse time-expanded searches
//! against a graph snapshot.

use lane_core::Vehicle;
use lane_graph::{shortest_path_forward, shortest_path_reverse, Graph, Path};
use lane_ingest::ShipmentRequest;
use lane_output::{format_wire_datetime, Location, PathDocument, ResultDocument};

/// Vehicle filter `solve()` runs under by default (spec §4.6 step 2).
///
/// Exposed as a parameter (rather than hard-coded) so air-vehicle queries
/// can reuse the same engine — the original exercises both instantiations
/// even though the default facade only ever calls the surface one.
pub const DEFAULT_VEHICLE_FILTER: Option<Vehicle> = Some(Vehicle::Surface);

/// Resolve `req` against `graph`, producing the result document to hand to
/// the output sink. Never panics and never returns `Err` — every failure
/// mode attaches to the document's `error` field per spec §7.
pub fn solve(graph: &Graph, req: &ShipmentRequest, vehicle_filter: Option<Vehicle>) -> ResultDocument {
    let pdd = format_wire_datetime(req.deadline);

    let (src_id, tgt_id) = match (
        graph.node_by_code(&req.source_code),
        graph.node_by_code(&req.target_code),
    ) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            return ResultDocument {
                id: req.id.clone(),
                waybill: req.id.clone(),
                earliest: None,
                ultimate: None,
                error: Some("unknown endpoint".to_string()),
                pdd,
            };
        }
    };

    let fwd = match shortest_path_forward(graph, vehicle_filter, src_id, tgt_id, req.origin_arrival) {
        Ok(path) => path,
        Err(_) => {
            return ResultDocument {
                id: req.id.clone(),
                waybill: req.id.clone(),
                earliest: None,
                ultimate: None,
                error: Some(format!(
                    "no route from {} to {}",
                    req.source_code, req.target_code
                )),
                pdd,
            };
        }
    };

    let fwd_arrival = fwd.last().expect("shortest_path_forward returns a non-empty Path").arrival;
    let mut ultimate = None;

    if fwd_arrival <= req.deadline {
        let best_sub = req
            .sub_items
            .iter()
            .filter(|sub| sub.deadline > fwd_arrival)
            .filter_map(|sub| {
                let sub_target = graph.node_by_code(&sub.target_code)?;
                shortest_path_reverse(graph, vehicle_filter, sub_target, tgt_id, sub.deadline).ok()
            })
            .min_by_key(|path| path.last().expect("shortest_path_reverse returns a non-empty Path").arrival);

        if let Some(best_sub) = best_sub {
            let best_arrival = best_sub.last().expect("checked above").arrival;
            if best_arrival > fwd_arrival {
                if let Ok(rev) = shortest_path_reverse(graph, vehicle_filter, tgt_id, src_id, req.deadline) {
                    ultimate = Some(path_document(graph, &rev));
                }
            }
        }
    }

    ResultDocument {
        id: req.id.clone(),
        waybill: req.id.clone(),
        earliest: Some(path_document(graph, &fwd)),
        ultimate,
        error: None,
        pdd,
    }
}

/// Render a reconstructed [`Path`] as the wire `{locations, first, second?}`
/// shape (spec §6).
fn path_document(graph: &Graph, path: &Path) -> PathDocument {
    let locations: Vec<Location> = path
        .segments
        .iter()
        .map(|seg| Location {
            code: graph.facility(seg.facility).code.clone(),
            arrival: format_wire_datetime(seg.arrival),
            route: seg
                .outbound
                .map(|edge| route_prefix(&graph.route(edge).code)),
            departure: seg.departure.map(format_wire_datetime),
        })
        .collect();

    let first = locations[0].clone();
    let second = locations.get(1).cloned();
    PathDocument {
        locations,
        first,
        second,
    }
}

/// Strip the `.k` sub-edge index off a composite-route edge code, leaving
/// the `route_schedule_uuid` the original wire record named (spec §4.3).
fn route_prefix(edge_code: &str) -> String {
    edge_code
        .split_once('.')
        .map(|(prefix, _)| prefix.to_string())
        .unwrap_or_else(|| edge_code.to_string())
}
