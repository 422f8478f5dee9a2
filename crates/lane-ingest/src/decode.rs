//! Maps wire records (spec §6) onto `lane-graph` domain types.

use lane_core::{parse_datetime, parse_time, Duration, Instant, Movement, Process, TimeOfDay};
use lane_graph::{EdgeCostAttributes, Facility, Graph, Route, Vehicle};

use crate::records::{FacilityRecord, RouteRecord};
use crate::shipment::{ShipmentRequest, SubItem};
use crate::ShipmentRecord;

const DEFAULT_CUTOFF: TimeOfDay = TimeOfDay(540); // 09:00

/// A decoded facility plus the `property_id` group it belongs to, if any
/// (used by the live updater to install custody edges — spec §4.3).
pub struct DecodedFacility {
    pub facility: Facility,
    pub property_id: Option<String>,
}

/// Decode a facility record. Returns `None` for inactive facilities (spec
/// §6, dropped silently — inactivity isn't malformed input).
pub fn decode_facility(record: &FacilityRecord) -> Option<DecodedFacility> {
    if !record.active {
        return None;
    }

    let attrs = record.facility_attributes.as_ref();

    let cutoff = attrs
        .and_then(|a| a.center_arrival_cutoff.as_deref())
        .filter(|s| !s.is_empty())
        .map(|s| match parse_time(s) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("facility {:?}: invalid CenterArrivalCutoff {e}", record.facility_code);
                DEFAULT_CUTOFF
            }
        })
        .unwrap_or(DEFAULT_CUTOFF);

    let outbound_processing = attrs
        .and_then(|a| a.outbound_processing_time.as_deref())
        .filter(|s| !s.is_empty())
        .map(|s| match parse_time(s) {
            Ok(t) => Duration::minutes(t.as_minutes()),
            Err(e) => {
                log::warn!(
                    "facility {:?}: invalid OutboundProcessingTime {e}",
                    record.facility_code
                );
                Duration::ZERO
            }
        })
        .unwrap_or(Duration::ZERO);

    let mut facility = Facility::new(record.facility_code.clone(), record.name.clone(), cutoff);
    facility.set_latency(Movement::Linehaul, Process::Outbound, outbound_processing);

    Some(DecodedFacility {
        facility,
        property_id: record.property_id.clone().filter(|s| !s.is_empty()),
    })
}

/// `route_type` → `(Vehicle, Movement)`, spec §4.3.
fn vehicle_movement(route_type: &str) -> (Vehicle, Movement) {
    match route_type {
        "air" => (Vehicle::Air, Movement::Linehaul),
        "carting" => (Vehicle::Surface, Movement::Carting),
        _ => (Vehicle::Surface, Movement::Linehaul),
    }
}

/// `k` index of the sub-edge for ordered halt pair `(i, j)` within an
/// `N`-halt composite route (spec §6).
fn pair_index(i: usize, n: usize, j: usize) -> usize {
    let offset = i * (n - 1) - (i * i - i) / 2;
    offset + j - i - 1
}

/// Expand a composite route descriptor into its `N*(N-1)/2` sub-edges
/// (spec §4.3). Each returned tuple is `(source_code, target_code, Route)`.
///
/// Pairs whose endpoint facility is not yet present in `graph` are dropped
/// silently (the updater never buffers — spec §3 "Lifecycle") since their
/// processing latency can't be resolved.
pub fn expand_route(graph: &Graph, record: &RouteRecord) -> Vec<(String, String, Route)> {
    let n = record.halt_centers.len();
    if n < 2 {
        log::warn!(
            "route {:?}: fewer than 2 halts, no sub-edges produced",
            record.route_schedule_uuid
        );
        return Vec::new();
    }

    let (vehicle, movement) = vehicle_movement(&record.route_type);
    let days = record.days_of_week.clone();
    let reporting_time_min = record.reporting_time_ss.div_euclid(60);

    let mut out = Vec::with_capacity(n * (n - 1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            let s = &record.halt_centers[i];
            let t = &record.halt_centers[j];

            let Some(s_node) = graph.node_by_code(&s.center_code) else {
                continue;
            };
            let Some(t_node) = graph.node_by_code(&t.center_code) else {
                continue;
            };

            let s_rel_arr = s.rel_eta_ss.div_euclid(60);
            let t_rel_arr = t.rel_eta_ss.div_euclid(60);
            let s_rel_dep = s.rel_etd_ss.div_euclid(60);
            let t_rel_dep = t.rel_etd_ss.div_euclid(60);

            let departure = TimeOfDay::from_minutes(reporting_time_min + s_rel_dep);
            let duration = t_rel_arr - s_rel_dep;
            if duration <= 0 {
                log::warn!(
                    "route {:?} pair ({i},{j}): non-positive duration, skipped",
                    record.route_schedule_uuid
                );
                continue;
            }

            let mut out_source = s_rel_dep - s_rel_arr;
            if i > 0 {
                out_source = out_source.div_euclid(2);
            }
            let mut in_target = t_rel_dep - t_rel_arr;
            if j < n - 1 {
                in_target = in_target.div_euclid(2);
            }

            let loading = graph.facility(s_node).latency(movement, Process::Outbound)
                + Duration(out_source);
            let unloading = graph.facility(t_node).latency(movement, Process::Inbound)
                + Duration(in_target);

            let cost = EdgeCostAttributes::scheduled(
                loading,
                departure,
                Duration(duration),
                unloading,
                days.clone(),
            );

            let code = format!("{}.{}", record.route_schedule_uuid, pair_index(i, n, j));
            let route = Route::new(code, record.name.clone(), vehicle, movement, cost);
            out.push((s.center_code.clone(), t.center_code.clone(), route));
        }
    }

    out
}

/// Install a transient edge in each direction between every pair of
/// facilities sharing `property_id` (spec §4.3 "Custody edges").
pub fn custody_edges(codes: &[String]) -> Vec<(String, String, Route)> {
    let mut out = Vec::new();
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            out.push((
                a.clone(),
                b.clone(),
                Route::new(
                    format!("custody.{a}.{b}"),
                    "custody",
                    Vehicle::Surface,
                    Movement::Carting,
                    EdgeCostAttributes::transient(),
                ),
            ));
            out.push((
                b.clone(),
                a.clone(),
                Route::new(
                    format!("custody.{b}.{a}"),
                    "custody",
                    Vehicle::Surface,
                    Movement::Carting,
                    EdgeCostAttributes::transient(),
                ),
            ));
        }
    }
    out
}

/// Decode a shipment record. Missing `id`, `location`, `destination`, or
/// `time` drops the record with a logged warning (spec §6).
pub fn decode_shipment(record: &ShipmentRecord) -> Option<ShipmentRequest> {
    let id = record.id.clone().filter(|s| !s.is_empty())?;
    let source_code = record.location.clone().filter(|s| !s.is_empty())?;
    let target_code = record.destination.clone().filter(|s| !s.is_empty())?;
    let time = record.time.clone().filter(|s| !s.is_empty())?;

    let origin_arrival = match parse_datetime(&time) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("shipment {id:?}: invalid time {e}");
            return None;
        }
    };

    let deadline = match record.ipdd_destination.as_deref().filter(|s| !s.is_empty()) {
        None => Instant::MAX,
        Some(s) => match parse_datetime(s) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("shipment {id:?}: invalid ipdd_destination {e}, using no deadline");
                Instant::MAX
            }
        },
    };

    let sub_items = record
        .item
        .iter()
        .filter_map(|item| {
            let dep = item.ipdd_destination.as_deref()?;
            match parse_datetime(dep) {
                Ok(t) => Some(SubItem {
                    target_code: item.cn.clone(),
                    deadline: t,
                }),
                Err(e) => {
                    log::warn!("shipment {id:?} item {:?}: invalid ipdd_destination {e}", item.id);
                    None
                }
            }
        })
        .collect();

    Some(ShipmentRequest {
        id,
        source_code,
        target_code,
        origin_arrival,
        deadline,
        sub_items,
    })
}
