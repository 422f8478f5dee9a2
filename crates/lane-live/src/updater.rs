//! The live updater: three ingest workers (facility, route, shipment) that
//! decode wire records and mutate the shared graph, or forward decoded
//! shipment requests to the solver (spec §4.5).
//!
//! Each worker loop is shaped the same way: block on the input channel up to
//! `dequeue_timeout`, drain whatever else is immediately available (the
//! "try-dequeue-bulk" semantics of §5), take one exclusive graph lock for
//! the whole batch, then check the stop flag and loop. A `recv_timeout`
//! miss is not an error — it is simply the worker's chance to poll `stop`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::time::Duration as WallDuration;

use lane_ingest::{custody_edges, decode_facility, decode_shipment, expand_route};
use lane_ingest::{FacilityRecord, RouteRecord, ShipmentRecord};

use crate::shared::SharedGraph;

/// Drain up to `batch_cap` items already queued after the first blocking
/// receive. Returns `None` once the channel is disconnected and empty.
fn drain_batch<T>(rx: &Receiver<T>, timeout: WallDuration, batch_cap: usize) -> Option<Vec<T>> {
    let first = match rx.recv_timeout(timeout) {
        Ok(item) => item,
        Err(std::sync::mpsc::RecvTimeoutError::Timeout) => return Some(Vec::new()),
        Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return None,
    };

    let mut batch = Vec::with_capacity(batch_cap.min(64));
    batch.push(first);
    while batch.len() < batch_cap {
        match rx.try_recv() {
            Ok(item) => batch.push(item),
            Err(_) => break,
        }
    }
    Some(batch)
}

/// Facility ingest worker: inserts/updates facility nodes and their
/// per-movement latencies.
pub fn facility_ingest_worker(
    rx: Receiver<FacilityRecord>,
    graph: SharedGraph,
    timeout: WallDuration,
    stop: &AtomicBool,
) {
    log::info!("facility ingest worker started");

    // Facility codes seen so far, grouped by `property_id`, so custody edges
    // reach across batches (a sibling added in an earlier batch still gets
    // linked to one added later under the same property).
    let mut property_groups: std::collections::HashMap<String, Vec<String>> =
        std::collections::HashMap::new();

    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let batch = match drain_batch(&rx, timeout, 1024) {
            Some(b) => b,
            None => break,
        };
        if batch.is_empty() {
            continue;
        }

        let decoded: Vec<_> = batch
            .iter()
            .filter_map(|record| {
                let d = decode_facility(record);
                if d.is_none() {
                    log::warn!("dropped inactive/unreadable facility record {:?}", record.facility_code);
                }
                d.map(|d| (record.facility_code.clone(), d.property_id.clone(), d.facility))
            })
            .collect();

        if decoded.is_empty() {
            continue;
        }

        let mut touched_properties = std::collections::HashSet::new();
        for (code, property_id, _) in &decoded {
            if let Some(p) = property_id {
                property_groups.entry(p.clone()).or_default().push(code.clone());
                touched_properties.insert(p.clone());
            }
        }

        let mut graph = match graph.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (_, _, facility) in decoded {
            graph.upsert_facility(facility);
        }
        for property_id in touched_properties {
            let codes = &property_groups[&property_id];
            for (s, t, route) in custody_edges(codes) {
                let _ = graph.add_route(&s, &t, route);
            }
        }
    }
    log::info!("facility ingest worker stopped");
}

/// Route ingest worker: expands composite route descriptors into sub-edges
/// (spec §4.3) and inserts them, dropping sub-edges whose endpoints aren't
/// yet in the graph.
pub fn route_ingest_worker(
    rx: Receiver<RouteRecord>,
    graph: SharedGraph,
    timeout: WallDuration,
    stop: &AtomicBool,
) {
    log::info!("route ingest worker started");
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let batch = match drain_batch(&rx, timeout, 256) {
            Some(b) => b,
            None => break,
        };
        if batch.is_empty() {
            continue;
        }

        let mut graph = match graph.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        for record in &batch {
            let edges = expand_route(&graph, record);
            if edges.is_empty() {
                log::warn!("route {} produced no insertable edges", record.route_schedule_uuid);
            }
            for (s, t, route) in edges {
                let _ = graph.add_route(&s, &t, route);
            }
        }
    }
    log::info!("route ingest worker stopped");
}

/// Shipment ingest worker: decodes wire records into [`ShipmentRequest`]s
/// and forwards them to the solver queue. Does not touch the graph.
pub fn shipment_ingest_worker(
    rx: Receiver<ShipmentRecord>,
    tx: std::sync::mpsc::SyncSender<lane_ingest::ShipmentRequest>,
    timeout: WallDuration,
    stop: &AtomicBool,
) {
    log::info!("shipment ingest worker started");
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let batch = match drain_batch(&rx, timeout, 256) {
            Some(b) => b,
            None => break,
        };
        for record in &batch {
            match decode_shipment(record) {
                Some(req) => {
                    if send_with_backpressure(&tx, req, stop).is_err() {
                        return;
                    }
                }
                None => log::warn!("dropped malformed shipment record"),
            }
        }
    }
    log::info!("shipment ingest worker stopped");
}

/// Send `item` on `tx`, polling `stop` with a short sleep while the bounded
/// channel is saturated (spec §5's "backpressure by capacity cap, not
/// blocking semantics"). Returns `Err(())` if the receiver disconnected or
/// shutdown was requested before the send succeeded.
pub(crate) fn send_with_backpressure<T>(
    tx: &std::sync::mpsc::SyncSender<T>,
    mut item: T,
    stop: &AtomicBool,
) -> Result<(), ()> {
    loop {
        match tx.try_send(item) {
            Ok(()) => return Ok(()),
            Err(std::sync::mpsc::TrySendError::Disconnected(_)) => return Err(()),
            Err(std::sync::mpsc::TrySendError::Full(back)) => {
                item = back;
                if stop.load(Ordering::Relaxed) {
                    return Err(());
                }
                std::thread::sleep(WallDuration::from_millis(20));
            }
        }
    }
}
