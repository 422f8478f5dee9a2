//! The solver worker and the result-sink worker (spec §4.5, §4.6).
//!
//! The solver worker is the one role in §5 that only *reads* the graph: it
//! takes a shared handle for the duration of a single `solve()` call, so the
//! graph is a consistent snapshot for the whole Dijkstra run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::time::Duration as WallDuration;

use lane_core::Vehicle;
use lane_ingest::ShipmentRequest;
use lane_output::{OutputSink, ResultDocument};

use crate::shared::SharedGraph;
use crate::solver::solve;
use crate::updater::send_with_backpressure;

/// Drains the shipment-request queue, runs `solve()` against the shared
/// graph, and forwards each result document to the output-sink worker.
pub fn solver_worker(
    rx: Receiver<ShipmentRequest>,
    tx: std::sync::mpsc::SyncSender<ResultDocument>,
    graph: SharedGraph,
    vehicle_filter: Option<Vehicle>,
    timeout: WallDuration,
    stop: &AtomicBool,
) {
    log::info!("solver worker started");
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let req = match rx.recv_timeout(timeout) {
            Ok(req) => req,
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        };

        let doc = {
            let graph = match graph.read() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
            solve(&graph, &req, vehicle_filter)
        };

        log::debug!("solved shipment {} -> error={:?}", req.id, doc.error);
        if send_with_backpressure(&tx, doc, stop).is_err() {
            break;
        }
    }
    log::info!("solver worker stopped");
}

/// Drains result documents and writes them through `sink`, calling
/// `finish()` once on shutdown.
pub fn result_sink_worker<S: OutputSink>(
    rx: Receiver<ResultDocument>,
    mut sink: S,
    timeout: WallDuration,
    stop: &AtomicBool,
) {
    log::info!("result sink worker started");
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        match rx.recv_timeout(timeout) {
            Ok(doc) => {
                if let Err(e) = sink.write(&doc) {
                    log::error!("result sink write failed for {}: {e}", doc.id);
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    // Drain whatever is left in the channel before closing, per §5's
    // best-effort drain-then-exit shutdown.
    while let Ok(doc) = rx.try_recv() {
        if let Err(e) = sink.write(&doc) {
            log::error!("result sink write failed for {}: {e}", doc.id);
        }
    }
    if let Err(e) = sink.finish() {
        log::error!("result sink finish failed: {e}");
    }
    log::info!("result sink worker stopped");
}
