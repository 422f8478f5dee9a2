//! Fluent builder for wiring the five workers (three ingest roles, one
//! solver, one result sink) around a shared graph (spec §5).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration as WallDuration;

use lane_core::Vehicle;
use lane_graph::Graph;
use lane_ingest::{FacilityRecord, RouteRecord, ShipmentRecord};
use lane_output::OutputSink;

use crate::dispatcher::{result_sink_worker, solver_worker};
use crate::shared::{shared_graph, SharedGraph};
use crate::solver::DEFAULT_VEHICLE_FILTER;
use crate::updater::{facility_ingest_worker, route_ingest_worker, shipment_ingest_worker, send_with_backpressure};

/// Default dequeue timeout per §5 ("typical 200 ms").
pub const DEFAULT_DEQUEUE_TIMEOUT: WallDuration = WallDuration::from_millis(200);
/// Default bounded queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Builds a running [`LiveSystem`] from an initial graph and an output sink.
///
/// # Example
///
/// ```rust,ignore
/// let system = LiveSystemBuilder::new(Graph::new(), JsonlSink::new("out.jsonl")?)
///     .queue_capacity(4096)
///     .build();
/// system.submit_facility(record).ok();
/// system.shutdown();
/// ```
pub struct LiveSystemBuilder<S: OutputSink> {
    graph: Graph,
    sink: S,
    queue_capacity: usize,
    dequeue_timeout: WallDuration,
    vehicle_filter: Option<Vehicle>,
}

impl<S: OutputSink + Send + 'static> LiveSystemBuilder<S> {
    pub fn new(graph: Graph, sink: S) -> Self {
        Self {
            graph,
            sink,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            dequeue_timeout: DEFAULT_DEQUEUE_TIMEOUT,
            vehicle_filter: DEFAULT_VEHICLE_FILTER,
        }
    }

    /// Bounded capacity shared by every MPSC queue between roles.
    pub fn queue_capacity(mut self, n: usize) -> Self {
        self.queue_capacity = n;
        self
    }

    /// How long a worker blocks on an empty input channel before re-checking
    /// the stop flag.
    pub fn dequeue_timeout(mut self, timeout: WallDuration) -> Self {
        self.dequeue_timeout = timeout;
        self
    }

    /// Vehicle filter the solver runs under. Defaults to
    /// [`DEFAULT_VEHICLE_FILTER`] (surface-only, per spec §4.6 step 2).
    pub fn vehicle_filter(mut self, filter: Option<Vehicle>) -> Self {
        self.vehicle_filter = filter;
        self
    }

    /// Spawn the five worker threads and return the running system.
    pub fn build(self) -> LiveSystem {
        let graph: SharedGraph = shared_graph(self.graph);
        let stop = Arc::new(AtomicBool::new(false));

        let (facility_tx, facility_rx) = sync_channel(self.queue_capacity);
        let (route_tx, route_rx) = sync_channel(self.queue_capacity);
        let (shipment_tx, shipment_rx) = sync_channel(self.queue_capacity);
        let (solve_tx, solve_rx) = sync_channel(self.queue_capacity);
        let (result_tx, result_rx) = sync_channel(self.queue_capacity);

        let mut handles = Vec::with_capacity(5);

        {
            let graph = Arc::clone(&graph);
            let stop = Arc::clone(&stop);
            let timeout = self.dequeue_timeout;
            handles.push(thread::spawn(move || {
                facility_ingest_worker(facility_rx, graph, timeout, &stop);
            }));
        }
        {
            let graph = Arc::clone(&graph);
            let stop = Arc::clone(&stop);
            let timeout = self.dequeue_timeout;
            handles.push(thread::spawn(move || {
                route_ingest_worker(route_rx, graph, timeout, &stop);
            }));
        }
        {
            let stop = Arc::clone(&stop);
            let timeout = self.dequeue_timeout;
            handles.push(thread::spawn(move || {
                shipment_ingest_worker(shipment_rx, solve_tx, timeout, &stop);
            }));
        }
        {
            let graph = Arc::clone(&graph);
            let stop = Arc::clone(&stop);
            let timeout = self.dequeue_timeout;
            let vehicle_filter = self.vehicle_filter;
            handles.push(thread::spawn(move || {
                solver_worker(solve_rx, result_tx, graph, vehicle_filter, timeout, &stop);
            }));
        }
        {
            let stop = Arc::clone(&stop);
            let timeout = self.dequeue_timeout;
            let sink = self.sink;
            handles.push(thread::spawn(move || {
                result_sink_worker(result_rx, sink, timeout, &stop);
            }));
        }

        LiveSystem {
            facility_tx,
            route_tx,
            shipment_tx,
            graph,
            stop,
            handles,
        }
    }
}

/// The running worker topology: three ingest entry points, a shared graph
/// handle for inspection, and a clean shutdown path.
pub struct LiveSystem {
    facility_tx: SyncSender<FacilityRecord>,
    route_tx: SyncSender<RouteRecord>,
    shipment_tx: SyncSender<ShipmentRecord>,
    graph: SharedGraph,
    stop: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl LiveSystem {
    /// Submit a facility record, backing off while the queue is saturated.
    pub fn submit_facility(&self, record: FacilityRecord) -> Result<(), ()> {
        send_with_backpressure(&self.facility_tx, record, &self.stop)
    }

    /// Submit a route record, backing off while the queue is saturated.
    pub fn submit_route(&self, record: RouteRecord) -> Result<(), ()> {
        send_with_backpressure(&self.route_tx, record, &self.stop)
    }

    /// Submit a shipment record, backing off while the queue is saturated.
    pub fn submit_shipment(&self, record: ShipmentRecord) -> Result<(), ()> {
        send_with_backpressure(&self.shipment_tx, record, &self.stop)
    }

    /// A cloned handle to the shared graph, for read-only inspection (e.g.
    /// in tests, or a health-check endpoint).
    pub fn graph(&self) -> SharedGraph {
        Arc::clone(&self.graph)
    }

    /// Whether shutdown has been requested.
    pub fn is_stopping(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Signal every worker to stop, then block until all five have drained
    /// and exited (spec §5's "best-effort drain-then-exit shutdown").
    pub fn shutdown(self) {
        self.stop.store(true, Ordering::Relaxed);
        drop(self.facility_tx);
        drop(self.route_tx);
        drop(self.shipment_tx);
        for handle in self.handles {
            let _ = handle.join();
        }
    }
}
