//! `lane` — loads a facility/route graph and a batch of shipment requests
//! from JSONL files, runs them through the live worker topology, and writes
//! result documents to an output sink.
//!
//! Process lifecycle, CLI parsing, and configuration loading are explicitly
//! out of scope for the core engine (spec §1) — this binary is exactly that
//! external collaborator.

mod cli;
mod error;
mod settings;


use std::time::Duration as WallDuration;

use clap::Parser;

use lane_graph::Graph;
use lane_ingest::{load_facilities_file, load_routes_file, load_shipments_file};
use lane_live::LiveSystemBuilder;
use lane_output::{JsonlSink, LogSink, OutputSink};

use cli::Cli;
use error::CliResult;
use settings::Settings;

fn main() {
    env_logger::init();

    let args = Cli::parse();
    match run(args) {
        Ok(()) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: Cli) -> CliResult<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(capacity) = args.queue_capacity {
        settings.queue_capacity = capacity;
    }
    if let Some(ms) = args.dequeue_timeout_ms {
        settings.dequeue_timeout_ms = ms;
    }

    log::info!(
        "starting: queue_capacity={} dequeue_timeout_ms={} vehicle_filter={:?}",
        settings.queue_capacity,
        settings.dequeue_timeout_ms,
        settings.vehicle_filter
    );

    match &args.output {
        Some(path) => run_with_sink(&args, &settings, JsonlSink::new(path)?),
        None => run_with_sink(&args, &settings, LogSink),
    }
}

fn run_with_sink<S: OutputSink + Send + 'static>(
    args: &Cli,
    settings: &Settings,
    sink: S,
) -> CliResult<()> {
    let facilities = load_facilities_file(&args.facilities)?;
    let routes = load_routes_file(&args.routes)?;
    let shipments = load_shipments_file(&args.shipments)?;
    log::info!(
        "loaded {} facilities, {} routes, {} shipments",
        facilities.len(),
        routes.len(),
        shipments.len()
    );

    let system = LiveSystemBuilder::new(Graph::new(), sink)
        .queue_capacity(settings.queue_capacity)
        .dequeue_timeout(WallDuration::from_millis(settings.dequeue_timeout_ms))
        .vehicle_filter(settings.vehicle_filter.to_filter())
        .build();

    for record in facilities {
        let _ = system.submit_facility(record);
    }
    for record in routes {
        let _ = system.submit_route(record);
    }
    for record in shipments {
        let _ = system.submit_shipment(record);
    }

    // Give the workers a chance to drain the queues before the best-effort
    // shutdown below forces a drain-then-exit (spec §5).
    std::thread::sleep(WallDuration::from_millis(
        settings.dequeue_timeout_ms.saturating_mul(3),
    ));
    system.shutdown();

    log::info!("shutdown complete");
    Ok(())
}
