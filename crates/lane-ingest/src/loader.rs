//! JSONL loaders for facility, route, and shipment records (spec §6).
//!
//! Follows the teacher's reader/file split: a thin file-opening wrapper
//! around a function generic over `Read`, so tests can feed an in-memory
//! cursor instead of a real file. Malformed lines are dropped with a
//! `warn!` and skipped, matching §7's InvalidFormat policy — one bad line
//! never fails the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::IngestResult;
use crate::records::{FacilityRecord, RouteRecord, ShipmentRecord};

pub fn load_facilities_file(path: impl AsRef<Path>) -> IngestResult<Vec<FacilityRecord>> {
    load_facilities_reader(File::open(path)?)
}

pub fn load_facilities_reader<R: Read>(reader: R) -> IngestResult<Vec<FacilityRecord>> {
    load_jsonl(reader)
}

pub fn load_routes_file(path: impl AsRef<Path>) -> IngestResult<Vec<RouteRecord>> {
    load_routes_reader(File::open(path)?)
}

pub fn load_routes_reader<R: Read>(reader: R) -> IngestResult<Vec<RouteRecord>> {
    load_jsonl(reader)
}

pub fn load_shipments_file(path: impl AsRef<Path>) -> IngestResult<Vec<ShipmentRecord>> {
    load_shipments_reader(File::open(path)?)
}

pub fn load_shipments_reader<R: Read>(reader: R) -> IngestResult<Vec<ShipmentRecord>> {
    load_jsonl(reader)
}

fn load_jsonl<T, R>(reader: R) -> IngestResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let buf = BufReader::new(reader);
    let mut out = Vec::new();
    for (lineno, line) in buf.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(record) => out.push(record),
            Err(e) => log::warn!("line {}: invalid record, skipped ({e})", lineno + 1),
        }
    }
    Ok(out)
}
