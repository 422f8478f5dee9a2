//! `lane-ingest` — decoding of facility/route/shipment records and
//! composite-route expansion into graph edges (spec §6).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|-------------------------------------------------------------|
//! | [`records`] | Wire-format structs, one per external record shape          |
//! | [`shipment`]| `ShipmentRequest`, `SubItem` — the decoded query side        |
//! | [`decode`]  | `decode_facility`, `expand_route`, `custody_edges`, `decode_shipment` |
//! | [`loader`]  | JSONL file/reader loaders                                    |
//! | [`error`]   | `IngestError`, `IngestResult<T>`                             |
//!
//! Every decode function drops malformed input with a logged warning rather
//! than failing the whole batch (spec §7's InvalidFormat class never
//! propagates past this crate).

pub mod decode;
pub mod error;
pub mod loader;
pub mod records;
pub mod shipment;

#[cfg(test)]
mod tests;

pub use decode::{custody_edges, decode_facility, decode_shipment, expand_route, DecodedFacility};
pub use error::{IngestError, IngestResult};
pub use loader::{
    load_facilities_file, load_facilities_reader, load_routes_file, load_routes_reader,
    load_shipments_file, load_shipments_reader,
};
pub use records::{
    FacilityAttributes, FacilityRecord, HaltRecord, ItemRecord, RouteRecord, ShipmentRecord,
};
pub use shipment::{ShipmentRequest, SubItem};
