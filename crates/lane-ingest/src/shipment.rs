//! The shipment request: the query side of the external interface.

use lane_core::Instant;

/// One sub-item's own delivery deadline, tracked separately from the
/// shipment's overall deadline (spec §4.6 step 3a).
#[derive(Debug, Clone)]
pub struct SubItem {
    pub target_code: String,
    pub deadline: Instant,
}

/// `(id, source_code, target_code, origin_arrival, deadline, sub_items)`
/// from spec §3.
#[derive(Debug, Clone)]
pub struct ShipmentRequest {
    pub id: String,
    pub source_code: String,
    pub target_code: String,
    pub origin_arrival: Instant,
    pub deadline: Instant,
    pub sub_items: Vec<SubItem>,
}
