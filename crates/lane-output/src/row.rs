//! Result-document types written by output backends (spec §6 response shape).

use lane_core::{civil_date, Instant};
use serde::Serialize;

/// Render an [`Instant`] as `"MM/DD/YY HH:MM:SS"` — the wire format external
/// consumers expect, distinct from `lane_core::format_datetime`'s
/// `"YYYY-MM-DD HH:MM"`.
pub fn format_wire_datetime(t: Instant) -> String {
    let (year, month, day) = civil_date(t);
    let tod = t.time_of_day();
    format!(
        "{:02}/{:02}/{:02} {:02}:{:02}:00",
        month,
        day,
        year.rem_euclid(100),
        tod.hour(),
        tod.minute()
    )
}

/// One stop along a reconstructed path in the response document.
///
/// `route` and `departure` are only present on segments with an outbound
/// edge — the final segment of a path has neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub code: String,
    pub arrival: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
}

/// A single computed path, with the first one or two stops duplicated at the
/// top level for consumers that only read the near end of the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathDocument {
    pub locations: Vec<Location>,
    pub first: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<Location>,
}

/// The full response for one shipment query (spec §6 "result document").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub waybill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest: Option<PathDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimate: Option<PathDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub pdd: String,
}
