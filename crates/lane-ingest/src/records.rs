//! Wire-format records as described in spec §6. These mirror the external
//! ingest pipeline's decoded JSON exactly; `decode` maps them onto the
//! domain types in `lane-graph`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FacilityAttributes {
    #[serde(rename = "CenterArrivalCutoff")]
    pub center_arrival_cutoff: Option<String>,
    #[serde(rename = "OutboundProcessingTime")]
    pub outbound_processing_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacilityRecord {
    pub facility_code: String,
    pub name: String,
    #[serde(default)]
    pub property_id: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub facility_attributes: Option<FacilityAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HaltRecord {
    pub center_code: String,
    pub rel_eta_ss: i64,
    pub rel_etd_ss: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    pub route_schedule_uuid: String,
    pub name: String,
    pub route_type: String,
    pub reporting_time_ss: i64,
    pub days_of_week: Vec<u8>,
    pub halt_centers: Vec<HaltRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    /// The sub-item's own target facility code (not a free-form label —
    /// confirmed against the external load-attribute record, whose second
    /// positional field is its destination index).
    pub cn: String,
    #[serde(default)]
    pub ipdd_destination: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub ipdd_destination: Option<String>,
    #[serde(default)]
    pub item: Vec<ItemRecord>,
}
