//! Unit tests for lane-ingest.

use lane_core::{parse_datetime, Duration, Instant, Movement, Process, TimeOfDay};
use lane_graph::{Facility, Graph};

use crate::decode::{custody_edges, decode_facility, decode_shipment, expand_route};
use crate::records::{FacilityAttributes, FacilityRecord, HaltRecord, ItemRecord, RouteRecord, ShipmentRecord};

// ── decode_facility ───────────────────────────────────────────────────────────

#[cfg(test)]
mod facility {
    use super::*;

    fn record(active: bool, attrs: Option<FacilityAttributes>) -> FacilityRecord {
        FacilityRecord {
            facility_code: "FAC1".into(),
            name: "Facility One".into(),
            property_id: Some("PROP1".into()),
            active,
            facility_attributes: attrs,
        }
    }

    #[test]
    fn inactive_is_dropped() {
        assert!(decode_facility(&record(false, None)).is_none());
    }

    #[test]
    fn defaults_when_attributes_absent() {
        let decoded = decode_facility(&record(true, None)).unwrap();
        assert_eq!(decoded.facility.cutoff, TimeOfDay(540)); // 09:00
        assert_eq!(decoded.facility.latency(Movement::Linehaul, Process::Outbound), Duration::ZERO);
        assert_eq!(decoded.property_id.as_deref(), Some("PROP1"));
    }

    #[test]
    fn parses_cutoff_and_outbound_latency() {
        let attrs = FacilityAttributes {
            center_arrival_cutoff: Some("09:30".into()),
            outbound_processing_time: Some("00:15".into()),
        };
        let decoded = decode_facility(&record(true, Some(attrs))).unwrap();
        assert_eq!(decoded.facility.cutoff, TimeOfDay(570));
        assert_eq!(
            decoded.facility.latency(Movement::Linehaul, Process::Outbound),
            Duration(15)
        );
        // Outbound processing time maps only to (Linehaul, Outbound), never Carting.
        assert_eq!(decoded.facility.latency(Movement::Carting, Process::Outbound), Duration::ZERO);
    }

    #[test]
    fn malformed_cutoff_falls_back_to_default() {
        let attrs = FacilityAttributes {
            center_arrival_cutoff: Some("not-a-time".into()),
            outbound_processing_time: None,
        };
        let decoded = decode_facility(&record(true, Some(attrs))).unwrap();
        assert_eq!(decoded.facility.cutoff, TimeOfDay(540));
    }
}

// ── expand_route ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_expansion {
    use super::*;

    fn halt(code: &str, rel_eta_ss: i64, rel_etd_ss: i64) -> HaltRecord {
        HaltRecord {
            center_code: code.into(),
            rel_eta_ss,
            rel_etd_ss,
        }
    }

    fn three_node_graph() -> Graph {
        let mut graph = Graph::new();
        graph.upsert_facility(Facility::new("A", "Alpha", TimeOfDay(540)));
        graph.upsert_facility(Facility::new("B", "Bravo", TimeOfDay(540)));
        graph.upsert_facility(Facility::new("C", "Charlie", TimeOfDay(540)));
        graph
    }

    fn abc_route() -> RouteRecord {
        RouteRecord {
            route_schedule_uuid: "uuid".into(),
            name: "ABC Linehaul".into(),
            route_type: "linehaul".into(),
            reporting_time_ss: 8 * 3600, // 08:00
            days_of_week: vec![1],       // Monday
            halt_centers: vec![
                halt("A", 0, 0),
                halt("B", 600, 610),
                halt("C", 1200, 1200),
            ],
        }
    }

    #[test]
    fn expands_three_halts_into_three_edges() {
        let graph = three_node_graph();
        let edges = expand_route(&graph, &abc_route());
        assert_eq!(edges.len(), 3);

        let ab = edges.iter().find(|(s, t, _)| s == "A" && t == "B").unwrap();
        assert_eq!(ab.2.code, "uuid.0");
        assert_eq!(ab.2.cost.departure, TimeOfDay(480));
        assert_eq!(ab.2.cost.duration, Duration(600));
        assert_eq!(ab.2.cost.loading, Duration::ZERO);
        assert_eq!(ab.2.cost.unloading, Duration(5)); // halved: (610-600)/2

        let ac = edges.iter().find(|(s, t, _)| s == "A" && t == "C").unwrap();
        assert_eq!(ac.2.code, "uuid.1");
        assert_eq!(ac.2.cost.duration, Duration(1200));
        assert_eq!(ac.2.cost.unloading, Duration::ZERO); // last halt, not halved, 1200-1200=0

        let bc = edges.iter().find(|(s, t, _)| s == "B" && t == "C").unwrap();
        assert_eq!(bc.2.code, "uuid.2");
        assert_eq!(bc.2.cost.departure, TimeOfDay(1090)); // 08:00 + 610min = 18:10
        assert_eq!(bc.2.cost.duration, Duration(590));
        assert_eq!(bc.2.cost.loading, Duration(5)); // halved: (610-600)/2, interior halt
        assert_eq!(bc.2.cost.unloading, Duration::ZERO);
    }

    #[test]
    fn drops_pairs_with_unknown_facility() {
        let graph = three_node_graph();
        let mut record = abc_route();
        record.halt_centers.push(halt("Z", 1800, 1800));
        let edges = expand_route(&graph, &record);
        // Still exactly the 3 edges among A/B/C; every pair touching Z is dropped.
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|(s, t, _)| s != "Z" && t != "Z"));
    }

    #[test]
    fn drops_non_positive_duration_pairs() {
        let graph = three_node_graph();
        let record = RouteRecord {
            route_schedule_uuid: "uuid".into(),
            name: "Bad".into(),
            route_type: "linehaul".into(),
            reporting_time_ss: 0,
            days_of_week: vec![1],
            halt_centers: vec![halt("A", 100, 100), halt("B", 50, 50)],
        };
        assert!(expand_route(&graph, &record).is_empty());
    }

    #[test]
    fn air_route_type_maps_to_air_vehicle() {
        use lane_core::Vehicle;
        let graph = three_node_graph();
        let mut record = abc_route();
        record.route_type = "air".into();
        let edges = expand_route(&graph, &record);
        assert!(edges.iter().all(|(_, _, r)| r.vehicle == Vehicle::Air));
        assert!(edges.iter().all(|(_, _, r)| r.movement == Movement::Linehaul));
    }

    #[test]
    fn carting_route_type_maps_to_surface_carting() {
        use lane_core::Vehicle;
        let graph = three_node_graph();
        let mut record = abc_route();
        record.route_type = "carting".into();
        let edges = expand_route(&graph, &record);
        assert!(edges.iter().all(|(_, _, r)| r.vehicle == Vehicle::Surface));
        assert!(edges.iter().all(|(_, _, r)| r.movement == Movement::Carting));
    }

    #[test]
    fn fewer_than_two_halts_produces_nothing() {
        let graph = three_node_graph();
        let mut record = abc_route();
        record.halt_centers.truncate(1);
        assert!(expand_route(&graph, &record).is_empty());
    }
}

// ── custody_edges ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod custody {
    use super::*;

    #[test]
    fn installs_both_directions_for_every_pair() {
        let codes = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let edges = custody_edges(&codes);
        assert_eq!(edges.len(), 6); // 3 pairs * 2 directions

        for (s, t, route) in &edges {
            assert!(route.cost.transient);
            assert_ne!(s, t);
        }

        assert!(edges.iter().any(|(s, t, _)| s == "A" && t == "B"));
        assert!(edges.iter().any(|(s, t, _)| s == "B" && t == "A"));
    }

    #[test]
    fn single_facility_produces_nothing() {
        let codes = vec!["A".to_string()];
        assert!(custody_edges(&codes).is_empty());
    }
}

// ── decode_shipment ───────────────────────────────────────────────────────────

#[cfg(test)]
mod shipment {
    use super::*;

    fn base_record() -> ShipmentRecord {
        ShipmentRecord {
            id: Some("S1".into()),
            location: Some("A".into()),
            destination: Some("C".into()),
            time: Some("2024-01-01 08:00".into()),
            ipdd_destination: Some("2024-01-02 08:00".into()),
            item: vec![ItemRecord {
                id: "i1".into(),
                cn: "B".into(),
                ipdd_destination: Some("2024-01-01 20:00".into()),
            }],
        }
    }

    #[test]
    fn decodes_full_record() {
        let request = decode_shipment(&base_record()).unwrap();
        assert_eq!(request.id, "S1");
        assert_eq!(request.source_code, "A");
        assert_eq!(request.target_code, "C");
        assert_eq!(request.origin_arrival, parse_datetime("2024-01-01 08:00").unwrap());
        assert_eq!(request.deadline, parse_datetime("2024-01-02 08:00").unwrap());
        assert_eq!(request.sub_items.len(), 1);
        assert_eq!(request.sub_items[0].target_code, "B");
        assert_eq!(
            request.sub_items[0].deadline,
            parse_datetime("2024-01-01 20:00").unwrap()
        );
    }

    #[test]
    fn missing_id_is_dropped() {
        let mut record = base_record();
        record.id = None;
        assert!(decode_shipment(&record).is_none());
    }

    #[test]
    fn missing_time_is_dropped() {
        let mut record = base_record();
        record.time = None;
        assert!(decode_shipment(&record).is_none());
    }

    #[test]
    fn missing_overall_deadline_defaults_to_no_deadline() {
        let mut record = base_record();
        record.ipdd_destination = None;
        let request = decode_shipment(&record).unwrap();
        assert_eq!(request.deadline, Instant::MAX);
    }

    #[test]
    fn item_without_deadline_is_excluded_from_sub_items() {
        let mut record = base_record();
        record.item.push(ItemRecord {
            id: "i2".into(),
            cn: "D".into(),
            ipdd_destination: None,
        });
        let request = decode_shipment(&record).unwrap();
        assert_eq!(request.sub_items.len(), 1);
    }
}

// ── JSONL loader ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::loader::{load_facilities_reader, load_shipments_reader};

    const FACILITIES: &str = "\
{\"facility_code\":\"A\",\"name\":\"Alpha\",\"active\":true}
{\"facility_code\":\"B\",\"name\":\"Bravo\",\"active\":false}
not valid json at all
{\"facility_code\":\"C\",\"name\":\"Charlie\",\"active\":true}
";

    #[test]
    fn skips_malformed_lines() {
        let records = load_facilities_reader(Cursor::new(FACILITIES)).unwrap();
        assert_eq!(records.len(), 3); // the malformed line is dropped, not fatal
    }

    #[test]
    fn blank_lines_are_ignored() {
        let data = "{\"facility_code\":\"A\",\"name\":\"Alpha\",\"active\":true}\n\n\n";
        let records = load_facilities_reader(Cursor::new(data)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn loads_shipment_records_with_items() {
        let data = "{\"id\":\"S1\",\"location\":\"A\",\"destination\":\"C\",\"time\":\"2024-01-01 08:00\",\"item\":[{\"id\":\"i1\",\"cn\":\"B\"}]}\n";
        let records = load_shipments_reader(Cursor::new(data)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item.len(), 1);
        assert_eq!(records[0].item[0].cn, "B");
    }
}
