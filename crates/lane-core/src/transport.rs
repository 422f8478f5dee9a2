//! Vehicle/movement/process enums shared across the graph and ingest crates.
//!
//! All variants are always compiled in (no per-variant feature flags).

/// The kind of conveyance a route runs on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vehicle {
    Surface,
    Air,
}

impl Vehicle {
    pub fn as_str(self) -> &'static str {
        match self {
            Vehicle::Surface => "surface",
            Vehicle::Air => "air",
        }
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of movement a route performs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    Carting,
    Linehaul,
}

impl Movement {
    pub fn as_str(self) -> &'static str {
        match self {
            Movement::Carting => "carting",
            Movement::Linehaul => "linehaul",
        }
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A facility-local processing stage. Used as half of the `(Movement,
/// Process)` key into a facility's processing-latency table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Process {
    Inbound,
    Outbound,
    Custody,
}
