//! `lane-core` — foundational types for the lane shipment routing engine.
//!
//! This crate is a dependency of every other `lane-*` crate. It intentionally
//! has no `lane-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|----------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `EdgeId`                                       |
//! | [`time`]      | `Instant`, `TimeOfDay`, `Weekday`, `Duration`, `WorkingDaysMask` |
//! | [`transport`] | `Vehicle`, `Movement`, `Process`                          |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, NodeId};
pub use time::{
    civil_date, format_datetime, parse_date, parse_datetime, parse_time, Duration, Instant,
    InvalidFormat, TimeOfDay, Weekday, WorkingDaysMask, EPOCH_WEEKDAY,
};
pub use transport::{Movement, Process, Vehicle};
