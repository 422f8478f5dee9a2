//! Layered settings: a TOML file, `LANE_`-prefixed environment overrides,
//! and finally CLI flags — the same layering `bambam`'s `config::Config`
//! wiring uses, narrowed to the knobs this binary actually exposes (queue
//! capacities, dequeue timeout, vehicle filter, output sink kind, log
//! level).

use serde::Deserialize;

use crate::error::CliResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleFilterSetting {
    Surface,
    Air,
    Unfiltered,
}

impl VehicleFilterSetting {
    pub fn to_filter(&self) -> Option<lane_core::Vehicle> {
        match self {
            VehicleFilterSetting::Surface => Some(lane_core::Vehicle::Surface),
            VehicleFilterSetting::Air => Some(lane_core::Vehicle::Air),
            VehicleFilterSetting::Unfiltered => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default = "default_dequeue_timeout_ms")]
    pub dequeue_timeout_ms: u64,
    #[serde(default = "default_vehicle_filter")]
    pub vehicle_filter: VehicleFilterSetting,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_queue_capacity() -> usize {
    lane_live::DEFAULT_QUEUE_CAPACITY
}

fn default_dequeue_timeout_ms() -> u64 {
    lane_live::DEFAULT_DEQUEUE_TIMEOUT.as_millis() as u64
}

fn default_vehicle_filter() -> VehicleFilterSetting {
    VehicleFilterSetting::Surface
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            queue_capacity: default_queue_capacity(),
            dequeue_timeout_ms: default_dequeue_timeout_ms(),
            vehicle_filter: default_vehicle_filter(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load from an optional TOML file, then environment variables prefixed
    /// `LANE_` (e.g. `LANE_QUEUE_CAPACITY=2048`).
    pub fn load(config_file: Option<&std::path::Path>) -> CliResult<Settings> {
        let mut builder = config::Config::builder()
            .set_default("queue_capacity", default_queue_capacity() as i64)?
            .set_default("dequeue_timeout_ms", default_dequeue_timeout_ms() as i64)?
            .set_default("vehicle_filter", "surface")?
            .set_default("log_level", default_log_level())?;

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        builder = builder.add_source(config::Environment::with_prefix("LANE").separator("_"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
