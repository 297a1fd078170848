//! Sampler Core - Platform-agnostic Logic, Traits und Sensor-Treiber
//!
//! Diese Crate enthält KEINE ESP32-Dependencies.
//! Hardware wird nur über Traits angesprochen (eigene Traits + embedded-hal 1.0),
//! dadurch läuft die komplette Sampler-Logik auch in Host-Tests.

#![no_std]

pub mod board;
pub mod counter;
pub mod dht;
pub mod led;
pub mod light;
pub mod logic;
pub mod report;
pub mod sampler;
pub mod ticks;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use board::{BoardProfile, LineSpec, StatusSpec};
pub use counter::{CounterMark, ResetTrigger, SampleCounter};
pub use dht::Dht;
pub use led::{LedSet, PolarizedLine, SmartStatus};
pub use light::{LightMeter, Resolution};
pub use logic::{polling_sleep_ms, rotation_index, sampling_period_ms};
pub use sampler::{CycleOutcome, DEFERRED_OFF_MS, Sampler};
pub use ticks::PollingTicks;
pub use traits::{
    ClimateError, ClimateSensor, Console, LedError, LightSensor, SmartLedWriter, StatusIndicator,
    TickSource, Uptime,
};
pub use types::{ClimateReading, DhtModel, Polarity, ScheduleMode};
