// Library-Root: Wiederverwendbare Module der Firmware
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von sampler-core
pub use sampler_core::{ResetTrigger, SampleCounter};

/// Zyklus-Zähler, geteilt zwischen Sampler-Task und Taster-Interrupt
///
/// Atomar, daher ohne Mutex aus beiden Kontexten nutzbar.
pub static SAMPLE_COUNTER: SampleCounter = SampleCounter::new();
