// Task-Modul: Enthält den Embassy Sampler-Task und seine Taktung
//
// Der Reset-Taster läuft nicht als Task, sondern als GPIO-Interrupt
// (siehe hal::button). Beide teilen sich nur den SAMPLE_COUNTER.

pub mod sampler;
pub mod ticks;

// Re-export für einfachen Import
pub use sampler::{FirmwareSampler, sampler_task};
pub use ticks::{EmbassyUptime, EventTicks, Ticks};
