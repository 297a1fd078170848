//! Polling-Taktung: blockierendes Warten in der Schleife
//!
//! Gegenstück zur ereignisgetriebenen Taktung der Firmware (`EventTicks`).
//! Die Schlafzeit wird an der Uhr gemessen, damit Sensor-Lesen und die
//! verzögerte Aktion die Periode nicht verlängern.

use embedded_hal::delay::DelayNs;

use crate::logic::polling_sleep_ms;
use crate::traits::{TickSource, Uptime};

pub struct PollingTicks<D, U> {
    delay: D,
    clock: U,
    period_ms: u32,
    /// Zeitpunkt des letzten Takts, `None` vor dem ersten
    last_tick_ms: Option<u64>,
}

impl<D: DelayNs, U: Uptime> PollingTicks<D, U> {
    pub fn new(delay: D, clock: U, period_ms: u32) -> Self {
        Self {
            delay,
            clock,
            period_ms,
            last_tick_ms: None,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl<D: DelayNs, U: Uptime> TickSource for PollingTicks<D, U> {
    async fn next_tick(&mut self) {
        let spent_ms = match self.last_tick_ms {
            Some(last) => {
                let elapsed = self.clock.now_ms().saturating_sub(last);
                u32::try_from(elapsed).unwrap_or(u32::MAX)
            }
            None => 0,
        };
        // Bei Überlauf (Zyklus länger als Periode) sofort weiter
        self.delay.delay_ms(polling_sleep_ms(self.period_ms, spent_ms));
        self.last_tick_ms = Some(self.clock.now_ms());
    }

    async fn after(&mut self, delay_ms: u32) {
        self.delay.delay_ms(delay_ms);
    }
}
