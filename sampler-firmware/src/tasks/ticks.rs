// Taktung des Samplers: Ticker (Event) oder blockierendes Delay (Polling)
use embassy_time::{Duration, Instant, Ticker, Timer};
use esp_hal::delay::Delay;
use sampler_core::{PollingTicks, ScheduleMode, TickSource, Uptime};

/// Uhr der Polling-Taktung (embassy Zeitbasis)
pub struct EmbassyUptime;

impl Uptime for EmbassyUptime {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Ereignisgetriebene Taktung über den embassy Ticker
///
/// Der Ticker hält die Periode unabhängig von der Laufzeit eines Zyklus.
pub struct EventTicks {
    ticker: Ticker,
}

impl EventTicks {
    pub fn new(period_ms: u32) -> Self {
        Self {
            ticker: Ticker::every(Duration::from_millis(u64::from(period_ms))),
        }
    }
}

impl TickSource for EventTicks {
    async fn next_tick(&mut self) {
        self.ticker.next().await;
    }

    async fn after(&mut self, delay_ms: u32) {
        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(u64::from(delay_ms))).await;
    }
}

/// Konkrete Taktung für den Sampler-Task (Tasks können nicht generisch sein)
pub enum Ticks {
    Event(EventTicks),
    Polling(PollingTicks<Delay, EmbassyUptime>),
}

impl Ticks {
    pub fn new(mode: ScheduleMode, period_ms: u32) -> Self {
        match mode {
            ScheduleMode::Event => Ticks::Event(EventTicks::new(period_ms)),
            ScheduleMode::Polling => {
                Ticks::Polling(PollingTicks::new(Delay::new(), EmbassyUptime, period_ms))
            }
        }
    }
}

impl TickSource for Ticks {
    async fn next_tick(&mut self) {
        match self {
            Ticks::Event(ticks) => ticks.next_tick().await,
            Ticks::Polling(ticks) => ticks.next_tick().await,
        }
    }

    async fn after(&mut self, delay_ms: u32) {
        match self {
            Ticks::Event(ticks) => ticks.after(delay_ms).await,
            Ticks::Polling(ticks) => ticks.after(delay_ms).await,
        }
    }
}
