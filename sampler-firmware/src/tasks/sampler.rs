// Sampler Task - Messzyklus mit rotierender LED
use defmt::{debug, info, warn};
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;
use esp_hal::i2c::master::I2c;
use sampler_core::{CycleOutcome, LightMeter, Sampler};

use super::ticks::Ticks;
use crate::hal::{GuardedDht, SerialConsole, StatusLed};

/// Konkreter Sampler-Typ der Firmware
pub type FirmwareSampler = Sampler<
    'static,
    Output<'static>,
    StatusLed,
    GuardedDht,
    LightMeter<I2c<'static, Blocking>, Delay>,
>;

/// Sampler Task - Embassy Task für den periodischen Messzyklus
///
/// Die komplette Zyklus-Logik steckt in `Sampler::run_cycle()` (sampler-core)
/// und ist dort mit Mocks getestet. Der Task loggt nur das Ergebnis.
///
/// # Parameter
/// - `sampler`: Fertig konfigurierter Sampler (LEDs, Status-LED, Sensoren)
/// - `ticks`: Taktung laut Board-Profil (Event oder Polling)
#[embassy_executor::task]
pub async fn sampler_task(mut sampler: FirmwareSampler, mut ticks: Ticks) {
    let mut console = SerialConsole;

    info!(
        "Sampler: {} LEDs, period {} ms",
        sampler.led_count(),
        sampler.period_ms()
    );

    loop {
        let outcome = sampler.run_cycle(&mut ticks, &mut console).await;
        log_outcome(&outcome);
    }
}

fn log_outcome(outcome: &CycleOutcome) {
    match outcome.climate {
        Ok(reading) => debug!(
            "Cycle {}: LED {}, {}, {=f32} lx",
            outcome.count, outcome.index, reading, outcome.lux
        ),
        // Keine Temperatur-Zeile in diesem Zyklus, kein Retry
        Err(e) => debug!(
            "Cycle {}: LED {}, DHT read failed ({})",
            outcome.count, outcome.index, e
        ),
    }

    if let Some(fault) = outcome.led_fault {
        warn!("Cycle {}: LED write failed ({})", outcome.count, fault);
    }
}
