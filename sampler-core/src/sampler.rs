//! Periodic Sampler - Messzyklus mit rotierender LED
//!
//! Ein Zyklus:
//! 1. LED `count mod N` und Status-LED einschalten
//! 2. Temperatur/Feuchte lesen (Zeile nur bei Erfolg)
//! 3. Licht lesen (Zeile immer)
//! 4. Nach `DEFERRED_OFF_MS` beide LEDs aus, Zähler erhöhen
//!
//! Die Reihenfolge Einschalten → Messen → Ausschalten → nächstes Einschalten
//! ist durch `run_cycle` garantiert, es leuchten nie zwei LEDs gleichzeitig.

use embedded_hal::digital::OutputPin;

use crate::counter::{CounterMark, SampleCounter};
use crate::led::LedSet;
use crate::logic::{rotation_index, sampling_period_ms};
use crate::report;
use crate::traits::{
    ClimateError, ClimateSensor, Console, LedError, LightSensor, StatusIndicator, TickSource,
};
use crate::types::ClimateReading;

/// Verzögerung bis die LEDs eines Zyklus wieder ausgehen
pub const DEFERRED_OFF_MS: u32 = 100;

/// Ergebnis eines Zyklus (für Logging in der Firmware)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleOutcome {
    /// Zählerstand zu Zyklusbeginn
    pub count: u32,
    /// Index der aktiven LED
    pub index: usize,
    pub climate: Result<ClimateReading, ClimateError>,
    pub lux: f32,
    /// Erster LED-Fehler des Zyklus, der Zyklus läuft trotzdem weiter
    pub led_fault: Option<LedError>,
}

/// Offener Zyklus zwischen `begin_cycle` und `end_cycle`
#[derive(Clone, Copy)]
struct ActiveCycle {
    index: usize,
    mark: CounterMark,
}

pub struct Sampler<'a, P, S, C, L> {
    leds: LedSet<P>,
    status: S,
    climate: C,
    light: L,
    counter: &'a SampleCounter,
    active: Option<ActiveCycle>,
}

impl<'a, P, S, C, L> Sampler<'a, P, S, C, L>
where
    P: OutputPin,
    S: StatusIndicator,
    C: ClimateSensor,
    L: LightSensor,
{
    pub fn new(
        leds: LedSet<P>,
        status: S,
        climate: C,
        light: L,
        counter: &'a SampleCounter,
    ) -> Self {
        Self {
            leds,
            status,
            climate,
            light,
            counter,
            active: None,
        }
    }

    /// Periode: doppelte Mindestperiode des Klimasensors
    pub fn period_ms(&self) -> u32 {
        sampling_period_ms(self.climate.minimum_sampling_period_ms())
    }

    pub fn led_count(&self) -> usize {
        self.leds.len()
    }

    /// Index der gerade leuchtenden LED, `None` außerhalb eines Zyklus
    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|cycle| cycle.index)
    }

    /// Startmeldungen: Board-Name und Mindestperiode des Sensors
    pub fn announce<W: Console>(&self, board: &str, console: &mut W) {
        console.emit(&report::board_line(board));
        console.emit(&report::sensor_ready_line(
            self.climate.minimum_sampling_period_ms(),
        ));
    }

    /// Erste Hälfte eines Zyklus: LEDs an, Sensoren lesen, Zeilen ausgeben
    pub fn begin_cycle<W: Console>(&mut self, console: &mut W) -> CycleOutcome {
        let mut led_fault = None;

        // Ein vergessener Zyklus wird zuerst geschlossen
        if self.active.is_some() {
            led_fault = self.end_cycle().err();
        }

        let mark = self.counter.mark();
        let count = mark.count;
        let index = rotation_index(count, self.leds.len());
        self.active = Some(ActiveCycle { index, mark });

        console.emit(&report::cycle_banner(count));

        if let Err(e) = self.leds.activate(index) {
            led_fault.get_or_insert(e);
        }
        if let Err(e) = self.status.set_active(true) {
            led_fault.get_or_insert(e);
        }

        let climate = self.climate.read();
        if let Ok(reading) = &climate {
            console.emit(&report::climate_line(reading));
        }

        let lux = self.light.read_luminance();
        console.emit(&report::light_line(lux));

        CycleOutcome {
            count,
            index,
            climate,
            lux,
            led_fault,
        }
    }

    /// Verzögerte Aktion: LEDs aus, Zähler erhöhen
    ///
    /// Schaltet genau die LED aus, die `begin_cycle` eingeschaltet hat.
    /// Ohne offenen Zyklus passiert nichts.
    pub fn end_cycle(&mut self) -> Result<(), LedError> {
        let Some(cycle) = self.active.take() else {
            return Ok(());
        };

        let status = self.status.set_active(false);
        let led = self.leds.deactivate(cycle.index);
        self.counter.advance_from(cycle.mark);

        status.and(led)
    }

    /// Kompletter Zyklus: auf Takt warten, messen, verzögert ausschalten
    pub async fn run_cycle<T, W>(&mut self, ticks: &mut T, console: &mut W) -> CycleOutcome
    where
        T: TickSource,
        W: Console,
    {
        ticks.next_tick().await;
        let mut outcome = self.begin_cycle(console);
        ticks.after(DEFERRED_OFF_MS).await;
        if let Err(e) = self.end_cycle() {
            outcome.led_fault.get_or_insert(e);
        }
        outcome
    }
}
