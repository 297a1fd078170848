// Pin-Pool: ordnet die GPIO-Nummern aus dem Board-Profil echten Pins zu

use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig, Pin};
use sampler_core::{LineSpec, PolarizedLine};

/// Menge freier Ausgangs-Pins, aus der die Profile bedient werden
pub struct PinPool<const N: usize> {
    pins: [Option<AnyPin<'static>>; N],
}

impl<const N: usize> PinPool<N> {
    pub fn new(pins: [AnyPin<'static>; N]) -> Self {
        Self {
            pins: pins.map(Some),
        }
    }

    /// Entnimmt den Pin mit der GPIO-Nummer `gpio` (jeder Pin nur einmal)
    pub fn take(&mut self, gpio: u8) -> Option<AnyPin<'static>> {
        self.pins
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|pin| pin.number() == gpio))
            .and_then(Option::take)
    }

    /// Erstellt eine LED-Leitung laut Profil, initial ausgeschaltet
    pub fn line(&mut self, spec: &LineSpec) -> Option<PolarizedLine<Output<'static>>> {
        let pin = self.take(spec.gpio)?;
        let off = Level::from(spec.polarity.is_high(false));
        let output = Output::new(pin, off, OutputConfig::default());
        Some(PolarizedLine::new(output, spec.polarity))
    }
}
