//! LED-Indikator: Leitungen mit Polarität und rotierendes LED-Set

use embedded_hal::digital::OutputPin;
use heapless::Vec;
use rgb::RGB8;

use crate::traits::{LedError, SmartLedWriter, StatusIndicator};
use crate::types::Polarity;

/// Maximale Anzahl LEDs in einem Board-Profil
pub const MAX_LEDS: usize = 3;

/// Ausgangsleitung mit eigener Polarität
///
/// `activate`/`deactivate` setzen den Pegel passend zur Polarität,
/// es wird nie eine einheitliche Polarität für alle Leitungen angenommen.
pub struct PolarizedLine<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> PolarizedLine<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn activate(&mut self) -> Result<(), LedError> {
        self.drive(true)
    }

    pub fn deactivate(&mut self) -> Result<(), LedError> {
        self.drive(false)
    }

    fn drive(&mut self, on: bool) -> Result<(), LedError> {
        let result = if self.polarity.is_high(on) {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| LedError::WriteFailed)
    }
}

impl<P: OutputPin> StatusIndicator for PolarizedLine<P> {
    fn set_active(&mut self, on: bool) -> Result<(), LedError> {
        self.drive(on)
    }
}

/// Status-LED als SmartLED: an = konfigurierte Farbe, aus = schwarz
pub struct SmartStatus<W> {
    writer: W,
    color: RGB8,
}

impl<W: SmartLedWriter> SmartStatus<W> {
    pub fn new(writer: W, color: RGB8) -> Self {
        Self { writer, color }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: SmartLedWriter> StatusIndicator for SmartStatus<W> {
    fn set_active(&mut self, on: bool) -> Result<(), LedError> {
        let color = if on { self.color } else { RGB8::default() };
        self.writer.write(color)
    }
}

/// Feste, geordnete Menge von LED-Leitungen (2 oder 3 je nach Board)
pub struct LedSet<P> {
    lines: Vec<PolarizedLine<P>, MAX_LEDS>,
}

impl<P: OutputPin> LedSet<P> {
    /// Übernimmt die Leitungen und schaltet alle aus
    pub fn new<I>(lines: I) -> Result<Self, LedError>
    where
        I: IntoIterator<Item = PolarizedLine<P>>,
    {
        let mut set = Vec::new();
        for line in lines {
            set.push(line).map_err(|_| LedError::TooManyLines)?;
        }
        if set.is_empty() {
            return Err(LedError::NoLines);
        }

        let mut leds = Self { lines: set };
        for line in leds.lines.iter_mut() {
            line.deactivate()?;
        }
        Ok(leds)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn activate(&mut self, index: usize) -> Result<(), LedError> {
        self.lines
            .get_mut(index)
            .ok_or(LedError::NoSuchLine)?
            .activate()
    }

    pub fn deactivate(&mut self, index: usize) -> Result<(), LedError> {
        self.lines
            .get_mut(index)
            .ok_or(LedError::NoSuchLine)?
            .deactivate()
    }
}
