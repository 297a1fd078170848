//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die schmalen Schnittstellen zu den Kollaborateuren
//! des Samplers (Sensoren, Status-LED, Konsole, Zeitgeber).

use rgb::RGB8;

use crate::types::ClimateReading;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Pin oder SmartLED hat den Schreibzugriff abgelehnt
    WriteFailed,
    /// Index liegt außerhalb des LED-Sets
    NoSuchLine,
    /// LED-Set ohne Leitungen
    NoLines,
    /// Mehr Leitungen als `led::MAX_LEDS`
    TooManyLines,
}

/// Fehler beim Lesen des Temperatur/Feuchte-Sensors
///
/// Das ist der einzige Fehler, der das Verhalten des Samplers ändert:
/// die Temperatur-Zeile entfällt für diesen Zyklus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClimateError {
    /// Sensor hat nicht rechtzeitig geantwortet
    Timeout,
    /// Prüfsumme des Datenrahmens stimmt nicht
    Checksum,
    /// Datenleitung konnte nicht gelesen/geschrieben werden
    Pin,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Eingebaute Status-LED (GPIO-Leitung oder SmartLED)
pub trait StatusIndicator {
    fn set_active(&mut self, on: bool) -> Result<(), LedError>;
}

/// Temperatur/Feuchte-Sensor (DHT11/DHT22)
pub trait ClimateSensor {
    /// Liest Temperatur (°C) und Luftfeuchte (%)
    fn read(&mut self) -> Result<ClimateReading, ClimateError>;

    /// Kleinster erlaubter Abstand zwischen zwei Messungen in Millisekunden
    fn minimum_sampling_period_ms(&self) -> u32;
}

/// Umgebungslicht-Sensor
///
/// Bewusst ohne Fehlerzweig: der Sampler gibt jeden Wert aus.
pub trait LightSensor {
    fn read_luminance(&mut self) -> f32;
}

/// Textausgabe für Messzeilen (serielle Konsole)
pub trait Console {
    /// Gibt eine vollständige Zeile (ohne Zeilenumbruch) aus
    fn emit(&mut self, line: &str);
}

/// Zeitgeber für den Sampler
///
/// # Implementierungen
/// - **Event:** `EventTicks` (embassy Ticker, Firmware)
/// - **Polling:** `PollingTicks` (blockierendes Delay in der Schleife)
#[allow(async_fn_in_trait)]
pub trait TickSource {
    /// Wartet bis zum nächsten Zyklus
    async fn next_tick(&mut self);

    /// Wartet `delay_ms` bis zur verzögerten Aktion im laufenden Zyklus
    async fn after(&mut self, delay_ms: u32);
}

/// Monotone Uhr seit Systemstart
pub trait Uptime {
    fn now_ms(&self) -> u64;
}
