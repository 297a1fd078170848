//! Core Types für den Sensor-Sampler
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Messwert des Temperatur/Feuchte-Sensors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    /// Temperatur in °C
    pub temperature: f32,
    /// Relative Luftfeuchte in %
    pub humidity: f32,
}

/// Unterstützte DHT-Sensormodelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DhtModel {
    Dht11,
    Dht22,
}

impl DhtModel {
    /// Minimaler Abstand zwischen zwei Messungen laut Datenblatt
    pub const fn minimum_sampling_period_ms(self) -> u32 {
        match self {
            DhtModel::Dht11 => 1000,
            DhtModel::Dht22 => 2000,
        }
    }

    /// Dauer des Start-Signals (Leitung low) vor jeder Messung
    pub const fn start_signal_ms(self) -> u32 {
        match self {
            DhtModel::Dht11 => 18,
            DhtModel::Dht22 => 2,
        }
    }
}

/// Polarität einer LED-Leitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// LED leuchtet bei High-Pegel (Anode am GPIO)
    ActiveHigh,
    /// LED leuchtet bei Low-Pegel (Kathode am GPIO)
    ActiveLow,
}

impl Polarity {
    /// Liefert `true` wenn die Leitung für den Zustand `on` High sein muss
    pub const fn is_high(self, on: bool) -> bool {
        match self {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        }
    }
}

/// Art, wie der Sampler getaktet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// Zeitgeber-getrieben (Ticker weckt den Task)
    Event,
    /// Blockierendes Warten in der Schleife
    Polling,
}

impl core::convert::TryFrom<&str> for ScheduleMode {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "event" => Ok(Self::Event),
            "polling" => Ok(Self::Polling),
            _ => Err(()),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ClimateReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ClimateReading {{ temperature: {=f32} C, humidity: {=f32} % }}",
            self.temperature,
            self.humidity
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DhtModel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DhtModel::Dht11 => defmt::write!(fmt, "DHT11"),
            DhtModel::Dht22 => defmt::write!(fmt, "DHT22"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Polarity {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Polarity::ActiveHigh => defmt::write!(fmt, "active-high"),
            Polarity::ActiveLow => defmt::write!(fmt, "active-low"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScheduleMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ScheduleMode::Event => defmt::write!(fmt, "event"),
            ScheduleMode::Polling => defmt::write!(fmt, "polling"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_active_high() {
        assert!(Polarity::ActiveHigh.is_high(true));
        assert!(!Polarity::ActiveHigh.is_high(false));
    }

    #[test]
    fn test_polarity_active_low() {
        assert!(!Polarity::ActiveLow.is_high(true));
        assert!(Polarity::ActiveLow.is_high(false));
    }

    #[test]
    fn test_schedule_mode_try_from() {
        assert_eq!(ScheduleMode::try_from("event"), Ok(ScheduleMode::Event));
        assert_eq!(ScheduleMode::try_from("polling"), Ok(ScheduleMode::Polling));
        assert_eq!(ScheduleMode::try_from("Event"), Err(()));
    }

    #[test]
    fn test_dht_model_periods() {
        assert_eq!(DhtModel::Dht11.minimum_sampling_period_ms(), 1000);
        assert_eq!(DhtModel::Dht22.minimum_sampling_period_ms(), 2000);
    }
}
