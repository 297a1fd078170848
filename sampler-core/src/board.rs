//! Board-Profile: Hardware-Varianten als Daten
//!
//! Ein Profil beschreibt LED-Leitungen (Anzahl, GPIO, Polarität),
//! die Status-LED, das DHT-Modell und die Taktung. Die Sampler-Logik
//! bekommt das Profil nur als Parameter, es gibt keine Code-Verzweigungen
//! pro Board.

use crate::types::{DhtModel, Polarity, ScheduleMode};

/// Eine Ausgangsleitung im Profil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    pub label: &'static str,
    pub gpio: u8,
    pub polarity: Polarity,
}

/// Art der eingebauten Status-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSpec {
    /// WS2812 auf dem Devkit (GPIO8 über RMT)
    SmartLed,
    /// Diskrete LED an einer GPIO-Leitung
    Line(LineSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardProfile {
    pub name: &'static str,
    pub leds: &'static [LineSpec],
    pub status: StatusSpec,
    pub dht_model: DhtModel,
    pub schedule: ScheduleMode,
}

/// ESP32-C6-DevKitC-1: rote und grüne LED, RGB-LED als Status
pub static ESP32C6_DEVKITC: BoardProfile = BoardProfile {
    name: "esp32c6-devkitc",
    leds: &[
        LineSpec {
            label: "red",
            gpio: 2,
            polarity: Polarity::ActiveHigh,
        },
        LineSpec {
            label: "green",
            gpio: 3,
            polarity: Polarity::ActiveHigh,
        },
    ],
    status: StatusSpec::SmartLed,
    dht_model: DhtModel::Dht11,
    schedule: ScheduleMode::Event,
};

/// Ampel-Aufbau: rot/gelb/grün, Status-LED active-low, Polling-Betrieb
pub static ESP32C6_TRAFFIC_LIGHT: BoardProfile = BoardProfile {
    name: "esp32c6-traffic-light",
    leds: &[
        LineSpec {
            label: "red",
            gpio: 2,
            polarity: Polarity::ActiveHigh,
        },
        LineSpec {
            label: "yellow",
            gpio: 10,
            polarity: Polarity::ActiveHigh,
        },
        LineSpec {
            label: "green",
            gpio: 3,
            polarity: Polarity::ActiveHigh,
        },
    ],
    status: StatusSpec::Line(LineSpec {
        label: "status",
        gpio: 11,
        polarity: Polarity::ActiveLow,
    }),
    dht_model: DhtModel::Dht22,
    schedule: ScheduleMode::Polling,
};

pub static PROFILES: [&BoardProfile; 2] = [&ESP32C6_DEVKITC, &ESP32C6_TRAFFIC_LIGHT];

pub static DEFAULT_PROFILE: &BoardProfile = &ESP32C6_DEVKITC;

impl BoardProfile {
    /// Sucht ein Profil über seinen Namen
    pub fn by_name(name: &str) -> Option<&'static BoardProfile> {
        PROFILES.iter().copied().find(|profile| profile.name == name)
    }

    pub fn led_count(&self) -> usize {
        self.leds.len()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BoardProfile {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "BoardProfile {{ name: {}, leds: {}, dht: {}, schedule: {} }}",
            self.name,
            self.leds.len(),
            self.dht_model,
            self.schedule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let profile = BoardProfile::by_name("esp32c6-traffic-light").unwrap();
        assert_eq!(profile.led_count(), 3);
        assert_eq!(profile.schedule, ScheduleMode::Polling);
        assert!(BoardProfile::by_name("esp8266").is_none());
    }

    #[test]
    fn test_profiles_have_two_or_three_leds() {
        for profile in PROFILES {
            assert!((2..=3).contains(&profile.led_count()), "{}", profile.name);
        }
    }

    #[test]
    fn test_profile_gpios_are_unique() {
        for profile in PROFILES {
            for (i, a) in profile.leds.iter().enumerate() {
                for b in &profile.leds[i + 1..] {
                    assert_ne!(a.gpio, b.gpio, "{}", profile.name);
                }
                if let StatusSpec::Line(status) = profile.status {
                    assert_ne!(a.gpio, status.gpio, "{}", profile.name);
                }
            }
        }
    }
}
