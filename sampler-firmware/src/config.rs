// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use defmt::{info, warn};
use rgb::RGB8;
use sampler_core::board::DEFAULT_PROFILE;
use sampler_core::{BoardProfile, ScheduleMode};

// ============================================================================
// Board-Auswahl (zur Build-Zeit aus .env bzw. Environment)
// ============================================================================

/// Name des Board-Profils, Default: esp32c6-devkitc
/// Setze SAMPLER_BOARD in .env file (siehe .env.example)
pub const BOARD_NAME: Option<&str> = option_env!("SAMPLER_BOARD");

/// Überschreibt die Taktung des Profils ("event" oder "polling")
pub const SCHEDULE_NAME: Option<&str> = option_env!("SAMPLER_SCHEDULE");

/// Löst das Board-Profil auf
///
/// Unbekannte Namen fallen mit Warnung auf das Default-Profil zurück.
pub fn board_profile() -> &'static BoardProfile {
    let Some(name) = BOARD_NAME else {
        return DEFAULT_PROFILE;
    };
    match BoardProfile::by_name(name) {
        Some(profile) => profile,
        None => {
            warn!(
                "Unknown board '{}', using '{}'",
                name, DEFAULT_PROFILE.name
            );
            DEFAULT_PROFILE
        }
    }
}

/// Taktung: SAMPLER_SCHEDULE falls gesetzt und gültig, sonst aus dem Profil
pub fn schedule_mode(profile: &BoardProfile) -> ScheduleMode {
    match SCHEDULE_NAME.map(ScheduleMode::try_from) {
        Some(Ok(mode)) => {
            info!("Schedule override: {}", mode);
            mode
        }
        Some(Err(())) => {
            warn!("Unknown schedule mode, using profile default");
            profile.schedule
        }
        None => profile.schedule,
    }
}

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// Farbe der WS2812 Status-LED im eingeschalteten Zustand
pub const STATUS_COLOR: RGB8 = RGB8 {
    r: 0,
    g: 0,
    b: LED_BRIGHTNESS,
};

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Sensor Konfiguration
// ============================================================================

/// GPIO-Pin der DHT-Datenleitung (Pull-up 10K nach 3.3V)
pub const DHT_GPIO_PIN: u8 = 21;

/// GPIO-Pins für den BH1750 (I2C0)
pub const I2C_SDA_GPIO_PIN: u8 = 6;
pub const I2C_SCL_GPIO_PIN: u8 = 7;

/// I2C Frequenz in kHz (Standard-Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// ADDR-Pin des BH1750: false = GND (0x23), true = VCC (0x5C)
pub const BH1750_ADDRESS_PIN_HIGH: bool = false;

// ============================================================================
// Reset-Taster
// ============================================================================

/// BOOT-Taster des Devkits, active low mit Pull-up
pub const RESET_BUTTON_GPIO_PIN: u8 = 9;
