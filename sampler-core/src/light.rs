//! Lichtsensor BH1750 (I2C) über den `bh1750` Treiber
//!
//! Der Sampler kennt für Licht keinen Fehlerpfad: Fehler werden auf
//! Sentinel-Werte abgebildet und wie jeder andere Messwert ausgegeben.

use bh1750::BH1750;
pub use bh1750::{BH1750Error, Resolution};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::traits::LightSensor;

/// Rückgabewert wenn das Auslesen über den Bus fehlschlägt
pub const LUX_READ_FAILED: f32 = -1.0;
/// Rückgabewert wenn `begin()` nie erfolgreich war
pub const LUX_UNCONFIGURED: f32 = -2.0;

/// BH1750 im kontinuierlichen Messmodus
pub struct LightMeter<I, D> {
    sensor: BH1750<I, D>,
    /// `Some` erst nach erfolgreichem `begin()`
    resolution: Option<Resolution>,
}

impl<I: I2c, D: DelayNs> LightMeter<I, D> {
    /// `address_pin_high`: ADDR-Pin auf VCC (0x5C) statt GND (0x23)
    pub fn new(i2c: I, delay: D, address_pin_high: bool) -> Self {
        Self {
            sensor: BH1750::new(i2c, delay, address_pin_high),
            resolution: None,
        }
    }

    /// Schaltet den Sensor ein und startet kontinuierliche Messungen
    pub fn begin(&mut self, resolution: Resolution) -> Result<(), BH1750Error<I::Error>> {
        self.sensor.power_on()?;
        self.sensor.start_continuous_measurement(resolution)?;
        self.resolution = Some(resolution);
        Ok(())
    }

    /// Setzt das Measurement-Time-Register (31..=254, Standard 69)
    pub fn set_mtreg(&mut self, mtreg: u8) -> Result<(), BH1750Error<I::Error>> {
        self.sensor.set_measurement_time_register(mtreg)?;
        // Messung neu starten, damit der nächste Wert mit dem neuen MTreg läuft
        if let Some(resolution) = self.resolution {
            self.sensor.start_continuous_measurement(resolution)?;
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.resolution.is_some()
    }
}

impl<I: I2c, D: DelayNs> LightSensor for LightMeter<I, D> {
    fn read_luminance(&mut self) -> f32 {
        let Some(resolution) = self.resolution else {
            return LUX_UNCONFIGURED;
        };

        self.sensor
            .get_current_measurement(resolution)
            .unwrap_or(LUX_READ_FAILED)
    }
}
