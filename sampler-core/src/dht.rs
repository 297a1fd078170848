//! DHT11/DHT22 Eindraht-Protokoll
//!
//! Der Treiber arbeitet gegen embedded-hal Traits: eine Open-Drain-Leitung
//! (mit Pull-up, lesbar und schreibbar) und ein `DelayNs`.
//!
//! Ablauf einer Messung:
//! 1. Host zieht die Leitung für das Start-Signal auf Low und gibt sie frei
//! 2. Sensor antwortet mit ~80 µs Low und ~80 µs High
//! 3. 40 Bits: je ~50 µs Low, danach ~26 µs High (0) oder ~70 µs High (1)

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::traits::{ClimateError, ClimateSensor};
use crate::types::{ClimateReading, DhtModel};

/// Länge eines Datenrahmens (Feuchte, Temperatur, Prüfsumme)
pub const FRAME_LEN: usize = 5;

/// Abtastzeitpunkt nach der steigenden Flanke eines Bits
const BIT_SAMPLE_US: u32 = 35;

/// Maximale Wartezeit auf einen Pegelwechsel
const EDGE_TIMEOUT_US: u32 = 100;

pub struct Dht<P, D> {
    pin: P,
    delay: D,
    model: DhtModel,
}

impl<P, D> Dht<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Erwartet eine freigegebene (High) Open-Drain-Leitung
    pub fn new(pin: P, delay: D, model: DhtModel) -> Self {
        Self { pin, delay, model }
    }

    /// Liest einen rohen 5-Byte-Rahmen vom Sensor
    pub fn read_frame(&mut self) -> Result<[u8; FRAME_LEN], ClimateError> {
        self.pin.set_low().map_err(|_| ClimateError::Pin)?;
        self.delay.delay_ms(self.model.start_signal_ms());
        self.pin.set_high().map_err(|_| ClimateError::Pin)?;

        // Antwort: Low, High, dann beginnt das erste Bit mit Low
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut frame = [0u8; FRAME_LEN];
        for byte in frame.iter_mut() {
            for _ in 0..8 {
                let bit = self.read_bit()?;
                *byte = (*byte << 1) | u8::from(bit);
            }
        }
        Ok(frame)
    }

    fn read_bit(&mut self) -> Result<bool, ClimateError> {
        self.wait_for(true)?;
        self.delay.delay_us(BIT_SAMPLE_US);
        let bit = self.pin.is_high().map_err(|_| ClimateError::Pin)?;
        if bit {
            self.wait_for(false)?;
        }
        Ok(bit)
    }

    fn wait_for(&mut self, high: bool) -> Result<(), ClimateError> {
        for _ in 0..EDGE_TIMEOUT_US {
            if self.pin.is_high().map_err(|_| ClimateError::Pin)? == high {
                return Ok(());
            }
            self.delay.delay_us(1);
        }
        Err(ClimateError::Timeout)
    }
}

impl<P, D> ClimateSensor for Dht<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read(&mut self) -> Result<ClimateReading, ClimateError> {
        let frame = self.read_frame()?;
        decode_frame(self.model, &frame)
    }

    fn minimum_sampling_period_ms(&self) -> u32 {
        self.model.minimum_sampling_period_ms()
    }
}

/// Dekodiert einen Rahmen inklusive Prüfsummen-Check
///
/// Bit 7 von Byte 2 ist bei beiden Modellen das Vorzeichen der Temperatur.
pub fn decode_frame(
    model: DhtModel,
    frame: &[u8; FRAME_LEN],
) -> Result<ClimateReading, ClimateError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(ClimateError::Checksum);
    }

    let (humidity, magnitude) = match model {
        DhtModel::Dht11 => (
            f32::from(frame[0]) + f32::from(frame[1]) * 0.1,
            f32::from(frame[2] & 0x7F) + f32::from(frame[3]) * 0.1,
        ),
        DhtModel::Dht22 => (
            f32::from(u16::from_be_bytes([frame[0], frame[1]])) * 0.1,
            f32::from(u16::from_be_bytes([frame[2] & 0x7F, frame[3]])) * 0.1,
        ),
    };
    let temperature = if frame[2] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(ClimateReading {
        temperature,
        humidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_decode_dht11() {
        // 56.7 %, 23.4 C
        let frame = [56, 7, 23, 4, 90];
        let reading = decode_frame(DhtModel::Dht11, &frame).unwrap();
        assert!(close(reading.humidity, 56.7));
        assert!(close(reading.temperature, 23.4));
    }

    #[test]
    fn test_decode_dht22_negative() {
        // 65.2 % = 652 = 0x028C, -10.1 C = 101 = 0x0065 mit Vorzeichenbit
        let frame = [0x02, 0x8C, 0x80, 0x65, 0x73];
        let reading = decode_frame(DhtModel::Dht22, &frame).unwrap();
        assert!(close(reading.humidity, 65.2));
        assert!(close(reading.temperature, -10.1));
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        let frame = [56, 7, 23, 4, 91];
        assert_eq!(
            decode_frame(DhtModel::Dht11, &frame),
            Err(ClimateError::Checksum)
        );
    }

    #[test]
    fn test_checksum_wraps() {
        let frame = [200, 0, 100, 0, 44];
        assert!(decode_frame(DhtModel::Dht11, &frame).is_ok());
    }
}
