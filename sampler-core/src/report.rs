//! Formatierung der Konsolen-Zeilen
//!
//! Alle Zeilen werden in einen festen `heapless::String` geschrieben,
//! ohne Allocator und ohne Zeilenumbruch am Ende.

use core::fmt::{self, Write};
use heapless::String;

use crate::types::ClimateReading;

/// Kapazität einer Report-Zeile in Bytes
///
/// Reicht für zwei beliebige f32 mit `{:.2}` (bis zu 43 Zeichen pro Zahl)
/// in der Klima-Zeile.
pub const LINE_CAPACITY: usize = 128;

/// Markiert eine gekürzte Zeile
const ELLIPSIS: &str = "...";

pub type ReportLine = String<LINE_CAPACITY>;

/// Schreibt in eine Zeile und kürzt statt abzubrechen
struct Clipped {
    line: ReportLine,
    clipped: bool,
}

impl Write for Clipped {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.clipped {
            return Ok(());
        }
        // Platz für ELLIPSIS bleibt immer frei
        let room = LINE_CAPACITY - ELLIPSIS.len() - self.line.len();
        let mut end = s.len().min(room);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.clipped = end < s.len();
        self.line.push_str(&s[..end]).map_err(|_| fmt::Error)
    }
}

/// Schreibt eine Zeile; zu lange Zeilen enden sichtbar auf `...`
fn format_line(args: fmt::Arguments<'_>) -> ReportLine {
    let mut out = Clipped {
        line: ReportLine::new(),
        clipped: false,
    };
    // Clipped::write_str schlägt nie fehl
    let _ = out.write_fmt(args);
    if out.clipped {
        out.line.push_str(ELLIPSIS).ok();
    }
    out.line
}

/// `Temperature: 23.45 C, Humidity: 56.78 %`
pub fn climate_line(reading: &ClimateReading) -> ReportLine {
    format_line(format_args!(
        "Temperature: {:.2} C, Humidity: {:.2} %",
        reading.temperature, reading.humidity
    ))
}

/// `Light: 123.40 lx`
pub fn light_line(lux: f32) -> ReportLine {
    format_line(format_args!("Light: {:.2} lx", lux))
}

pub fn cycle_banner(count: u32) -> ReportLine {
    format_line(format_args!("Hello World {}", count))
}

pub fn board_line(board: &str) -> ReportLine {
    format_line(format_args!("Board: {}", board))
}

pub fn sensor_ready_line(minimum_period_ms: u32) -> ReportLine {
    format_line(format_args!(
        "DHT Sensor ready, sampling period: {} ms",
        minimum_period_ms
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_line() {
        let reading = ClimateReading {
            temperature: 23.45,
            humidity: 56.78,
        };
        assert_eq!(
            climate_line(&reading).as_str(),
            "Temperature: 23.45 C, Humidity: 56.78 %"
        );
    }

    #[test]
    fn test_light_line() {
        assert_eq!(light_line(123.4).as_str(), "Light: 123.40 lx");
        assert_eq!(light_line(-1.0).as_str(), "Light: -1.00 lx");
    }

    #[test]
    fn test_startup_lines() {
        assert_eq!(board_line("esp32c6-devkitc").as_str(), "Board: esp32c6-devkitc");
        assert_eq!(
            sensor_ready_line(2000).as_str(),
            "DHT Sensor ready, sampling period: 2000 ms"
        );
    }

    #[test]
    fn test_extreme_readings_fit() {
        let reading = ClimateReading {
            temperature: f32::MIN,
            humidity: f32::MAX,
        };
        let line = climate_line(&reading);
        assert!(line.starts_with("Temperature: -340282346638528859811704183484516925440.00 C"));
        assert!(line.ends_with("Humidity: 340282346638528859811704183484516925440.00 %"));

        assert_eq!(light_line(f32::NAN).as_str(), "Light: NaN lx");
        assert_eq!(light_line(f32::INFINITY).as_str(), "Light: inf lx");
    }

    #[test]
    fn test_overlong_line_is_marked() {
        let mut name: String<256> = String::new();
        for _ in 0..100 {
            name.push('ä').unwrap();
        }
        let line = board_line(&name);
        assert!(line.len() <= LINE_CAPACITY);
        assert!(line.starts_with("Board: ä"));
        assert!(line.ends_with("..."));
    }

    #[test]
    fn test_cycle_banner() {
        assert_eq!(cycle_banner(7).as_str(), "Hello World 7");
    }
}
