// Status-LED: je nach Board-Profil WS2812 oder diskrete GPIO-Leitung
//
// Embassy-Tasks können nicht generisch sein, daher fasst dieses Enum
// beide Varianten zu einem konkreten Typ zusammen.

use esp_hal::gpio::Output;
use sampler_core::{LedError, PolarizedLine, SmartStatus, StatusIndicator};

use super::led_writer::RmtLedWriter;

pub enum StatusLed {
    Smart(SmartStatus<RmtLedWriter<'static>>),
    Line(PolarizedLine<Output<'static>>),
}

impl StatusIndicator for StatusLed {
    fn set_active(&mut self, on: bool) -> Result<(), LedError> {
        match self {
            StatusLed::Smart(led) => led.set_active(on),
            StatusLed::Line(line) => line.set_active(on),
        }
    }
}
