// DHT-Sensor am ESP32-C6
//
// Das Bit-Timing liegt im Bereich von Mikrosekunden. Ein Interrupt mitten
// in der Messung verfälscht die Bits, daher läuft das Auslesen in einer
// Critical Section. Der Taster-Interrupt wird direkt danach bedient.

use esp_hal::delay::Delay;
use esp_hal::gpio::{AnyPin, DriveMode, Flex, OutputConfig, Pull};
use sampler_core::{ClimateError, ClimateReading, ClimateSensor, Dht, DhtModel};

pub struct GuardedDht {
    dht: Dht<Flex<'static>, Delay>,
}

impl GuardedDht {
    /// Konfiguriert den Pin als Open-Drain mit Pull-up und gibt die Leitung frei
    pub fn new(pin: AnyPin<'static>, model: DhtModel) -> Self {
        let mut line = Flex::new(pin);
        line.apply_output_config(
            &OutputConfig::default()
                .with_drive_mode(DriveMode::OpenDrain)
                .with_pull(Pull::Up),
        );
        line.set_input_enable(true);
        line.set_output_enable(true);
        line.set_high();

        Self {
            dht: Dht::new(line, Delay::new(), model),
        }
    }
}

impl ClimateSensor for GuardedDht {
    fn read(&mut self) -> Result<ClimateReading, ClimateError> {
        critical_section::with(|_| self.dht.read())
    }

    fn minimum_sampling_period_ms(&self) -> u32 {
        self.dht.minimum_sampling_period_ms()
    }
}
