// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die Traits aus sampler-core mit der
// ESP32-C6 Hardware (GPIO, RMT, I2C, Interrupts).

pub mod button;
pub mod console;
pub mod dht;
pub mod led_writer;
pub mod pins;
pub mod status;

pub use button::install_reset_button;
pub use console::SerialConsole;
pub use dht::GuardedDht;
pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter};
pub use pins::PinPool;
pub use status::StatusLed;
