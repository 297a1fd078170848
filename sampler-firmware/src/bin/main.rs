// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Io, Pin};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::rmt::PulseCode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_smartled::smart_led_buffer;

// Logging
use defmt::{error, info};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Sampler Core
use sampler_core::{LedSet, LightMeter, Resolution, Sampler, SmartStatus, StatusSpec};

// Projekt-Module und Konfiguration
use esp_sensor_sampler::SAMPLE_COUNTER;
use esp_sensor_sampler::config::{
    BH1750_ADDRESS_PIN_HIGH, DHT_GPIO_PIN, I2C_FREQUENCY_KHZ, I2C_SCL_GPIO_PIN, I2C_SDA_GPIO_PIN, RESET_BUTTON_GPIO_PIN,
    RMT_CLOCK_MHZ, STATUS_COLOR, board_profile, schedule_mode,
};
use esp_sensor_sampler::hal::{
    GuardedDht, LED_BUFFER_SIZE, PinPool, RmtLedWriter, SerialConsole, StatusLed,
    install_reset_button,
};
use esp_sensor_sampler::tasks::{Ticks, sampler_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Peripherie laut Board-Profil, registriert den Reset-Interrupt
/// und spawnt den Sampler-Task. Danach schläft main() - die Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Board-Profil auflösen (zur Build-Zeit aus .env gewählt)
    let profile = board_profile();
    let schedule = schedule_mode(profile);
    info!("Board profile: {}", profile);

    // Reset-Taster: fallende Flanke setzt den Zähler auf 0
    let mut io = Io::new(peripherals.IO_MUX);
    install_reset_button(&mut io, peripherals.GPIO9.degrade());
    info!("Reset button on GPIO{}", RESET_BUTTON_GPIO_PIN);

    // Freie Ausgangs-Pins für LEDs und diskrete Status-LED
    let mut pins = PinPool::new([
        peripherals.GPIO2.degrade(),
        peripherals.GPIO3.degrade(),
        peripherals.GPIO10.degrade(),
        peripherals.GPIO11.degrade(),
    ]);

    let lines = profile.leds.iter().map(|spec| {
        info!("LED {} on GPIO{} ({})", spec.label, spec.gpio, spec.polarity);
        pins.line(spec).expect("LED pin not in pin pool")
    });
    let leds = LedSet::new(lines).expect("Failed to initialize LED set");

    // Status-LED: WS2812 (RMT) oder diskrete Leitung
    let status = match profile.status {
        StatusSpec::SmartLed => {
            // Buffer für SmartLED Daten (1 LED), muss 'static sein
            static RMT_BUFFER: static_cell::StaticCell<[PulseCode; LED_BUFFER_SIZE]> =
                static_cell::StaticCell::new();
            let buffer = RMT_BUFFER.init(smart_led_buffer!(1));
            let writer =
                RmtLedWriter::new(peripherals.GPIO8, peripherals.RMT, RMT_CLOCK_MHZ, buffer)
                    .expect("Failed to initialize RMT");
            StatusLed::Smart(SmartStatus::new(writer, STATUS_COLOR))
        }
        StatusSpec::Line(spec) => {
            StatusLed::Line(pins.line(&spec).expect("Status pin not in pin pool"))
        }
    };

    // DHT Temperatur/Feuchte-Sensor (Eindraht, Open-Drain)
    let climate = GuardedDht::new(peripherals.GPIO21.degrade(), profile.dht_model);
    info!("{} on GPIO{}", profile.dht_model, DHT_GPIO_PIN);

    // BH1750 Lichtsensor (I2C0)
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);
    info!(
        "I2C on SDA GPIO{} / SCL GPIO{}",
        I2C_SDA_GPIO_PIN, I2C_SCL_GPIO_PIN
    );

    let mut light = LightMeter::new(i2c, Delay::new(), BH1750_ADDRESS_PIN_HIGH);
    // Ohne erfolgreiches begin() liefert der Sensor -2.0 lx, wie gewohnt ohne Abbruch
    if let Err(e) = light.begin(Resolution::High) {
        error!("BH1750 init failed: {:?}", defmt::Debug2Format(&e));
    }

    let sampler = Sampler::new(leds, status, climate, light, &SAMPLE_COUNTER);

    // Startmeldungen auf der seriellen Konsole
    sampler.announce(profile.name, &mut SerialConsole);

    let ticks = Ticks::new(schedule, sampler.period_ms());
    info!("Schedule: {}, period {} ms", schedule, sampler.period_ms());

    spawner.spawn(sampler_task(sampler, ticks)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task und im Interrupt)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
