// Reset-Taster: GPIO-Interrupt auf fallende Flanke
//
// Der Handler läuft im Interrupt-Kontext und macht nur das Minimum:
// Interrupt-Flag löschen und den Zähler über den ResetTrigger auf 0 setzen.

use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::gpio::{AnyPin, Event, Input, InputConfig, Io, Pull};
use esp_hal::handler;
use sampler_core::ResetTrigger;

use crate::SAMPLE_COUNTER;

/// Taster-Pin, geteilt zwischen Setup und Interrupt-Handler
static RESET_BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

/// Registriert den Interrupt-Handler und aktiviert die Flanken-Erkennung
pub fn install_reset_button(io: &mut Io<'static>, pin: AnyPin<'static>) {
    io.set_interrupt_handler(reset_button_handler);

    let mut button = Input::new(pin, InputConfig::default().with_pull(Pull::Up));

    critical_section::with(|cs| {
        button.listen(Event::FallingEdge);
        RESET_BUTTON.borrow_ref_mut(cs).replace(button);
    });
}

#[handler]
fn reset_button_handler() {
    critical_section::with(|cs| {
        let mut button = RESET_BUTTON.borrow_ref_mut(cs);
        let Some(button) = button.as_mut() else {
            return;
        };
        if button.is_interrupt_set() {
            ResetTrigger::new(&SAMPLE_COUNTER).fire();
            button.clear_interrupt();
        }
    });
}
