// Serielle Konsole für die Messzeilen
//
// Die Zeilen gehen als Klartext über esp-println raus (nicht über defmt),
// damit das Ausgabeformat exakt erhalten bleibt.

use sampler_core::Console;

pub struct SerialConsole;

impl Console for SerialConsole {
    fn emit(&mut self, line: &str) {
        esp_println::println!("{}", line);
    }
}
