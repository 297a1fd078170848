//! Zyklus-Zähler und Reset-Trigger
//!
//! Der Zähler wird aus zwei Kontexten geschrieben: vom Sampler-Task
//! (Inkrement am Zyklusende) und vom GPIO-Interrupt (Reset auf 0).
//! Neben dem Wert zählt ein zweiter `AtomicU32` die Resets (Epoche), damit
//! ein Reset auch dann erkannt wird, wenn der Wert vorher schon 0 war.

use core::sync::atomic::{AtomicU32, Ordering};

/// Anzahl abgeschlossener Zyklen seit Start bzw. letztem Reset
pub struct SampleCounter {
    value: AtomicU32,
    resets: AtomicU32,
}

/// Zählerstand plus Reset-Epoche zu Zyklusbeginn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterMark {
    pub count: u32,
    resets: u32,
}

impl SampleCounter {
    pub const fn new() -> Self {
        Self {
            value: AtomicU32::new(0),
            resets: AtomicU32::new(0),
        }
    }

    pub fn get(&self) -> u32 {
        self.value.load(Ordering::Acquire)
    }

    /// Merkt sich Wert und Epoche für `advance_from`
    pub fn mark(&self) -> CounterMark {
        // Epoche zuerst: ein Reset dazwischen macht die Marke nur strenger
        let resets = self.resets.load(Ordering::Acquire);
        CounterMark {
            count: self.get(),
            resets,
        }
    }

    pub fn reset(&self) {
        self.resets.fetch_add(1, Ordering::AcqRel);
        self.value.store(0, Ordering::Release);
    }

    /// Erhöht den Zähler, außer seit `mark` gab es einen Reset
    ///
    /// Ein Reset zwischen Zyklusbeginn und Zyklusende bleibt erhalten, auch
    /// wenn der Zyklus bei 0 begonnen hat. Gibt `false` zurück wenn nicht
    /// erhöht wurde.
    pub fn advance_from(&self, mark: CounterMark) -> bool {
        let advanced = self
            .value
            .compare_exchange(
                mark.count,
                mark.count.wrapping_add(1),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        // Epoche erst nach dem Inkrement prüfen: jeder Reset davor wird hier
        // gesehen, jeder Reset danach schreibt selbst 0
        if self.resets.load(Ordering::Acquire) != mark.resets {
            self.value.store(0, Ordering::Release);
            return false;
        }
        advanced
    }
}

impl Default for SampleCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reset-Trigger für den Taster-Interrupt
///
/// Läuft im Interrupt-Kontext: nur zwei atomare Operationen,
/// keine Formatierung, kein I/O.
#[derive(Clone, Copy)]
pub struct ResetTrigger<'a> {
    counter: &'a SampleCounter,
}

impl<'a> ResetTrigger<'a> {
    pub const fn new(counter: &'a SampleCounter) -> Self {
        Self { counter }
    }

    #[inline]
    pub fn fire(&self) {
        self.counter.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let counter = SampleCounter::new();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_advance_from_current_value() {
        let counter = SampleCounter::new();
        assert!(counter.advance_from(counter.mark()));
        assert!(counter.advance_from(counter.mark()));
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_advance_after_reset_is_dropped() {
        let counter = SampleCounter::new();
        counter.advance_from(counter.mark());
        counter.advance_from(counter.mark());

        // Zyklus beobachtet 2, Reset kommt dazwischen
        let mark = counter.mark();
        ResetTrigger::new(&counter).fire();

        assert!(!counter.advance_from(mark));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_reset_at_zero_is_not_lost() {
        let counter = SampleCounter::new();

        // Zyklus beginnt bei 0, Reset setzt wieder 0: Wert allein sieht gleich aus
        let mark = counter.mark();
        ResetTrigger::new(&counter).fire();

        assert!(!counter.advance_from(mark));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_reset_after_wrap_is_not_lost() {
        let counter = SampleCounter::new();
        counter.value.store(u32::MAX, Ordering::Relaxed);
        counter.advance_from(counter.mark());
        assert_eq!(counter.get(), 0);

        let mark = counter.mark();
        ResetTrigger::new(&counter).fire();

        assert!(!counter.advance_from(mark));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_old_reset_does_not_block_next_cycle() {
        let counter = SampleCounter::new();
        ResetTrigger::new(&counter).fire();

        assert!(counter.advance_from(counter.mark()));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_advance_wraps() {
        let counter = SampleCounter::new();
        counter.value.store(u32::MAX, Ordering::Relaxed);
        assert!(counter.advance_from(counter.mark()));
        assert_eq!(counter.get(), 0);
    }
}
