//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Wählt die aktive LED für einen Zyklus: `count mod led_count`
///
/// # Beispiele
///
/// ```
/// # use sampler_core::rotation_index;
/// assert_eq!(rotation_index(0, 2), 0);
/// assert_eq!(rotation_index(5, 3), 2);
/// ```
pub fn rotation_index(count: u32, led_count: usize) -> usize {
    if led_count == 0 {
        return 0;
    }
    (count as usize) % led_count
}

/// Sampling-Periode: doppelte Mindestperiode des Sensors
pub fn sampling_period_ms(minimum_ms: u32) -> u32 {
    minimum_ms.saturating_mul(2)
}

/// Restliche Schlafzeit im Polling-Betrieb
///
/// `spent_ms` ist die seit dem letzten Takt vergangene Zeit (Messen und
/// verzögerte Aktion) und wird von der Periode abgezogen.
pub fn polling_sleep_ms(period_ms: u32, spent_ms: u32) -> u32 {
    period_ms.saturating_sub(spent_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_index_two_leds() {
        assert_eq!(rotation_index(0, 2), 0);
        assert_eq!(rotation_index(1, 2), 1);
        assert_eq!(rotation_index(2, 2), 0);
    }

    #[test]
    fn test_rotation_index_three_leds() {
        assert_eq!(rotation_index(3, 3), 0);
        assert_eq!(rotation_index(4, 3), 1);
        assert_eq!(rotation_index(u32::MAX, 3), (u32::MAX as usize) % 3);
    }

    #[test]
    fn test_rotation_index_empty_set() {
        assert_eq!(rotation_index(7, 0), 0);
    }

    #[test]
    fn test_sampling_period_doubles_minimum() {
        assert_eq!(sampling_period_ms(2000), 4000);
        assert_eq!(sampling_period_ms(1000), 2000);
        assert_eq!(sampling_period_ms(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_polling_sleep_ms() {
        assert_eq!(polling_sleep_ms(4000, 100), 3900);
        assert_eq!(polling_sleep_ms(4000, 0), 4000);
        assert_eq!(polling_sleep_ms(50, 100), 0);
    }
}
