//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the pure logic
//! that derives display values from it.

use leptos::*;

/// Starting weight in kilograms, the baseline for the "total lost" summary.
pub const STARTING_WEIGHT_KG: f64 = 113.2;

/// One weight observation from the static data file.
///
/// `date` is either `YYYY-MM-DD` or a locale label; `weight` is kilograms.
/// The data file is expected to be sorted ascending by date and is never
/// re-sorted here.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct WeightEntry {
    pub date: String,
    pub weight: f64,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Weight series loaded from the static JSON asset. Empty until the
    /// one-shot fetch completes; replaced in full, never edited in place.
    pub series: RwSignal<Vec<WeightEntry>>,
    /// Index into the accent palette, advanced by the rotation timer.
    pub accent_index: RwSignal<usize>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        series: create_rw_signal(Vec::new()),
        accent_index: create_rw_signal(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Kilograms lost relative to the baseline, per [`total_lost_kg`].
    pub fn total_lost(&self) -> f64 {
        total_lost_kg(&self.series.get(), STARTING_WEIGHT_KG)
    }
}

/// Advance an accent index by one step, wrapping modulo the palette size.
///
/// An empty palette is a configuration defect, not a runtime condition;
/// guard the modulo anyway and leave the index untouched.
pub fn advance_accent(index: usize, palette_len: usize) -> usize {
    if palette_len == 0 {
        return index;
    }
    (index + 1) % palette_len
}

/// Total kilograms lost: baseline minus the latest observation, or 0.0 for
/// an empty series. Pure function of its inputs.
pub fn total_lost_kg(series: &[WeightEntry], baseline_kg: f64) -> f64 {
    match series.last() {
        Some(entry) => baseline_kg - entry.weight,
        None => 0.0,
    }
}

/// Render a kilogram value with exactly one digit after the decimal point.
///
/// Uses Rust's `{:.1}` formatting, which rounds half to even.
pub fn format_kg(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, weight: f64) -> WeightEntry {
        WeightEntry {
            date: date.to_string(),
            weight,
        }
    }

    #[test]
    fn test_accent_cycles_modulo_palette() {
        for palette_len in 1..=6 {
            let mut index = 0;
            for tick in 1..=20 {
                index = advance_accent(index, palette_len);
                assert_eq!(index, tick % palette_len);
            }
        }
    }

    #[test]
    fn test_accent_empty_palette_does_not_divide() {
        // Defect guard only; release builds must not fault on it.
        assert_eq!(advance_accent(3, 0), 3);
    }

    #[test]
    fn test_total_lost_empty_series() {
        assert_eq!(total_lost_kg(&[], STARTING_WEIGHT_KG), 0.0);
        assert_eq!(format_kg(total_lost_kg(&[], STARTING_WEIGHT_KG)), "0.0");
    }

    #[test]
    fn test_total_lost_uses_last_entry() {
        let series = vec![
            entry("2025-05-22", 113.2),
            entry("2025-06-01", 104.6),
        ];
        assert_eq!(format_kg(total_lost_kg(&series, STARTING_WEIGHT_KG)), "8.6");
    }

    #[test]
    fn test_total_lost_single_entry() {
        let series = vec![entry("2025-05-22", 110.0)];
        assert_eq!(format_kg(total_lost_kg(&series, STARTING_WEIGHT_KG)), "3.2");
    }

    #[test]
    fn test_total_lost_is_idempotent() {
        let series = vec![
            entry("2025-05-22", 113.2),
            entry("2025-06-01", 104.6),
        ];
        let first = total_lost_kg(&series, STARTING_WEIGHT_KG);
        let second = total_lost_kg(&series, STARTING_WEIGHT_KG);
        assert_eq!(first, second);
    }
}
