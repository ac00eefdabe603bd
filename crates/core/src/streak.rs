//! Streak analysis over a reading sequence.
//!
//! A streak is a maximal contiguous run of strictly increasing values of
//! length >= 2. The partition rule places a boundary at every index whose
//! value does not exceed its predecessor, so ties split runs; the later
//! all-equal filter is therefore a no-op for well-ordered input and is kept
//! purely as a guard against malformed data.

use crate::types::SensorRecord;

/// Lengths (in samples) of qualifying streaks, left to right.
pub fn streak_lengths(values: &[f64]) -> Vec<usize> {
    // Boundaries where the sequence fails to strictly increase.
    let mut boundaries = vec![0];
    boundaries.extend((1..values.len()).filter(|&i| values[i] <= values[i - 1]));
    boundaries.push(values.len());

    boundaries
        .windows(2)
        .map(|pair| &values[pair[0]..pair[1]])
        .filter(|slice| slice.len() > 1)
        .filter(|slice| !slice.iter().all(|&v| v == slice[0]))
        .map(|slice| slice.len())
        .collect()
}

/// Sampling interval in minutes, derived from the gap between the first two
/// records. Falls back to 1 when fewer than two records exist or the gap
/// rounds to zero minutes.
pub fn sample_interval_minutes(records: &[SensorRecord]) -> i64 {
    let minutes = match records {
        [first, second, ..] => {
            let seconds = (second.recorded_at - first.recorded_at).num_seconds();
            (seconds as f64 / 60.0).round() as i64
        }
        _ => 1,
    };
    if minutes == 0 {
        1
    } else {
        minutes
    }
}

/// Streaks converted to sustained-increase minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakSummary {
    /// Adjusted minutes per retained streak, in order of occurrence.
    pub minutes: Vec<i64>,
    /// Sum of the adjusted minutes.
    pub total_minutes: i64,
}

/// Convert streak lengths to elapsed minutes.
///
/// Only streaks longer than 2 samples count. Each contributes
/// `length * interval - 1` minutes: the subtraction turns a sample count
/// into a count of transitions.
pub fn sustained_increase_minutes(values: &[f64], interval_minutes: i64) -> StreakSummary {
    let minutes: Vec<i64> = streak_lengths(values)
        .into_iter()
        .filter(|&length| length > 2)
        .map(|length| length as i64 * interval_minutes - 1)
        .collect();
    let total_minutes = minutes.iter().sum();
    StreakSummary {
        minutes,
        total_minutes,
    }
}
