use crate::entities::*;

/// Maps `at` onto a percentage offset within the `[start, end]` window.
///
/// Events before the window clamp to 0, events after it to 100. A degenerate
/// window (`end <= start`) yields 0 for every event.
pub fn position_percent(start: TimestampMs, end: TimestampMs, at: TimestampMs) -> f64 {
    let total = end.saturating_millis_since(start);
    if total <= 0 {
        return 0.0;
    }
    let elapsed = at.saturating_millis_since(start);
    (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Clamps a precomputed progress value into `[0, 100]`.
pub fn clamp_progress(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Lays out a sequence of events proportionally on the timeline bar.
pub fn layout(start: TimestampMs, end: TimestampMs, events: &[TimestampMs]) -> Vec<f64> {
    events
        .iter()
        .map(|at| position_percent(start, end, *at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ts(millis: i64) -> TimestampMs {
        TimestampMs::from_millis(millis)
    }

    #[test]
    fn proportional_positions() {
        let start = ts(0);
        let end = ts(10_000);
        assert_eq!(0.0, position_percent(start, end, ts(0)));
        assert_eq!(25.0, position_percent(start, end, ts(2_500)));
        assert_eq!(50.0, position_percent(start, end, ts(5_000)));
        assert_eq!(100.0, position_percent(start, end, ts(10_000)));
    }

    #[test]
    fn clamp_outside_window() {
        let start = ts(1_000);
        let end = ts(2_000);
        assert_eq!(0.0, position_percent(start, end, ts(500)));
        assert_eq!(100.0, position_percent(start, end, ts(9_000)));
    }

    #[test]
    fn degenerate_window() {
        assert_eq!(0.0, position_percent(ts(1_000), ts(1_000), ts(1_500)));
        assert_eq!(0.0, position_percent(ts(2_000), ts(1_000), ts(1_500)));
    }

    #[test]
    fn progress_clamping() {
        assert_eq!(0.0, clamp_progress(-5.0));
        assert_eq!(100.0, clamp_progress(150.0));
        assert_eq!(42.5, clamp_progress(42.5));
        assert_eq!(0.0, clamp_progress(f64::NAN));
    }

    #[test]
    fn layout_sequence() {
        let positions = layout(ts(0), ts(1_000), &[ts(-100), ts(250), ts(750), ts(1_200)]);
        assert_eq!(vec![0.0, 25.0, 75.0, 100.0], positions);
    }
}
