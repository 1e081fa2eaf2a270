/// Compute X (test index) and Y (score) bounds for the trend chart
pub fn compute_chart_params(
    wpm_series: &[(f64, f64)],
    accuracy_series: &[(f64, f64)],
) -> (f64, f64) {
    let mut highest = 0.0;
    for &(_, value) in wpm_series.iter().chain(accuracy_series.iter()) {
        if value > highest {
            highest = value;
        }
    }

    // Accuracy tops out at 100, so the Y axis always covers the full band;
    // X stays at least two wide to keep the axis non-degenerate.
    let y_max = highest.max(100.0).round();
    let x_max = wpm_series.last().map_or(2.0, |p| p.0).max(2.0);

    (x_max, y_max)
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_chart_params_empty() {
        let (x, y) = compute_chart_params(&[], &[]);
        assert_eq!(x, 2.0);
        assert_eq!(y, 100.0);
    }

    #[test]
    fn test_compute_chart_params_tracks_last_test() {
        let wpm = vec![(1.0, 40.0), (2.0, 55.0), (3.0, 48.0)];
        let acc = vec![(1.0, 90.0), (2.0, 95.0), (3.0, 97.0)];

        let (x, y) = compute_chart_params(&wpm, &acc);
        assert_eq!(x, 3.0);
        assert_eq!(y, 100.0);
    }

    #[test]
    fn test_compute_chart_params_wpm_above_accuracy_band() {
        let wpm = vec![(1.0, 140.0)];
        let acc = vec![(1.0, 98.0)];

        let (_, y) = compute_chart_params(&wpm, &acc);
        assert_eq!(y, 140.0);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(1.0), "1");
        assert_eq!(format_label(1.2345), "1.23");
    }
}
