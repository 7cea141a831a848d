//! One-line text rendering of a closing-price series.

use stockdash_lib::PriceSeries;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Default number of columns for the terminal chart.
pub const DEFAULT_WIDTH: usize = 60;

/// Renders `series` as at most `width` block characters, scaled between the
/// lowest and highest close. Longer series are sampled at evenly spaced
/// indices; the series itself is left untouched. Returns an empty string for
/// an empty series.
pub fn render(series: &PriceSeries, width: usize) -> String {
    let points = series.points();
    let Some((low, high)) = series.close_range() else {
        return String::new();
    };
    if width == 0 {
        return String::new();
    }

    let columns = points.len().min(width);
    let span = high - low;
    (0..columns)
        .map(|col| {
            let idx = if columns == points.len() {
                col
            } else {
                col * (points.len() - 1) / (columns - 1).max(1)
            };
            let close = points[idx].close;
            if span <= f64::EPSILON {
                return LEVELS[LEVELS.len() / 2];
            }
            let level = ((close - low) / span * (LEVELS.len() - 1) as f64).round() as usize;
            LEVELS[level.min(LEVELS.len() - 1)]
        })
        .collect()
}
