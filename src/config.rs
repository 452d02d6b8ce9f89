use std::ops::Range;

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Every knob of the plot window in one place. Built with `Default`; there
/// is no config file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// First metric column drawn as a series (0 is the height column).
    pub first_metric: usize,
    /// Number of trailing metric columns that are never drawn.
    pub trailing_metrics: usize,

    pub x_label: String,
    pub y_label: String,

    pub line_width: f32,
    pub marker_radius: f32,
    pub show_grid: bool,

    /// Initial inner size of the window in points.
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            // Height Tree Gadget Constraint Witness Key | Proof | Verify
            first_metric: 6,
            trailing_metrics: 1,
            x_label: "Tree Height".to_string(),
            y_label: "Time (ms)".to_string(),
            line_width: 1.5,
            marker_radius: 3.0,
            show_grid: true,
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl PlotConfig {
    /// Metric indices plotted for a header with `metric_count` columns.
    /// Empty when the header is too short.
    pub fn metric_range(&self, metric_count: usize) -> Range<usize> {
        let end = metric_count.saturating_sub(self.trailing_metrics);
        self.first_metric..end.max(self.first_metric)
    }
}
