use crate::config::PlotConfig;

use super::error::ShapeError;

// ---------------------------------------------------------------------------
// DataTable – the numeric body of one section
// ---------------------------------------------------------------------------

/// Measurements of one section, stored column-major: `columns[metric][row]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl DataTable {
    /// Reshape a row-major buffer into rows of `width` values and transpose it.
    ///
    /// Fails unless `values.len()` is an exact multiple of `width`; the
    /// buffer is never truncated or padded.
    pub fn from_flat(values: &[f64], width: usize) -> Result<Self, ShapeError> {
        if width == 0 || values.len() % width != 0 {
            return Err(ShapeError {
                values: values.len(),
                width,
            });
        }

        let rows = values.len() / width;
        let mut columns: Vec<Vec<f64>> =
            (0..width).map(|_| Vec::with_capacity(rows)).collect();
        for row in values.chunks_exact(width) {
            for (column, &v) in columns.iter_mut().zip(row) {
                column.push(v);
            }
        }

        Ok(DataTable { columns, rows })
    }

    /// Number of data rows (samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of metric columns.
    pub fn metrics(&self) -> usize {
        self.columns.len()
    }

    /// All samples of one metric.
    pub fn column(&self, metric: usize) -> Option<&[f64]> {
        self.columns.get(metric).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn get(&self, row: usize, metric: usize) -> Option<f64> {
        self.columns.get(metric)?.get(row).copied()
    }
}

// ---------------------------------------------------------------------------
// Section – one titled table of the log
// ---------------------------------------------------------------------------

/// One benchmark table: title line, `Height ...` header and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Legend label.
    pub title: String,
    /// Header tokens, `metrics[0]` is the height column.
    pub metrics: Vec<String>,
    /// 1-based line number of the header.
    pub header_line: usize,
    pub table: DataTable,
}

impl Section {
    /// Series drawn for this section: height against every metric in the
    /// configured range.
    pub fn series(&self, section: usize, config: &PlotConfig) -> Vec<PlottedSeries> {
        let Some(heights) = self.table.column(0) else {
            return Vec::new();
        };

        config
            .metric_range(self.metrics.len())
            .filter_map(|j| {
                let values = self.table.column(j)?;
                Some(PlottedSeries {
                    section,
                    label: self.title.clone(),
                    metric: self.metrics[j].clone(),
                    points: heights
                        .iter()
                        .zip(values)
                        .map(|(&x, &y)| [x, y])
                        .collect(),
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// PlottedSeries – one line on the shared axes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    /// Index of the owning section in the document.
    pub section: usize,
    /// Legend label (the section title).
    pub label: String,
    /// Name of the metric on the y axis.
    pub metric: String,
    /// `[height, value]` pairs in row order.
    pub points: Vec<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// LogDocument – everything parsed from one file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogDocument {
    pub sections: Vec<Section>,
}

impl LogDocument {
    /// Series of all sections, in file order.
    pub fn series(&self, config: &PlotConfig) -> Vec<PlottedSeries> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(i, section)| section.series(i, config))
            .collect()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the log had no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
