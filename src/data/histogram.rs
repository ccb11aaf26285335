use egui::Color32;

use crate::constants::{hist, palette};
use crate::data::TripStore;
use crate::error::Result;

/// One histogram bar: interval bounds, normalized proportion, display fields
#[derive(Debug, Clone, PartialEq)]
pub struct BinRow {
    /// Left bin edge (miles)
    pub left: f64,
    /// Right bin edge (miles)
    pub right: f64,
    /// Percentage of the month's in-range trips falling in this bin
    pub proportion: f64,
    /// Proportion formatted for tooltips, e.g. "7.50%"
    pub f_proportion: String,
    /// Interval formatted for tooltips, e.g. "4 to 6 miles"
    pub f_interval: String,
    /// Owning month name
    pub month: String,
    /// Owning year label
    pub year: String,
    /// Display color for the (year, month) group
    pub color: Color32,
}

/// Combined histogram snapshot across every selected (year, month) pair
///
/// Rebuilt from scratch on every control change and swapped into the app
/// state wholesale; never patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct HistogramTable {
    rows: Vec<BinRow>,
}

impl HistogramTable {
    /// Table with no bins (the empty-selection case)
    pub fn empty() -> Self {
        Self::default()
    }

    /// All bin rows, grouped runs of one (year, month) each
    pub fn rows(&self) -> &[BinRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate contiguous (year, month) groups of bin rows
    pub fn groups(&self) -> impl Iterator<Item = &[BinRow]> {
        self.rows
            .chunk_by(|a, b| a.year == b.year && a.month == b.month)
    }
}

/// Number of equal-width bins covering [RANGE_START, RANGE_END)
///
/// A width that does not divide the range truncates the tail implicitly:
/// the last bin ends at `bin_count * width`, not at RANGE_END.
pub fn bin_count(bin_width: u32) -> usize {
    ((hist::RANGE_END - hist::RANGE_START) / bin_width as f64).floor() as usize
}

/// Build the combined histogram table for the selected years and months
///
/// Months are visited in the caller-supplied order; that order, not the
/// calendar order, picks the palette slot for each month. Counts are
/// normalized per (year, month) against that month's own in-range total.
/// A month with no in-range trips yields its bins with proportion 0.
pub fn make_dataset(
    store: &TripStore,
    years: &[String],
    months: &[String],
    bin_width: u32,
) -> Result<HistogramTable> {
    profiling::scope!("make_dataset");

    let mut rows = Vec::new();

    for year in years {
        let colors = palette::for_year(year);

        for (slot, month) in months.iter().enumerate() {
            // Only months present in the store can be plotted; a stale
            // selection (e.g. from a config file) is skipped, not an error
            let Some(frame) = store.month(year, month) else {
                continue;
            };

            let distances = frame.distances()?;
            let color = colors[slot % colors.len()];
            append_bin_rows(&mut rows, &distances, bin_width, month, year, color);
        }
    }

    Ok(HistogramTable { rows })
}

fn append_bin_rows(
    rows: &mut Vec<BinRow>,
    distances: &[f64],
    bin_width: u32,
    month: &str,
    year: &str,
    color: Color32,
) {
    let n = bin_count(bin_width);
    let width = bin_width as f64;

    let mut counts = vec![0u64; n];
    for &v in distances {
        if v < hist::RANGE_START {
            continue;
        }
        let idx = ((v - hist::RANGE_START) / width).floor() as usize;
        if idx < n {
            counts[idx] += 1;
        }
    }

    let total: u64 = counts.iter().sum();

    rows.extend(counts.iter().enumerate().map(|(i, &count)| {
        let left = hist::RANGE_START + i as f64 * width;
        let right = left + width;
        let proportion = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        BinRow {
            left,
            right,
            proportion,
            f_proportion: format!("{:.2}%", proportion),
            f_interval: format!("{} to {} miles", left as i64, right as i64),
            month: month.to_string(),
            year: year.to_string(),
            color,
        }
    }));
}
