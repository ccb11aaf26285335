//! Data loading and histogram shaping built on Polars

mod histogram;
mod loader;

pub use histogram::{BinRow, HistogramTable, bin_count, make_dataset};
pub use loader::{MonthFrame, TripStore, YEARS};
