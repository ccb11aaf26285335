//! Application state management
//!
//! This module organizes the TaxiHist application state into focused
//! components: control selections, UI interaction state, and the current
//! histogram snapshot.

mod controls;
mod ui;

pub use controls::{ControlState, DashboardConfig, Toggle};
pub use ui::UiState;

use std::path::PathBuf;

use crate::data::{HistogramTable, TripStore};

/// Main application state container
pub struct AppState {
    /// Loaded monthly trip tables, one per (year, month) extract
    pub store: Option<TripStore>,

    /// Year/month/bin-width control selections
    pub controls: ControlState,

    /// Current histogram snapshot; replaced wholesale on every control change
    pub table: HistogramTable,

    /// UI interaction state (error toast, panel toggles, table filter)
    pub ui: UiState,

    /// Directory the current store was loaded from
    pub data_dir: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: None,
            controls: ControlState::default(),
            table: HistogramTable::empty(),
            ui: UiState::default(),
            data_dir: None,
        }
    }
}

impl AppState {
    /// Check if trip data is loaded
    pub fn has_data(&self) -> bool {
        self.store.is_some()
    }

    /// Total trip records across the loaded store
    pub fn total_trips(&self) -> usize {
        self.store.as_ref().map(|s| s.total_trips()).unwrap_or(0)
    }
}
