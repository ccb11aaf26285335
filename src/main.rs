#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Application shell and update loop
mod app;

// Application constants
mod constants;

// Data module for Polars-based loading and histogram shaping
mod data;

// Error handling
mod error;

// Static CSV/HTML exports
mod export;

// Application state modules
mod state;

// Panel rendering
mod ui;

use app::TaxiHist;

fn main() {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "TaxiHist - Trip Distance by Month",
        options,
        Box::new(|_| Ok(Box::new(TaxiHist::with_default_data()))),
    )
    .unwrap();
}
