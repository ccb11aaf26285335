mod bin_table;
mod controls;
mod plot;
mod toolbar;

pub use bin_table::render_bin_table;
pub use controls::render_controls;
pub use plot::render_plot;
pub use toolbar::render_toolbar;
