//! UI interaction state

/// UI state manages the error toast, panel visibility and the bin-table
/// filter
#[derive(Debug, Clone)]
pub struct UiState {
    /// Error message to display in UI (toast/status bar)
    pub error_message: Option<String>,

    /// Bin-detail table panel visibility
    pub show_bin_table: bool,

    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Search/filter string for bin-detail table rows
    pub row_filter: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            error_message: None,
            show_bin_table: false,
            dark_mode: true,
            row_filter: String::new(),
        }
    }
}

impl UiState {
    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Clear the bin-table filter
    pub fn clear_filter(&mut self) {
        self.row_filter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toast() {
        let mut ui = UiState::default();
        assert!(!ui.has_error());
        ui.set_error("load failed");
        assert!(ui.has_error());
        ui.clear_error();
        assert!(!ui.has_error());
    }
}
