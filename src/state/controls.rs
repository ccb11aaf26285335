//! Year, month and bin-width control state

use serde::{Deserialize, Serialize};

use crate::constants::{hist, months};
use crate::data::YEARS;

/// One labeled checkbox
#[derive(Debug, Clone)]
pub struct Toggle {
    pub label: String,
    pub selected: bool,
}

/// Saved dashboard selection, round-tripped through JSON config files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub years: Vec<String>,
    pub months: Vec<String>,
    pub bin_width: u32,
}

/// State of the three dashboard controls
///
/// Defaults mirror the dashboard's initial view: every year selected, the
/// first two months selected, bin width 2.
#[derive(Debug, Clone)]
pub struct ControlState {
    pub years: Vec<Toggle>,
    pub months: Vec<Toggle>,
    pub bin_width: u32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            years: YEARS
                .iter()
                .map(|&y| Toggle {
                    label: y.to_string(),
                    selected: true,
                })
                .collect(),
            months: months::NAMES
                .iter()
                .enumerate()
                .map(|(i, &m)| Toggle {
                    label: m.to_string(),
                    selected: i < 2,
                })
                .collect(),
            bin_width: hist::DEFAULT_BIN_WIDTH,
        }
    }
}

impl ControlState {
    /// Selected year labels, in checkbox order
    pub fn selected_years(&self) -> Vec<String> {
        Self::selected(&self.years)
    }

    /// Selected month names, in checkbox order; this order picks each
    /// month's palette slot
    pub fn selected_months(&self) -> Vec<String> {
        Self::selected(&self.months)
    }

    fn selected(toggles: &[Toggle]) -> Vec<String> {
        toggles
            .iter()
            .filter(|t| t.selected)
            .map(|t| t.label.clone())
            .collect()
    }

    /// Snapshot the current selection for saving
    pub fn to_config(&self) -> DashboardConfig {
        DashboardConfig {
            years: self.selected_years(),
            months: self.selected_months(),
            bin_width: self.bin_width,
        }
    }

    /// Apply a saved selection; unknown labels are ignored and the bin
    /// width is clamped to the slider range
    pub fn apply_config(&mut self, config: &DashboardConfig) {
        for toggle in &mut self.years {
            toggle.selected = config.years.contains(&toggle.label);
        }
        for toggle in &mut self.months {
            toggle.selected = config.months.contains(&toggle.label);
        }
        self.bin_width = config
            .bin_width
            .clamp(hist::MIN_BIN_WIDTH, hist::MAX_BIN_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let controls = ControlState::default();
        assert_eq!(
            controls.selected_years(),
            vec!["2019".to_string(), "2020".to_string()]
        );
        assert_eq!(
            controls.selected_months(),
            vec!["January".to_string(), "February".to_string()]
        );
        assert_eq!(controls.bin_width, 2);
    }

    #[test]
    fn test_selection_preserves_checkbox_order() {
        let mut controls = ControlState::default();
        for toggle in &mut controls.months {
            toggle.selected = matches!(toggle.label.as_str(), "March" | "January");
        }
        // Checkbox order is calendar order, so January precedes March
        assert_eq!(
            controls.selected_months(),
            vec!["January".to_string(), "March".to_string()]
        );
    }

    #[test]
    fn test_config_round_trip() {
        let mut controls = ControlState::default();
        controls.years[0].selected = false;
        controls.months[5].selected = true;
        controls.bin_width = 7;

        let config = controls.to_config();
        let mut restored = ControlState::default();
        restored.apply_config(&config);

        assert_eq!(restored.selected_years(), controls.selected_years());
        assert_eq!(restored.selected_months(), controls.selected_months());
        assert_eq!(restored.bin_width, 7);
    }

    #[test]
    fn test_apply_config_clamps_bin_width() {
        let mut controls = ControlState::default();
        controls.apply_config(&DashboardConfig {
            years: vec!["2019".to_string()],
            months: vec!["January".to_string()],
            bin_width: 99,
        });
        assert_eq!(controls.bin_width, 10);
    }

    #[test]
    fn test_apply_config_ignores_unknown_labels() {
        let mut controls = ControlState::default();
        controls.apply_config(&DashboardConfig {
            years: vec!["1999".to_string()],
            months: vec!["Smarch".to_string()],
            bin_width: 2,
        });
        assert!(controls.selected_years().is_empty());
        assert!(controls.selected_months().is_empty());
    }
}
