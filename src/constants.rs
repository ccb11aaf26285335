//! Application-wide constants and default values
//!
//! This module centralizes the month lookup table, histogram bounds, color
//! palettes and layout defaults used throughout the application.

/// Month names and two-digit file codes
pub mod months {
    /// Month names in calendar order, as shown in the month checkboxes
    pub const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July",
        "August", "September", "October", "November", "December",
    ];

    /// Two-digit codes used in the monthly extract file names
    pub const CODES: [&str; 12] = [
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
    ];

    /// Map a month name to its two-digit file code
    pub fn code_for(name: &str) -> Option<&'static str> {
        NAMES.iter().position(|&n| n == name).map(|i| CODES[i])
    }

    /// Map a 1-based calendar month number to its name
    pub fn name_for_number(number: u32) -> Option<&'static str> {
        if (1..=12).contains(&number) {
            Some(NAMES[(number - 1) as usize])
        } else {
            None
        }
    }
}

/// Histogram bounds and bin-width slider defaults
pub mod hist {
    /// Lower edge of the binned distance range (miles)
    pub const RANGE_START: f64 = 0.0;

    /// Upper edge of the binned distance range (miles, exclusive)
    pub const RANGE_END: f64 = 31.0;

    /// Minimum bin width selectable on the slider (miles)
    pub const MIN_BIN_WIDTH: u32 = 1;

    /// Maximum bin width selectable on the slider (miles)
    pub const MAX_BIN_WIDTH: u32 = 10;

    /// Default bin width (miles)
    pub const DEFAULT_BIN_WIDTH: u32 = 2;
}

/// Column names and file-name pattern of the monthly extracts
pub mod csv {
    /// Pickup timestamp column
    pub const PICKUP_COLUMN: &str = "tpep_pickup_datetime";

    /// Trip distance column (miles)
    pub const DISTANCE_COLUMN: &str = "trip_distance";

    /// Derived month-number column attached at load time
    pub const MONTH_COLUMN: &str = "month";

    /// Derived year column attached at load time
    pub const YEAR_COLUMN: &str = "year";

    /// Default directory scanned at startup
    pub const DEFAULT_DATA_DIR: &str = "data";

    /// Extract file name for a month code and two-digit year suffix
    pub fn extract_file_name(month_code: &str, year_suffix: &str) -> String {
        format!("df_{}_{}.csv", month_code, year_suffix)
    }
}

/// Display color palettes, one slot per selected month
pub mod palette {
    use egui::Color32;

    /// 12-color qualitative palette used for year 2019 (Category20 order)
    pub const YEAR_2019: [Color32; 12] = [
        Color32::from_rgb(0x1f, 0x77, 0xb4),
        Color32::from_rgb(0xae, 0xc7, 0xe8),
        Color32::from_rgb(0xff, 0x7f, 0x0e),
        Color32::from_rgb(0xff, 0xbb, 0x78),
        Color32::from_rgb(0x2c, 0xa0, 0x2c),
        Color32::from_rgb(0x98, 0xdf, 0x8a),
        Color32::from_rgb(0xd6, 0x27, 0x28),
        Color32::from_rgb(0xff, 0x98, 0x96),
        Color32::from_rgb(0x94, 0x67, 0xbd),
        Color32::from_rgb(0xc5, 0xb0, 0xd5),
        Color32::from_rgb(0x8c, 0x56, 0x4b),
        Color32::from_rgb(0xc4, 0x9c, 0x94),
    ];

    /// 12-color qualitative palette used for year 2020 (Set3 order)
    pub const YEAR_2020: [Color32; 12] = [
        Color32::from_rgb(0x8d, 0xd3, 0xc7),
        Color32::from_rgb(0xff, 0xff, 0xb3),
        Color32::from_rgb(0xbe, 0xba, 0xda),
        Color32::from_rgb(0xfb, 0x80, 0x72),
        Color32::from_rgb(0x80, 0xb1, 0xd3),
        Color32::from_rgb(0xfd, 0xb4, 0x62),
        Color32::from_rgb(0xb3, 0xde, 0x69),
        Color32::from_rgb(0xfc, 0xcd, 0xe5),
        Color32::from_rgb(0xd9, 0xd9, 0xd9),
        Color32::from_rgb(0xbc, 0x80, 0xbd),
        Color32::from_rgb(0xcc, 0xeb, 0xc5),
        Color32::from_rgb(0xff, 0xed, 0x6f),
    ];

    /// Palette for a year label; unknown years fall back to the 2019 palette
    pub fn for_year(year: &str) -> &'static [Color32; 12] {
        match year {
            "2020" => &YEAR_2020,
            _ => &YEAR_2019,
        }
    }
}

/// UI layout defaults
pub mod layout {
    /// Left panel (year/month/bin-width controls) default width
    pub const CONTROL_PANEL_WIDTH: f32 = 220.0;

    /// Right panel (bin-detail table) default width
    pub const BIN_TABLE_WIDTH: f32 = 380.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;

    /// Plot title font size
    pub const TITLE_FONT_SIZE: f32 = 20.0;

    /// Axis label font size
    pub const AXIS_LABEL_FONT_SIZE: f32 = 14.0;
}

/// Export and configuration file defaults
pub mod export {
    /// Default file name for the static HTML snapshot
    pub const HTML_FILE: &str = "histogram_trip_distance.html";

    /// Default file name for the bin-row CSV export
    pub const CSV_FILE: &str = "histogram_bins.csv";

    /// Default file name for the saved dashboard selection
    pub const CONFIG_FILE: &str = "taxi_hist_config.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_code_lookup() {
        assert_eq!(months::code_for("January"), Some("01"));
        assert_eq!(months::code_for("December"), Some("12"));
        assert_eq!(months::code_for("Smarch"), None);
    }

    #[test]
    fn test_month_name_for_number() {
        assert_eq!(months::name_for_number(1), Some("January"));
        assert_eq!(months::name_for_number(12), Some("December"));
        assert_eq!(months::name_for_number(0), None);
        assert_eq!(months::name_for_number(13), None);
    }

    #[test]
    fn test_extract_file_name() {
        assert_eq!(csv::extract_file_name("03", "19"), "df_03_19.csv");
    }

    #[test]
    fn test_palette_for_year() {
        assert_eq!(palette::for_year("2019")[0], palette::YEAR_2019[0]);
        assert_eq!(palette::for_year("2020")[0], palette::YEAR_2020[0]);
    }
}
