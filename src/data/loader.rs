use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants::{csv, months};
use crate::error::{HistError, Result};

/// Year labels covered by the monthly extracts
pub const YEARS: [&str; 2] = ["2019", "2020"];

/// One month of trips for one year: the filtered DataFrame plus its labels
///
/// Holds only the pickup timestamp and trip distance columns, with derived
/// month-number and year columns attached at load time. Immutable after load.
#[derive(Debug)]
pub struct MonthFrame {
    df: DataFrame,
    month_name: String,
    year: String,
}

impl MonthFrame {
    /// Load one monthly extract, keeping only the timestamp and distance
    /// columns and attaching derived month/year columns
    fn load(path: &Path, month_code: &str, year: &str) -> Result<Self> {
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .with_try_parse_dates(true)
            .finish()?
            .select([col(csv::PICKUP_COLUMN), col(csv::DISTANCE_COLUMN)])
            .with_columns([
                col(csv::PICKUP_COLUMN)
                    .dt()
                    .month()
                    .alias(csv::MONTH_COLUMN),
                col(csv::PICKUP_COLUMN).dt().year().alias(csv::YEAR_COLUMN),
            ])
            .collect()
            .map_err(|e| match e {
                PolarsError::ColumnNotFound(name) => HistError::ColumnNotFound {
                    column: name.to_string(),
                    file: path.display().to_string(),
                },
                other => HistError::Polars(other),
            })?;

        // Month label comes from the derived column when rows exist,
        // otherwise from the file's own month code
        let month_name = Self::derived_month_name(&df)
            .or_else(|| {
                months::CODES
                    .iter()
                    .position(|&c| c == month_code)
                    .map(|i| months::NAMES[i].to_string())
            })
            .ok_or_else(|| HistError::UnknownMonth(month_code.to_string()))?;

        Ok(Self {
            df,
            month_name,
            year: year.to_string(),
        })
    }

    /// Build a MonthFrame from an already-materialized DataFrame
    pub fn from_dataframe(df: DataFrame, month_name: &str, year: &str) -> Self {
        Self {
            df,
            month_name: month_name.to_string(),
            year: year.to_string(),
        }
    }

    fn derived_month_name(df: &DataFrame) -> Option<String> {
        let series = df
            .column(csv::MONTH_COLUMN)
            .ok()?
            .as_materialized_series()
            .cast(&DataType::UInt32)
            .ok()?;
        let number = series.u32().ok()?.get(0)?;
        months::name_for_number(number).map(str::to_string)
    }

    /// Month name label, e.g. "January"
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Year label, e.g. "2019"
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Number of trip records in this month
    pub fn trip_count(&self) -> usize {
        self.df.height()
    }

    /// Trip distances as f64, dropping nulls and non-finite values
    pub fn distances(&self) -> Result<Vec<f64>> {
        let series = self
            .df
            .column(csv::DISTANCE_COLUMN)
            .map_err(|_| HistError::ColumnNotFound {
                column: csv::DISTANCE_COLUMN.to_string(),
                file: format!("{} {}", self.month_name, self.year),
            })?
            .as_materialized_series()
            .cast(&DataType::Float64)?;

        Ok(series
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .collect())
    }

    /// The wrapped DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }
}

/// All loaded monthly trip tables, keyed by year then two-digit month code
///
/// Two per-year tables exist (2019 and 2020), matching the paired extract
/// files `df_<MM>_19.csv` / `df_<MM>_20.csv`. Immutable after load.
#[derive(Debug)]
pub struct TripStore {
    by_year: BTreeMap<String, BTreeMap<String, MonthFrame>>,
    data_dir: PathBuf,
}

impl TripStore {
    /// Load the paired 2019/2020 extracts for every given month code
    ///
    /// A missing file or missing column fails the whole load; there is no
    /// partial-store recovery.
    pub fn load(data_dir: &Path, month_codes: &[&str]) -> Result<Self> {
        profiling::scope!("trip_store_load");

        let mut by_year: BTreeMap<String, BTreeMap<String, MonthFrame>> = BTreeMap::new();

        for year in YEARS {
            let suffix = &year[2..];
            let mut by_month = BTreeMap::new();

            for &code in month_codes {
                let file = csv::extract_file_name(code, suffix);
                let path = data_dir.join(&file);
                if !path.is_file() {
                    return Err(HistError::MissingExtract {
                        file,
                        dir: data_dir.display().to_string(),
                    });
                }
                by_month.insert(code.to_string(), MonthFrame::load(&path, code, year)?);
            }

            by_year.insert(year.to_string(), by_month);
        }

        Ok(Self {
            by_year,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// Build a store directly from month frames (keyed by each frame's labels)
    pub fn from_frames(frames: Vec<MonthFrame>) -> Result<Self> {
        let mut by_year: BTreeMap<String, BTreeMap<String, MonthFrame>> = BTreeMap::new();
        for frame in frames {
            let code = months::code_for(frame.month_name())
                .ok_or_else(|| HistError::UnknownMonth(frame.month_name().to_string()))?;
            by_year
                .entry(frame.year().to_string())
                .or_default()
                .insert(code.to_string(), frame);
        }
        Ok(Self {
            by_year,
            data_dir: PathBuf::new(),
        })
    }

    /// Year labels available in the store
    pub fn years(&self) -> Vec<String> {
        self.by_year.keys().cloned().collect()
    }

    /// Month frame for a year label and month name, if loaded
    pub fn month(&self, year: &str, month_name: &str) -> Option<&MonthFrame> {
        let code = months::code_for(month_name)?;
        self.by_year.get(year)?.get(code)
    }

    /// Total number of trip records across all loaded months
    pub fn total_trips(&self) -> usize {
        self.by_year
            .values()
            .flat_map(|months| months.values())
            .map(|frame| frame.trip_count())
            .sum()
    }

    /// Directory the extracts were loaded from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_extract(dir: &Path, name: &str, rows: &[(&str, f64)]) {
        let mut body = String::from("tpep_pickup_datetime,trip_distance\n");
        for (ts, dist) in rows {
            body.push_str(&format!("{},{}\n", ts, dist));
        }
        fs::write(dir.join(name), body).unwrap();
    }

    fn seed_january(dir: &Path) {
        write_extract(
            dir,
            "df_01_19.csv",
            &[
                ("2019-01-05 10:00:00", 1.5),
                ("2019-01-06 11:30:00", 3.2),
                ("2019-01-07 09:15:00", 7.8),
            ],
        );
        write_extract(
            dir,
            "df_01_20.csv",
            &[("2020-01-03 08:00:00", 2.1), ("2020-01-04 18:45:00", 0.9)],
        );
    }

    #[test]
    fn test_store_load_pairs_both_years() {
        let dir = tempdir().unwrap();
        seed_january(dir.path());

        let store = TripStore::load(dir.path(), &["01"]).unwrap();

        assert_eq!(store.years(), vec!["2019".to_string(), "2020".to_string()]);
        assert_eq!(store.total_trips(), 5);

        let jan19 = store.month("2019", "January").unwrap();
        assert_eq!(jan19.month_name(), "January");
        assert_eq!(jan19.year(), "2019");
        assert_eq!(jan19.trip_count(), 3);
        assert_eq!(jan19.distances().unwrap(), vec![1.5, 3.2, 7.8]);

        let jan20 = store.month("2020", "January").unwrap();
        assert_eq!(jan20.trip_count(), 2);
    }

    #[test]
    fn test_store_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        // Only the 2019 half of the pair exists
        write_extract(dir.path(), "df_01_19.csv", &[("2019-01-05 10:00:00", 1.0)]);

        let err = TripStore::load(dir.path(), &["01"]).unwrap_err();
        assert!(matches!(err, HistError::MissingExtract { .. }));
    }

    #[test]
    fn test_extra_columns_are_dropped() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("df_02_19.csv"),
            "tpep_pickup_datetime,trip_distance,fare_amount\n\
             2019-02-01 12:00:00,4.2,17.50\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("df_02_20.csv"),
            "tpep_pickup_datetime,trip_distance,fare_amount\n\
             2020-02-01 12:00:00,5.0,20.00\n",
        )
        .unwrap();

        let store = TripStore::load(dir.path(), &["02"]).unwrap();
        let feb = store.month("2019", "February").unwrap();

        // Timestamp, distance, plus the two derived columns
        assert_eq!(feb.dataframe().width(), 4);
        assert_eq!(feb.distances().unwrap(), vec![4.2]);
    }

    #[test]
    fn test_unknown_month_name_lookup() {
        let dir = tempdir().unwrap();
        seed_january(dir.path());
        let store = TripStore::load(dir.path(), &["01"]).unwrap();

        assert!(store.month("2019", "Janissary").is_none());
        assert!(store.month("2021", "January").is_none());
    }

    #[test]
    fn test_from_frames_keys_by_labels() {
        let df = polars::df!("trip_distance" => [1.0f64, 2.0]).unwrap();
        let frame = MonthFrame::from_dataframe(df, "March", "2019");
        let store = TripStore::from_frames(vec![frame]).unwrap();

        assert_eq!(store.years(), vec!["2019".to_string()]);
        assert_eq!(store.month("2019", "March").unwrap().trip_count(), 2);
    }
}
