//! Static exports of the current histogram snapshot
//!
//! Two artifacts: a CSV of the bin rows, and a self-contained HTML page
//! with an inline SVG rendering of the histogram (native browser tooltips
//! per bar, mirroring the live plot's hover text).

use std::io::Write;
use std::path::Path;

use chrono::Local;
use egui::Color32;

use crate::constants::hist;
use crate::data::{BinRow, HistogramTable};
use crate::error::Result;

const SVG_WIDTH: f64 = 650.0;
const SVG_HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Write the bin rows as CSV
pub fn write_bins_csv(path: &Path, table: &HistogramTable) -> Result<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(
        writer,
        "year,month,left,right,proportion,f_proportion,f_interval"
    )?;
    for row in table.rows() {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            row.year, row.month, row.left, row.right, row.proportion,
            row.f_proportion, row.f_interval
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a static HTML snapshot of the histogram
pub fn write_html_snapshot(path: &Path, table: &HistogramTable) -> Result<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html><head><meta charset=\"utf-8\">")?;
    writeln!(writer, "<title>Histogram of trip distance by month</title>")?;
    writeln!(writer, "</head><body>")?;
    write_svg(&mut writer, table)?;
    writeln!(
        writer,
        "<p style=\"font-family:serif\">Generated {}</p>",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "</body></html>")?;

    writer.flush()?;
    Ok(())
}

fn write_svg(writer: &mut impl Write, table: &HistogramTable) -> Result<()> {
    let y_max = table
        .rows()
        .iter()
        .map(|r| r.proportion)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let plot_w = SVG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = SVG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let x_of = |miles: f64| MARGIN_LEFT + miles / hist::RANGE_END * plot_w;
    let y_of = |pct: f64| MARGIN_TOP + (1.0 - pct / y_max) * plot_h;

    writeln!(
        writer,
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" \
         font-family=\"serif\">",
        SVG_WIDTH, SVG_HEIGHT
    )?;

    writeln!(
        writer,
        "<text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-size=\"20\">\
         Histogram of trip distance by month</text>",
        SVG_WIDTH / 2.0
    )?;

    // Axes
    writeln!(
        writer,
        "<line x1=\"{l}\" y1=\"{b}\" x2=\"{r}\" y2=\"{b}\" stroke=\"black\"/>\
         <line x1=\"{l}\" y1=\"{t}\" x2=\"{l}\" y2=\"{b}\" stroke=\"black\"/>",
        l = MARGIN_LEFT,
        r = SVG_WIDTH - MARGIN_RIGHT,
        t = MARGIN_TOP,
        b = SVG_HEIGHT - MARGIN_BOTTOM,
    )?;
    writeln!(
        writer,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\" \
         font-weight=\"bold\">Trip distance (miles)</text>",
        MARGIN_LEFT + plot_w / 2.0,
        SVG_HEIGHT - 10.0
    )?;
    writeln!(
        writer,
        "<text x=\"15\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\" \
         font-weight=\"bold\" transform=\"rotate(-90 15 {})\">Proportion (%)</text>",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    )?;

    for row in table.rows() {
        let x = x_of(row.left);
        let w = x_of(row.right) - x;
        let y = y_of(row.proportion);
        let h = (SVG_HEIGHT - MARGIN_BOTTOM) - y;
        writeln!(
            writer,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
             fill=\"{}\" fill-opacity=\"0.5\" stroke=\"black\">\
             <title>{} {}. From {} \u{2014} {}</title></rect>",
            x,
            y,
            w,
            h,
            color_hex(row.color),
            row.month,
            row.year,
            row.f_interval,
            row.f_proportion
        )?;
    }

    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Hover/tooltip text for one bin, shared by the live plot and the snapshot
pub fn tooltip_text(row: &BinRow) -> String {
    format!(
        "{} {}. From {}\n{}",
        row.month, row.year, row.f_interval, row.f_proportion
    )
}

fn color_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MonthFrame, TripStore, make_dataset};
    use polars::df;
    use tempfile::tempdir;

    fn sample_table() -> HistogramTable {
        let df = df!("trip_distance" => [1.0f64, 1.5, 4.5, 5.0]).unwrap();
        let store =
            TripStore::from_frames(vec![MonthFrame::from_dataframe(df, "January", "2019")])
                .unwrap();
        make_dataset(
            &store,
            &["2019".to_string()],
            &["January".to_string()],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_csv_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bins.csv");
        write_bins_csv(&path, &sample_table()).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let mut lines = body.lines();
        assert_eq!(
            lines.next().unwrap(),
            "year,month,left,right,proportion,f_proportion,f_interval"
        );
        // 15 bins at width 2
        assert_eq!(lines.count(), 15);
        assert!(body.contains("2019,January,0,2,50,50.00%,0 to 2 miles"));
    }

    #[test]
    fn test_html_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.html");
        write_html_snapshot(&path, &sample_table()).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("<svg"));
        assert!(body.contains("Histogram of trip distance by month"));
        assert!(body.contains("January 2019. From 4 to 6 miles"));
        // One rect per bin
        assert_eq!(body.matches("<rect").count(), 15);
    }

    #[test]
    fn test_tooltip_text() {
        let table = sample_table();
        let bin = &table.rows()[2];
        assert_eq!(tooltip_text(bin), "January 2019. From 4 to 6 miles\n50.00%");
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(color_hex(Color32::from_rgb(0x1f, 0x77, 0xb4)), "#1f77b4");
    }
}
