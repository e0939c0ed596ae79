//! CSV export for the final turbine layout.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::farm::TurbineSet;

/// Column header for the layout CSV. Anchor columns follow the upstream
/// `anchor{j}_x`/`anchor{j}_y` naming.
const HEADER: &str = "index,x_m,y_m,mori_deg,anchor0_x,anchor0_y,\
                      anchor1_x,anchor1_y,anchor2_x,anchor2_y";

/// Exports the turbine layout to a CSV file at the given path.
///
/// Writes a header row followed by one data row per turbine in index order.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(set: &TurbineSet, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(set, buf)
}

/// Writes the turbine layout as CSV to any writer.
///
/// Turbines without computed anchors get empty anchor columns.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(set: &TurbineSet, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for (index, t) in set.iter().enumerate() {
        let mut record = vec![
            index.to_string(),
            format!("{:.2}", t.x_m),
            format!("{:.2}", t.y_m),
            format!("{:.2}", t.mori_deg),
        ];
        for j in 0..3 {
            match t.anchors.get(j) {
                Some(&(ax, ay)) => {
                    record.push(format!("{ax:.2}"));
                    record.push(format!("{ay:.2}"));
                }
                None => {
                    record.push(String::new());
                    record.push(String::new());
                }
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::farm::{anchors, layout};

    fn sample_set() -> TurbineSet {
        let cfg = LayoutConfig::baseline();
        let mut set = layout::generate(&cfg);
        anchors::compute_anchors(&mut set, cfg.farm.mooring_spread_radius_m);
        set
    }

    #[test]
    fn header_matches_layout_schema() {
        let set = sample_set();
        let mut buf = Vec::new();
        write_csv(&set, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "index,x_m,y_m,mori_deg,anchor0_x,anchor0_y,\
             anchor1_x,anchor1_y,anchor2_x,anchor2_y"
        );
    }

    #[test]
    fn row_count_matches_turbine_count() {
        let set = sample_set();
        let mut buf = Vec::new();
        write_csv(&set, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 16 data rows
        assert_eq!(lines.len(), 17);
    }

    #[test]
    fn deterministic_output() {
        let set = sample_set();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&set, &mut buf1).ok();
        write_csv(&set, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let set = sample_set();
        let mut buf = Vec::new();
        write_csv(&set, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(10));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            // Numeric columns parse as f32
            for i in 1..10 {
                let val: Result<f32, _> = rec.unwrap()[i].parse();
                assert!(val.is_ok(), "column {i} should parse as f32");
            }
            row_count += 1;
        }
        assert_eq!(row_count, set.len());
    }

    #[test]
    fn missing_anchors_leave_empty_columns() {
        let cfg = LayoutConfig::baseline();
        let set = layout::generate(&cfg); // anchors never computed
        let mut buf = Vec::new();
        write_csv(&set, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let second_line = output
            .as_deref()
            .unwrap_or("")
            .lines()
            .nth(1)
            .unwrap_or("");
        assert!(second_line.ends_with(",,,,,"));
    }
}
