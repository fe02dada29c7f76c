//! CSV export of the monthly consumption-vs-generation series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::seasonal::MONTH_LABELS;
use crate::report::SimulationReport;

/// Schema v1 column header for the monthly series export.
const HEADER: &str = "month,consumption_kwh,generation_kwh";

/// Exports the monthly series of a committed report to a CSV file.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &SimulationReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes the monthly series as CSV to any writer.
///
/// One row per calendar month: the (flat) consumption figure next to the
/// seasonal generation figure. Produces deterministic output for identical
/// reports.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &SimulationReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (label, generation) in MONTH_LABELS.iter().zip(report.monthly_generation_profile) {
        wtr.write_record(&[
            (*label).to_string(),
            format!("{:.2}", report.monthly_consumption_kwh),
            format!("{generation:.2}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use crate::session::Session;

    fn make_report() -> SimulationReport {
        let mut session = Session::new(ScenarioConfig::baseline());
        session.simulate().clone()
    }

    #[test]
    fn header_matches_schema_v1() {
        let report = make_report();
        let mut buf = Vec::new();
        write_csv(&report, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(first_line, "month,consumption_kwh,generation_kwh");
    }

    #[test]
    fn one_row_per_month() {
        let report = make_report();
        let mut buf = Vec::new();
        write_csv(&report, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 12 months
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("Jan,300.00,"));
        assert!(lines[12].starts_with("Dec,300.00,"));
    }

    #[test]
    fn deterministic_output() {
        let report = make_report();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&report, &mut buf1).ok();
        write_csv(&report, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let report = make_report();
        let mut buf = Vec::new();
        write_csv(&report, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(3));

        let mut annual_generation = 0.0_f64;
        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            let generation: Result<f64, _> = rec.map_or("", |r| &r[2]).parse();
            assert!(generation.is_ok(), "generation column should parse as f64");
            annual_generation += generation.unwrap_or(0.0);
            row_count += 1;
        }
        assert_eq!(row_count, 12);
        // seasonal factors preserve the annual total
        let expected = report.sizing.monthly_generation_kwh * 12.0;
        assert!((annual_generation - expected).abs() / expected < 0.001);
    }
}
