//! Export the rental strategy table (CSV/XLSX) and the full report (JSON).
//!
//! The tabular exports are meant to be easy to consume in spreadsheets or
//! downstream scripts; both use the same header row and the same rounded rows.

use std::fs::File;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::domain::EvaluationReport;
use crate::error::AppError;
use crate::report::{ScenarioRow, TABLE_HEADERS};

/// Name of the single worksheet in the spreadsheet export.
pub const SHEET_NAME: &str = "Rental Analysis";

/// Render the scenario table as CSV text.
pub fn scenario_csv(rows: &[ScenarioRow]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(TABLE_HEADERS)
        .map_err(|e| AppError::new(2, format!("Failed to write CSV header: {e}")))?;

    for r in rows {
        writer
            .write_record([
                format!("{:.2}", r.rent),
                format!("{:.2}", r.monthly_cash_flow),
                format!("{:.2}", r.annual_profit),
                format!("{:.2}", r.roi_percent),
                r.strategy.clone(),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write CSV row: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::new(2, format!("CSV output is not UTF-8: {e}")))
}

/// Write the scenario table to a CSV file.
pub fn write_scenario_csv(path: &Path, rows: &[ScenarioRow]) -> Result<(), AppError> {
    let text = scenario_csv(rows)?;
    std::fs::write(path, text)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV '{}': {e}", path.display())))?;
    info!(path = %path.display(), rows = rows.len(), "wrote CSV report");
    Ok(())
}

/// Build the spreadsheet workbook in memory.
pub fn scenario_xlsx(rows: &[ScenarioRow]) -> Result<Vec<u8>, AppError> {
    let xlsx_err = |e: rust_xlsxwriter::XlsxError| AppError::new(2, format!("Failed to build XLSX report: {e}"));

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let number = Format::new().set_num_format("0.00");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

    for (col, title) in TABLE_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(xlsx_err)?;
    }

    for (i, r) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        let values = [r.rent, r.monthly_cash_flow, r.annual_profit, r.roi_percent];
        for (col, v) in values.iter().enumerate() {
            sheet
                .write_number_with_format(row, col as u16, *v, &number)
                .map_err(xlsx_err)?;
        }
        sheet.write_string(row, 4, r.strategy.as_str()).map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

/// Write the scenario table to an XLSX file.
pub fn write_scenario_xlsx(path: &Path, rows: &[ScenarioRow]) -> Result<(), AppError> {
    let bytes = scenario_xlsx(rows)?;
    std::fs::write(path, bytes)
        .map_err(|e| AppError::new(2, format!("Failed to write export XLSX '{}': {e}", path.display())))?;
    info!(path = %path.display(), sheet = SHEET_NAME, "wrote XLSX report");
    Ok(())
}

/// Write the full evaluation report as pretty JSON.
pub fn write_report_json(path: &Path, report: &EvaluationReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluate;
    use crate::domain::InputParameters;
    use crate::report::scenario_table;

    fn default_rows() -> Vec<ScenarioRow> {
        scenario_table(&evaluate(&InputParameters::default()).unwrap())
    }

    #[test]
    fn csv_has_header_and_three_rows() {
        let text = scenario_csv(&default_rows()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Rent,Monthly Cash Flow,Annual Profit,ROI (%),Strategy");
        assert_eq!(lines[1], "1600.00,38.69,464.29,69.75,Good Rental");
    }

    #[test]
    fn csv_file_matches_in_memory_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let rows = default_rows();
        write_scenario_csv(&path, &rows).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), scenario_csv(&rows).unwrap());
    }

    #[test]
    fn xlsx_is_a_zip_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        write_scenario_xlsx(&path, &default_rows()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    fn xlsx_part(bytes: &[u8], name: &str) -> String {
        use std::io::Read;

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut text = String::new();
        part.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn xlsx_has_named_sheet_header_and_rows() {
        let rows = default_rows();
        let bytes = scenario_xlsx(&rows).unwrap();

        let workbook = xlsx_part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains(r#"<sheet name="Rental Analysis""#), "{workbook}");
        assert_eq!(workbook.matches("<sheet ").count(), 1);

        let strings = xlsx_part(&bytes, "xl/sharedStrings.xml");
        for title in TABLE_HEADERS {
            assert!(strings.contains(&format!("<t>{title}</t>")), "missing header {title}");
        }
        for r in &rows {
            assert!(strings.contains(&format!("<t>{}</t>", r.strategy)));
        }

        let sheet = xlsx_part(&bytes, "xl/worksheets/sheet1.xml");
        for n in 1..=4 {
            assert!(sheet.contains(&format!(r#"<row r="{n}""#)), "missing row {n}");
        }
        assert!(!sheet.contains(r#"<row r="5""#));
        assert!(sheet.contains(r#"<c r="E4""#));
    }

    #[test]
    fn json_report_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = evaluate(&InputParameters::default()).unwrap();
        write_report_json(&path, &report).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: EvaluationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.scenarios.len(), 3);
        assert_eq!(back.inputs, report.inputs);
        assert!(text.contains("\"Good Rental\""));
    }

    #[test]
    fn export_to_missing_directory_fails_with_io_code() {
        let err = write_scenario_csv(Path::new("/nonexistent-dir/x/report.csv"), &default_rows()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
