use csv::ReaderBuilder;

use crate::error::AppError;
use crate::models::{CellValue, Table};

/// Decode the uploaded bytes as UTF-8 and parse them as CSV. The first
/// record is the header row; every following record becomes one table row
/// with its cells typed by [`CellValue::infer`]. Short rows are padded with
/// nulls; rows with more cells than the header are a parse failure.
pub fn parse_csv(data: &[u8]) -> Result<Table, AppError> {
    let text = std::str::from_utf8(data).map_err(|e| AppError::CsvParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::CsvParse(
            "no columns to parse from file".to_string(),
        ));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::CsvParse(e.to_string()))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::CsvParse(e.to_string()))?;
        if record.len() > columns.len() {
            let line = record.position().map_or(0, |p| p.line());
            return Err(AppError::CsvParse(format!(
                "Expected {} fields in line {}, saw {}",
                columns.len(),
                line,
                record.len()
            )));
        }
        let mut row: Vec<CellValue> = record.iter().map(CellValue::infer).collect();
        row.resize(columns.len(), CellValue::Null);
        rows.push(row);
    }

    Ok(Table { columns, rows })
}
