use crate::error::{AnalysisError, Result};
use crate::position;
use crate::report::{self, ReportOptions};
use crate::table::{Cell, Table};

use log::info;
use std::io::Read;
use std::path::Path;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputFormat {
    Csv,
    Html,
}

impl InputFormat {
    // Only the exact, lower case extensions are recognised.
    pub fn from_path(path: &Path) -> Result<InputFormat> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(InputFormat::Csv),
            Some("html") => Ok(InputFormat::Html),
            _ => Err(AnalysisError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

// Cells are passed through as they are, short rows are padded with missing
// cells by the table.
pub fn parse_csv<R: Read>(rdr: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if columns.is_empty() {
        return Err(AnalysisError::MalformedInput("no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > columns.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(AnalysisError::MalformedInput(format!(
                "line {}: {} fields, the header has {}",
                line,
                record.len(),
                columns.len()
            )));
        }
        rows.push(record.iter().map(Cell::infer).collect());
    }

    Ok(Table::new(columns, rows))
}

pub fn get_data_from_csv(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    let table = parse_csv(file)?;
    info!("read {} rows from {:?}", table.len(), path);
    Ok(table)
}

// The format is checked before the file is touched.
pub fn load(path: &Path, options: &ReportOptions) -> Result<Table> {
    match InputFormat::from_path(path)? {
        InputFormat::Csv => get_data_from_csv(path),
        InputFormat::Html => {
            let records = report::get_data_from_html(path, options)?;
            Ok(position::to_table(&records))
        }
    }
}
