//! Reads the policy spreadsheet into a [`PolicyTable`].
//!
//! Excel/ODS workbooks go through `calamine`, `.csv` files through `csv`.
//! Both are normalised to a header row plus rows of [`Cell`]s and then
//! validated against [`REQUIRED_COLUMNS`] once, here.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use thiserror::Error;

use super::model::{Cell, PolicyRecord, PolicyTable, REQUIRED_COLUMNS};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read workbook: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported data file extension `{0}` (expected xlsx, xlsm, xlsb, xls, ods or csv)")]
    UnsupportedFormat(String),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("worksheet `{0}` not found")]
    SheetNotFound(String),
    #[error("sheet has no header row")]
    EmptySheet,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Loads the table from `path`. `sheet` picks a worksheet by name; the first
/// worksheet is used otherwise (ignored for CSV).
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<PolicyTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path, sheet)?,
        "csv" => load_csv(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    tracing::info!(
        "Loaded {} policies ({} columns) from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    if table.coercion_skips() > 0 {
        tracing::info!(
            "{} Investment/Rating cells were not numeric and are treated as missing",
            table.coercion_skips()
        );
    }

    Ok(table)
}

fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<PolicyTable, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound(name.to_string()))?,
        None => sheet_names.first().cloned().ok_or(LoadError::NoWorksheet)?,
    };

    tracing::info!("Reading worksheet `{}`", sheet_name);
    let range = workbook.worksheet_range(&sheet_name)?;
    table_from_range(&range)
}

/// Builds the table from a worksheet range; the first row is the header.
pub fn table_from_range(range: &Range<Data>) -> Result<PolicyTable, LoadError> {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header| header.iter().map(header_name).collect::<Vec<_>>())
        .ok_or(LoadError::EmptySheet)?;

    build_table(headers, rows.map(|row| row.iter().map(convert_value).collect()))
}

fn load_csv(path: &Path) -> Result<PolicyTable, LoadError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect::<Vec<_>>(),
        );
    }

    build_table(headers, rows.into_iter())
}

fn header_name(value: &Data) -> String {
    convert_value(value).to_string().trim().to_string()
}

fn convert_value(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::Bool(v) => Cell::Bool(*v),
        other => Cell::Other(other.to_string()),
    }
}

fn build_table(
    headers: Vec<String>,
    rows: impl Iterator<Item = Vec<Cell>>,
) -> Result<PolicyTable, LoadError> {
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::EmptySheet);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_str() == **required))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    // All required columns are present, so the lookups below cannot fail.
    let index = |name: &str| headers.iter().position(|h| h == name).unwrap_or(0);
    let region = index("Region");
    let location = index("Location");
    let construction = index("Construction");
    let state = index("State");
    let business_type = index("BusinessType");
    let investment = index("Investment");
    let rating = index("Rating");

    let mut records = Vec::new();
    let mut coercion_skips = 0;

    for mut row in rows {
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        row.resize(headers.len(), Cell::Empty);

        let mut numeric = |idx: usize| {
            let value = row[idx].to_number();
            if value.is_none() && !row[idx].is_empty() {
                coercion_skips += 1;
            }
            value
        };
        let investment_value = numeric(investment);
        let rating_value = numeric(rating);

        records.push(PolicyRecord {
            region: row[region].to_string(),
            location: row[location].to_string(),
            construction: row[construction].to_string(),
            state: row[state].to_string(),
            business_type: row[business_type].to_string(),
            investment: investment_value,
            rating: rating_value,
            cells: row.iter().map(Cell::to_string).collect(),
        });
    }

    Ok(PolicyTable::new(headers, records, coercion_skips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Policy,Region,Location,Construction,State,BusinessType,Investment,Rating";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_load_csv() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             P1,East,A,Brick,Dar,Retail,100,3\n\
             P2,East,B,Wood,Arusha,Office,200,4\n\
             P3,West,A,Brick,Dar,Office,,5\n"
        ));

        let table = load_table(file.path(), None).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns()[0], "Policy");
        assert_eq!(table.records()[0].region, "East");
        assert_eq!(table.records()[1].investment, Some(200.0));
        assert_eq!(table.records()[2].investment, None);
        assert_eq!(table.records()[2].rating, Some(5.0));
        assert_eq!(table.records()[2].cells[0], "P3");
        // an empty cell is missing, not a coercion failure
        assert_eq!(table.coercion_skips(), 0);
    }

    #[test]
    fn test_csv_non_numeric_investment_is_counted() {
        let file = write_csv(&format!(
            "{HEADER}\nP1,East,A,Brick,Dar,Retail,abc,x\nP2,East,A,Brick,Dar,Retail,10,1\n"
        ));
        let table = load_table(file.path(), None).unwrap();
        assert_eq!(table.records()[0].investment, None);
        assert_eq!(table.records()[0].rating, None);
        assert_eq!(table.coercion_skips(), 2);
    }

    #[test]
    fn test_csv_blank_lines_and_short_rows() {
        let file = write_csv(&format!("{HEADER}\nP1,East,A,Brick,Dar\n,,,,,,,\n"));
        let table = load_table(file.path(), None).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].business_type, "");
        assert_eq!(table.records()[0].investment, None);
        assert_eq!(table.records()[0].cells.len(), 8);
    }

    #[test]
    fn test_missing_file() {
        let err = load_table(Path::new("/definitely/not/here.xlsx"), None).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = load_table(file.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "json"));
    }

    #[test]
    fn test_corrupt_workbook() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        file.write_all(b"this is not a zip archive").unwrap();
        file.flush().unwrap();
        let err = load_table(file.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::Spreadsheet(_)));
    }

    #[test]
    fn test_missing_columns() {
        let file = write_csv("Region,Location,Investment\nEast,A,1\n");
        let err = load_table(file.path(), None).unwrap_err();
        match err {
            LoadError::MissingColumns(missing) => {
                assert_eq!(
                    missing,
                    vec!["Construction", "State", "BusinessType", "Rating"]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_table_from_range() {
        let headers = [
            "Region",
            "Location",
            "Construction",
            "State",
            "BusinessType",
            " Investment ",
            "Rating",
        ];
        let mut range = Range::new((0, 0), (3, 6));
        for (col, h) in headers.iter().enumerate() {
            range.set_value((0, col as u32), text(h));
        }
        let rows = [
            ("East", "A", "Brick", "Dar", "Retail", Data::Float(100.0), Data::Int(3)),
            ("East", "B", "Wood", "Arusha", "Office", text("200"), Data::Float(4.5)),
            ("West", "A", "Brick", "Dar", "Office", text(""), Data::Bool(true)),
        ];
        for (i, (r, l, c, s, b, inv, rat)) in rows.into_iter().enumerate() {
            let row = i as u32 + 1;
            range.set_value((row, 0), text(r));
            range.set_value((row, 1), text(l));
            range.set_value((row, 2), text(c));
            range.set_value((row, 3), text(s));
            range.set_value((row, 4), text(b));
            range.set_value((row, 5), inv);
            range.set_value((row, 6), rat);
        }

        let table = table_from_range(&range).unwrap();
        assert_eq!(table.columns()[5], "Investment");
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[0].investment, Some(100.0));
        assert_eq!(table.records()[0].rating, Some(3.0));
        assert_eq!(table.records()[1].investment, Some(200.0));
        assert_eq!(table.records()[2].investment, None);
        assert_eq!(table.records()[2].rating, Some(1.0));
        assert_eq!(table.records()[0].cells[5], "100");
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(
            table_from_range(&range),
            Err(LoadError::EmptySheet)
        ));
    }
}
