use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::a001_sales_transaction::SalesTransaction;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::dataset::Dataset;
use super::error::LoadError;

pub const COL_INVOICE_NO: &str = "InvoiceNo";
pub const COL_CUSTOMER_ID: &str = "CustomerID";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_COUNTRY: &str = "Country";
pub const COL_DATE: &str = "Date";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_UNIT_PRICE: &str = "UnitPrice";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Load the cleaned sales CSV at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_dataset(file)
}

/// Parse a sales CSV from any reader. The first line must be the header.
pub fn read_dataset<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // Строка 1 - заголовок
        let row = idx + 2;
        records.push(columns.parse(&record, row)?);
    }

    Ok(Dataset::new(records))
}

/// Positions of the required columns in the header row
struct ColumnIndex {
    invoice_no: usize,
    customer_id: usize,
    description: usize,
    country: usize,
    date: usize,
    quantity: usize,
    unit_price: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{FEFF}').trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            invoice_no: position(COL_INVOICE_NO)?,
            customer_id: position(COL_CUSTOMER_ID)?,
            description: position(COL_DESCRIPTION)?,
            country: position(COL_COUNTRY)?,
            date: position(COL_DATE)?,
            quantity: position(COL_QUANTITY)?,
            unit_price: position(COL_UNIT_PRICE)?,
        })
    }

    fn parse(&self, record: &csv::StringRecord, row: usize) -> Result<SalesTransaction, LoadError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let optional = |idx: usize| {
            let value = field(idx);
            (!value.is_empty()).then(|| value.to_string())
        };
        let invalid = |column: &str, value: &str| LoadError::InvalidValue {
            row,
            column: column.to_string(),
            value: value.to_string(),
        };

        let raw_date = field(self.date);
        let date = parse_datetime(raw_date).ok_or_else(|| invalid(COL_DATE, raw_date))?;

        let raw_quantity = field(self.quantity);
        let quantity =
            parse_quantity(raw_quantity).ok_or_else(|| invalid(COL_QUANTITY, raw_quantity))?;

        let raw_price = field(self.unit_price);
        let unit_price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| invalid(COL_UNIT_PRICE, raw_price))?;

        Ok(SalesTransaction {
            invoice_no: field(self.invoice_no).to_string(),
            customer_id: optional(self.customer_id),
            description: optional(self.description),
            country: field(self.country).to_string(),
            date,
            quantity,
            unit_price,
        })
    }
}

/// Parse a timestamp; a bare date means midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Integer quantity. "6.0" is accepted, "6.5" is not.
fn parse_quantity(value: &str) -> Option<i64> {
    if let Ok(q) = value.parse::<i64>() {
        return Some(q);
    }
    let f = value.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
