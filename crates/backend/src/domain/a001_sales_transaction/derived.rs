use contracts::domain::a001_sales_transaction::SalesTransaction;

use crate::shared::data::Dataset;

/// Transaction line together with its computed fields.
///
/// Revenue is never read from the input file; it is computed here every
/// time from `quantity` and `unit_price`.
#[derive(Debug, Clone, Copy)]
pub struct SalesLine<'a> {
    pub record: &'a SalesTransaction,
    /// quantity * unit_price, negative for returns
    pub revenue: f64,
    /// revenue < 0
    pub is_return: bool,
}

pub fn revenue(record: &SalesTransaction) -> f64 {
    record.quantity as f64 * record.unit_price
}

pub fn derive_line(record: &SalesTransaction) -> SalesLine<'_> {
    let revenue = revenue(record);
    SalesLine {
        record,
        revenue,
        is_return: revenue < 0.0,
    }
}

/// Derived fields for every record, in dataset order
pub fn derive_lines(dataset: &Dataset) -> Vec<SalesLine<'_>> {
    dataset.records().iter().map(derive_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(quantity: i64, unit_price: f64) -> SalesTransaction {
        SalesTransaction {
            invoice_no: "536365".to_string(),
            customer_id: Some("17850".to_string()),
            description: Some("Widget".to_string()),
            country: "US".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_revenue_is_quantity_times_price() {
        let cases = [(2, 10.0), (-1, 10.0), (0, 3.5), (12, 0.85), (-24, 2.55), (5, 0.0)];
        for (quantity, price) in cases {
            let rec = record(quantity, price);
            let line = derive_line(&rec);
            assert_eq!(line.revenue, quantity as f64 * price);
            assert_eq!(line.is_return, line.revenue < 0.0);
        }
    }

    #[test]
    fn test_zero_revenue_is_not_a_return() {
        let rec = record(-3, 0.0);
        assert!(!derive_line(&rec).is_return);
    }

    #[test]
    fn test_derive_lines_keeps_order() {
        let dataset = Dataset::new(vec![record(2, 10.0), record(-1, 10.0)]);
        let lines = derive_lines(&dataset);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].revenue, 20.0);
        assert!(!lines[0].is_return);
        assert_eq!(lines[1].revenue, -10.0);
        assert!(lines[1].is_return);
        assert!(std::ptr::eq(lines[1].record, &dataset.records()[1]));
    }
}
