//! Test data shared by the dashboard tests.

use chrono::NaiveDate;
use contracts::domain::a001_sales_transaction::SalesTransaction;

use super::Dataset;

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub struct TxBuilder(SalesTransaction);

/// Transaction on `date` (midnight) with the given quantity and price
pub fn tx(date: &str, quantity: i64, unit_price: f64) -> TxBuilder {
    TxBuilder(SalesTransaction {
        invoice_no: "INV-1".to_string(),
        customer_id: None,
        description: None,
        country: "US".to_string(),
        date: day(date).and_hms_opt(0, 0, 0).unwrap(),
        quantity,
        unit_price,
    })
}

impl TxBuilder {
    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.0.date = self.0.date.date().and_hms_opt(hour, minute, 0).unwrap();
        self
    }

    pub fn invoice(mut self, invoice_no: &str) -> Self {
        self.0.invoice_no = invoice_no.to_string();
        self
    }

    pub fn customer(mut self, customer_id: &str) -> Self {
        self.0.customer_id = Some(customer_id.to_string());
        self
    }

    pub fn product(mut self, description: &str) -> Self {
        self.0.description = Some(description.to_string());
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.0.country = country.to_string();
        self
    }

    pub fn build(self) -> SalesTransaction {
        self.0
    }
}

/// Two Widget lines in the US: a sale of 20 and a return of -10
pub fn widget_scenario() -> Dataset {
    Dataset::new(vec![
        tx("2023-01-01", 2, 10.0)
            .product("Widget")
            .invoice("536365")
            .customer("17850")
            .build(),
        tx("2023-01-02", -1, 10.0)
            .product("Widget")
            .invoice("C536379")
            .customer("17850")
            .build(),
    ])
}

fn line(
    date: &str,
    (quantity, unit_price): (i64, f64),
    product: Option<&str>,
    country: &str,
    invoice: &str,
    customer: Option<&str>,
) -> SalesTransaction {
    let mut builder = tx(date, quantity, unit_price).country(country).invoice(invoice);
    if let Some(product) = product {
        builder = builder.product(product);
    }
    if let Some(customer) = customer {
        builder = builder.customer(customer);
    }
    builder.build()
}

/// A dataset spanning several products, countries and days.
///
/// Revenue: UK 25, US 17.5, France 120, Germany 35; total 197.5.
pub fn mixed_dataset() -> Dataset {
    let mut first = line("2023-01-01", (6, 2.5), Some("Heart Holder"), "United Kingdom", "1001", Some("A"));
    first.date = day("2023-01-01").and_hms_opt(8, 26, 0).unwrap();
    let mut second = line("2023-01-01", (2, 10.0), Some("Widget"), "US", "1001", Some("A"));
    second.date = day("2023-01-01").and_hms_opt(9, 0, 0).unwrap();

    Dataset::new(vec![
        first,
        second,
        line("2023-01-02", (1, 100.0), Some("Clock"), "France", "1002", Some("B")),
        line("2023-01-02", (-1, 10.0), Some("Widget"), "US", "C1003", Some("A")),
        line("2023-01-03", (3, 5.0), Some("Lantern"), "Germany", "1004", None),
        line("2023-01-03", (4, 5.0), Some("Mug"), "France", "1004", Some("C")),
        line("2023-01-04", (10, 1.5), None, "United Kingdom", "1005", Some("D")),
        line("2023-01-05", (-2, 2.5), Some("Heart Holder"), "United Kingdom", "C1006", Some("D")),
        line("2023-01-05", (5, 4.0), Some("Candle"), "Germany", "1007", Some("B")),
        line("2023-01-06", (1, 7.5), Some("Doormat"), "US", "1008", Some("E")),
    ])
}
