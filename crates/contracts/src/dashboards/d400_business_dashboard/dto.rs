use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Request for the business dashboard, as sent by the filter sidebar.
///
/// Missing dates fall back to the dataset bounds. Empty `products` or
/// `countries` means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// Start date in format "YYYY-MM-DD" (inclusive)
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// End date in format "YYYY-MM-DD" (inclusive)
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Selected product descriptions
    #[serde(default)]
    pub products: Vec<String>,
    /// Selected countries
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Filter criteria with date bounds resolved against the dataset.
///
/// A `None` bound is open; it stays `None` only when the dataset is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub products: Vec<String>,
    pub countries: Vec<String>,
}

impl FilterCriteria {
    /// Criteria for a date range without product/country restriction
    pub fn for_period(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self {
            date_from: Some(date_from),
            date_to: Some(date_to),
            products: Vec::new(),
            countries: Vec::new(),
        }
    }

    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }
}

/// Response for the business dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Criteria actually applied (date bounds resolved)
    pub criteria: FilterCriteria,
    /// Number of transaction lines that passed the filter
    pub matched_rows: usize,
    pub summary: SummaryMetrics,
    /// Revenue by date, ascending
    pub revenue_over_time: Vec<RevenuePoint>,
    /// Top products by revenue, descending, at most 5
    pub top_products: Vec<ProductRevenue>,
    pub revenue_by_country: Vec<CountryRevenue>,
    /// Only lines with negative revenue
    pub returns_by_country: Vec<CountryRevenue>,
}

/// Три карточки метрик над графиками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_revenue: f64,
    /// Total revenue formatted for display, e.g. "$1,234.56"
    pub total_revenue_display: String,
    /// Distinct invoice numbers
    pub total_orders: usize,
    /// Distinct customers, lines without a customer are not counted
    pub unique_customers: usize,
    /// Lines with negative revenue
    pub return_lines: usize,
}

/// Точка линейного графика выручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDateTime,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub description: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
}

/// Options for the filter sidebar: date picker bounds and multi-select lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// None when the dataset is empty
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Distinct product descriptions in order of first appearance
    pub products: Vec<String>,
    /// Distinct countries in order of first appearance
    pub countries: Vec<String>,
}

/// Error body returned by the dashboard endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
