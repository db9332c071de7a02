use chrono::NaiveDate;
use contracts::domain::a001_sales_transaction::SalesTransaction;
use std::collections::HashSet;

/// In-memory sales dataset. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SalesTransaction>,
}

impl Dataset {
    pub fn new(records: Vec<SalesTransaction>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesTransaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest calendar date in the dataset
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|r| r.date.date());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
    }

    /// Distinct non-empty product descriptions, in order of first appearance
    pub fn product_options(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().filter_map(|r| r.description.as_deref()))
    }

    /// Distinct non-empty countries, in order of first appearance
    pub fn country_options(&self) -> Vec<String> {
        distinct_in_order(self.records.iter().map(|r| r.country.as_str()))
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in values {
        if !value.is_empty() && seen.insert(value) {
            result.push(value.to_string());
        }
    }
    result
}
