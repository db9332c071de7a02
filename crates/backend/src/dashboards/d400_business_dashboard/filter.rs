use contracts::dashboards::d400_business_dashboard::FilterCriteria;
use contracts::domain::a001_sales_transaction::SalesTransaction;
use std::collections::HashSet;

use crate::domain::a001_sales_transaction::{derive_lines, SalesLine};
use crate::shared::data::Dataset;

/// Filter criteria prepared for repeated membership checks
pub struct CompiledFilter<'c> {
    criteria: &'c FilterCriteria,
    products: HashSet<&'c str>,
    countries: HashSet<&'c str>,
}

impl<'c> CompiledFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            products: criteria.products.iter().map(String::as_str).collect(),
            countries: criteria.countries.iter().map(String::as_str).collect(),
        }
    }

    /// Date within [date_from, date_to] by calendar day, both ends inclusive,
    /// a missing bound is open.
    /// An empty selection does not restrict; a line without a description
    /// never matches a non-empty product selection.
    pub fn matches(&self, record: &SalesTransaction) -> bool {
        let day = record.date.date();
        if self.criteria.date_from.is_some_and(|from| day < from)
            || self.criteria.date_to.is_some_and(|to| day > to)
        {
            return false;
        }

        if !self.products.is_empty() {
            match record.description.as_deref() {
                Some(description) if self.products.contains(description) => {}
                _ => return false,
            }
        }

        self.countries.is_empty() || self.countries.contains(record.country.as_str())
    }
}

/// Lines matching `criteria`, in their original order
pub fn filter_lines<'a>(lines: &[SalesLine<'a>], criteria: &FilterCriteria) -> Vec<SalesLine<'a>> {
    if let (Some(from), Some(to)) = (criteria.date_from, criteria.date_to) {
        if from > to {
            tracing::warn!("Inverted date range {} > {}, nothing matches", from, to);
            return Vec::new();
        }
    }

    let filter = CompiledFilter::new(criteria);
    lines
        .iter()
        .filter(|line| filter.matches(line.record))
        .copied()
        .collect()
}

/// Derive revenue for the whole dataset and keep the matching lines
pub fn filter_dataset<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<SalesLine<'a>> {
    filter_lines(&derive_lines(dataset), criteria)
}
