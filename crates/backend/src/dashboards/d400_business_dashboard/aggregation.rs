//! Read-only projections over filtered sales lines.
//!
//! Every function is total: an empty slice gives zero metrics or an empty
//! list. Groupings use sorted keys so results are deterministic.

use chrono::NaiveDateTime;
use contracts::dashboards::d400_business_dashboard::{
    CountryRevenue, ProductRevenue, RevenuePoint, SummaryMetrics,
};
use std::collections::{BTreeMap, HashSet};

use crate::domain::a001_sales_transaction::SalesLine;
use crate::shared::format::format_currency;

/// Size of the "top products" chart
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Total revenue, distinct orders and distinct customers
pub fn summary_metrics(lines: &[SalesLine<'_>]) -> SummaryMetrics {
    let total_revenue = lines.iter().fold(0.0, |acc, l| acc + l.revenue);

    let orders: HashSet<&str> = lines
        .iter()
        .map(|l| l.record.invoice_no.as_str())
        .collect();

    let customers: HashSet<&str> = lines
        .iter()
        .filter_map(|l| l.record.customer_id.as_deref())
        .collect();

    SummaryMetrics {
        total_revenue,
        total_revenue_display: format_currency(total_revenue),
        total_orders: orders.len(),
        unique_customers: customers.len(),
        return_lines: lines.iter().filter(|l| l.is_return).count(),
    }
}

/// Revenue per timestamp, ascending
pub fn revenue_over_time(lines: &[SalesLine<'_>]) -> Vec<RevenuePoint> {
    let mut by_date: BTreeMap<NaiveDateTime, f64> = BTreeMap::new();
    for line in lines {
        *by_date.entry(line.record.date).or_insert(0.0) += line.revenue;
    }

    by_date
        .into_iter()
        .map(|(date, revenue)| RevenuePoint { date, revenue })
        .collect()
}

/// Products ranked by summed revenue, descending, at most `limit` entries.
///
/// Lines without a description are not grouped. Equal revenues keep the
/// alphabetical order of the grouping.
pub fn top_products(lines: &[SalesLine<'_>], limit: usize) -> Vec<ProductRevenue> {
    let mut ranked: Vec<ProductRevenue> = group_revenue(
        lines
            .iter()
            .filter_map(|l| l.record.description.as_deref().map(|d| (d, l.revenue))),
    )
    .into_iter()
    .map(|(description, revenue)| ProductRevenue {
        description,
        revenue,
    })
    .collect();

    // sort_by стабильна: при равной выручке сохраняется порядок группировки
    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    ranked.truncate(limit);
    ranked
}

/// Revenue per country over all lines. Lines with an empty country are
/// left out, as in the country options.
pub fn revenue_by_country(lines: &[SalesLine<'_>]) -> Vec<CountryRevenue> {
    country_revenue(lines.iter())
}

/// Revenue per country over return lines only (negative sums)
pub fn returns_by_country(lines: &[SalesLine<'_>]) -> Vec<CountryRevenue> {
    country_revenue(lines.iter().filter(|l| l.is_return))
}

fn country_revenue<'l, 'a: 'l>(lines: impl Iterator<Item = &'l SalesLine<'a>>) -> Vec<CountryRevenue> {
    group_revenue(
        lines
            .filter(|l| !l.record.country.is_empty())
            .map(|l| (l.record.country.as_str(), l.revenue)),
    )
        .into_iter()
        .map(|(country, revenue)| CountryRevenue { country, revenue })
        .collect()
}

fn group_revenue<'k>(pairs: impl Iterator<Item = (&'k str, f64)>) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for (key, revenue) in pairs {
        *groups.entry(key).or_insert(0.0) += revenue;
    }
    groups
        .into_iter()
        .map(|(key, revenue)| (key.to_string(), revenue))
        .collect()
}
