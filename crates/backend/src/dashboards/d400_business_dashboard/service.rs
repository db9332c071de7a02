use contracts::dashboards::d400_business_dashboard::{
    DashboardRequest, DashboardResponse, FilterCriteria, FilterOptions,
};

use super::aggregation::{self, TOP_PRODUCTS_LIMIT};
use super::filter;
use crate::shared::data::Dataset;

/// Fill in missing date bounds with the dataset min/max date.
///
/// With an empty dataset a missing bound stays open (`None`).
pub fn resolve_criteria(dataset: &Dataset, request: &DashboardRequest) -> FilterCriteria {
    let bounds = dataset.date_bounds();

    FilterCriteria {
        date_from: request.date_from.or(bounds.map(|(min, _)| min)),
        date_to: request.date_to.or(bounds.map(|(_, max)| max)),
        products: request.products.clone(),
        countries: request.countries.clone(),
    }
}

/// Recompute every dashboard block for one filter state.
///
/// Pure function of the dataset and the request: nothing is cached between
/// calls and the dataset is only read.
pub fn build_dashboard(dataset: &Dataset, request: &DashboardRequest) -> DashboardResponse {
    let criteria = resolve_criteria(dataset, request);
    let lines = filter::filter_dataset(dataset, &criteria);

    tracing::debug!(
        "D400 Dashboard: {} of {} rows match {:?}..{:?} ({} products, {} countries selected)",
        lines.len(),
        dataset.len(),
        criteria.date_from,
        criteria.date_to,
        criteria.products.len(),
        criteria.countries.len()
    );

    DashboardResponse {
        matched_rows: lines.len(),
        summary: aggregation::summary_metrics(&lines),
        revenue_over_time: aggregation::revenue_over_time(&lines),
        top_products: aggregation::top_products(&lines, TOP_PRODUCTS_LIMIT),
        revenue_by_country: aggregation::revenue_by_country(&lines),
        returns_by_country: aggregation::returns_by_country(&lines),
        criteria,
    }
}

/// Date picker bounds and multi-select options
pub fn filter_options(dataset: &Dataset) -> FilterOptions {
    let bounds = dataset.date_bounds();
    FilterOptions {
        min_date: bounds.map(|(min, _)| min),
        max_date: bounds.map(|(_, max)| max),
        products: dataset.product_options(),
        countries: dataset.country_options(),
    }
}
