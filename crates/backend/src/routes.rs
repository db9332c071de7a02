use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D400 Business Dashboard
        .route(
            "/api/d400/dashboard",
            get(handlers::d400_business_dashboard::get_dashboard)
                .post(handlers::d400_business_dashboard::post_dashboard),
        )
        .route(
            "/api/d400/filter_options",
            get(handlers::d400_business_dashboard::get_filter_options),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::dashboards::d400_business_dashboard::{
        DashboardResponse, ErrorResponse, FilterOptions,
    };
    use tower::ServiceExt;

    use crate::shared::data::fixtures::{mixed_dataset, widget_scenario};
    use crate::shared::data::{CsvDatasetProvider, Dataset, StaticDatasetProvider};

    fn app_with(dataset: Dataset) -> Router {
        configure_routes(Arc::new(AppState::new(Arc::new(
            StaticDatasetProvider::new(dataset),
        ))))
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_with(Dataset::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_dashboard_uses_defaults() {
        let response = app_with(mixed_dataset())
            .oneshot(
                Request::builder()
                    .uri("/api/d400/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let dashboard: DashboardResponse = body_json(response).await;
        assert_eq!(dashboard.matched_rows, 10);
        assert_eq!(dashboard.summary.total_revenue, 197.5);
        assert_eq!(dashboard.top_products.len(), 5);
    }

    #[tokio::test]
    async fn test_post_dashboard_with_filters() {
        let body = r#"{"date_from":"2023-01-01","date_to":"2023-01-02","countries":["US"]}"#;
        let response = app_with(widget_scenario())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/d400/dashboard")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let dashboard: DashboardResponse = body_json(response).await;
        assert_eq!(dashboard.summary.total_revenue, 10.0);
        assert_eq!(dashboard.returns_by_country[0].revenue, -10.0);
    }

    #[tokio::test]
    async fn test_post_dashboard_rejects_malformed_body() {
        let response = app_with(widget_scenario())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/d400/dashboard")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"date_from":"yesterday"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_filter_options() {
        let response = app_with(widget_scenario())
            .oneshot(
                Request::builder()
                    .uri("/api/d400/filter_options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let options: FilterOptions = body_json(response).await;
        assert_eq!(options.products, vec!["Widget".to_string()]);
        assert_eq!(options.countries, vec!["US".to_string()]);
    }

    #[tokio::test]
    async fn test_load_error_is_internal_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CsvDatasetProvider::new(dir.path().join("missing.csv"));
        let app = configure_routes(Arc::new(AppState::new(Arc::new(provider))));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/d400/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error: ErrorResponse = body_json(response).await;
        assert!(error.error.contains("not found"));
    }
}
