use crate::core::engine::FilterEngine;
use crate::domain::model::FilterParameters;
use crate::domain::ports::CatalogSource;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::sync::Arc;

pub const FILTER_ROUTE: &str = "/api/products/filter";
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

pub fn router<S: CatalogSource + 'static>(engine: Arc<FilterEngine<S>>) -> Router {
    Router::new()
        .route(FILTER_ROUTE, get(handle_filter_products::<S>))
        .layer(Extension(engine))
}

pub async fn handle_filter_products<S: CatalogSource + 'static>(
    Query(params): Query<FilterParameters>,
    Extension(engine): Extension<Arc<FilterEngine<S>>>,
) -> Response {
    tracing::debug!("Filter request: {:?}", params);

    match engine.filter_products(&params).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                category = ?e.category(),
                "Error occurred while filtering products"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
        }
    }
}
