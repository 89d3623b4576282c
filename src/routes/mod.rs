pub mod health;
pub mod time;
pub mod timezones;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        time::now,
        time::format,
        time::convert,
        timezones::list_timezones,
    ),
    components(
        schemas(
            time::LocalTimeResponse,
            time::ConvertResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "time", description = "Timezone conversion and listing"),
    ),
    info(
        title = "rest-kit",
        description = "Timezone and pagination helpers for axum services",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    tracing::info!(
        default_timezone = %state.settings.default_timezone,
        default_page_limit = ?state.settings.default_page_limit,
        max_page_limit = ?state.settings.max_page_limit,
        "Building router"
    );

    let api_routes = Router::new()
        .route("/time/now", get(time::now))
        .route("/time/format", get(time::format))
        .route("/time/convert", get(time::convert))
        .route("/timezones", get(timezones::list_timezones));

    let health_routes = Router::new().route("/healthz", get(health::healthz));

    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
