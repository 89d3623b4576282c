use axum::http::StatusCode;

/// Liveness probe
///
/// Always 200 once the router is serving; touches no timezone data.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
