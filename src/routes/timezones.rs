use axum::Json;
use std::sync::LazyLock;

use crate::extract::Paginator;
use crate::pagination::{Page, PaginationQuery};

/// IANA zone names known to the timezone database, in database order.
static TIMEZONE_NAMES: LazyLock<Vec<String>> = LazyLock::new(|| {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name().to_string())
        .collect()
});

/// List known timezone names
///
/// Paginated with `limit`/`offset`; `limit=all` returns every name.
#[utoipa::path(
    get,
    path = "/api/timezones",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Timezone names", body = Page<String>),
    ),
    tag = "time"
)]
pub async fn list_timezones(paginator: Paginator) -> Json<Page<String>> {
    Json(paginator.paginate(TIMEZONE_NAMES.as_slice()))
}
