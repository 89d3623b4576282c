//! Axum extractors for the timezone and pagination helpers.
//!
//! Both read their defaults from router state, so any state `S` works as
//! long as the settings can be pulled out of it with [`FromRef`].

use axum::extract::{FromRef, FromRequestParts, OriginalUri};
use axum::http::{request::Parts, Uri};
use chrono_tz::Tz;
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::TimezoneError;
use crate::pagination::{LimitOffsetPagination, Page, PageRequest, PaginationQuery};
use crate::timezone::{get_user_timezone_from_request, parse_timezone};

/// The caller's timezone name, from the `timezone` header or the
/// configured default. Never rejects; the name is validated on use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTimezone(pub String);

impl UserTimezone {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tz(&self) -> Result<Tz, TimezoneError> {
        parse_timezone(&self.0)
    }
}

impl<S> FromRequestParts<S> for UserTimezone
where
    Arc<Settings>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let settings = Arc::<Settings>::from_ref(state);
        Ok(Self(get_user_timezone_from_request(
            &parts.headers,
            &settings.default_timezone,
        )))
    }
}

/// Pagination bound to the current request's query string.
#[derive(Debug, Clone)]
pub struct Paginator {
    pagination: LimitOffsetPagination,
    query: PaginationQuery,
    uri: Uri,
}

impl Paginator {
    #[must_use]
    pub fn new(pagination: LimitOffsetPagination, uri: Uri) -> Self {
        Self {
            pagination,
            query: PaginationQuery::from_uri(&uri),
            uri,
        }
    }

    #[must_use]
    pub fn query(&self) -> &PaginationQuery {
        &self.query
    }

    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        self.pagination.page_request(&self.query)
    }

    #[must_use]
    pub fn paginate_queryset<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.pagination.paginate_queryset(items, &self.query)
    }

    #[must_use]
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Page<T> {
        self.pagination.paginate(items, &self.query, &self.uri)
    }
}

impl<S> FromRequestParts<S> for Paginator
where
    Arc<Settings>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let settings = Arc::<Settings>::from_ref(state);
        // Nested routers strip their prefix from `parts.uri`; links must use the full path.
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.clone(), |OriginalUri(uri)| uri.clone());
        Ok(Self::new(LimitOffsetPagination::from_settings(&settings), uri))
    }
}
