//! Requested-page extraction from HTTP requests
//!
//! Thin adapter between axum and [`Paginator::new`]: pulls the `page` query
//! parameter out of a request URI. Parsing is lenient: a malformed or absent
//! `page` parameter never breaks pagination, it falls back to "unspecified"
//! and the paginator resolves that to page 1.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use serde::Deserialize;
use tracing::debug;

use crate::paginator::Paginator;

/// Query-string shape accepted by the adapter. Unknown parameters are
/// ignored; a missing `page` deserializes to the 0 sentinel.
#[derive(Debug, Default, Deserialize)]
struct PageParam {
    #[serde(default)]
    page: u32,
}

fn page_from_uri(uri: &Uri) -> u32 {
    match Query::<PageParam>::try_from_uri(uri) {
        Ok(Query(params)) => params.page,
        Err(rejection) => {
            debug!(
                query = uri.query().unwrap_or_default(),
                error = %rejection,
                "Unparseable page parameter, falling back to first page"
            );
            0
        }
    }
}

impl Paginator {
    /// Create a paginator using the `page` query parameter of `uri` as the
    /// requested page.
    ///
    /// A missing or unparseable parameter is treated as "no page specified"
    /// and resolves to page 1; it is never an error.
    pub fn from_uri(total_items: u64, per_page: u32, uri: &Uri) -> Self {
        Self::new(total_items, per_page, page_from_uri(uri))
    }
}

/// Extractor yielding the raw requested page number from the `page` query
/// parameter, with the same leniency as [`Paginator::from_uri`].
///
/// Infallible: handlers always run, whatever the query string looks like.
/// Combine it with [`Paginator::new`] once the total count is known.
///
/// # Usage
///
/// ```ignore
/// async fn list_users(
///     State(state): State<AppState>,
///     RequestedPage(page): RequestedPage,
/// ) -> Json<PageSummary<UserDto>> {
///     let total = state.users.count().await;
///     let paginator = Paginator::new(total, PER_PAGE, page);
///     let users = state.users.slice(paginator.offset(), PER_PAGE).await;
///     Json(paginator.to_summary_with_data(users))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestedPage(pub u32);

impl<S> FromRequestParts<S> for RequestedPage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        Ok(RequestedPage(page_from_uri(&parts.uri)))
    }
}
