use axum::{extract::FromRequestParts, http::request::Parts};
use jobly_core::domain::common::value_objects::ListFilters;

use super::server::api_entities::api_error::ApiError;

/// Extracts the raw query string as [`ListFilters`].
///
/// Keys are kept as sent; deciding which ones an entity accepts is left to
/// the list query. A repeated key keeps its last value.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ListFiltersExtractor(filters): ListFiltersExtractor,
/// ) -> Result<Response<T>, ApiError> {
///     state.service.get_companies(filters).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListFiltersExtractor(pub ListFilters);

impl<S> FromRequestParts<S> for ListFiltersExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))?;

        Ok(ListFiltersExtractor(pairs.into_iter().collect()))
    }
}
