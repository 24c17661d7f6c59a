//! Jikan search request parameters and validation.

use serde::Serialize;

use crate::jikan::JikanError;

/// Search parameters for the Jikan `/anime` endpoint.
///
/// Based on the Jikan API documentation:
/// https://docs.api.jikan.moe/#tag/anime/operation/getAnimeSearch
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchRequest {
    /// Search query (required).
    pub q: String,

    /// Number of results (1-25, the API cap).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,

    /// Filter out adult entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfw: Option<bool>,
}

impl SearchRequest {
    /// Request for the first `limit` safe-for-work results matching `query`.
    pub fn titled(query: &str, limit: u8) -> Self {
        Self { q: query.trim().to_string(), limit: Some(limit), sfw: Some(true) }
    }

    /// Validate the search request parameters.
    pub fn validate(&self) -> Result<(), JikanError> {
        if self.q.is_empty() {
            return Err(JikanError::InvalidQuery("query cannot be empty".to_string()));
        }

        if let Some(limit) = self.limit
            && !(1..=25).contains(&limit)
        {
            return Err(JikanError::InvalidLimit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = SearchRequest::titled("naruto", 3);
        assert!(req.validate().is_ok());
        assert_eq!(req.q, "naruto");
        assert_eq!(req.limit, Some(3));
        assert_eq!(req.sfw, Some(true));
    }

    #[test]
    fn test_titled_trims_query() {
        let req = SearchRequest::titled("  one piece  ", 3);
        assert_eq!(req.q, "one piece");
    }

    #[test]
    fn test_empty_query() {
        let req = SearchRequest { q: "".to_string(), ..Default::default() };
        assert!(matches!(req.validate(), Err(JikanError::InvalidQuery(_))));
    }

    #[test]
    fn test_invalid_limit() {
        let req = SearchRequest { q: "test".to_string(), limit: Some(26), ..Default::default() };
        assert!(matches!(req.validate(), Err(JikanError::InvalidLimit)));

        let req = SearchRequest { q: "test".to_string(), limit: Some(0), ..Default::default() };
        assert!(matches!(req.validate(), Err(JikanError::InvalidLimit)));
    }

    #[test]
    fn test_limit_unset_is_valid() {
        let req = SearchRequest { q: "test".to_string(), ..Default::default() };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_serializes_to_query_params() {
        let req = SearchRequest::titled("naruto", 3);
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(encoded["q"], "naruto");
        assert_eq!(encoded["limit"], 3);
        assert_eq!(encoded["sfw"], true);
    }
}
