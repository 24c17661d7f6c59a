//! Jikan API response types and normalization.

use serde::Deserialize;

/// Raw response from the Jikan `/anime` search endpoint.
///
/// Only the fields the resolver consumes are modeled; everything else in
/// the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct JikanSearchResponse {
    #[serde(default)]
    pub data: Vec<JikanAnime>,
}

/// Individual anime entry from Jikan.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnime {
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub aired: Option<JikanAired>,
}

/// Airing window; only the start date is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanAired {
    #[serde(default)]
    pub from: Option<String>,
}

/// Normalized record used by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeRecord {
    /// Default (romaji) title
    pub title: String,
    /// English title, when listed
    pub title_english: Option<String>,
    /// Native title, when listed
    pub title_japanese: Option<String>,
    /// Explicit release year, when listed
    pub year: Option<i32>,
    /// ISO start date of the airing window
    pub aired_from: Option<String>,
}

impl From<JikanAnime> for AnimeRecord {
    fn from(raw: JikanAnime) -> Self {
        Self {
            title: raw.title,
            title_english: raw.title_english,
            title_japanese: raw.title_japanese,
            year: raw.year,
            aired_from: raw.aired.and_then(|aired| aired.from),
        }
    }
}

impl AnimeRecord {
    /// Release year: the explicit field when present, else the leading four
    /// characters of the airing start date.
    pub fn release_year(&self) -> Option<String> {
        if let Some(year) = self.year {
            return Some(year.to_string());
        }
        self.aired_from.as_deref().and_then(|date| date.get(..4)).map(str::to_string)
    }

    /// Title variants in match priority order: default, English, native.
    pub fn title_variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.title_english.as_deref())
            .chain(self.title_japanese.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "pagination": { "has_next_page": false },
        "data": [
            {
                "mal_id": 20,
                "title": "Naruto",
                "title_english": "Naruto",
                "title_japanese": "ナルト",
                "type": "TV",
                "year": 2002,
                "aired": { "from": "2002-10-03T00:00:00+00:00", "to": null }
            },
            {
                "mal_id": 1735,
                "title": "Naruto: Shippuuden",
                "title_english": "Naruto Shippuden",
                "title_japanese": null,
                "year": null,
                "aired": { "from": "2007-02-15T00:00:00+00:00" }
            }
        ]
    }"#;

    #[test]
    fn test_deserialize_search_response() {
        let response: JikanSearchResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].title, "Naruto");
        assert_eq!(response.data[0].year, Some(2002));
        assert_eq!(response.data[1].title_japanese, None);
    }

    #[test]
    fn test_deserialize_empty_payload() {
        let response: JikanSearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_deserialize_sparse_entry() {
        let response: JikanSearchResponse =
            serde_json::from_str(r#"{"data": [{"title": "Something"}]}"#).unwrap();
        let record = AnimeRecord::from(response.data[0].clone());
        assert_eq!(record.title, "Something");
        assert_eq!(record.release_year(), None);
    }

    #[test]
    fn test_release_year_prefers_explicit_field() {
        let response: JikanSearchResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let record = AnimeRecord::from(response.data[0].clone());
        assert_eq!(record.release_year(), Some("2002".to_string()));
    }

    #[test]
    fn test_release_year_falls_back_to_aired_from() {
        let response: JikanSearchResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let record = AnimeRecord::from(response.data[1].clone());
        assert_eq!(record.year, None);
        assert_eq!(record.release_year(), Some("2007".to_string()));
    }

    #[test]
    fn test_release_year_short_date() {
        let record = AnimeRecord {
            title: "X".to_string(),
            title_english: None,
            title_japanese: None,
            year: None,
            aired_from: Some("20".to_string()),
        };
        assert_eq!(record.release_year(), None);
    }

    #[test]
    fn test_title_variants_order() {
        let response: JikanSearchResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let record = AnimeRecord::from(response.data[0].clone());
        let variants: Vec<&str> = record.title_variants().collect();
        assert_eq!(variants, vec!["Naruto", "Naruto", "ナルト"]);
    }
}
