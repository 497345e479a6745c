//! Decoder for movie snapshot payloads.
//!
//! Snapshots arrive as JSON, either as a bare array of movies or wrapped
//! in the listing API's envelope object:
//!
//! ```json
//! {"results": [{"title": "...", "release_date": "2024-05-01", ...}]}
//! ```
//!
//! Both shapes decode to the same `Vec<Movie>`.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The two payload shapes the upstream listing produces.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Envelope { results: Vec<Movie> },
    List(Vec<Movie>),
}

/// Decode a snapshot payload from a JSON string.
pub fn parse_snapshot(payload: &str) -> Result<Vec<Movie>> {
    let payload: SnapshotPayload = serde_json::from_str(payload)?;
    let movies = match payload {
        SnapshotPayload::Envelope { results } => results,
        SnapshotPayload::List(movies) => movies,
    };
    Ok(movies)
}

/// Load and decode a snapshot fixture file.
pub fn load_snapshot(path: &Path) -> Result<Vec<Movie>> {
    let payload = fs::read_to_string(path)?;
    parse_snapshot(&payload).map_err(|err| match err {
        CatalogError::JsonError(json) => CatalogError::Malformed {
            path: path.display().to_string(),
            reason: json.to_string(),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_payload() {
        let payload = r#"{
            "results": [
                {"title": "A", "release_date": "2024-05-01", "popularity": 10.0},
                {"title": "B", "release_date": "2023-01-01", "popularity": 99.0}
            ]
        }"#;

        let movies = parse_snapshot(payload).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "A");
        assert_eq!(movies[1].release_date.as_deref(), Some("2023-01-01"));
    }

    #[test]
    fn test_parse_bare_list_payload() {
        let payload = r#"[{"title": "C", "popularity": 50.0}]"#;

        let movies = parse_snapshot(payload).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "C");
        assert_eq!(movies[0].release_date, None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let payload = r#"[{"title": "Sparse"}]"#;

        let movies = parse_snapshot(payload).unwrap();
        let movie = &movies[0];
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.popularity, 0.0);
        assert!(movie.overview.is_empty());
        assert!(movie.poster_path.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_snapshot_json() {
        let payload = r#"{"page": 1}"#;
        assert!(parse_snapshot(payload).is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_snapshot("not json").is_err());
    }
}
