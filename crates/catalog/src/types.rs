//! Core domain types for the movie showcase.
//!
//! A `Movie` is one entry in a listing snapshot delivered by the upstream
//! API. The fields mirror the listing payload: only `title` is required,
//! everything else degrades gracefully when absent.

use serde::{Deserialize, Serialize};

/// One movie entry from a listing snapshot.
///
/// Values are owned by the snapshot that delivered them and are never
/// mutated in place; the shaping stage consumes whole snapshots and
/// produces new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,

    /// Release date in `YYYY-MM-DD`-prefixed form, when the upstream
    /// listing knows it.
    #[serde(default)]
    pub release_date: Option<String>,

    /// Ranking score. Used purely as a sort key, no other semantics.
    #[serde(default)]
    pub popularity: f64,

    #[serde(default)]
    pub overview: String,

    #[serde(default)]
    pub poster_path: String,
}

impl Movie {
    /// Returns the leading 4-digit year of the release date, if the date
    /// is present and starts with one.
    pub fn release_year(&self) -> Option<&str> {
        let date = self.release_date.as_deref()?;
        let year = date.get(..4)?;
        if year.bytes().all(|b| b.is_ascii_digit()) {
            Some(year)
        } else {
            None
        }
    }

    /// Whether the release date is present and textually starts with
    /// `year`. This is an exact prefix comparison, not calendar logic.
    pub fn released_in(&self, year: &str) -> bool {
        self.release_date
            .as_deref()
            .is_some_and(|date| date.starts_with(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(release_date: Option<&str>) -> Movie {
        Movie {
            title: "Test Movie".to_string(),
            release_date: release_date.map(|s| s.to_string()),
            popularity: 1.0,
            overview: String::new(),
            poster_path: String::new(),
        }
    }

    #[test]
    fn test_release_year_from_full_date() {
        assert_eq!(movie(Some("2024-05-01")).release_year(), Some("2024"));
    }

    #[test]
    fn test_release_year_absent_date() {
        assert_eq!(movie(None).release_year(), None);
    }

    #[test]
    fn test_release_year_short_or_garbled_date() {
        assert_eq!(movie(Some("202")).release_year(), None);
        assert_eq!(movie(Some("soon")).release_year(), None);
    }

    #[test]
    fn test_released_in_is_prefix_only() {
        assert!(movie(Some("2024-12-31")).released_in("2024"));
        assert!(!movie(Some("2023-12-31")).released_in("2024"));
        assert!(!movie(None).released_in("2024"));
    }
}
