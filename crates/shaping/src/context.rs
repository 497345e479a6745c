//! Per-snapshot shaping context.

/// Context a snapshot is shaped against.
///
/// Built once per snapshot from the host clock, never from the data, so
/// every movie in one snapshot is judged against the same year even if
/// the shaping happens to straddle midnight on New Year's Eve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapingContext {
    /// Current calendar year as a 4-digit string, e.g. `"2026"`.
    pub current_year: String,
}

impl ShapingContext {
    /// Create a context for the given calendar year.
    pub fn for_year(current_year: impl Into<String>) -> Self {
        Self {
            current_year: current_year.into(),
        }
    }

    /// Whether `current_year` is a well-formed 4-digit year.
    ///
    /// A malformed year is not an error: shaping against it yields an
    /// empty selection. Without this check an empty year string would
    /// prefix-match every release date.
    pub fn year_is_valid(&self) -> bool {
        self.current_year.len() == 4
            && self.current_year.bytes().all(|b| b.is_ascii_digit())
    }
}
