//! Host clock seam.

use chrono::Datelike;

/// Source of the current calendar year.
///
/// The year comes from the host clock, never from the data, and is read
/// once per snapshot so one snapshot is shaped against one year.
pub trait Clock: Send + Sync {
    /// Current calendar year as a 4-digit string, e.g. `"2026"`.
    fn current_year(&self) -> String;
}

/// Clock backed by the system's local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> String {
        chrono::Local::now().year().to_string()
    }
}
