//! # Catalog Crate
//!
//! Domain types and snapshot decoding for the movie showcase.
//!
//! ## Main Components
//!
//! - **types**: The `Movie` domain type
//! - **parser**: Decode JSON snapshot payloads into `Vec<Movie>`
//! - **error**: Error types for snapshot decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::parser::load_snapshot;
//! use std::path::Path;
//!
//! let movies = load_snapshot(Path::new("fixtures/now_playing.json"))?;
//! println!("Snapshot contains {} movies", movies.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::Movie;
