//! Immutable data types for a probe request.
//!
//! This module holds the request options and the outcome a probe produces.
//! Nothing here performs I/O.

pub mod options;
pub mod outcome;

pub use options::{DEFAULT_URL, FetchOptions};
pub use outcome::{RequestOutcome, Status};
