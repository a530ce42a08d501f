//! Pure transformations from session results to outcomes.
//!
//! No I/O happens here; the effects layer feeds these functions with what
//! the transport reported.

mod classify;

pub use classify::classify_content_type;
