//! I/O operations for probing.
//!
//! Everything that touches the network or an output stream lives here,
//! behind the [`HttpClient`] / [`Session`] traits so the fetcher can be
//! driven by test doubles.

mod fetcher;
mod http;
mod report;

#[cfg(feature = "reqwest")]
mod client;

pub use fetcher::Fetcher;
pub use http::{HttpClient, Session};
pub use report::report;

#[cfg(feature = "reqwest")]
pub use client::{ClientSetting, ClientSettingError};
#[cfg(feature = "reqwest")]
pub use http::{ReqwestClient, ReqwestSession};
