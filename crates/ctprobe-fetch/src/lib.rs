//! Single-request HTTP probing with content-type inspection.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable outcome and option types
//! - [`core`] - Pure classification of what a session reported
//! - [`effects`] - Transport traits, the fetcher, and the report writer
//!
//! # Key Features
//!
//! - **Scoped Sessions**: A session is opened per request and released by drop on every path
//! - **Typed Outcomes**: Every exit path lands in one [`Status`] with a fixed exit code
//! - **Injectable Transport**: [`HttpClient`] / [`Session`] let tests swap the network out

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::classify_content_type;
pub use data::{DEFAULT_URL, FetchOptions, RequestOutcome, Status};
pub use effects::{Fetcher, HttpClient, Session, report};

#[cfg(feature = "reqwest")]
pub use effects::{ClientSetting, ClientSettingError, ReqwestClient, ReqwestSession};
#[cfg(feature = "reqwest")]
pub use reqwest::Url;

pub use error::{FetchError, Result};
