/// Endpoint probed when no URL is given.
pub const DEFAULT_URL: &str = "https://httpbin.org/get";

/// Configuration for a single probe.
///
/// # Examples
///
/// ```
/// use ctprobe_fetch::{DEFAULT_URL, FetchOptions};
///
/// let options = FetchOptions::default();
/// assert_eq!(options.url, DEFAULT_URL);
///
/// let options = FetchOptions::default().url("http://127.0.0.1:8080/health");
/// assert_eq!(options.url, "http://127.0.0.1:8080/health");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Absolute URL to GET.
    ///
    /// Not validated here; a malformed URL is rejected by the transport
    /// and surfaces as a failed transfer.
    ///
    /// Default: [`DEFAULT_URL`]
    pub url: String,
}

impl FetchOptions {
    /// Set the target URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}
