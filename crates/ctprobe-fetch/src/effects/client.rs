use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Client, Proxy, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientSettingError {
    #[error("Invalid proxy URL {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Knobs applied when a [`ReqwestClient`](crate::ReqwestClient) opens a session.
///
/// The default is a plain client: no explicit proxy, no timeouts, and the
/// usual proxy environment variables honoured. Redirects are never followed:
/// a 3xx answer is the response whose content type gets reported.
#[derive(Debug, Clone, Default)]
pub struct ClientSetting {
    pub proxies: Option<Vec<Url>>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Ignore `HTTP_PROXY`, `HTTPS_PROXY` and friends.
    pub no_system_proxy: bool,
}

impl ClientSetting {
    pub fn proxy(mut self, url: Url) -> Self {
        self.proxies.get_or_insert_with(Vec::new).push(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn no_system_proxy(mut self) -> Self {
        self.no_system_proxy = true;
        self
    }

    pub fn build(&self) -> Result<Client, ClientSettingError> {
        let mut cb = Client::builder().redirect(Policy::none());

        if let Some(timeout) = self.timeout {
            cb = cb.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            cb = cb.connect_timeout(timeout);
        }

        if self.no_system_proxy {
            cb = cb.no_proxy();
        }

        for u in self.proxies.iter().flatten() {
            let proxy = Proxy::all(u.as_str()).map_err(|source| ClientSettingError::Proxy {
                url: u.to_string(),
                source,
            })?;
            cb = cb.proxy(proxy);
        }

        cb.build().map_err(ClientSettingError::Build)
    }
}
