/// Source of client sessions.
///
/// A session is the unit of one transfer: it is opened, pointed at a URL,
/// performed once and then queried. Dropping it releases whatever the
/// implementation holds.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Scripted doubles in tests
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Session handed out by [`HttpClient::open`].
    type Session: Session<Error = Self::Error>;

    /// Construct a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built (invalid proxy,
    /// TLS backend initialisation, resource exhaustion). No request has been
    /// sent when this fails.
    fn open(&self) -> Result<Self::Session, Self::Error>;
}

/// One configured transfer.
pub trait Session: Send {
    type Error: std::error::Error + Send + 'static;

    /// Set the URL the next [`Session::perform`] will GET.
    ///
    /// # Errors
    ///
    /// Implementations may reject a URL they cannot transfer.
    fn set_url(&mut self, url: &str) -> Result<(), Self::Error>;

    /// Perform the GET and wait for it to complete.
    ///
    /// A response with a non-2xx status is still a completed transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange did not complete (DNS failure,
    /// connection error, TLS failure, timeout, truncated body).
    fn perform(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Content type of the last completed transfer.
    ///
    /// `Ok(None)` if the response carried no `Content-Type`.
    fn content_type(&self) -> Result<Option<&str>, Self::Error>;
}

#[cfg(feature = "reqwest")]
mod reqwest_session {
    use super::*;
    use crate::effects::client::ClientSetting;
    use crate::error::{FetchError, Result};
    use reqwest::header::CONTENT_TYPE;
    use reqwest::{Client, Url};
    use tracing::{debug, trace};

    /// Production HTTP client using reqwest.
    ///
    /// Every [`HttpClient::open`] builds a new `reqwest::Client` from the
    /// stored [`ClientSetting`], so sessions share no connection state.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestClient {
        setting: ClientSetting,
    }

    impl ReqwestClient {
        pub fn new(setting: ClientSetting) -> Self { Self { setting } }

        pub fn setting(&self) -> &ClientSetting { &self.setting }
    }

    impl HttpClient for ReqwestClient {
        type Error = FetchError;
        type Session = ReqwestSession;

        fn open(&self) -> Result<ReqwestSession> {
            let client = self.setting.build()?;
            Ok(ReqwestSession::new(client))
        }
    }

    /// Session backed by a dedicated `reqwest::Client`.
    #[derive(Debug)]
    pub struct ReqwestSession {
        client: Client,
        url: Option<Url>,
        /// `Some` once a transfer completed; inner value is the raw header.
        received: Option<Option<String>>,
    }

    impl ReqwestSession {
        fn new(client: Client) -> Self {
            Self {
                client,
                url: None,
                received: None,
            }
        }
    }

    impl Session for ReqwestSession {
        type Error = FetchError;

        fn set_url(&mut self, url: &str) -> Result<()> {
            let parsed = Url::parse(url)
                .map_err(|e| FetchError::Transfer(format!("invalid URL {url}: {e}")))?;
            self.url = Some(parsed);
            self.received = None;
            Ok(())
        }

        async fn perform(&mut self) -> Result<()> {
            let url = self.url.clone().ok_or(FetchError::MissingUrl)?;
            self.received = None;

            let mut response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Transfer(e.to_string()))?;
            debug!(status = response.status().as_u16(), "response received");

            // header bytes are kept as sent; non-UTF-8 sequences are replaced, not rejected
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

            // the transfer only counts as complete once the body has arrived
            let mut drained = 0u64;
            while let Some(chunk) =
                response.chunk().await.map_err(|e| FetchError::Transfer(e.to_string()))?
            {
                drained += chunk.len() as u64;
            }
            trace!(bytes = drained, "body drained");

            self.received = Some(content_type);
            Ok(())
        }

        fn content_type(&self) -> Result<Option<&str>> {
            let received = self.received.as_ref().ok_or(FetchError::NotPerformed)?;
            Ok(received.as_deref())
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_session::{ReqwestClient, ReqwestSession};
