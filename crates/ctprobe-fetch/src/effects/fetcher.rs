use tracing::{debug, warn};

use crate::core::classify_content_type;
use crate::data::{FetchOptions, RequestOutcome};
use crate::effects::http::{HttpClient, Session};

/// Runs one probe: open a session, GET the URL, read its content type.
///
/// The session lives in [`Fetcher::fetch`]'s scope only, so it is dropped
/// exactly once whichever way the probe ends.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher with the provided HTTP client.
    pub fn new(client: C) -> Self { Self { client } }

    pub fn client(&self) -> &C { &self.client }

    /// Probe the URL configured in `options`.
    pub async fn run(&self, options: &FetchOptions) -> RequestOutcome {
        self.fetch(&options.url).await
    }

    /// Probe `url` and fold every failure into the returned outcome.
    #[tracing::instrument(name = "fetch", skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> RequestOutcome {
        let mut session = match self.client.open() {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "failed to open session");
                return RequestOutcome::init_failed();
            }
        };
        debug!("session opened");

        if let Err(e) = session.set_url(url) {
            warn!(error = %e, "session rejected URL");
            return RequestOutcome::transfer_failed();
        }

        debug!("performing transfer");
        if let Err(e) = session.perform().await {
            warn!(error = %e, "transfer failed");
            return RequestOutcome::transfer_failed();
        }

        let query = session.content_type();
        if let Err(e) = &query {
            warn!(error = %e, "content type query failed");
        }
        let outcome = classify_content_type(query);
        debug!(status = %outcome.status(), content_type = outcome.content_type(), "transfer finished");
        outcome
    }
}
