use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;

use crate::persistence::SaveEmail;
use crate::persistence::SaveEmailRequest;
use crate::persistence::SaveEmailResult;

/// What the capture form needs from the server: one string in, one result
/// out. `Err` is reserved for the call itself failing; a server that answers
/// `success: false` is still `Ok`.
#[async_trait]
pub trait SaveEmailAction: Send + Sync {
    async fn save_email(
        &self,
        email: &str,
    ) -> Result<SaveEmailResult, anyhow::Error>;
}

/// In-process: the form and the action share an address space (server-side
/// rendering, the no-JS form route)
#[async_trait]
impl SaveEmailAction for SaveEmail {
    async fn save_email(
        &self,
        email: &str,
    ) -> Result<SaveEmailResult, anyhow::Error> {
        Ok(SaveEmail::save_email(self, email).await)
    }
}

/// Remote: `POST {base_url}/api/save-email`.
///
/// There is no timeout and no retry; a hung server leaves the form in
/// `Submitting` until the connection gives up.
pub struct HttpSaveEmail {
    http_client: Client,
    endpoint: String,
}

// establishing a HTTP connection is expensive, so one `Client` (and its
// connection pool) is kept for the lifetime of the action
impl HttpSaveEmail {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: format!("{}/api/save-email", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl SaveEmailAction for HttpSaveEmail {
    #[tracing::instrument(name = "Calling save-email endpoint", skip(self, email), fields(endpoint = %self.endpoint))]
    async fn save_email(
        &self,
        email: &str,
    ) -> Result<SaveEmailResult, anyhow::Error> {
        let result = self
            .http_client
            .post(&self.endpoint)
            .json(&SaveEmailRequest {
                email: email.to_owned(),
            })
            .send()
            .await
            .context("Failed to reach the save-email endpoint")?
            .error_for_status()
            .context("Save-email endpoint answered with an error status")?
            .json::<SaveEmailResult>()
            .await
            .context("Save-email endpoint answered with an unreadable body")?;
        Ok(result)
    }
}
