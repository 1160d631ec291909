use std::fmt::Debug;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::SubscriberEmail;
use crate::domain::SubscriptionRecord;
use crate::store::StoreError;
use crate::store::SubscriptionStore;
use crate::utils::error_chain_fmt;

/// Body of a save-email request: exactly one string, nothing else
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveEmailRequest {
    pub email: String,
}

/// The whole contract between the capture form and the server.
///
/// ```json
/// {"success": true}
/// {"success": false, "error": "Correo electrónico inválido."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEmailResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveEmailResult {
    pub fn saved() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

// the `#[error]` strings are shown to visitors as-is; they must never carry
// paths or io details (those live in the `#[source]`, which is only logged)
#[derive(thiserror::Error)]
pub enum SaveEmailError {
    #[error("Correo electrónico inválido.")]
    InvalidEmail(String),
    #[error("Error interno del servidor al guardar el correo.")]
    StorageFailure(#[source] StoreError),
}

impl Debug for SaveEmailError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<Result<(), SaveEmailError>> for SaveEmailResult {
    fn from(value: Result<(), SaveEmailError>) -> Self {
        match value {
            Ok(()) => Self::saved(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Server side of the capture pipeline: re-validate, then append one record.
///
/// Client-side checks are a convenience only; everything that reaches the
/// store passes through `SubscriberEmail::parse` here. Cheap to clone, and
/// meant to be shared by every request (`web::Data<SaveEmail>`).
#[derive(Clone)]
pub struct SaveEmail {
    store: Arc<dyn SubscriptionStore>,
}

impl SaveEmail {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self { Self { store } }

    /// Never fails: every error is logged and folded into the returned
    /// `SaveEmailResult`.
    #[tracing::instrument(
        name = "Saving subscriber email",
        skip(self, email),
        fields(subscriber_email = %email)
    )]
    pub async fn save_email(
        &self,
        email: &str,
    ) -> SaveEmailResult {
        let outcome = self.try_save_email(email).await;
        match &outcome {
            Ok(()) => tracing::info!("subscriber email saved"),
            Err(e @ SaveEmailError::InvalidEmail(_)) => tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "rejected subscriber email"
            ),
            Err(e @ SaveEmailError::StorageFailure(_)) => tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "failed to store subscriber email"
            ),
        }
        outcome.into()
    }

    /// Validation happens before any I/O, so a rejected email leaves no trace
    /// in the store (not even its directory).
    pub async fn try_save_email(
        &self,
        email: &str,
    ) -> Result<(), SaveEmailError> {
        let email =
            SubscriberEmail::parse(email.to_owned()).map_err(SaveEmailError::InvalidEmail)?;
        let record = SubscriptionRecord::new(email);
        self.store
            .append(&record)
            .await
            .map_err(SaveEmailError::StorageFailure)
    }
}
