//! src/waitlist_client.rs

use crate::domain::WaitlistEmail;
use reqwest::{header, multipart, Client, Response, Url};
use serde_json::Value;

/// Shown when an endpoint rejects the submission without saying why.
pub const GENERIC_REJECTION_MESSAGE: &str = "Something went wrong. Please try again.";
/// Shown when an endpoint could not be reached or answered with garbage.
pub const GENERIC_TRANSPORT_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to exchange the waitlist form with a form endpoint")]
    Transport(#[from] reqwest::Error),
}

impl SubmissionError {
    /// Message for the visitor. Transport causes stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected(message) => message.clone(),
            SubmissionError::Transport(_) => GENERIC_TRANSPORT_MESSAGE.to_string(),
        }
    }
}

/// Body returned by a form endpoint, e.g. `{"errors":[{"message":"..."}]}`.
/// Any JSON is accepted; only a usable first error message is picked out of it.
#[derive(Debug)]
struct EndpointReply(Value);

impl EndpointReply {
    fn first_message(&self) -> Option<String> {
        match self.0.get("errors")?.get(0)?.get("message")? {
            Value::String(message) if !message.is_empty() => Some(message.clone()),
            Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            _ => None,
        }
    }
}

/// Delivers waitlist signups to two hosted form endpoints.
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    http_client: Client,
    primary_endpoint: Url,
    secondary_endpoint: Url,
}

impl WaitlistClient {
    pub fn new(primary_endpoint: Url, secondary_endpoint: Url) -> Self {
        Self {
            http_client: Client::new(),
            primary_endpoint,
            secondary_endpoint,
        }
    }

    pub fn primary_endpoint(&self) -> &Url {
        &self.primary_endpoint
    }

    pub fn secondary_endpoint(&self) -> &Url {
        &self.secondary_endpoint
    }

    /// Submit `email` to both endpoints and fold the result into a single outcome.
    /// Never fails: every error ends up as a `SubmissionOutcome::Failure`.
    #[tracing::instrument(
        name = "Submitting email to the waitlist endpoints",
        skip(self, email),
        fields(waitlist_email = %email)
    )]
    pub async fn submit(&self, email: &WaitlistEmail) -> SubmissionOutcome {
        match self.try_submit(email).await {
            Ok(()) => SubmissionOutcome::Success,
            Err(e) => {
                match &e {
                    SubmissionError::Rejected(_) => tracing::warn!(
                        error.message = %e,
                        "A form endpoint rejected the waitlist signup."
                    ),
                    SubmissionError::Transport(_) => tracing::error!(
                        error.cause_chain = ?e,
                        error.message = %e,
                        "Failed to deliver the waitlist signup."
                    ),
                }
                SubmissionOutcome::Failure(e.user_message())
            }
        }
    }

    /// Primary first, then secondary; both requests always complete before
    /// any error is reported. The primary's structured error wins over the secondary's.
    pub async fn try_submit(&self, email: &WaitlistEmail) -> Result<(), SubmissionError> {
        let primary = self.post_form(&self.primary_endpoint, email).await?;
        let secondary = self.post_form(&self.secondary_endpoint, email).await?;

        if primary.status().is_success() && secondary.status().is_success() {
            return Ok(());
        }
        tracing::info!(
            primary_status = %primary.status(),
            secondary_status = %secondary.status(),
            "Waitlist signup was not accepted by both endpoints."
        );

        let primary_reply = read_reply(primary).await?;
        let secondary_reply = read_reply(secondary).await?;
        let message = primary_reply
            .first_message()
            .or_else(|| secondary_reply.first_message())
            .unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_owned());
        Err(SubmissionError::Rejected(message))
    }

    #[tracing::instrument(name = "Posting waitlist form", skip(self, email))]
    async fn post_form(
        &self,
        endpoint: &Url,
        email: &WaitlistEmail,
    ) -> Result<Response, reqwest::Error> {
        self.http_client
            .post(endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .multipart(form_payload(email))
            .send()
            .await
    }
}

/// `multipart::Form` is consumed on send, so each endpoint gets its own copy.
fn form_payload(email: &WaitlistEmail) -> multipart::Form {
    multipart::Form::new().text("email", email.as_ref().to_owned())
}

/// A body that is not JSON at all is a transport failure.
async fn read_reply(response: Response) -> Result<EndpointReply, reqwest::Error> {
    Ok(EndpointReply(response.json().await?))
}
