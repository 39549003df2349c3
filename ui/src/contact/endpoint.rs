//! Lead intake endpoint.
//!
//! Contract: `POST` the payload as JSON; a 2xx reply with a JSON body means
//! accepted; anything else carries an optional `{"error": "..."}` message.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::SiteConfig;

use super::error::{FormError, SubmitError, GENERIC_FAILURE};
use super::lead::LeadPayload;
use super::LeadForm;

/// Raw endpoint reply before interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointReply {
    pub status: u16,
    /// Parsed JSON body, or the parse failure message.
    pub body: Result<Value, String>,
}

impl EndpointReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Ok(body),
        }
    }

    pub fn unparsable(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            body: Err(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that accepts lead payloads. Real HTTP in the app, in-memory in tests.
pub trait LeadEndpoint {
    fn post(&self, payload: &LeadPayload) -> impl Future<Output = Result<EndpointReply, SubmitError>>;
}

/// Map a reply onto the submission outcome.
pub fn interpret_reply(reply: EndpointReply) -> Result<(), SubmitError> {
    let accepted = reply.is_success();
    match (accepted, reply.body) {
        (true, Ok(_)) => Ok(()),
        (true, Err(reason)) => Err(SubmitError::InvalidResponse(reason)),
        (false, Ok(body)) => {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_FAILURE);
            Err(SubmitError::Rejected(message.to_string()))
        }
        (false, Err(_)) => Err(SubmitError::Rejected(GENERIC_FAILURE.to_string())),
    }
}

/// One POST, interpreted.
pub async fn send<E: LeadEndpoint>(endpoint: &E, payload: &LeadPayload) -> Result<(), SubmitError> {
    let reply = endpoint.post(payload).await?;
    tracing::debug!(status = reply.status, "lead endpoint replied");
    interpret_reply(reply)
}

/// Begin, send, and settle a submission on a form the caller owns.
///
/// Returns `Err` only when the form refused to start (validation, already in
/// flight, already sent); endpoint failures end up in the form's status.
pub async fn submit<F: LeadForm, E: LeadEndpoint>(form: &mut F, endpoint: &E) -> Result<(), FormError> {
    let payload = form.begin_submission()?;
    let outcome = send(endpoint, &payload).await;
    form.finish_submission(outcome);
    Ok(())
}

/// `reqwest`-backed endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeadEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpLeadEndpoint {
    pub fn new(config: &SiteConfig) -> Result<Self, SubmitError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout_ms {
            Some(ms) => builder.timeout(std::time::Duration::from_millis(ms)),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            url: config.contact_endpoint_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LeadEndpoint for HttpLeadEndpoint {
    async fn post(&self, payload: &LeadPayload) -> Result<EndpointReply, SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.map_err(|err| err.to_string());
        Ok(EndpointReply { status, body })
    }
}
