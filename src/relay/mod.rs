// SPDX-License-Identifier: MPL-2.0
//! Mail relay client used by the contact form.
//!
//! The relay is a third-party HTTPS service that turns a JSON request into
//! an email using a template stored on its side. The request names the
//! service, the template and the public key of the account, and carries the
//! form fields as template parameters.

use crate::config::{RelayConfig, DEFAULT_RELAY_ENDPOINT, RELAY_TIMEOUT_SECS};
use crate::error::RelayError;
use serde::Serialize;
use std::time::Duration;

/// Format of the `time` template variable, e.g. `10/18/2026, 3:04:05 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// What the visitor typed into the contact form, plus the send time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Local time the message was submitted, pre-formatted for the template.
    #[serde(rename = "time")]
    pub timestamp: String,
}

impl ContactPayload {
    /// Builds a payload stamped with the current local time.
    #[must_use]
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            name,
            email,
            subject,
            message,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Relay account details, all required to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Credentials {
    /// Extracts credentials from config; `None` unless service, template and
    /// public key are all set and non-blank.
    #[must_use]
    pub fn from_config(config: &RelayConfig) -> Option<Self> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
        };

        Some(Self {
            endpoint: present(&config.endpoint)
                .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            service_id: present(&config.service_id)?,
            template_id: present(&config.template_id)?,
            public_key: present(&config.public_key)?,
        })
    }
}

/// JSON body of a relay request.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}

/// Builds the request body for `payload`.
#[must_use]
pub fn request_body<'a>(credentials: &'a Credentials, payload: &'a ContactPayload) -> RelayRequest<'a> {
    RelayRequest {
        service_id: &credentials.service_id,
        template_id: &credentials.template_id,
        user_id: &credentials.public_key,
        template_params: payload,
    }
}

/// Sends contact messages through the relay.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

impl RelayClient {
    #[must_use]
    pub fn new(config: &RelayConfig) -> Self {
        let credentials = Credentials::from_config(config);
        if credentials.is_none() {
            log::info!("Mail relay not configured; contact form submissions will fail");
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(RELAY_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("Falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });

        Self { http, credentials }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Posts `payload` to the relay. Any non-2xx answer is a failure.
    pub async fn send(&self, payload: ContactPayload) -> Result<(), RelayError> {
        let credentials = self.credentials.as_ref().ok_or(RelayError::NotConfigured)?;

        let response = self
            .http
            .post(&credentials.endpoint)
            .json(&request_body(credentials, &payload))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RelayConfig {
        RelayConfig {
            endpoint: None,
            service_id: Some("service_demo".into()),
            template_id: Some("template_demo".into()),
            public_key: Some("public_demo".into()),
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice work".into(),
            timestamp: "10/18/2026, 3:04:05 PM".into(),
        }
    }

    #[test]
    fn credentials_require_every_field() {
        assert!(Credentials::from_config(&config()).is_some());

        let mut missing = config();
        missing.template_id = None;
        assert!(Credentials::from_config(&missing).is_none());

        let mut blank = config();
        blank.public_key = Some("   ".into());
        assert!(Credentials::from_config(&blank).is_none());
    }

    #[test]
    fn endpoint_defaults_when_unset() {
        let credentials = Credentials::from_config(&config()).expect("complete config");
        assert_eq!(credentials.endpoint, DEFAULT_RELAY_ENDPOINT);

        let mut custom = config();
        custom.endpoint = Some("https://relay.example/send".into());
        let credentials = Credentials::from_config(&custom).expect("complete config");
        assert_eq!(credentials.endpoint, "https://relay.example/send");
    }

    #[test]
    fn request_body_nests_payload_as_template_params() {
        let credentials = Credentials::from_config(&config()).expect("complete config");
        let payload = payload();
        let json = serde_json::to_value(request_body(&credentials, &payload))
            .expect("request serializes");

        assert_eq!(json["service_id"], "service_demo");
        assert_eq!(json["template_id"], "template_demo");
        assert_eq!(json["user_id"], "public_demo");
        assert_eq!(json["template_params"]["name"], "Ada");
        assert_eq!(json["template_params"]["message"], "Nice work");
        assert_eq!(json["template_params"]["time"], "10/18/2026, 3:04:05 PM");
        assert!(json["template_params"].get("timestamp").is_none());
    }

    #[test]
    fn new_payload_is_timestamped() {
        let payload = ContactPayload::new("a".into(), "b".into(), "c".into(), "d".into());
        assert!(payload.timestamp.contains(", "));
        assert!(payload.timestamp.ends_with("AM") || payload.timestamp.ends_with("PM"));
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let client = RelayClient::new(&RelayConfig::default());
        assert!(!client.is_configured());
        assert_eq!(client.send(payload()).await, Err(RelayError::NotConfigured));
    }
}
