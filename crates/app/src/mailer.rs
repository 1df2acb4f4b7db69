//! Outbound mail through an HTTP relay.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Connection details for the mail relay.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Relay endpoint that accepts JSON messages, e.g. `"http://localhost:8025/api/send"`.
    pub relay_url: String,

    /// Bearer token for the relay, if it requires one.
    pub api_token: Option<String>,

    /// Sender address.
    pub from: String,
}

/// A plain-text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from mail relay: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailerError>;
}

#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: MailerConfig,
    http: Client,
}

impl HttpMailer {
    #[must_use]
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    from: &'a str,

    #[serde(flatten)]
    mail: &'a OutgoingMail,
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailerError> {
        let mut request = self.http.post(&self.config.relay_url).json(&RelayMessage {
            from: &self.config.from,
            mail,
        });

        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailerError::UnexpectedResponse(format!(
                "send failed with status {status}: {text}"
            )));
        }

        debug!(to = %mail.to, subject = %mail.subject, "mail accepted by relay");

        Ok(())
    }
}
