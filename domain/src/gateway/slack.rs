use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use log::*;
use service::config::Config;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Plaintext greeting posted back to every slash command's `response_url`.
pub const GREETING: &str = "Hello from resourceful!";

/// Client for posting messages back to Slack through a slash command's `response_url`.
#[derive(Clone, Debug)]
pub struct Notifier {
    client: reqwest::Client,
}

impl Notifier {
    /// Create a notifier whose requests give up after the configured notification timeout.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::with_timeout(Duration::from_secs(config.notification_timeout_secs))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// POST the greeting to `response_url` and wait for Slack's answer.
    pub async fn send_greeting(&self, response_url: &str) -> Result<(), Error> {
        let response = self
            .client
            .post(response_url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(GREETING)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(format!(
                    "response_url answered with {status}"
                ))),
            })
        }
    }

    /// Fire-and-forget variant of `send_greeting`.
    ///
    /// The POST runs on a detached task: it is attempted at most once, and a
    /// failure is logged and dropped. The returned handle may be ignored.
    pub fn notify(&self, response_url: String) -> JoinHandle<()> {
        let notifier = self.clone();

        tokio::spawn(async move {
            match notifier.send_greeting(&response_url).await {
                Ok(()) => debug!("Greeting delivered to response_url"),
                Err(e) => warn!("Failed to deliver greeting to response_url: {e:?}"),
            }
        })
    }
}
