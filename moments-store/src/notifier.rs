use async_trait::async_trait;
use moments_core::{CoreError, CoreResult, EmailMessage, Notifier};
use moments_shared::Masked;
use std::time::Duration;
use tracing::{error, info};

/// Sends email through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendNotifier {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResendNotifier {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, message: &EmailMessage) -> CoreResult<()> {
        let resp = self
            .client
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| CoreError::Notification(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            info!("Email '{}' sent to {}", message.subject, Masked(&message.to));
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            error!("Email provider rejected message ({}): {}", status, body);
            Err(CoreError::Notification(format!("provider returned {}", status)))
        }
    }
}

/// Drops every message. Used when no email provider key is configured.
#[derive(Clone, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, message: &EmailMessage) -> CoreResult<()> {
        info!(
            "Email provider not configured, skipping '{}' to {}",
            message.subject,
            Masked(&message.to)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emails_url_strips_trailing_slash() {
        let notifier = ResendNotifier::new("https://api.resend.com/", "re_123").unwrap();
        assert_eq!(notifier.emails_url(), "https://api.resend.com/emails");
    }

    #[tokio::test]
    async fn test_noop_notifier_succeeds() {
        let msg = EmailMessage {
            from: "a@b.dev".into(),
            to: "ops@example.com".into(),
            subject: "hi".into(),
            html: "<p>hi</p>".into(),
        };
        assert!(NoopNotifier.send(&msg).await.is_ok());
    }
}
