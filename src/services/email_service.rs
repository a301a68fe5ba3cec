use chrono::Utc;
use tokio::task::JoinHandle;
use crate::config::constants::sleep_duration_millis;
use crate::errors::{ArcaError, ArcaResult};
use crate::structs::cause::Cause;
use crate::structs::config::email_config::EmailConfig;
use crate::structs::send_receipt::SendReceipt;

/// Simulated cause mailer: delivery is a configurable pause.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub async fn send(&self, cause: &Cause) -> ArcaResult<SendReceipt> {
        let id = cause.id.ok_or_else(|| {
            ArcaError::validation_error("id", "none", "only stored causes can be emailed")
        })?;

        log::info!("📨 Sending cause {} from {} to {} recipients", id, self.config.from, self.config.to.len());
        tokio::time::sleep(sleep_duration_millis(self.config.pause_ms)).await;
        log::info!("✅ Cause {} sent after {} ms", id, self.config.pause_ms);

        Ok(SendReceipt {
            cause_id: Some(id),
            recipients: self.config.to.clone(),
            delivered: true,
            sent_at: Utc::now(),
        })
    }

    /// Fire and forget; failures only reach the log.
    pub fn send_async(&self, cause: Cause) {
        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&cause).await {
                log::warn!("⚠️ Asynchronous email for cause {:?} failed: {}", cause.id, e);
            }
        });
    }

    pub fn send_async_with_result(&self, cause: Cause) -> JoinHandle<ArcaResult<SendReceipt>> {
        let mailer = self.clone();
        tokio::spawn(async move {
            let result = mailer.send(&cause).await;
            if let Err(e) = &result {
                log::warn!("⚠️ Asynchronous email for cause {:?} failed: {}", cause.id, e);
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer() -> EmailService {
        EmailService::new(EmailConfig {
            from: "arca@localhost".to_string(),
            to: vec!["qa@example.com".to_string()],
            pause_ms: 0,
        })
    }

    #[tokio::test]
    async fn send_returns_a_delivered_receipt() {
        let mut cause = Cause::new("Missing parts", 4);
        cause.id = Some(8);

        let receipt = mailer().send_async_with_result(cause).await.unwrap().unwrap();

        assert!(receipt.delivered);
        assert_eq!(receipt.cause_id, Some(8));
        assert_eq!(receipt.recipients, vec!["qa@example.com".to_string()]);
    }

    #[tokio::test]
    async fn unsaved_causes_are_refused() {
        let error = mailer().send(&Cause::new("Draft", 0)).await.unwrap_err();
        assert_eq!(error.status_code(), 400);
    }
}
