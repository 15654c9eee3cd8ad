use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Outbound notification channel for position alerts.
/// Delivery is best-effort; callers log failures and move on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), DomainError>;
}
