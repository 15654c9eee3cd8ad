use crate::domain::entities::disclosure::Disclosure;
use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;
use async_trait::async_trait;

/// Source of a company's financial disclosure history.
///
/// The returned history is unordered; callers sort by disclosure date.
/// A failure here means the company is simply not evaluable this pass,
/// so the screener collapses errors to an empty history.
#[async_trait]
pub trait DisclosureStore: Send + Sync {
    async fn fetch(
        &self,
        code: &str,
        session: &dyn AuthSession,
    ) -> Result<Vec<Disclosure>, DomainError>;
}
