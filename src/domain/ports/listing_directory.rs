use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;
use async_trait::async_trait;

/// Directory of listed companies, grouped by sector.
#[async_trait]
pub trait ListingDirectory: Send + Sync {
    /// All company codes listed in `sector`, in directory order.
    async fn codes_in_sector(
        &self,
        sector: &str,
        session: &dyn AuthSession,
    ) -> Result<Vec<String>, DomainError>;
}
