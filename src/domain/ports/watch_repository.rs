use crate::domain::entities::watch_item::WatchItem;
use crate::domain::error::DomainError;

/// Persistence for the watch list. The whole list is small enough to be
/// loaded and saved atomically.
pub trait WatchRepository: Send + Sync {
    fn load(&self) -> Result<Vec<WatchItem>, DomainError>;
    fn save(&self, items: &[WatchItem]) -> Result<(), DomainError>;
}
