use std::sync::Arc;

use crate::domain::entities::watch_item::WatchItem;
use crate::domain::error::DomainError;
use crate::domain::ports::watch_repository::WatchRepository;

pub struct WatchUseCase {
    repo: Arc<dyn WatchRepository>,
}

impl WatchUseCase {
    pub fn new(repo: Arc<dyn WatchRepository>) -> Self {
        Self { repo }
    }

    pub fn add(&self, code: &str, entry_price: f64) -> Result<WatchItem, DomainError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(DomainError::InvalidInput("company code must not be empty".into()));
        }
        if entry_price <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "entry price must be positive, got {entry_price}"
            )));
        }

        let mut items = self.repo.load()?;
        if items.iter().any(|item| item.code == code) {
            return Err(DomainError::InvalidInput(format!(
                "{code} is already on the watch list"
            )));
        }

        let item = WatchItem::new(code.to_string(), entry_price);
        items.push(item.clone());
        self.repo.save(&items)?;
        Ok(item)
    }

    pub fn remove(&self, code: &str) -> Result<(), DomainError> {
        let mut items = self.repo.load()?;
        let before = items.len();
        items.retain(|item| item.code != code);
        if items.len() == before {
            return Err(DomainError::NotFound(format!("{code} is not on the watch list")));
        }
        self.repo.save(&items)
    }

    pub fn list(&self) -> Result<Vec<WatchItem>, DomainError> {
        self.repo.load()
    }
}
