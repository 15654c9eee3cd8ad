pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use crate::application::refresh::{PositionReport, RefreshUseCase};
use crate::application::screen_sector::{CancelToken, ScreenSectorUseCase, SectorScreenReport};
use crate::application::watch::WatchUseCase;
use crate::domain::entities::watch_item::WatchItem;
use crate::domain::error::DomainError;
use crate::domain::ports::auth_session::AuthSession;
use crate::domain::ports::disclosure_store::DisclosureStore;
use crate::domain::ports::listing_directory::ListingDirectory;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::price_lookup::PriceLookup;
use crate::domain::ports::progress_sink::ProgressSink;
use crate::domain::ports::watch_repository::WatchRepository;
use crate::domain::values::metrics::GrowthPolicy;
use crate::infrastructure::jquants::listing::JquantsListingDirectory;
use crate::infrastructure::jquants::statements::JquantsDisclosureStore;
use crate::infrastructure::notify::{NullNotifier, WebhookNotifier};
use crate::infrastructure::progress::ConsoleProgress;
use crate::infrastructure::quotes::YahooPriceLookup;
use crate::infrastructure::watchfile::JsonWatchFile;

pub struct SectorWatch {
    screen_uc: ScreenSectorUseCase,
    watch_uc: WatchUseCase,
    refresh_uc: RefreshUseCase,
}

impl SectorWatch {
    /// Build with the default adapters, configured from the environment:
    /// `SECTORWATCH_WATCH` for the watch-list file and
    /// `SECTORWATCH_WEBHOOK` for the optional alert webhook.
    pub fn new(policy: GrowthPolicy) -> Self {
        let watch_path =
            std::env::var("SECTORWATCH_WATCH").unwrap_or_else(|_| "./watchlist.json".into());

        let listing: Arc<dyn ListingDirectory> = Arc::new(JquantsListingDirectory::new());
        let disclosures: Arc<dyn DisclosureStore> = Arc::new(JquantsDisclosureStore::new());
        let prices: Arc<dyn PriceLookup> = Arc::new(YahooPriceLookup::new());
        let progress: Arc<dyn ProgressSink> = Arc::new(ConsoleProgress);
        let repo: Arc<dyn WatchRepository> = Arc::new(JsonWatchFile::new(watch_path));
        let notifier: Arc<dyn Notifier> = match std::env::var("SECTORWATCH_WEBHOOK") {
            Ok(url) if !url.is_empty() => Arc::new(WebhookNotifier::new(url)),
            _ => Arc::new(NullNotifier),
        };

        Self::with_ports(listing, disclosures, prices, progress, repo, notifier, policy)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_ports(
        listing: Arc<dyn ListingDirectory>,
        disclosures: Arc<dyn DisclosureStore>,
        prices: Arc<dyn PriceLookup>,
        progress: Arc<dyn ProgressSink>,
        repo: Arc<dyn WatchRepository>,
        notifier: Arc<dyn Notifier>,
        policy: GrowthPolicy,
    ) -> Self {
        Self {
            screen_uc: ScreenSectorUseCase::new(
                listing,
                disclosures,
                prices.clone(),
                progress,
                policy,
            ),
            watch_uc: WatchUseCase::new(repo.clone()),
            refresh_uc: RefreshUseCase::new(repo, prices, notifier),
        }
    }

    // Delegating methods
    pub async fn screen_sector(
        &self,
        sector: &str,
        limit: usize,
        session: &dyn AuthSession,
        cancel: &CancelToken,
    ) -> Result<SectorScreenReport, DomainError> {
        self.screen_uc.execute(sector, limit, session, cancel).await
    }

    pub fn watch_add(&self, code: &str, entry_price: f64) -> Result<WatchItem, DomainError> {
        self.watch_uc.add(code, entry_price)
    }

    pub fn watch_remove(&self, code: &str) -> Result<(), DomainError> {
        self.watch_uc.remove(code)
    }

    pub fn watch_list(&self) -> Result<Vec<WatchItem>, DomainError> {
        self.watch_uc.list()
    }

    pub async fn refresh(&self, notify: bool) -> Result<Vec<PositionReport>, DomainError> {
        self.refresh_uc.execute(notify).await
    }
}
