pub mod auth_session;
pub mod disclosure_store;
pub mod listing_directory;
pub mod notifier;
pub mod price_lookup;
pub mod progress_sink;
pub mod watch_repository;
