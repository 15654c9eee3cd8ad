//! Shared mock ports and fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use sectorwatch::application::screen_sector::CancelToken;
use sectorwatch::domain::entities::disclosure::Disclosure;
use sectorwatch::domain::entities::watch_item::WatchItem;
use sectorwatch::domain::error::DomainError;
use sectorwatch::domain::ports::auth_session::AuthSession;
use sectorwatch::domain::ports::disclosure_store::DisclosureStore;
use sectorwatch::domain::ports::listing_directory::ListingDirectory;
use sectorwatch::domain::ports::notifier::Notifier;
use sectorwatch::domain::ports::price_lookup::{PriceLookup, Quote};
use sectorwatch::domain::ports::progress_sink::ProgressSink;
use sectorwatch::domain::ports::watch_repository::WatchRepository;

pub struct TestSession {
    pub valid: bool,
}

impl AuthSession for TestSession {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn token(&self) -> &str {
        "test-token"
    }
}

pub fn valid_session() -> TestSession {
    TestSession { valid: true }
}

pub struct FixedListing {
    pub codes: Vec<String>,
}

impl FixedListing {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ListingDirectory for FixedListing {
    async fn codes_in_sector(
        &self,
        _sector: &str,
        _session: &dyn AuthSession,
    ) -> Result<Vec<String>, DomainError> {
        Ok(self.codes.clone())
    }
}

pub struct FailingListing;

#[async_trait]
impl ListingDirectory for FailingListing {
    async fn codes_in_sector(
        &self,
        _sector: &str,
        _session: &dyn AuthSession,
    ) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Network("listing endpoint down".into()))
    }
}

pub struct FixedDisclosureStore {
    pub by_code: HashMap<String, Vec<Disclosure>>,
}

impl FixedDisclosureStore {
    pub fn new() -> Self {
        Self {
            by_code: HashMap::new(),
        }
    }

    pub fn with(mut self, code: &str, history: Vec<Disclosure>) -> Self {
        self.by_code.insert(code.to_string(), history);
        self
    }
}

#[async_trait]
impl DisclosureStore for FixedDisclosureStore {
    async fn fetch(
        &self,
        code: &str,
        _session: &dyn AuthSession,
    ) -> Result<Vec<Disclosure>, DomainError> {
        Ok(self.by_code.get(code).cloned().unwrap_or_default())
    }
}

pub struct FailingDisclosureStore;

#[async_trait]
impl DisclosureStore for FailingDisclosureStore {
    async fn fetch(
        &self,
        _code: &str,
        _session: &dyn AuthSession,
    ) -> Result<Vec<Disclosure>, DomainError> {
        Err(DomainError::Network("statements endpoint down".into()))
    }
}

pub struct FixedPriceLookup {
    pub price: Option<f64>,
    pub valuation_ratio: Option<f64>,
}

#[async_trait]
impl PriceLookup for FixedPriceLookup {
    async fn current(&self, _code: &str) -> Result<Quote, DomainError> {
        Ok(Quote {
            price: self.price,
            valuation_ratio: self.valuation_ratio,
        })
    }
}

/// Per-code prices for refresh tests; unknown codes fail the lookup.
pub struct PriceTable {
    pub prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new(prices: &[(&str, f64)]) -> Self {
        Self {
            prices: prices
                .iter()
                .map(|(code, price)| (code.to_string(), *price))
                .collect(),
        }
    }
}

#[async_trait]
impl PriceLookup for PriceTable {
    async fn current(&self, code: &str) -> Result<Quote, DomainError> {
        match self.prices.get(code) {
            Some(price) => Ok(Quote {
                price: Some(*price),
                valuation_ratio: None,
            }),
            None => Err(DomainError::Network(format!("no quote for {code}"))),
        }
    }
}

pub struct FailingPriceLookup;

#[async_trait]
impl PriceLookup for FailingPriceLookup {
    async fn current(&self, _code: &str) -> Result<Quote, DomainError> {
        Err(DomainError::Network("quote endpoint down".into()))
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub calls: Mutex<Vec<(f64, String)>>,
}

impl ProgressSink for RecordingProgress {
    fn report(&self, fraction: f64, label: &str) {
        self.calls.lock().unwrap().push((fraction, label.to_string()));
    }
}

/// Cancels the pass from inside the first progress report, so the
/// screener stops at the next between-company check.
pub struct CancellingProgress {
    pub token: CancelToken,
}

impl ProgressSink for CancellingProgress {
    fn report(&self, _fraction: f64, _label: &str) {
        self.token.cancel();
    }
}

#[derive(Default)]
pub struct MemoryWatchRepo {
    pub items: Mutex<Vec<WatchItem>>,
}

impl MemoryWatchRepo {
    pub fn with_items(items: Vec<WatchItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl WatchRepository for MemoryWatchRepo {
    fn load(&self) -> Result<Vec<WatchItem>, DomainError> {
        Ok(self.items.lock().unwrap().clone())
    }

    fn save(&self, items: &[WatchItem]) -> Result<(), DomainError> {
        *self.items.lock().unwrap() = items.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _message: &str) -> Result<(), DomainError> {
        Err(DomainError::Network("webhook down".into()))
    }
}

pub fn disclosure(
    date: &str,
    operating_profit: f64,
    net_sales: f64,
    net_income: f64,
    total_assets: f64,
    net_assets: f64,
) -> Disclosure {
    Disclosure {
        disclosed_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        operating_profit: Some(operating_profit),
        net_sales: Some(net_sales),
        net_income: Some(net_income),
        total_assets: Some(total_assets),
        net_assets: Some(net_assets),
    }
}

/// Two-filing history producing the given prior/current operating profit
/// and current net sales, with a healthy balance sheet.
pub fn history(op_prior: f64, op_now: f64, sales_now: f64) -> Vec<Disclosure> {
    vec![
        disclosure("2024-11-10", op_prior, sales_now, 40.0, 1000.0, 400.0),
        disclosure("2025-05-10", op_now, sales_now, 50.0, 1000.0, 400.0),
    ]
}
