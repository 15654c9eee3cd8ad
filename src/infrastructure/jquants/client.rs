//! Shared HTTP plumbing for the statements provider adapters.

pub const DEFAULT_BASE_URL: &str = "https://api.jquants.com/v1";

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("sectorwatch/0.1")
        .build()
        .unwrap_or_default()
}
