use serde::{Deserialize, Serialize};

/// A watched position: a company code and the price it was entered at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchItem {
    pub code: String,
    pub entry_price: f64,
}

impl WatchItem {
    pub fn new(code: String, entry_price: f64) -> Self {
        Self { code, entry_price }
    }
}
