use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::models::{NewOrder, Order};

pub mod synced;
pub mod unsync;

pub use synced::SyncedOrderStore;
pub use unsync::UnsyncOrderStore;

/// Shared contract for both ledger variants. The handler layer only ever sees
/// this trait, so the HTTP code path is identical no matter which store is
/// wired in at startup.
pub trait OrderStore: Send + Sync {
    /// Assigns the next identifier, stamps the creation time, appends the new
    /// order to the ledger and returns it.
    fn create(&self, input: NewOrder) -> Order;

    /// Returns an owned snapshot of the ledger in insertion order.
    fn list(&self) -> Vec<Order>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreVariant {
    Unsync,
    Synced,
}

impl StoreVariant {
    pub fn banner(&self) -> &'static str {
        match self {
            StoreVariant::Unsync => "unsynchronized (race-condition fixture)",
            StoreVariant::Synced => "synchronized (mutex-protected)",
        }
    }
}

impl fmt::Display for StoreVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreVariant::Unsync => write!(f, "unsync"),
            StoreVariant::Synced => write!(f, "synced"),
        }
    }
}

impl FromStr for StoreVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unsync" | "unsynchronized" | "broken" => Ok(StoreVariant::Unsync),
            "synced" | "synchronized" | "mutex" => Ok(StoreVariant::Synced),
            other => Err(format!("unknown store variant: {other}")),
        }
    }
}

pub fn for_variant(variant: StoreVariant) -> Arc<dyn OrderStore> {
    match variant {
        StoreVariant::Unsync => Arc::new(UnsyncOrderStore::new()),
        StoreVariant::Synced => Arc::new(SyncedOrderStore::new()),
    }
}
