//! Cart persistence adapter over a [`KvStore`].

use std::rc::Rc;

use menucart_cart::{CartStore, LineItem};
use menucart_core::{ReportEvent, Reporter};

use crate::kv::KvStore;

/// Fixed storage key for the serialized cart.
pub const CART_STORAGE_KEY: &str = "pizza_cart_v1";

/// Serializes the cart as a JSON array of `{id, name, price, qty}` records
/// under a fixed key.
///
/// Failures never reach the cart manager: a missing or unparseable value
/// loads as an empty cart, a failed write is reported and swallowed. The
/// in-memory cart is the source of truth for the running session.
pub struct PersistentCartStore<K> {
    kv: K,
    reporter: Rc<dyn Reporter>,
    key: String,
}

impl<K: KvStore> PersistentCartStore<K> {
    pub fn new(kv: K, reporter: Rc<dyn Reporter>) -> Self {
        Self::with_key(kv, reporter, CART_STORAGE_KEY)
    }

    pub fn with_key(kv: K, reporter: Rc<dyn Reporter>, key: impl Into<String>) -> Self {
        Self {
            kv,
            reporter,
            key: key.into(),
        }
    }
}

impl<K: KvStore> CartStore for PersistentCartStore<K> {
    fn load(&self) -> Vec<LineItem> {
        let Some(raw) = self.kv.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<LineItem>>(&raw) {
            Ok(lines) => lines,
            Err(err) => {
                self.reporter.report(&ReportEvent::StorageLoadFailed {
                    detail: err.to_string(),
                });
                Vec::new()
            }
        }
    }

    fn save(&self, lines: &[LineItem]) {
        let raw = match serde_json::to_string(lines) {
            Ok(raw) => raw,
            Err(err) => {
                self.reporter.report(&ReportEvent::StorageSaveFailed {
                    detail: err.to_string(),
                });
                return;
            }
        };
        if let Err(err) = self.kv.set(&self.key, &raw) {
            self.reporter.report(&ReportEvent::StorageSaveFailed {
                detail: err.to_string(),
            });
        }
    }
}
