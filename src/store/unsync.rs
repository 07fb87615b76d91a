use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::models::{NewOrder, Order};

use super::OrderStore;

/// Ledger with no synchronization across its compound operations — the
/// race-condition fixture. Do not use this variant for anything but
/// demonstrating the bug.
///
/// Rust rules out the rawest form of this defect: an unlocked read of
/// a `Vec` another thread is appending to is a data race, which the language
/// defines as undefined behavior. Each individual access below is therefore
/// safe on its own (an atomic counter, a lock held only for a single push or
/// copy), but nothing makes the read-counter / build / increment / append
/// sequence atomic. That compound-operation race is the observable defect:
/// two concurrent `create` calls can read the same counter value and hand out
/// duplicate ids, and a `list` can observe a ledger state that matches no
/// single completed `create`.
pub struct UnsyncOrderStore {
    next_id: AtomicU64,
    ledger: Mutex<Vec<Order>>,
}

impl UnsyncOrderStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ledger: Mutex::new(Vec::new()),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, Vec<Order>> {
        self.ledger.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for UnsyncOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for UnsyncOrderStore {
    fn create(&self, input: NewOrder) -> Order {
        // Counter read and counter write are two separate operations; another
        // create can slip in between and observe the same id.
        let id = self.next_id.load(Ordering::Relaxed);

        let order = Order {
            id,
            product: input.product,
            quantity: input.quantity,
            price: input.price,
            created_at: Utc::now(),
        };

        self.next_id.store(id + 1, Ordering::Relaxed);

        // The lock covers only this single push, never the compound create.
        self.ledger().push(order.clone());

        order
    }

    fn list(&self) -> Vec<Order> {
        // Copies whatever is there right now; nothing serializes this against
        // an in-flight create.
        self.ledger().clone()
    }
}
