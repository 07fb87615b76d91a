use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::models::{NewOrder, Order};

use super::OrderStore;

/// Everything the lock guards. Ledger and counter move together under one
/// critical section, which is what keeps them mutually consistent: no two
/// orders share an id, and the next id always exceeds every stored one.
struct Inner {
    next_id: u64,
    orders: Vec<Order>,
}

/// Mutex-protected ledger (the corrected variant).
///
/// `create` runs read-counter / build / increment / append as a single
/// critical section, so creates are serialized against each other and against
/// `list`. The guard is dropped on every exit path, unwinds included. One
/// lock, never nested, and nothing foreign runs while it is held.
pub struct SyncedOrderStore {
    inner: Mutex<Inner>,
}

impl SyncedOrderStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                orders: Vec::new(),
            }),
        }
    }

    fn locked(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock still guards consistent data; keep serving.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SyncedOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for SyncedOrderStore {
    fn create(&self, input: NewOrder) -> Order {
        let mut inner = self.locked();

        let order = Order {
            id: inner.next_id,
            product: input.product,
            quantity: input.quantity,
            price: input.price,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.orders.push(order.clone());

        order
    }

    fn list(&self) -> Vec<Order> {
        // Defensive copy under the same exclusive lock the writers take.
        self.locked().orders.clone()
    }
}
