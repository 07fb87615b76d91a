use std::sync::{Arc, Barrier};
use std::thread;

use orderledger::models::NewOrder;
use orderledger::store::{OrderStore, StoreVariant, SyncedOrderStore, UnsyncOrderStore};

fn widget(tag: usize) -> NewOrder {
    NewOrder {
        product: format!("widget-{tag}"),
        quantity: 1,
        price: 9.99,
    }
}

/// Releases `threads` workers through a barrier, each creating `per_thread`
/// orders against the same store.
fn hammer<S: OrderStore + 'static>(store: Arc<S>, threads: usize, per_thread: usize) {
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    store.create(widget(t * per_thread + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn synced_store_concurrent_creates_assign_distinct_increasing_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    let store = Arc::new(SyncedOrderStore::new());
    hammer(Arc::clone(&store), THREADS, PER_THREAD);

    let orders = store.list();
    assert_eq!(orders.len(), THREADS * PER_THREAD);

    let mut ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    let expected: Vec<u64> = (1..=(THREADS * PER_THREAD) as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn synced_store_lists_sequential_creates_in_creation_order() {
    let store = SyncedOrderStore::new();

    for i in 0..5 {
        let created = store.create(widget(i));
        assert_eq!(created.id, i as u64 + 1);
    }

    let orders = store.list();
    assert_eq!(orders.len(), 5);
    for (i, order) in orders.iter().enumerate() {
        assert_eq!(order.id, i as u64 + 1);
        assert_eq!(order.product, format!("widget-{i}"));
        assert_eq!(order.quantity, 1);
    }

    // The counter picks up where the ledger left off.
    assert_eq!(store.create(widget(5)).id, 6);
}

#[test]
fn synced_store_list_returns_detached_snapshot() {
    let store = SyncedOrderStore::new();
    store.create(widget(0));

    let snapshot = store.list();
    store.create(widget(1));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.list().len(), 2);
}

#[test]
fn synced_store_timestamps_are_not_in_the_future() {
    let store = SyncedOrderStore::new();
    let created = store.create(widget(0));
    assert!(created.created_at <= chrono::Utc::now());
}

#[test]
fn unsync_store_reproduces_duplicate_ids_under_contention() {
    // This asserts the *bug*, not a correctness property: enough concurrent
    // creates against the unsynchronized store must, with high probability,
    // show a torn compound operation. Each storm uses a fresh store; one
    // observed violation across the attempts is the expected outcome.
    const THREADS: usize = 100;
    const PER_THREAD: usize = 20;
    const ATTEMPTS: usize = 20;

    for _ in 0..ATTEMPTS {
        let store = Arc::new(UnsyncOrderStore::new());
        hammer(Arc::clone(&store), THREADS, PER_THREAD);

        let orders = store.list();
        // Individual appends are never lost; only the id assignment tears.
        assert_eq!(orders.len(), THREADS * PER_THREAD);

        let mut ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
        ids.sort_unstable();

        let duplicate = ids.windows(2).any(|w| w[0] == w[1]);
        let counter_fell_behind = ids.last().copied().unwrap_or(0) < orders.len() as u64;
        if duplicate || counter_fell_behind {
            return;
        }
    }

    panic!("unsynchronized store never produced a duplicate id in {ATTEMPTS} storms");
}

#[test]
fn store_variant_parses_common_spellings() {
    assert_eq!("unsync".parse::<StoreVariant>(), Ok(StoreVariant::Unsync));
    assert_eq!(
        "UNSYNCHRONIZED".parse::<StoreVariant>(),
        Ok(StoreVariant::Unsync)
    );
    assert_eq!(" synced ".parse::<StoreVariant>(), Ok(StoreVariant::Synced));
    assert_eq!("mutex".parse::<StoreVariant>(), Ok(StoreVariant::Synced));
    assert!("paxos".parse::<StoreVariant>().is_err());

    assert_eq!(StoreVariant::Unsync.to_string(), "unsync");
    assert_eq!(StoreVariant::Synced.to_string(), "synced");
}
