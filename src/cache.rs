use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Holiday, Lob, Loc};

enum Slot<T> {
    Empty,
    Fresh(Arc<T>),
    /// Value kept from before an invalidation; readers must refetch.
    Stale(Arc<T>),
}

/// A single cached query result with explicit staleness.
pub struct CachedQuery<T> {
    slot: RwLock<Slot<T>>,
}

impl<T> CachedQuery<T> {
    fn new() -> Self {
        Self {
            slot: RwLock::new(Slot::Empty),
        }
    }

    /// The cached value, only while it is fresh.
    pub async fn fresh(&self) -> Option<Arc<T>> {
        match &*self.slot.read().await {
            Slot::Fresh(value) => Some(Arc::clone(value)),
            _ => None,
        }
    }

    /// Last known value regardless of staleness.
    pub async fn any(&self) -> Option<Arc<T>> {
        match &*self.slot.read().await {
            Slot::Fresh(value) | Slot::Stale(value) => Some(Arc::clone(value)),
            Slot::Empty => None,
        }
    }

    pub async fn store(&self, value: T) -> Arc<T> {
        let arcd = Arc::new(value);
        *self.slot.write().await = Slot::Fresh(Arc::clone(&arcd));
        arcd
    }

    /// Mark the slot stale; the value stays readable via `any`.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        if let Slot::Fresh(value) = &*slot {
            let kept = Arc::clone(value);
            *slot = Slot::Stale(kept);
        }
    }

    pub async fn is_stale(&self) -> bool {
        matches!(&*self.slot.read().await, Slot::Stale(_))
    }
}

/// Shared store for backend query results.
///
/// Constructed once and handed by reference to every component that reads
/// or invalidates it; the read operations populate their own slot and the
/// create success path invalidates the holiday slot.
pub struct QueryCache {
    pub lobs: CachedQuery<Vec<Lob>>,
    pub locs: CachedQuery<Vec<Loc>>,
    pub holidays: CachedQuery<Vec<Holiday>>,
}

impl QueryCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            lobs: CachedQuery::new(),
            locs: CachedQuery::new(),
            holidays: CachedQuery::new(),
        })
    }

    pub async fn invalidate_holidays(&self) {
        self.holidays.invalidate().await;
    }
}
