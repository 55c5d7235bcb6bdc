//! Order ID issuance.

use std::sync::atomic::{AtomicU64, Ordering};

use common::OrderId;

/// First ID issued by a fresh [`AtomicOrderSequence`].
pub const FIRST_ORDER_ID: u64 = 1000;

/// Source of order IDs.
///
/// Injected into order creation so deployments can plug in an external
/// ID-issuing service and tests can supply a fixed sequence.
pub trait OrderSequence: Send + Sync {
    /// Issues the next order ID.
    ///
    /// Every call returns a strictly greater ID than any previous call
    /// on the same sequence.
    fn next_id(&self) -> OrderId;
}

/// Process-local order sequence backed by an atomic counter.
///
/// Starts at 1000 and increments by one per issued ID. Safe to share
/// across threads. IDs reset on process restart and are not unique
/// across processes; deployments needing durable IDs should supply
/// their own [`OrderSequence`].
#[derive(Debug)]
pub struct AtomicOrderSequence {
    next: AtomicU64,
}

impl AtomicOrderSequence {
    /// Creates a sequence starting at [`FIRST_ORDER_ID`].
    pub fn new() -> Self {
        Self::starting_at(FIRST_ORDER_ID)
    }

    /// Creates a sequence whose first issued ID is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for AtomicOrderSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSequence for AtomicOrderSequence {
    fn next_id(&self) -> OrderId {
        OrderId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
