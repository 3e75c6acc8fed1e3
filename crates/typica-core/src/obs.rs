//! Observability: ephemeral in-memory counters for query construction.
//!
//! The translator stays pure; only the builder records through this
//! module. State is thread-local, so concurrent builders never contend.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// QueryMetrics
/// Point-in-time snapshot of the construction counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct QueryMetrics {
    /// Fragments appended across all buckets.
    pub fragments_emitted: u64,

    /// Conditions dropped for lacking a target field.
    pub conditions_skipped: u64,

    /// Documents produced by `render`.
    pub queries_rendered: u64,
}

thread_local! {
    static QUERY_METRICS: RefCell<QueryMetrics> = RefCell::new(QueryMetrics::default());
}

/// Borrow metrics immutably.
fn with_state<R>(f: impl FnOnce(&QueryMetrics) -> R) -> R {
    QUERY_METRICS.with(|cell| f(&cell.borrow()))
}

/// Borrow metrics mutably.
fn with_state_mut<R>(f: impl FnOnce(&mut QueryMetrics) -> R) -> R {
    QUERY_METRICS.with(|cell| f(&mut cell.borrow_mut()))
}

pub(crate) fn record_fragment() {
    with_state_mut(|m| m.fragments_emitted += 1);
}

pub(crate) fn record_skip() {
    with_state_mut(|m| m.conditions_skipped += 1);
}

pub(crate) fn record_render() {
    with_state_mut(|m| m.queries_rendered += 1);
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_snapshot() -> QueryMetrics {
    with_state(Clone::clone)
}

/// Reset the current thread's counters to zero.
pub fn metrics_reset() {
    with_state_mut(|m| *m = QueryMetrics::default());
}

///
/// TESTS
///
