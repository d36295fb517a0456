//! Rolling time-window index over recent events

use daybook_core::{DAY, Event};
use tracing::trace;

use crate::ring::RingBuffer;

/// Index of the events whose creation time falls within a trailing
/// retention window
///
/// Entries must be inserted in non-decreasing `created` order. That is a
/// hard precondition, not a convenience: because the backing buffer is then
/// sorted by creation time from head to tail, expiry is a cheap trim from
/// the head, stopping at the first still-live entry. A backdated insert
/// would leave expired entries stranded behind it.
///
/// The index never reads a clock. Callers pass "now" in, so one logical
/// operation uses one timestamp throughout.
#[derive(Debug)]
pub struct EventWindow {
    events: RingBuffer<Event>,
    window: i64,
}

impl Default for EventWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl EventWindow {
    /// Index with the default 24-hour window
    pub fn new() -> Self {
        Self::with_window(DAY)
    }

    /// Index with a custom window length in milliseconds
    pub fn with_window(window: i64) -> Self {
        Self {
            events: RingBuffer::new(),
            window,
        }
    }

    /// Number of entries currently buffered
    ///
    /// Counts stale entries that have not been evicted yet; eviction is
    /// lazy and happens on insert and on read.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the buffer holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Admit an event, expiring stale entries first
    ///
    /// Evicting here is not required for correctness (every read evicts
    /// too), but it keeps the buffer small across long insert-only bursts.
    pub fn insert(&mut self, event: Event, now: i64) {
        self.evict_expired(now);
        debug_assert!(
            self.events
                .iter()
                .last()
                .is_none_or(|tail| tail.created <= event.created),
            "events must be inserted in non-decreasing creation order",
        );
        self.events.push_back(event);
    }

    /// Expire entries whose age has reached the window length
    ///
    /// Pops from the head while the head entry satisfies
    /// `created <= now - window`, stopping at the first live entry or when
    /// the buffer runs empty.
    pub fn evict_expired(&mut self, now: i64) {
        let cutoff = now - self.window;
        let mut evicted = 0usize;
        while self.events.front().is_some_and(|e| e.created <= cutoff) {
            self.events.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            trace!(evicted, "Expired events outside retention window");
        }
    }

    /// The events still inside the window relative to `now`, oldest first
    pub fn events(&mut self, now: i64) -> impl Iterator<Item = &Event> {
        self.evict_expired(now);
        self.events.iter()
    }

    /// Drop every entry belonging to a user, preserving the relative order
    /// of the rest
    ///
    /// Callable at any time, including on an empty index.
    pub fn remove_user(&mut self, name: &str) {
        self.events.retain(|e| e.user != name);
    }
}
