//! Short-TTL cache for workbook reads.
//! Reads within the TTL are served from memory; writes must call
//! `invalidate` so the next read hits the disk again.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Option<(Instant, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// The cached value, only while it is still within the TTL.
    pub fn fresh(&self) -> Option<&T> {
        self.slot
            .as_ref()
            .filter(|(at, _)| at.elapsed() < self.ttl)
            .map(|(_, v)| v)
    }

    /// The most recently stored value regardless of age.
    pub fn last(&self) -> Option<&T> {
        self.slot.as_ref().map(|(_, v)| v)
    }

    pub fn put(&mut self, value: T) {
        self.slot = Some((Instant::now(), value));
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
