use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters for buffer-pool traffic.
#[derive(Clone)]
pub struct PoolMetrics {
    pub acquires: Arc<AtomicU64>,
    pub reuses: Arc<AtomicU64>,
    pub fresh_allocations: Arc<AtomicU64>,
    pub releases_pooled: Arc<AtomicU64>,
    pub releases_freed: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl PoolMetrics {
    pub fn new() -> Self {
        Self {
            acquires: Arc::new(AtomicU64::new(0)),
            reuses: Arc::new(AtomicU64::new(0)),
            fresh_allocations: Arc::new(AtomicU64::new(0)),
            releases_pooled: Arc::new(AtomicU64::new(0)),
            releases_freed: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_acquires(&self) {
        self.acquires.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_reuses(&self) {
        self.reuses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fresh_allocations(&self) {
        self.fresh_allocations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_releases_pooled(&self) {
        self.releases_pooled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_releases_freed(&self) {
        self.releases_freed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            acquires: self.acquires.load(Ordering::Relaxed),
            reuses: self.reuses.load(Ordering::Relaxed),
            fresh_allocations: self.fresh_allocations.load(Ordering::Relaxed),
            releases_pooled: self.releases_pooled.load(Ordering::Relaxed),
            releases_freed: self.releases_freed.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for PoolMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable point-in-time view of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub acquires: u64,
    pub reuses: u64,
    pub fresh_allocations: u64,
    pub releases_pooled: u64,
    pub releases_freed: u64,
    pub uptime_seconds: u64,
}
