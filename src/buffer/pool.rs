//! A bounded, internally-locked free-list of released char buffers.
//!
//! Repeated native calls churn through similarly sized buffers; the pool
//! amortizes the allocation cost by keeping a small multiset of released
//! regions keyed only by a size ceiling. Individual buffers stay
//! single-owner; only the pool itself is shared.

use std::sync::Mutex;

use crate::config::PoolConfig;
use crate::error::PathResult;
use crate::metrics::PoolMetrics;

use super::CharBuffer;

pub struct BufferPool {
    slots: Mutex<Vec<CharBuffer>>,
    max_pooled: usize,
    capacity_ceiling_bytes: u64,
    default_path_capacity: u64,
    metrics: PoolMetrics,
}

impl BufferPool {
    pub fn new(config: &PoolConfig) -> Self {
        BufferPool {
            slots: Mutex::new(Vec::new()),
            max_pooled: config.effective_max_pooled(),
            capacity_ceiling_bytes: config.capacity_ceiling_bytes,
            default_path_capacity: config.default_path_capacity as u64,
            metrics: PoolMetrics::new(),
        }
    }

    /// Initial character-capacity guess the adapters start with.
    pub fn default_path_capacity(&self) -> u64 {
        self.default_path_capacity
    }

    pub fn metrics(&self) -> &PoolMetrics {
        &self.metrics
    }

    /// Takes a buffer with at least `min_chars` characters of room (plus
    /// the terminator), reusing a pooled region when one is available.
    pub fn acquire(&self, min_chars: u64) -> PathResult<CharBuffer> {
        self.metrics.inc_acquires();
        let pooled = match self.slots.lock() {
            Ok(mut slots) => slots.pop(),
            Err(_) => None,
        };
        match pooled {
            Some(mut buf) => {
                self.metrics.inc_reuses();
                buf.ensure_char_capacity(min_chars.saturating_add(1))?;
                tracing::debug!(capacity = buf.char_capacity(), "reusing pooled buffer");
                Ok(buf)
            }
            None => {
                self.metrics.inc_fresh_allocations();
                CharBuffer::with_char_capacity(min_chars)
            }
        }
    }

    /// Hands a buffer back. Retained only while it fits under the capacity
    /// ceiling and the pool is not full; otherwise its region is freed
    /// right away. The logical length is cleared before the buffer becomes
    /// visible to the next acquirer.
    pub fn release(&self, mut buffer: CharBuffer) {
        let bytes = buffer.char_capacity() * super::CHAR_SIZE;
        if bytes == 0 || bytes > self.capacity_ceiling_bytes {
            self.metrics.inc_releases_freed();
            return;
        }
        if let Ok(mut slots) = self.slots.lock() {
            if slots.len() < self.max_pooled {
                buffer.reset();
                slots.push(buffer);
                self.metrics.inc_releases_pooled();
                return;
            }
        }
        self.metrics.inc_releases_freed();
    }

    /// Number of buffers currently parked in the pool.
    pub fn pooled_count(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Frees every pooled buffer. Used by tests for a clean slate.
    pub fn drain(&self) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.clear();
        }
    }
}

lazy_static::lazy_static! {
    static ref SHARED_POOL: BufferPool = {
        let config = crate::config::load().map(|c| c.pool).unwrap_or_else(|e| {
            tracing::warn!("pool configuration failed to load, using defaults: {}", e);
            PoolConfig::default()
        });
        BufferPool::new(&config)
    };
}

/// The process-wide pool, initialized lazily on first use.
pub fn shared() -> &'static BufferPool {
    &SHARED_POOL
}
