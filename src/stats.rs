//! Pool Statistics
//!
//! Lightweight counters for buffer pool monitoring.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters bumped by the pool on every operation.
///
/// Observability only: the values never influence pooling decisions.
#[derive(Debug, Default)]
pub(crate) struct PoolCounters {
    /// Total `get` calls
    gets: AtomicU64,

    /// `get` calls served from the store
    pool_hits: AtomicU64,

    /// `get` calls that fabricated a fresh buffer
    fabricated: AtomicU64,

    /// Buffers scrubbed and accepted back into the store
    puts: AtomicU64,

    /// Returned buffers dropped for a length mismatch
    discarded: AtomicU64,
}

impl PoolCounters {
    /// Create a new zeroed counter set
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a `get` served from the store
    pub(crate) fn record_hit(&self) {
        self.gets.fetch_add(1, Ordering::Relaxed);
        self.pool_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a `get` that fabricated a fresh buffer
    pub(crate) fn record_fabrication(&self) {
        self.gets.fetch_add(1, Ordering::Relaxed);
        self.fabricated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a buffer accepted back into the store
    pub(crate) fn record_put(&self) {
        self.puts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a returned buffer dropped for a length mismatch
    pub(crate) fn record_discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of the counters
    pub(crate) fn snapshot(&self, available: usize) -> PoolStats {
        PoolStats {
            gets: self.gets.load(Ordering::Relaxed),
            pool_hits: self.pool_hits.load(Ordering::Relaxed),
            fabricated: self.fabricated.load(Ordering::Relaxed),
            puts: self.puts.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            available,
        }
    }
}

/// Point-in-time snapshot of pool activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Total `get` calls
    pub gets: u64,

    /// `get` calls served from pooled buffers
    pub pool_hits: u64,

    /// `get` calls that allocated a fresh buffer
    pub fabricated: u64,

    /// Buffers scrubbed and accepted back into the pool
    pub puts: u64,

    /// Returned buffers dropped for a length mismatch
    pub discarded: u64,

    /// Buffers sitting in the pool when the snapshot was taken
    pub available: usize,
}

impl PoolStats {
    /// Fraction of `get` calls served from the pool (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        if self.gets == 0 {
            return 0.0;
        }
        self.pool_hits as f64 / self.gets as f64
    }

    /// Get a summary of pool activity
    pub fn summary(&self) -> String {
        format!(
            "Gets: {} (hits={}, fabricated={}) | Puts: {} (discarded={}) | Available: {} | Hit rate: {:.1}%",
            self.gets,
            self.pool_hits,
            self.fabricated,
            self.puts,
            self.discarded,
            self.available,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_snapshot() {
        let counters = PoolCounters::new();

        counters.record_fabrication();
        counters.record_hit();
        counters.record_hit();
        counters.record_put();
        counters.record_discard();

        let stats = counters.snapshot(7);
        assert_eq!(stats.gets, 3);
        assert_eq!(stats.fabricated, 1);
        assert_eq!(stats.pool_hits, 2);
        assert_eq!(stats.puts, 1);
        assert_eq!(stats.discarded, 1);
        assert_eq!(stats.available, 7);
    }

    #[test]
    fn test_hit_rate() {
        let stats = PoolStats::default();
        assert_eq!(stats.hit_rate(), 0.0);

        let stats = PoolStats {
            gets: 4,
            pool_hits: 3,
            ..Default::default()
        };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary() {
        let stats = PoolStats {
            gets: 10,
            pool_hits: 8,
            fabricated: 2,
            puts: 9,
            discarded: 1,
            available: 5,
        };

        let summary = stats.summary();
        assert!(summary.contains("Gets: 10"));
        assert!(summary.contains("discarded=1"));
        assert!(summary.contains("Hit rate: 80.0%"));
    }
}
