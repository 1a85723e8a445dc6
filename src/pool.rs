//! Buffer Pool
//!
//! Reusable pool of fixed-size, zero-filled byte buffers for zero-allocation
//! hot paths.

use bytes::BytesMut;
use crossbeam::queue::SegQueue;
use std::sync::Arc;
use tracing::trace;

use crate::stats::{PoolCounters, PoolStats};

/// Default buffer size (32 KiB), substituted when a pool is created with size 0
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Pool of reusable fixed-size byte buffers.
///
/// Every buffer handed out by [`get`](BufferPool::get) has length exactly
/// [`buffer_size`](BufferPool::buffer_size) and is entirely zero-filled:
/// fabrication zero-fills, and [`put`](BufferPool::put) scrubs before pooling.
/// Cloning the pool produces another handle to the same underlying store.
#[derive(Clone)]
pub struct BufferPool {
    store: Arc<SegQueue<BytesMut>>,
    counters: Arc<PoolCounters>,
    buffer_size: usize,
}

impl BufferPool {
    /// Create a new pool whose buffers are `buffer_size` bytes long.
    ///
    /// A `buffer_size` of 0 selects [`DEFAULT_BUFFER_SIZE`]. The store starts
    /// empty and grows as buffers are returned; nothing is pre-allocated.
    pub fn new(buffer_size: usize) -> Self {
        let buffer_size = if buffer_size == 0 {
            DEFAULT_BUFFER_SIZE
        } else {
            buffer_size
        };

        Self {
            store: Arc::new(SegQueue::new()),
            counters: Arc::new(PoolCounters::new()),
            buffer_size,
        }
    }

    /// Get a buffer from the pool, or fabricate a new one.
    ///
    /// The returned buffer has length exactly [`buffer_size`](Self::buffer_size)
    /// and every byte is 0. Ownership transfers to the caller until the buffer
    /// is passed back through [`put`](Self::put). Never blocks.
    #[inline]
    pub fn get(&self) -> BytesMut {
        match self.store.pop() {
            Some(buf) => {
                self.counters.record_hit();
                buf
            }
            None => {
                self.counters.record_fabrication();
                trace!("pool empty, fabricating {} byte buffer", self.buffer_size);
                BytesMut::zeroed(self.buffer_size)
            }
        }
    }

    /// Return a buffer to the pool.
    ///
    /// If the buffer's length differs from [`buffer_size`](Self::buffer_size)
    /// (an empty `BytesMut`, or one that was split or extended while checked
    /// out) it is silently dropped rather than pooled. Otherwise its entire
    /// content is scrubbed to zero and it becomes eligible for a future
    /// [`get`](Self::get). Provenance is not checked: any right-length buffer
    /// is accepted. Never blocks, never panics.
    #[inline]
    pub fn put(&self, mut buf: BytesMut) {
        if buf.len() != self.buffer_size {
            self.counters.record_discard();
            return;
        }

        buf.fill(0);
        self.counters.record_put();
        self.store.push(buf);
    }

    /// Get the configured buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Get the number of buffers currently pooled (approximate under
    /// concurrent use)
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the pool currently holds no buffers
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get a snapshot of pool activity counters
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot(self.store.len())
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}
