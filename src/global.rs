//! Global Buffer Pool
//!
//! Process-wide singleton pool with convenience accessors. The pool is
//! constructed lazily on first use with [`DEFAULT_BUFFER_SIZE`] buffers and
//! lives for the rest of the process; there is no teardown.

use bytes::BytesMut;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::pool::{BufferPool, DEFAULT_BUFFER_SIZE};

static GLOBAL_POOL: Lazy<BufferPool> = Lazy::new(|| {
    debug!(
        "initializing global buffer pool ({} byte buffers)",
        DEFAULT_BUFFER_SIZE
    );
    BufferPool::new(DEFAULT_BUFFER_SIZE)
});

/// Get the process-wide buffer pool.
///
/// Constructed on first access; every call, including concurrent first calls,
/// yields the identical instance.
pub fn global() -> &'static BufferPool {
    &GLOBAL_POOL
}

/// Get a buffer from the process-wide pool.
///
/// Equivalent to `global().get()`.
#[inline]
pub fn get_buffer() -> BytesMut {
    global().get()
}

/// Return a buffer to the process-wide pool.
///
/// Equivalent to `global().put(buf)`.
#[inline]
pub fn put_buffer(buf: BytesMut) {
    global().put(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_global_is_singleton() {
        let first = global();
        let second = global();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.buffer_size(), DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_global_identity_across_threads() {
        let local = global() as *const BufferPool as usize;

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| global() as *const BufferPool as usize))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), local);
        }
    }

    #[test]
    fn test_get_put_buffer_delegation() {
        let mut buf = get_buffer();
        assert_eq!(buf.len(), DEFAULT_BUFFER_SIZE);
        assert!(buf.iter().all(|&b| b == 0));

        buf.fill(0xAB);
        put_buffer(buf);

        // Whichever buffer the pool hands out next, it is scrubbed.
        let buf = get_buffer();
        assert_eq!(buf.len(), DEFAULT_BUFFER_SIZE);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
