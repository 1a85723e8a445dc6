//! bufpool - Concurrency-Safe Fixed-Size Buffer Pool
//!
//! Reusable, zero-filled byte buffers for hot I/O paths, avoiding repeated
//! heap allocation and deallocation.
//!
//! A [`BufferPool`] hands out [`BytesMut`](bytes::BytesMut) buffers of one
//! configured size and accepts them back for reuse. Returned buffers are
//! scrubbed before they are pooled, so every buffer obtained from
//! [`BufferPool::get`] is entirely zero-filled. `get` and `put` are
//! non-blocking and safe to call from any number of threads; a process-wide
//! pool is available through [`global`], [`get_buffer`] and [`put_buffer`].
//!
//! # Example
//!
//! ```
//! use bufpool::BufferPool;
//!
//! let pool = BufferPool::new(1024);
//!
//! let mut buf = pool.get();
//! assert_eq!(buf.len(), 1024);
//! assert!(buf.iter().all(|&b| b == 0));
//!
//! buf[..5].copy_from_slice(b"hello");
//! pool.put(buf);
//!
//! // The returned buffer was scrubbed before being pooled.
//! let buf = pool.get();
//! assert!(buf.iter().all(|&b| b == 0));
//! ```

pub mod global;
pub mod pool;
pub mod stats;

pub use global::{get_buffer, global, put_buffer};
pub use pool::{BufferPool, DEFAULT_BUFFER_SIZE};
pub use stats::PoolStats;
