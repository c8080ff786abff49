//! Pooled reuse of raw frame-address buffers.
//!
//! Capture can run on a hot error path, so the instruction-pointer buffer
//! is borrowed from a shared pool instead of being reallocated per call.
//! Borrowing hands out an RAII guard; the buffer goes back to the pool on
//! every exit path of the borrower.

use once_cell::sync::Lazy;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::trace;

/// Upper bound on idle buffers kept around for reuse.
const MAX_IDLE_BUFFERS: usize = 10;

/// Global pool used by [`capture`](super::capture).
pub(crate) static FRAME_POOL: Lazy<FramePool> = Lazy::new(|| FramePool::new(MAX_IDLE_BUFFERS));

/// Concurrent pool of reusable address buffers.
pub(crate) struct FramePool {
    available: Mutex<Vec<Vec<usize>>>,
    max_idle: usize,
    created_count: AtomicU64,
    reused_count: AtomicU64,
}

impl FramePool {
    fn new(max_idle: usize) -> Self {
        Self {
            available: Mutex::new(Vec::new()),
            max_idle,
            created_count: AtomicU64::new(0),
            reused_count: AtomicU64::new(0),
        }
    }

    /// Borrow a buffer with room for at least `capacity` addresses.
    pub(crate) fn acquire(&self, capacity: usize) -> PooledFrames<'_> {
        if let Ok(mut pool) = self.available.lock() {
            if let Some(mut buf) = pool.pop() {
                drop(pool);
                buf.reserve(capacity);
                self.reused_count.fetch_add(1, Ordering::Relaxed);
                trace!("reused frame buffer from pool");
                return PooledFrames { buf, pool: self };
            }
        }

        self.created_count.fetch_add(1, Ordering::Relaxed);
        trace!("created new frame buffer");
        PooledFrames {
            buf: Vec::with_capacity(capacity),
            pool: self,
        }
    }

    fn release(&self, mut buf: Vec<usize>) {
        buf.clear();
        if let Ok(mut pool) = self.available.lock() {
            if pool.len() < self.max_idle {
                pool.push(buf);
            } else {
                trace!("pool full, dropping frame buffer");
            }
        }
    }
}

/// Guard for a borrowed address buffer; dereferences to the buffer itself.
pub(crate) struct PooledFrames<'a> {
    buf: Vec<usize>,
    pool: &'a FramePool,
}

impl Deref for PooledFrames<'_> {
    type Target = Vec<usize>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for PooledFrames<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl Drop for PooledFrames<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_are_reused_after_release() {
        let pool = FramePool::new(4);
        {
            let mut buf = pool.acquire(16);
            buf.extend([1, 2, 3]);
        }
        let buf = pool.acquire(16);
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
        assert_eq!(pool.created_count.load(Ordering::Relaxed), 1);
        assert_eq!(pool.reused_count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn idle_buffers_are_bounded() {
        let pool = FramePool::new(1);
        let a = pool.acquire(8);
        let b = pool.acquire(8);
        drop(a);
        drop(b);
        let idle = pool.available.lock().map(|p| p.len()).unwrap_or(0);
        assert_eq!(idle, 1);
    }

    #[test]
    fn reused_buffers_grow_to_the_requested_capacity() {
        let pool = FramePool::new(4);
        drop(pool.acquire(8));
        let buf = pool.acquire(64);
        assert!(buf.capacity() >= 64);
    }
}
