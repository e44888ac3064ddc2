//! Memory accounting for column building.
//!
//! Arrow builders allocate through the global allocator. A [`MemoryPool`]
//! meters the finished columns instead: every column is reserved on the pool
//! for as long as it is alive inside the encoder, and a pool with a limit
//! turns an oversized column into an `ArrowError::MemoryError`.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use arrow::error::ArrowError;

use crate::config::EncoderConfig;

/// Allocator handle threaded through builder construction.
///
/// Implementations must be thread-safe: `to_data_cell` may run on many
/// threads against the same pool.
pub trait MemoryPool: Send + Sync + fmt::Debug {
    /// Account for `bytes` more bytes, or fail without changing state.
    fn reserve(&self, bytes: usize) -> Result<(), ArrowError>;

    /// Return `bytes` previously obtained through [`MemoryPool::reserve`].
    fn release(&self, bytes: usize);

    /// Bytes currently reserved.
    fn bytes_allocated(&self) -> usize;

    /// Highest value [`MemoryPool::bytes_allocated`] has reached.
    fn peak(&self) -> usize;
}

/// Atomic byte counter with an optional upper bound.
#[derive(Debug, Default)]
pub struct TrackingMemoryPool {
    allocated: AtomicUsize,
    peak: AtomicUsize,
    limit: Option<usize>,
}

impl TrackingMemoryPool {
    /// Unbounded pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool refusing reservations that would exceed `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        TrackingMemoryPool {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl MemoryPool for TrackingMemoryPool {
    fn reserve(&self, bytes: usize) -> Result<(), ArrowError> {
        let previous = self
            .allocated
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                let next = current.checked_add(bytes)?;
                match self.limit {
                    Some(limit) if next > limit => None,
                    _ => Some(next),
                }
            })
            .map_err(|current| {
                ArrowError::MemoryError(format!(
                    "memory pool limit of {} bytes exceeded: {current} bytes reserved, {bytes} requested",
                    self.limit.unwrap_or(usize::MAX)
                ))
            })?;
        self.peak.fetch_max(previous + bytes, Ordering::AcqRel);
        Ok(())
    }

    fn release(&self, bytes: usize) {
        let _ = self
            .allocated
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.saturating_sub(bytes))
            });
    }

    fn bytes_allocated(&self) -> usize {
        self.allocated.load(Ordering::Acquire)
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::Acquire)
    }
}

/// Process-wide pool used by `Component::to_data_cell`.
///
/// Its limit comes from [`EncoderConfig::global`] on first use.
pub fn default_memory_pool() -> &'static TrackingMemoryPool {
    static POOL: OnceLock<TrackingMemoryPool> = OnceLock::new();
    POOL.get_or_init(|| match EncoderConfig::global().memory_limit {
        Some(limit) => TrackingMemoryPool::with_limit(limit),
        None => TrackingMemoryPool::new(),
    })
}

/// Bytes held on a pool, given back on drop.
#[must_use = "dropping a reservation releases it immediately"]
pub struct PoolReservation<'p> {
    pool: &'p dyn MemoryPool,
    bytes: usize,
}

impl<'p> PoolReservation<'p> {
    pub fn try_new(pool: &'p dyn MemoryPool, bytes: usize) -> Result<Self, ArrowError> {
        pool.reserve(bytes)?;
        Ok(PoolReservation { pool, bytes })
    }

    pub fn size(&self) -> usize {
        self.bytes
    }
}

impl Drop for PoolReservation<'_> {
    fn drop(&mut self) {
        self.pool.release(self.bytes);
    }
}

impl fmt::Debug for PoolReservation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolReservation")
            .field("bytes", &self.bytes)
            .finish()
    }
}
