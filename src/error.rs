//! Error types shared by the crate's containers.
//!
//! Every failure is synchronous and reported at the violating call. A failed
//! operation performs no mutation: the structure is exactly as it was before
//! the call.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure conditions reported by the containers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Insertion into a bounded queue already holding `capacity` elements.
    #[error("queue overflow: capacity {capacity} exhausted")]
    Overflow {
        /// Fixed capacity of the queue that rejected the insertion.
        capacity: usize,
    },

    /// Removal or boundary access on an empty queue.
    #[error("queue underflow: no elements")]
    Underflow,

    /// Boundary access or removal on an empty list.
    #[error("list is empty")]
    Empty,
}

// --- Tests ---
