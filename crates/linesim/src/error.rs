//! Recoverable error surface (spec.md §7, §11).
//!
//! Precondition violations and degeneracy (zero-length segments, reading an
//! un-refreshed parallelogram, classifier/resolver called out of order) are
//! not represented here: they are internal-bug signals and assert/panic at
//! their call sites instead, per §7.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("failed to allocate world state for {requested} segments")]
    AllocationFailure { requested: usize },

    #[error("world reserved capacity for {capacity} segments, cannot add segment {attempted}")]
    CapacityExceeded { capacity: usize, attempted: usize },
}
