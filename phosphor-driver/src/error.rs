//! Driver error type

use phosphor_core::OutOfBounds;

/// Errors returned by every driver operation.
///
/// There is no retry or rollback behind these: a failed multi-step
/// operation has already transmitted its earlier steps, and the
/// framebuffer keeps whatever was committed before the transfer began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus-level failure, propagated verbatim.
    Bus(E),
    /// Coordinate, glyph placement, or command length validation failed.
    OutOfRange,
    /// A deferred refresh is already underway.
    Busy,
}

impl<E> From<OutOfBounds> for Error<E> {
    fn from(_: OutOfBounds) -> Self {
        Error::OutOfRange
    }
}
