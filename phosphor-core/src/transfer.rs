//! Deferred-transfer state machine
//!
//! A deferred refresh walks the frame chunk by chunk, dispatching one bus
//! write per step and advancing when the platform signals completion. The
//! phase value replaces the page-counter/flag pair of classic C drivers:
//! every transition is explicit, and a refresh attempted while a transfer
//! is underway can be rejected instead of corrupting the walk.

/// Progress of a deferred framebuffer transfer.
///
/// Chunks are pages in paged addressing; horizontal addressing moves the
/// whole frame as a single chunk 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferPhase {
    /// No transfer underway.
    Idle,
    /// The select command for this chunk has been dispatched.
    ChunkCommand(u8),
    /// The pixel data for this chunk has been dispatched.
    ChunkData(u8),
}

impl TransferPhase {
    /// Whether a transfer sequence is underway.
    pub fn in_progress(&self) -> bool {
        !matches!(self, TransferPhase::Idle)
    }

    /// The phase entered when the currently dispatched write completes.
    ///
    /// Each chunk's command completes into its data; the last chunk's data
    /// completes into `Idle`. Advancing `Idle` is a no-op, so a spurious
    /// completion signal cannot restart a finished walk.
    pub fn advance(self, chunks: u8) -> Self {
        match self {
            TransferPhase::Idle => TransferPhase::Idle,
            TransferPhase::ChunkCommand(chunk) => TransferPhase::ChunkData(chunk),
            TransferPhase::ChunkData(chunk) if chunk + 1 < chunks => {
                TransferPhase::ChunkCommand(chunk + 1)
            }
            TransferPhase::ChunkData(_) => TransferPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransferPhase::*;

    #[test]
    fn walks_chunks_in_order_command_before_data() {
        let mut phase = ChunkCommand(0);
        let mut seen = [Idle; 8];
        for slot in seen.iter_mut() {
            *slot = phase;
            phase = phase.advance(4);
        }
        assert_eq!(
            seen,
            [
                ChunkCommand(0),
                ChunkData(0),
                ChunkCommand(1),
                ChunkData(1),
                ChunkCommand(2),
                ChunkData(2),
                ChunkCommand(3),
                ChunkData(3),
            ]
        );
        assert_eq!(phase, Idle);
    }

    #[test]
    fn idle_absorbs_spurious_completions() {
        assert_eq!(Idle.advance(4), Idle);
    }

    #[test]
    fn in_progress_tracks_non_idle_phases() {
        assert!(!Idle.in_progress());
        assert!(ChunkCommand(0).in_progress());
        assert!(ChunkData(3).in_progress());
    }

    #[test]
    fn single_chunk_walk_finishes_after_its_data() {
        assert_eq!(ChunkCommand(0).advance(1), ChunkData(0));
        assert_eq!(ChunkData(0).advance(1), Idle);
    }
}
