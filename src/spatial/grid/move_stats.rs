/// Per-tick counters kept by the move/swap/replace primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStats {
    pub moves: u32,
    pub swaps: u32,
    pub rejected: u32,
    pub transformations: u32,
}

impl MoveStats {
    #[inline]
    pub fn reset(&mut self) {
        *self = MoveStats::default();
    }

    /// Moves plus swaps.
    #[inline]
    pub fn relocations(&self) -> u32 {
        self.moves.saturating_add(self.swaps)
    }
}
