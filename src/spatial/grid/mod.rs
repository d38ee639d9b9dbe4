//! Grid - double-buffered cell storage and the move/swap/replace protocol
//!
//! Two buffers of `Option<Particle>`:
//! - `current` is the authoritative state read during a tick
//! - `next` is assembled during the tick; each slot is written at most once
//!
//! Rules never write into `current`. Moving a particle takes it out of its
//! `current` slot and puts it into a `next` slot, so ownership transfers and
//! nothing is ever duplicated. Anything left in `current` after the sweep is
//! carried over, then the buffers swap.

use crate::domain::Particle;

mod indexing;
mod accessors;
mod moves;
mod buffers;
mod move_stats;
mod surface;
mod snapshot;

pub use move_stats::MoveStats;
pub use snapshot::GridSnapshot;
pub use surface::SurfaceTable;

pub const DEFAULT_WAKE_RADIUS: u32 = 2;

pub struct Grid {
    rows: u32,
    cols: u32,
    size: usize,

    current: Vec<Option<Particle>>,
    next: Vec<Option<Particle>>,

    /// Chebyshev radius woken around both ends of a successful move
    wake_radius: i32,

    pub stats: MoveStats,
}

impl Grid {
    /// Caller guarantees `rows > 0 && cols > 0` (checked by `WorldCore`).
    pub fn new(rows: u32, cols: u32) -> Self {
        debug_assert!(rows > 0 && cols > 0, "Grid::new: empty dimensions");
        let size = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            size,
            current: vec![None; size],
            next: vec![None; size],
            wake_radius: DEFAULT_WAKE_RADIUS as i32,
            stats: MoveStats::default(),
        }
    }

    pub fn set_wake_radius(&mut self, radius: u32) {
        self.wake_radius = radius as i32;
    }

    #[inline]
    pub fn wake_radius(&self) -> u32 {
        self.wake_radius as u32
    }
}
