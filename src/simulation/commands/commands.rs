use rand::Rng;

use crate::domain::{Particle, ParticleKind};

use super::WorldCore;

/// A queued cell write: `{row, col, kind}`. `Empty` erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: i32,
    pub col: i32,
    pub kind: ParticleKind,
}

pub(super) fn request_placement(world: &mut WorldCore, row: i32, col: i32, kind: ParticleKind) {
    world.placements.push(Placement { row, col, kind });
}

pub(super) fn request_placement_brush(
    world: &mut WorldCore,
    center_row: i32,
    center_col: i32,
    size: u32,
    kind: ParticleKind,
) {
    let size = size.max(1) as i32;
    let start = -(size / 2);
    let density = kind.props().brush_density;

    for dr in start..start + size {
        for dc in start..start + size {
            // Erasing always covers the whole brush.
            let keep = kind.is_empty() || density >= 100 || world.rng.gen_range(0..100u8) < density;
            if keep {
                request_placement(world, center_row + dr, center_col + dc, kind);
            }
        }
    }
}

/// Write every queued placement straight into the current buffer and clear
/// the queue. Returns `(applied, dropped)`; out-of-bounds requests are dropped.
pub(super) fn apply_placements(world: &mut WorldCore) -> (u32, u32) {
    if world.placements.is_empty() {
        return (0, 0);
    }

    let mut applied = 0u32;
    let mut dropped = 0u32;
    let mut queue = std::mem::take(&mut world.placements);

    for placement in queue.drain(..) {
        let particle = if placement.kind.is_empty() {
            None
        } else {
            Some(Particle::new(placement.kind, &mut world.rng))
        };
        if world.grid.set_current(placement.row, placement.col, particle) {
            world.grid.wake_neighbors(placement.row, placement.col);
            applied += 1;
        } else {
            dropped += 1;
        }
    }

    // Hand the allocation back to the queue.
    world.placements = queue;

    if dropped > 0 {
        engine_warn!("dropped {} out-of-bounds placement(s)", dropped);
    }
    (applied, dropped)
}

pub(super) fn add_heat(world: &mut WorldCore, row: i32, col: i32, amount: f32) -> bool {
    match world.grid.particle_mut(row, col) {
        Some(p) => {
            p.add_heat(amount);
            true
        }
        None => false,
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.placements.clear();
}
