use crate::systems::behaviors::UpdateContext;

use super::WorldCore;

/// Visit every awake, unresolved particle from the bottom row up.
/// Returns how many behaviors ran.
pub(super) fn sweep(world: &mut WorldCore, left_to_right: bool) -> u32 {
    let rows = world.grid.rows() as i32;
    let cols = world.grid.cols() as i32;
    let mut processed = 0u32;

    for row in (0..rows).rev() {
        for i in 0..cols {
            let col = if left_to_right { i } else { cols - 1 - i };
            if update_cell(world, row, col) {
                processed += 1;
            }
        }
    }
    processed
}

#[inline]
fn update_cell(world: &mut WorldCore, row: i32, col: i32) -> bool {
    let category = match world.grid.query_cell(row, col) {
        Some(p) if p.is_awake() && !p.is_resolved() => p.category(),
        _ => return false,
    };

    let mut ctx = UpdateContext::new(
        &mut world.grid,
        &mut world.rng,
        &world.config,
        &world.surface,
        row,
        col,
        world.frame,
    );
    world.behaviors.update(category, &mut ctx);
    true
}
