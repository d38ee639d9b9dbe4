use crate::systems::behaviors::take_liquid_scan_counter;

use super::commands::apply_placements;
use super::sweep::sweep;
use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    if perf_on {
        world.perf_stats.reset();
        take_liquid_scan_counter();
    }

    // 1-2. Inject queued placements into the current buffer.
    let (applied, dropped) = apply_placements(world);

    // 3. Surface heights from the post-placement state.
    if world.config.surface_table {
        world.surface.recompute(&world.grid);
    }

    // 4. Reset resolve flags, clear the next buffer.
    world.grid.begin_tick();

    // 5. Bottom-up sweep, column direction alternating per tick.
    let left_to_right = (world.frame & 1) == 0;
    let processed = sweep(world, left_to_right);

    // 6-7. Carry over the untouched, swap.
    world.grid.finish_tick();
    world.frame += 1;

    if let Some(t0) = step_start {
        let stats = world.grid.stats;
        let perf = &mut world.perf_stats;
        perf.step_ms = t0.elapsed_ms();
        perf.particles_processed = processed;
        perf.moves = stats.moves;
        perf.swaps = stats.swaps;
        perf.rejected = stats.rejected;
        perf.transformations = stats.transformations;
        perf.placements_applied = applied;
        perf.placements_dropped = dropped;
        perf.liquid_scans = take_liquid_scan_counter() as u32;
        perf.particle_count = world.grid.particle_count() as u32;
        perf.awake_count = world.grid.awake_count() as u32;
    }
}
