use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::WorldError;
use crate::domain::SimConfig;
use crate::spatial::grid::{Grid, SurfaceTable};
use crate::systems::behaviors::BehaviorRegistry;

use super::perf_stats::PerfStats;
use super::seed::clock_seed;
use super::WorldCore;

pub(super) fn create_world_core(rows: u32, cols: u32, config: SimConfig) -> Result<WorldCore, WorldError> {
    if rows == 0 || cols == 0 {
        return Err(WorldError::InvalidDimensions { rows, cols });
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut grid = Grid::new(rows, cols);
    grid.set_wake_radius(config.wake_radius);

    engine_log!("world {}x{} created (seed {})", rows, cols, seed);

    Ok(WorldCore {
        grid,
        surface: SurfaceTable::new(rows, cols),
        behaviors: BehaviorRegistry::new(),
        config,
        rng: ChaCha8Rng::seed_from_u64(seed),
        seed,
        placements: Vec::with_capacity(256),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
