use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::WorldError;
use crate::domain::SimConfig;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_config(world: &mut WorldCore, config: SimConfig) -> Result<(), WorldError> {
    config.validate()?;
    if let Some(seed) = config.seed {
        world.rng = ChaCha8Rng::seed_from_u64(seed);
        world.seed = seed;
    }
    world.grid.set_wake_radius(config.wake_radius);
    world.config = config;
    Ok(())
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), WorldError> {
    let config = SimConfig::from_json(json).map_err(|err| {
        engine_warn!("config rejected: {}", err);
        err
    })?;
    set_config(world, config)
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
