use rand::Rng;

use super::super::UpdateContext;
use crate::domain::{DepthSource, ParticleKind};

/// Count exposed ticks and sprout grass once past the threshold.
/// Returns true while exposed (covered dirt has nothing to do and may sleep).
pub(super) fn update_dirt(ctx: &mut UpdateContext) -> bool {
    let config = ctx.config;
    let grass = &config.grass;
    let exposed = match ctx.neighbor(-1, 0) {
        None => true,
        Some(above) => grass.exposure_counts_grass && above.kind() == ParticleKind::Grass,
    };

    let exposed_ticks = match ctx.particle_mut() {
        Some(p) => {
            p.counter = if exposed { p.counter.saturating_add(1) } else { 0 };
            p.counter
        }
        None => return false,
    };
    if !exposed {
        return false;
    }

    let (threshold, chance) = (grass.grow_threshold, grass.grow_chance);
    if exposed_ticks > threshold && ctx.roll(chance) && within_growth_depth(ctx) {
        ctx.replace_with(ParticleKind::Grass);
    }
    true
}

/// Limit growth to a randomized depth below the open-air surface.
fn within_growth_depth(ctx: &mut UpdateContext) -> bool {
    let Some(max_depth) = ctx.config.grass.max_depth else {
        return true;
    };
    let limit = ctx.rng.gen_range(0..=max_depth);
    depth_below_surface(ctx) <= limit
}

fn depth_below_surface(ctx: &UpdateContext) -> u32 {
    match ctx.config.grass.depth_source {
        DepthSource::Scan => {
            let mut depth = 0;
            let mut row = ctx.row - 1;
            while ctx.grid.query_cell(row, ctx.col).is_some() {
                depth += 1;
                row -= 1;
            }
            depth
        }
        DepthSource::SurfaceTable => ctx.surface.depth(ctx.row, ctx.col).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::super::StaticSolidBehavior;
    use crate::domain::{Particle, ParticleKind, SimConfig};
    use crate::spatial::grid::{Grid, SurfaceTable};
    use crate::systems::behaviors::{Behavior, UpdateContext};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(grid: &mut Grid, config: &SimConfig, row: i32, col: i32) {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut surface = SurfaceTable::new(grid.rows(), grid.cols());
        surface.recompute(grid);
        let mut ctx = UpdateContext::new(grid, &mut rng, config, &surface, row, col, 0);
        StaticSolidBehavior::new().update(&mut ctx);
    }

    fn always_grow(threshold: u32) -> SimConfig {
        let mut config = SimConfig::default();
        config.grass.grow_threshold = threshold;
        config.grass.grow_chance = 100;
        config
    }

    #[test]
    fn exposed_dirt_sprouts_after_threshold() {
        let config = always_grow(2);
        let mut grid = Grid::new(2, 1);
        let mut dirt = Particle::with_color(ParticleKind::Dirt, 0);
        dirt.counter = 2;
        grid.set_current(1, 0, Some(dirt));
        run(&mut grid, &config, 1, 0);
        assert_eq!(grid.query_next_cell(1, 0).unwrap().kind(), ParticleKind::Grass);
    }

    #[test]
    fn exposed_dirt_below_threshold_counts_and_stays_awake() {
        let config = always_grow(5);
        let mut grid = Grid::new(1, 1);
        grid.set_current(0, 0, Some(Particle::with_color(ParticleKind::Dirt, 0)));
        run(&mut grid, &config, 0, 0);

        let dirt = grid.query_cell(0, 0).unwrap();
        assert_eq!(dirt.counter, 1);
        assert!(dirt.is_awake());
        assert!(grid.query_next_cell(0, 0).is_none());
    }

    #[test]
    fn covered_dirt_resets_and_sleeps() {
        let config = always_grow(0);
        let mut grid = Grid::new(2, 1);
        grid.set_current(0, 0, Some(Particle::with_color(ParticleKind::Sand, 0)));
        let mut dirt = Particle::with_color(ParticleKind::Dirt, 0);
        dirt.counter = 40;
        grid.set_current(1, 0, Some(dirt));
        run(&mut grid, &config, 1, 0);

        let dirt = grid.query_cell(1, 0).unwrap();
        assert_eq!(dirt.counter, 0);
        assert!(!dirt.is_awake());
    }

    #[test]
    fn grass_above_counts_as_exposure_when_enabled() {
        let mut config = always_grow(0);
        config.grass.exposure_counts_grass = true;
        let mut grid = Grid::new(2, 1);
        grid.set_current(0, 0, Some(Particle::with_color(ParticleKind::Grass, 0)));
        grid.set_current(1, 0, Some(Particle::with_color(ParticleKind::Dirt, 0)));
        run(&mut grid, &config, 1, 0);
        assert_eq!(grid.query_next_cell(1, 0).unwrap().kind(), ParticleKind::Grass);
    }

    #[test]
    fn max_depth_zero_blocks_buried_growth() {
        let mut config = always_grow(0);
        config.grass.exposure_counts_grass = true;
        config.grass.max_depth = Some(0);
        let mut grid = Grid::new(2, 1);
        grid.set_current(0, 0, Some(Particle::with_color(ParticleKind::Grass, 0)));
        grid.set_current(1, 0, Some(Particle::with_color(ParticleKind::Dirt, 0)));
        run(&mut grid, &config, 1, 0);
        assert!(grid.query_next_cell(1, 0).is_none());
    }

    #[test]
    fn surface_table_depth_source_matches_scan() {
        let mut config = always_grow(0);
        config.grass.exposure_counts_grass = true;
        config.grass.max_depth = Some(0);
        config.grass.depth_source = crate::domain::DepthSource::SurfaceTable;
        let mut grid = Grid::new(3, 1);
        grid.set_current(1, 0, Some(Particle::with_color(ParticleKind::Grass, 0)));
        grid.set_current(2, 0, Some(Particle::with_color(ParticleKind::Dirt, 0)));
        run(&mut grid, &config, 2, 0);
        assert!(grid.query_next_cell(2, 0).is_none());
    }
}
