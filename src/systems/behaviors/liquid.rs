//! LiquidBehavior - water and oil
//!
//! Order per tick:
//! 1. evaporate (boiling liquid with room above), else cool toward ambient
//! 2. fall straight down
//! 3. fall diagonally, random side first
//! 4. flow sideways to the closest reachable cell within `dispersion`
//!
//! A liquid that does none of these goes to sleep.

mod evaporation;
mod perf;

pub use perf::take_liquid_scan_counter;

use super::{closest_lateral, cool_toward_ambient, Behavior, UpdateContext};
use crate::domain::ParticleKind;

use evaporation::try_evaporate;
use perf::inc_liquid_scans;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    fn flow(&self, ctx: &mut UpdateContext, kind: ParticleKind) -> bool {
        if ctx.try_move(1, 0) {
            return true;
        }

        let dir = ctx.random_dir();
        if ctx.try_move(1, dir) || ctx.try_move(1, -dir) {
            return true;
        }

        let props = kind.props();
        let yield_density = ctx.config.liquid_yield_to_falling.then_some(props.density);

        inc_liquid_scans();
        let target = closest_lateral(&*ctx.grid, ctx.row, ctx.col, dir, props.dispersion, yield_density);

        match target {
            Some(dc) => ctx.try_move(0, dc),
            None => false,
        }
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(kind) = ctx.begin() else { return };

        if try_evaporate(ctx, kind) {
            ctx.finish(false);
            return;
        }

        let rate = ctx.config.liquid_cooling_rate;
        cool_toward_ambient(ctx, rate);

        // Read before flowing; a moved particle is no longer in the current buffer.
        let boiling = match (kind.props().boils_to, ctx.particle()) {
            (Some((point, _)), Some(p)) => p.temperature >= point,
            _ => false,
        };

        self.flow(ctx, kind);

        // A boiling liquid stays awake so it keeps rolling for evaporation.
        ctx.finish(boiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Particle, SimConfig};
    use crate::spatial::grid::{Grid, SurfaceTable};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(grid: &mut Grid, config: &SimConfig, row: i32, col: i32, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let surface = SurfaceTable::new(grid.rows(), grid.cols());
        let mut ctx = UpdateContext::new(grid, &mut rng, config, &surface, row, col, 0);
        LiquidBehavior::new().update(&mut ctx);
    }

    fn put(grid: &mut Grid, row: i32, col: i32, kind: ParticleKind) {
        grid.set_current(row, col, Some(Particle::with_color(kind, 0)));
    }

    #[test]
    fn water_falls_first() {
        let mut grid = Grid::new(2, 3);
        put(&mut grid, 0, 1, ParticleKind::Water);
        run(&mut grid, &SimConfig::default(), 0, 1, 1);
        assert_eq!(grid.query_next_cell(1, 1).unwrap().kind(), ParticleKind::Water);
    }

    #[test]
    fn water_on_the_floor_spreads_to_an_adjacent_cell() {
        let mut grid = Grid::new(1, 5);
        put(&mut grid, 0, 2, ParticleKind::Water);
        run(&mut grid, &SimConfig::default(), 0, 2, 5);

        let left = grid.query_next_cell(0, 1).is_some();
        let right = grid.query_next_cell(0, 3).is_some();
        assert!(left ^ right);
    }

    #[test]
    fn boxed_in_water_sleeps() {
        let mut grid = Grid::new(1, 3);
        put(&mut grid, 0, 0, ParticleKind::Dirt);
        put(&mut grid, 0, 1, ParticleKind::Water);
        put(&mut grid, 0, 2, ParticleKind::Dirt);
        run(&mut grid, &SimConfig::default(), 0, 1, 1);

        let water = grid.query_cell(0, 1).unwrap();
        assert!(!water.is_awake());
        assert!(water.is_resolved());
    }

    #[test]
    fn oil_floats_on_water() {
        let mut grid = Grid::new(2, 1);
        put(&mut grid, 0, 0, ParticleKind::Oil);
        put(&mut grid, 1, 0, ParticleKind::Water);
        run(&mut grid, &SimConfig::default(), 0, 0, 1);
        assert_eq!(grid.query_cell(0, 0).unwrap().kind(), ParticleKind::Oil);
        assert!(grid.query_next_cell(1, 0).is_none());
    }

    #[test]
    fn boiling_water_with_open_sky_evaporates() {
        let mut config = SimConfig::default();
        config.evaporation_chance = 100;
        let mut grid = Grid::new(1, 1);
        put(&mut grid, 0, 0, ParticleKind::Water);
        grid.particle_mut(0, 0).unwrap().temperature = 100.0;
        run(&mut grid, &config, 0, 0, 1);
        assert_eq!(grid.query_next_cell(0, 0).unwrap().kind(), ParticleKind::Steam);
    }

    #[test]
    fn covered_boiling_water_stays_liquid_and_awake() {
        let mut config = SimConfig::default();
        config.evaporation_chance = 100;
        let mut grid = Grid::new(2, 1);
        put(&mut grid, 0, 0, ParticleKind::Dirt);
        put(&mut grid, 1, 0, ParticleKind::Water);
        grid.particle_mut(1, 0).unwrap().temperature = 120.0;
        run(&mut grid, &config, 1, 0, 1);

        assert!(grid.query_next_cell(1, 0).is_none());
        assert!(grid.query_cell(1, 0).unwrap().is_awake());
    }

    #[test]
    fn hot_water_cools_and_then_sleeps() {
        let mut grid = Grid::new(2, 1);
        put(&mut grid, 0, 0, ParticleKind::Dirt);
        put(&mut grid, 1, 0, ParticleKind::Water);
        grid.particle_mut(1, 0).unwrap().temperature = 100.0;
        run(&mut grid, &SimConfig::default(), 1, 0, 1);

        let water = grid.query_cell(1, 0).unwrap();
        assert!(water.temperature < 100.0);
        assert!(!water.is_awake());
    }

    #[test]
    fn water_never_cools_below_ambient() {
        let mut config = SimConfig::default();
        config.liquid_cooling_rate = 50.0;
        let mut grid = Grid::new(1, 1);
        put(&mut grid, 0, 0, ParticleKind::Water);
        grid.particle_mut(0, 0).unwrap().temperature = 30.0;
        run(&mut grid, &config, 0, 0, 1);
        assert_eq!(grid.query_cell(0, 0).unwrap().temperature, config.ambient_temperature);
    }
}
