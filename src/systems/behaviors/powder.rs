//! PowderBehavior - falling solids (sand, wet sand, silt)
//!
//! Straight down first, then the two diagonals in random order. Kinds that
//! don't slide diagonally (wet sand) only ever fall straight.
//! Denser powders sink through lighter fluids via the grid's swap rule.

use super::{Behavior, UpdateContext};
use crate::domain::ParticleKind;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    fn fall(&self, ctx: &mut UpdateContext, slides_diagonally: bool) -> bool {
        if ctx.try_move(1, 0) {
            return true;
        }
        if !slides_diagonally {
            return false;
        }
        let dir = ctx.random_dir();
        ctx.try_move(1, dir) || ctx.try_move(1, -dir)
    }

    /// Sand under water soaks through; wet sand dries once the water is gone.
    /// Returns true when the particle should stay awake to keep rolling.
    fn moisture(&self, ctx: &mut UpdateContext, kind: ParticleKind, water_above: bool) -> bool {
        match kind {
            ParticleKind::Sand if water_above => {
                let chance = ctx.config.sand_wetting_chance;
                if ctx.roll(chance) {
                    ctx.replace_with(ParticleKind::WetSand);
                }
                true
            }
            ParticleKind::WetSand if !water_above => {
                let dry_ticks = ctx.config.wet_sand_dry_ticks;
                let dried = ctx.particle().map_or(false, |p| p.counter > dry_ticks);
                if dried {
                    ctx.replace_with(ParticleKind::Sand);
                }
                true
            }
            _ => false,
        }
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(kind) = ctx.begin() else { return };

        let water_above = ctx
            .neighbor(-1, 0)
            .map_or(false, |p| p.kind() == ParticleKind::Water);

        if kind == ParticleKind::WetSand {
            if let Some(p) = ctx.particle_mut() {
                p.counter = if water_above { 0 } else { p.counter.saturating_add(1) };
            }
        }

        let slides = kind.props().slides_diagonally;
        if self.fall(ctx, slides) {
            ctx.finish(false);
            return;
        }

        let keep_awake = self.moisture(ctx, kind, water_above);
        ctx.finish(keep_awake);
    }
}
