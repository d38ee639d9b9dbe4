//! GasBehavior - steam
//!
//! Gases cool toward ambient every tick, condense back into their liquid once
//! cool enough, and otherwise rise: straight up, then diagonally up, then
//! sideways within `dispersion`. Gases never sleep on their own; they are
//! transient and keep cooling until they condense.

mod condensation;

use super::{closest_lateral, cool_toward_ambient, Behavior, UpdateContext};
use crate::domain::ParticleKind;

use condensation::try_condense;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }

    fn rise(&self, ctx: &mut UpdateContext, kind: ParticleKind) -> bool {
        if ctx.try_move(-1, 0) {
            return true;
        }

        let dir = ctx.random_dir();
        if ctx.try_move(-1, dir) || ctx.try_move(-1, -dir) {
            return true;
        }

        let range = kind.props().dispersion;
        match closest_lateral(&*ctx.grid, ctx.row, ctx.col, dir, range, None) {
            Some(dc) => ctx.try_move(0, dc),
            None => false,
        }
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(kind) = ctx.begin() else { return };

        let rate = ctx.config.steam_cooling_rate;
        cool_toward_ambient(ctx, rate);

        if try_condense(ctx, kind) {
            ctx.finish(false);
            return;
        }

        self.rise(ctx, kind);
        ctx.finish(true);
    }
}
