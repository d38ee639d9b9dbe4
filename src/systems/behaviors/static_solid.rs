//! StaticSolidBehavior - dirt and grass
//!
//! Neither kind ever moves. Dirt left exposed to open air long enough sprouts
//! grass; grass that stays covered dies back to dirt.

mod dirt;
mod grass;

use super::{Behavior, UpdateContext};
use crate::domain::ParticleKind;

pub struct StaticSolidBehavior;

impl StaticSolidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for StaticSolidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(kind) = ctx.begin() else { return };

        let keep_awake = match kind {
            ParticleKind::Dirt => dirt::update_dirt(ctx),
            ParticleKind::Grass => grass::update_grass(ctx),
            _ => false,
        };
        ctx.finish(keep_awake);
    }
}
