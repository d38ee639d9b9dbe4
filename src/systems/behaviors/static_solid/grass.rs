use super::super::UpdateContext;
use crate::domain::{GrassDeathPolicy, ParticleKind};

/// Covered grass rolls to die back to dirt under the configured policy.
/// Returns true while covered (uncovered grass has nothing to do).
pub(super) fn update_grass(ctx: &mut UpdateContext) -> bool {
    let config = ctx.config;
    let grass = &config.grass;
    let covered = match ctx.neighbor(-1, 0) {
        None => false,
        Some(above) => !(grass.exposure_counts_grass && above.kind() == ParticleKind::Grass),
    };

    let covered_ticks = match ctx.particle_mut() {
        Some(p) => {
            p.counter = if covered { p.counter.saturating_add(1) } else { 0 };
            p.counter
        }
        None => return false,
    };
    if !covered {
        return false;
    }

    let dies = match grass.death {
        GrassDeathPolicy::Instant { chance } => ctx.roll(chance),
        GrassDeathPolicy::Delayed { min_covered_ticks, chance } => {
            covered_ticks >= min_covered_ticks && ctx.roll(chance)
        }
    };
    if dies {
        ctx.replace_with(ParticleKind::Dirt);
    }
    true
}
