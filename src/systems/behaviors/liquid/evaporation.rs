use super::super::UpdateContext;
use crate::domain::{Category, ParticleKind};

/// A liquid at or above its boiling point turns into its gas form when the
/// cell above is empty, open sky, or already gas.
pub(super) fn try_evaporate(ctx: &mut UpdateContext, kind: ParticleKind) -> bool {
    let Some((boiling_point, gas)) = kind.props().boils_to else {
        return false;
    };
    let hot = ctx.particle().map_or(false, |p| p.temperature >= boiling_point);
    if !hot {
        return false;
    }
    let room_above = ctx
        .neighbor(-1, 0)
        .map_or(true, |above| above.category() == Category::Gas);
    if !room_above {
        return false;
    }
    let chance = ctx.config.evaporation_chance;
    ctx.roll(chance) && ctx.replace_with(gas)
}
