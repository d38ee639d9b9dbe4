use super::super::UpdateContext;
use crate::domain::ParticleKind;

/// A gas at or below its condensation point rolls to turn back into liquid.
pub(super) fn try_condense(ctx: &mut UpdateContext, kind: ParticleKind) -> bool {
    let Some((point, liquid)) = kind.props().condenses_to else {
        return false;
    };
    let cool = ctx.particle().map_or(false, |p| p.temperature <= point);
    if !cool {
        return false;
    }
    let chance = ctx.config.condensation_chance;
    ctx.roll(chance) && ctx.replace_with(liquid)
}
