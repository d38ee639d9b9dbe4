//! Particle - the per-cell record
//!
//! A particle is plain data: its kind, thermal state, sleep/resolve flags and
//! a render color fixed at birth. All movement goes through the grid; a
//! particle never references another particle.

use rand::Rng;

use super::kinds::{Category, ParticleKind};

/// Max +/- per channel applied to the base color of a new particle.
const COLOR_JITTER: i32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    kind: ParticleKind,
    color: u32,
    pub temperature: f32,
    pub age: u32,
    awake: bool,
    resolved: bool,
    /// Material-specific tick counter:
    /// - dirt: consecutive ticks with open space above
    /// - grass: consecutive ticks covered
    /// - wet sand: consecutive ticks without water above
    pub counter: u32,
}

impl Particle {
    /// Factory used by placements and transformations.
    pub fn new<R: Rng + ?Sized>(kind: ParticleKind, rng: &mut R) -> Self {
        let color = jitter_color(kind.props().color, rng);
        Self::with_color(kind, color)
    }

    /// Construct with an exact color (no jitter).
    pub fn with_color(kind: ParticleKind, color: u32) -> Self {
        Self {
            kind,
            color,
            temperature: kind.props().default_temp,
            age: 0,
            awake: true,
            resolved: false,
            counter: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    #[inline]
    pub fn display_color(&self) -> u32 {
        self.color
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.kind.density()
    }

    #[inline]
    pub fn is_fluid(&self) -> bool {
        self.category().is_fluid()
    }

    /// Raise (or lower, with a negative amount) temperature; always wakes.
    pub fn add_heat(&mut self, amount: f32) {
        self.temperature += amount;
        self.wake();
    }

    // === Sleep state ===

    #[inline]
    pub fn is_awake(&self) -> bool {
        self.awake
    }

    #[inline]
    pub fn wake(&mut self) {
        self.awake = true;
    }

    /// Called by a rule that made no move this tick. There is no velocity to
    /// integrate, so "no move" is the whole condition.
    #[inline]
    pub fn maybe_sleep(&mut self) {
        self.awake = false;
    }

    // === Per-tick resolve flag ===

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    #[inline]
    pub fn mark_resolved(&mut self) {
        self.resolved = true;
    }

    #[inline]
    pub fn reset_resolved(&mut self) {
        self.resolved = false;
    }
}

fn jitter_color<R: Rng + ?Sized>(base: u32, rng: &mut R) -> u32 {
    let mut channel = |shift: u32| -> u32 {
        let c = ((base >> shift) & 0xFF) as i32;
        let offset = rng.gen_range(-COLOR_JITTER..=COLOR_JITTER);
        ((c + offset).clamp(0, 255) as u32) << shift
    };
    let r = channel(0);
    let g = channel(8);
    let b = channel(16);
    (base & 0xFF00_0000) | b | g | r
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn channels(c: u32) -> [i32; 4] {
        [
            (c & 0xFF) as i32,
            ((c >> 8) & 0xFF) as i32,
            ((c >> 16) & 0xFF) as i32,
            ((c >> 24) & 0xFF) as i32,
        ]
    }

    #[test]
    fn new_particle_starts_awake_unresolved_at_default_temp() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = Particle::new(ParticleKind::Steam, &mut rng);
        assert!(p.is_awake());
        assert!(!p.is_resolved());
        assert_eq!(p.age, 0);
        assert_eq!(p.counter, 0);
        assert_eq!(p.temperature, 110.0);
        assert_eq!(p.kind(), ParticleKind::Steam);
    }

    #[test]
    fn color_jitter_stays_within_fifteen_per_channel() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let base = channels(ParticleKind::Sand.props().color);
        for _ in 0..200 {
            let c = channels(Particle::new(ParticleKind::Sand, &mut rng).display_color());
            for i in 0..3 {
                assert!((c[i] - base[i]).abs() <= COLOR_JITTER);
            }
            assert_eq!(c[3], 0xFF);
        }
    }

    #[test]
    fn add_heat_wakes_a_sleeping_particle() {
        let mut p = Particle::with_color(ParticleKind::Water, 0);
        p.maybe_sleep();
        assert!(!p.is_awake());
        p.add_heat(85.0);
        assert!(p.is_awake());
        assert_eq!(p.temperature, 105.0);
    }

    #[test]
    fn resolve_flag_round_trip() {
        let mut p = Particle::with_color(ParticleKind::Dirt, 0);
        p.mark_resolved();
        assert!(p.is_resolved());
        p.reset_resolved();
        assert!(!p.is_resolved());
    }
}
