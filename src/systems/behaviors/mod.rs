//! Behaviors - per-category update rules
//!
//! Each category gets one behavior. A behavior reads the current buffer and
//! writes its decision into the next buffer through the grid's move protocol,
//! then resolves the particle exactly once via `UpdateContext::finish`.

mod common;
mod gas;
mod liquid;
mod powder;
mod static_solid;

pub use common::{closest_lateral, cool_toward_ambient, scan_lateral};
pub use gas::GasBehavior;
pub use liquid::{take_liquid_scan_counter, LiquidBehavior};
pub use powder::PowderBehavior;
pub use static_solid::StaticSolidBehavior;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{Category, Particle, ParticleKind, SimConfig};
use crate::spatial::grid::{Grid, SurfaceTable};

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut ChaCha8Rng,
    pub config: &'a SimConfig,
    pub surface: &'a SurfaceTable,
    pub row: i32,
    pub col: i32,
    pub frame: u64,
    moved_to: Option<(i32, i32)>,
    replaced: bool,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        rng: &'a mut ChaCha8Rng,
        config: &'a SimConfig,
        surface: &'a SurfaceTable,
        row: i32,
        col: i32,
        frame: u64,
    ) -> Self {
        Self {
            grid,
            rng,
            config,
            surface,
            row,
            col,
            frame,
            moved_to: None,
            replaced: false,
        }
    }

    /// The particle being updated (current buffer).
    #[inline]
    pub fn particle(&self) -> Option<&Particle> {
        self.grid.query_cell(self.row, self.col)
    }

    #[inline]
    pub fn particle_mut(&mut self) -> Option<&mut Particle> {
        self.grid.particle_mut(self.row, self.col)
    }

    /// Age the particle and hand back its kind. `None` if the cell is empty.
    pub fn begin(&mut self) -> Option<ParticleKind> {
        let p = self.particle_mut()?;
        p.age = p.age.saturating_add(1);
        Some(p.kind())
    }

    /// Particle at an offset from the one being updated (current buffer).
    #[inline]
    pub fn neighbor(&self, dr: i32, dc: i32) -> Option<&Particle> {
        self.grid.query_cell(self.row + dr, self.col + dc)
    }

    /// Move/swap the particle to `(row + dr, col + dc)`.
    pub fn try_move(&mut self, dr: i32, dc: i32) -> bool {
        if self.moved_to.is_some() || self.replaced {
            return false;
        }
        let (to_row, to_col) = (self.row + dr, self.col + dc);
        if self.grid.try_move_or_swap(self.row, self.col, to_row, to_col) {
            self.moved_to = Some((to_row, to_col));
            true
        } else {
            false
        }
    }

    /// Turn the particle into a fresh instance of `kind`, in place.
    pub fn replace_with(&mut self, kind: ParticleKind) -> bool {
        if self.moved_to.is_some() || self.replaced || self.grid.is_claimed(self.row, self.col) {
            return false;
        }
        let fresh = Particle::new(kind, &mut *self.rng);
        self.replaced = self.grid.place_in_next(self.row, self.col, fresh);
        self.replaced
    }

    #[inline]
    pub fn moved(&self) -> bool {
        self.moved_to.is_some()
    }

    #[inline]
    pub fn replaced(&self) -> bool {
        self.replaced
    }

    /// Resolve the particle for this tick. A particle that moved stays awake;
    /// one that stayed put may fall asleep unless `keep_awake` is set.
    pub fn finish(&mut self, keep_awake: bool) {
        if let Some((row, col)) = self.moved_to {
            if let Some(p) = self.grid.next_particle_mut(row, col) {
                p.wake();
                p.mark_resolved();
            }
            return;
        }
        let replaced = self.replaced;
        if let Some(p) = self.particle_mut() {
            if !replaced {
                if keep_awake {
                    p.wake();
                } else {
                    p.maybe_sleep();
                }
            }
            p.mark_resolved();
        }
    }

    /// Roll a percent chance. 0 never passes, 100 always does.
    #[inline]
    pub fn roll(&mut self, percent: u8) -> bool {
        match percent {
            0 => false,
            p if p >= 100 => true,
            p => self.rng.gen_range(0..100u8) < p,
        }
    }

    /// -1 or +1 with equal probability.
    #[inline]
    pub fn random_dir(&mut self) -> i32 {
        if self.rng.gen_bool(0.5) { -1 } else { 1 }
    }
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    static_solid: StaticSolidBehavior,
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            static_solid: StaticSolidBehavior::new(),
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to appropriate behavior based on category
    pub fn update(&self, category: Category, ctx: &mut UpdateContext) {
        match category {
            Category::StaticSolid => self.static_solid.update(ctx),
            Category::DynamicSolid => self.powder.update(ctx),
            Category::Liquid => self.liquid.update(ctx),
            Category::Gas => self.gas.update(ctx),
            Category::Empty => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
