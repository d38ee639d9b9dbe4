use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// Tick prologue: clear every resolve flag in `current` and empty `next`.
    /// PARALLEL: cells are independent here, so Rayon splits the buffers.
    pub fn begin_tick(&mut self) {
        self.stats.reset();

        #[cfg(feature = "parallel")]
        {
            self.current
                .par_iter_mut()
                .zip(self.next.par_iter_mut())
                .for_each(|(cur, nxt)| {
                    if let Some(p) = cur.as_mut() {
                        p.reset_resolved();
                    }
                    *nxt = None;
                });
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (cur, nxt) in self.current.iter_mut().zip(self.next.iter_mut()) {
                if let Some(p) = cur.as_mut() {
                    p.reset_resolved();
                }
                *nxt = None;
            }
        }
    }

    /// Tick epilogue: carry every particle still in `current` into an empty
    /// `next` slot at the same coordinates, then swap buffers.
    ///
    /// A `current` particle whose `next` slot is taken was replaced this tick
    /// and is dropped here. After the swap `next` holds only `None`.
    pub fn finish_tick(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.current
                .par_iter_mut()
                .zip(self.next.par_iter_mut())
                .for_each(|(cur, nxt)| carry_over(cur, nxt));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (cur, nxt) in self.current.iter_mut().zip(self.next.iter_mut()) {
                carry_over(cur, nxt);
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }
}

#[inline]
fn carry_over(cur: &mut Option<Particle>, nxt: &mut Option<Particle>) {
    if let Some(p) = cur.take() {
        if nxt.is_none() {
            *nxt = Some(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParticleKind;

    #[test]
    fn untouched_particles_carry_over_unchanged() {
        let mut grid = Grid::new(2, 2);
        let mut dirt = Particle::with_color(ParticleKind::Dirt, 0xFF00_1122);
        dirt.counter = 7;
        grid.set_current(1, 1, Some(dirt.clone()));

        grid.begin_tick();
        grid.finish_tick();

        assert_eq!(grid.query_cell(1, 1), Some(&dirt));
        assert!(grid.query_next_cell(1, 1).is_none());
    }

    #[test]
    fn replaced_particle_is_dropped_at_carry_over() {
        let mut grid = Grid::new(1, 1);
        grid.set_current(0, 0, Some(Particle::with_color(ParticleKind::Dirt, 0)));

        grid.begin_tick();
        grid.place_in_next(0, 0, Particle::with_color(ParticleKind::Grass, 0));
        grid.finish_tick();

        assert_eq!(grid.kind_at(0, 0), ParticleKind::Grass);
        assert_eq!(grid.particle_count(), 1);
    }

    #[test]
    fn begin_tick_resets_resolve_flags_and_stats() {
        let mut grid = Grid::new(1, 2);
        grid.set_current(0, 0, Some(Particle::with_color(ParticleKind::Sand, 0)));
        grid.particle_mut(0, 0).unwrap().mark_resolved();
        grid.stats.moves = 3;

        grid.begin_tick();

        assert!(!grid.query_cell(0, 0).unwrap().is_resolved());
        assert_eq!(grid.stats, MoveStats::default());
    }
}
