use super::*;

/// What the destination held before this tick touched it.
enum Destination {
    Empty,
    Displaceable,
    Blocked,
}

impl Grid {
    /// Move the particle at `from` into `to`, or swap it with a lighter fluid
    /// sitting there. Writes only into the next buffer.
    ///
    /// Rejected (returns false, nothing changes) when:
    /// - either coordinate is outside the grid, or `from` holds nothing
    /// - `to` was already claimed in the next buffer this tick
    /// - `to` holds a solid, or a fluid at least as dense as the mover
    /// - a swap is needed but `from`'s next slot is already claimed
    ///   (the displaced fluid would have nowhere to go)
    ///
    /// On success both neighborhoods are woken, and so is the mover.
    pub fn try_move_or_swap(&mut self, r_from: i32, c_from: i32, r_to: i32, c_to: i32) -> bool {
        let (Some(src), Some(dst)) = (
            self.checked_index(r_from, c_from),
            self.checked_index(r_to, c_to),
        ) else {
            self.stats.rejected += 1;
            return false;
        };
        if src == dst {
            return false;
        }

        let Some(mover_density) = self.current[src].as_ref().map(Particle::density) else {
            return false;
        };

        if self.next[dst].is_some() {
            self.stats.rejected += 1;
            return false;
        }

        let destination = match self.current[dst].as_ref() {
            None => Destination::Empty,
            Some(target) if target.is_fluid() && target.density() < mover_density => {
                Destination::Displaceable
            }
            Some(_) => Destination::Blocked,
        };

        match destination {
            Destination::Empty => {
                self.next[dst] = self.current[src].take();
                self.stats.moves += 1;
            }
            Destination::Displaceable => {
                if self.next[src].is_some() {
                    self.stats.rejected += 1;
                    return false;
                }
                self.next[dst] = self.current[src].take();
                self.next[src] = self.current[dst].take();
                if let Some(displaced) = self.next[src].as_mut() {
                    displaced.wake();
                }
                self.stats.swaps += 1;
            }
            Destination::Blocked => {
                self.stats.rejected += 1;
                return false;
            }
        }

        self.wake_neighbors(r_from, c_from);
        self.wake_neighbors(r_to, c_to);
        if let Some(mover) = self.next[dst].as_mut() {
            mover.wake();
        }
        true
    }

    /// Force-write a particle into the next buffer (material transformation).
    /// The instance still sitting in `current` is dropped at carry-over.
    pub fn place_in_next(&mut self, row: i32, col: i32, particle: Particle) -> bool {
        let Some(idx) = self.checked_index(row, col) else {
            return false;
        };
        self.next[idx] = Some(particle);
        self.stats.transformations += 1;
        self.wake_neighbors(row, col);
        true
    }

    /// Wake every current-buffer particle within `wake_radius` (Chebyshev)
    /// of `(row, col)`, excluding the center.
    pub fn wake_neighbors(&mut self, row: i32, col: i32) {
        let radius = self.wake_radius;
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(neighbor) = self.particle_mut(row + dr, col + dc) {
                    neighbor.wake();
                }
            }
        }
    }
}
