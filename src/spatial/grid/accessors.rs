use super::*;
use crate::domain::ParticleKind;

impl Grid {
    // === Queries (out of bounds reads as empty: the edge is open sky) ===

    /// Particle at `(row, col)` in the current buffer.
    #[inline]
    pub fn query_cell(&self, row: i32, col: i32) -> Option<&Particle> {
        self.checked_index(row, col)
            .and_then(|idx| self.current[idx].as_ref())
    }

    /// Particle at `(row, col)` in the next (in-progress) buffer.
    #[inline]
    pub fn query_next_cell(&self, row: i32, col: i32) -> Option<&Particle> {
        self.checked_index(row, col)
            .and_then(|idx| self.next[idx].as_ref())
    }

    #[inline]
    pub fn kind_at(&self, row: i32, col: i32) -> ParticleKind {
        self.query_cell(row, col)
            .map_or(ParticleKind::Empty, Particle::kind)
    }

    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.query_cell(row, col).is_none()
    }

    /// Empty in current AND unclaimed in next.
    #[inline]
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        match self.checked_index(row, col) {
            Some(idx) => self.current[idx].is_none() && self.next[idx].is_none(),
            None => false,
        }
    }

    #[inline]
    pub fn is_claimed(&self, row: i32, col: i32) -> bool {
        self.query_next_cell(row, col).is_some()
    }

    // === Mutable access ===

    #[inline]
    pub fn particle_mut(&mut self, row: i32, col: i32) -> Option<&mut Particle> {
        let idx = self.checked_index(row, col)?;
        self.current[idx].as_mut()
    }

    #[inline]
    pub fn next_particle_mut(&mut self, row: i32, col: i32) -> Option<&mut Particle> {
        let idx = self.checked_index(row, col)?;
        self.next[idx].as_mut()
    }

    /// Direct write into the current buffer (placement injection, not physics).
    /// `None` erases. Returns false outside the grid.
    pub fn set_current(&mut self, row: i32, col: i32, particle: Option<Particle>) -> bool {
        match self.checked_index(row, col) {
            Some(idx) => {
                self.current[idx] = particle;
                true
            }
            None => false,
        }
    }

    // === Whole-grid helpers ===

    pub fn particle_count(&self) -> usize {
        self.current.iter().filter(|c| c.is_some()).count()
    }

    pub fn count_kind(&self, kind: ParticleKind) -> usize {
        self.current
            .iter()
            .filter(|c| c.as_ref().map_or(false, |p| p.kind() == kind))
            .count()
    }

    pub fn awake_count(&self) -> usize {
        self.current
            .iter()
            .filter(|c| c.as_ref().map_or(false, Particle::is_awake))
            .count()
    }

    pub fn clear(&mut self) {
        self.current.fill(None);
        self.next.fill(None);
    }
}
