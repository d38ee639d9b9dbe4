use super::*;
use crate::domain::ParticleKind;

/// Read-only view of the current buffer for renderers.
#[derive(Clone, Copy)]
pub struct GridSnapshot<'a> {
    rows: u32,
    cols: u32,
    cells: &'a [Option<Particle>],
}

impl Grid {
    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            cells: &self.current,
        }
    }
}

impl<'a> GridSnapshot<'a> {
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn particle_at(&self, row: i32, col: i32) -> Option<&'a Particle> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize].as_ref()
    }

    #[inline]
    pub fn kind_at(&self, row: i32, col: i32) -> ParticleKind {
        self.particle_at(row, col).map_or(ParticleKind::Empty, Particle::kind)
    }

    #[inline]
    pub fn color_at(&self, row: i32, col: i32) -> Option<u32> {
        self.particle_at(row, col).map(Particle::display_color)
    }

    /// `(row, col, particle)` for every occupied cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, &'a Particle)> + 'a {
        let cols = self.cols as usize;
        let cells = self.cells;
        cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|p| ((idx / cols) as u32, (idx % cols) as u32, p))
        })
    }

    /// Kind ids in row-major order (0 = empty).
    pub fn kinds(&self) -> impl Iterator<Item = u8> + 'a {
        let cells = self.cells;
        cells
            .iter()
            .map(|cell| cell.as_ref().map_or(ParticleKind::Empty.id(), |p| p.kind().id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_current_and_treats_edges_as_empty() {
        let mut grid = Grid::new(2, 3);
        grid.set_current(1, 2, Some(Particle::with_color(ParticleKind::Oil, 0xFF0000FF)));

        let snap = grid.snapshot();
        assert_eq!(snap.kind_at(1, 2), ParticleKind::Oil);
        assert_eq!(snap.color_at(1, 2), Some(0xFF0000FF));
        assert_eq!(snap.kind_at(5, 5), ParticleKind::Empty);
        assert_eq!(snap.color_at(-1, 0), None);

        let occupied: Vec<_> = snap.occupied().map(|(r, c, p)| (r, c, p.kind())).collect();
        assert_eq!(occupied, vec![(1, 2, ParticleKind::Oil)]);

        let kinds: Vec<u8> = snap.kinds().collect();
        assert_eq!(kinds, vec![0, 0, 0, 0, 0, ParticleKind::Oil.id()]);
    }
}
