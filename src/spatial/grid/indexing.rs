use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx / self.cols as usize) as u32;
        let col = (idx % self.cols as usize) as u32;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }

    /// Index for signed coordinates, `None` outside the grid.
    #[inline]
    pub fn checked_index(&self, row: i32, col: i32) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some(self.index(row as u32, col as u32))
        } else {
            None
        }
    }
}
