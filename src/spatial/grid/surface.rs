use super::Grid;

/// Per column, the row index of the topmost occupied cell in `current`.
/// Recomputed once per tick before the sweep.
pub struct SurfaceTable {
    heights: Vec<u32>,
    rows: u32,
}

impl SurfaceTable {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            heights: vec![rows; cols as usize],
            rows,
        }
    }

    pub fn recompute(&mut self, grid: &Grid) {
        self.rows = grid.rows();
        self.heights.resize(grid.cols() as usize, grid.rows());
        for col in 0..grid.cols() {
            let top = (0..grid.rows())
                .find(|&row| !grid.is_empty(row as i32, col as i32))
                .unwrap_or(grid.rows());
            self.heights[col as usize] = top;
        }
    }

    /// Topmost occupied row, `None` for an empty column (or out of range).
    #[inline]
    pub fn height(&self, col: i32) -> Option<u32> {
        if col < 0 {
            return None;
        }
        match self.heights.get(col as usize) {
            Some(&h) if h < self.rows => Some(h),
            _ => None,
        }
    }

    /// Rows between the surface of `col` and `row` (0 at the surface).
    #[inline]
    pub fn depth(&self, row: i32, col: i32) -> Option<u32> {
        let top = self.height(col)? as i32;
        if row < top {
            None
        } else {
            Some((row - top) as u32)
        }
    }
}
