use crate::domain::Category;
use crate::spatial::grid::Grid;

use super::UpdateContext;

/// Walk sideways from `(row, col)` in `dir` for up to `range` cells and return
/// the distance to the closest cell a fluid could flow into.
///
/// The walk stops at the grid edge, at any occupied cell, and at any cell
/// already claimed in the next buffer (claimed means blocked from there on).
/// With `yield_density` set, a target with a falling solid denser than that
/// value sitting right above it is skipped but does not stop the walk. Static
/// solids above never fall in, so they do not count.
pub fn scan_lateral(
    grid: &Grid,
    row: i32,
    col: i32,
    dir: i32,
    range: u8,
    yield_density: Option<f32>,
) -> Option<i32> {
    for step in 1..=range as i32 {
        let c = col + dir * step;
        if !grid.in_bounds(row, c) {
            break;
        }
        if !grid.is_empty(row, c) || grid.is_claimed(row, c) {
            break;
        }
        if let Some(density) = yield_density {
            let falling_in = grid
                .query_cell(row - 1, c)
                .map_or(false, |above| {
                    above.category() == Category::DynamicSolid && above.density() > density
                });
            if falling_in {
                continue;
            }
        }
        return Some(step);
    }
    None
}

/// Drop the updated particle's temperature by `rate`, never below ambient.
pub fn cool_toward_ambient(ctx: &mut UpdateContext, rate: f32) {
    let ambient = ctx.config.ambient_temperature;
    if let Some(p) = ctx.particle_mut() {
        if p.temperature > ambient {
            p.temperature = (p.temperature - rate).max(ambient);
        }
    }
}

/// Scan both sides starting with `dir` and return the signed column offset
/// of the closest reachable cell. A tie goes to `dir`.
pub fn closest_lateral(
    grid: &Grid,
    row: i32,
    col: i32,
    dir: i32,
    range: u8,
    yield_density: Option<f32>,
) -> Option<i32> {
    let first = scan_lateral(grid, row, col, dir, range, yield_density);
    let second = scan_lateral(grid, row, col, -dir, range, yield_density);
    match (first, second) {
        (Some(a), Some(b)) if b < a => Some(-dir * b),
        (Some(a), _) => Some(dir * a),
        (None, Some(b)) => Some(-dir * b),
        (None, None) => None,
    }
}
