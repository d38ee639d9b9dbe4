use super::WorldCore;

/// Flat per-cell arrays for zero-copy canvas upload.
/// `kinds[i]` is the kind id, `colors[i]` the ABGR color (0 for empty cells).
#[derive(Debug, Default, Clone)]
pub struct RenderBuffers {
    pub kinds: Vec<u8>,
    pub colors: Vec<u32>,
}

impl RenderBuffers {
    pub fn with_size(size: usize) -> Self {
        Self {
            kinds: vec![0; size],
            colors: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

pub(super) fn extract(world: &WorldCore, out: &mut RenderBuffers) {
    let snapshot = world.snapshot();
    let size = world.grid.size();
    out.kinds.resize(size, 0);
    out.colors.resize(size, 0);

    for (kind, slot) in snapshot.kinds().zip(out.kinds.iter_mut()) {
        *slot = kind;
    }
    out.colors.fill(0);
    let cols = snapshot.cols() as usize;
    for (row, col, particle) in snapshot.occupied() {
        out.colors[row as usize * cols + col as usize] = particle.display_color();
    }
}
