use wasm_bindgen::prelude::*;

/// Counters for the last step. All zero while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) moves: u32,
    pub(super) swaps: u32,
    pub(super) rejected: u32,
    pub(super) transformations: u32,
    pub(super) placements_applied: u32,
    pub(super) placements_dropped: u32,
    pub(super) liquid_scans: u32,
    pub(super) awake_count: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> u32 { self.rejected }
    #[wasm_bindgen(getter)]
    pub fn transformations(&self) -> u32 { self.transformations }
    #[wasm_bindgen(getter)]
    pub fn placements_applied(&self) -> u32 { self.placements_applied }
    #[wasm_bindgen(getter)]
    pub fn placements_dropped(&self) -> u32 { self.placements_dropped }
    #[wasm_bindgen(getter)]
    pub fn liquid_scans(&self) -> u32 { self.liquid_scans }
    #[wasm_bindgen(getter)]
    pub fn awake_count(&self) -> u32 { self.awake_count }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
