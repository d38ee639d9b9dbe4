use wasm_bindgen::prelude::*;

use crate::core::WorldError;
use crate::domain::{ParticleKind, SimConfig};

use super::perf_stats::PerfStats;
use super::render_extract::RenderBuffers;
use super::WorldCore;

fn js_error(err: WorldError) -> JsError {
    JsError::new(&err.to_string())
}

fn kind_from_js(kind: u8) -> Result<ParticleKind, JsError> {
    ParticleKind::from_id(kind).ok_or_else(|| JsError::new(&format!("unknown particle kind id {}", kind)))
}

/// JS-facing world: `WorldCore` plus render buffers refreshed after every step.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    render: RenderBuffers,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<World, JsError> {
        let core = WorldCore::new(rows, cols).map_err(js_error)?;
        Ok(Self::wrap(core))
    }

    /// Create a world from a JSON `SimConfig` (missing fields take defaults).
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(rows: u32, cols: u32, config_json: &str) -> Result<World, JsError> {
        let config = SimConfig::from_json(config_json).map_err(js_error)?;
        let core = WorldCore::with_config(rows, cols, config).map_err(js_error)?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    /// Ticks completed (as f64 so JS gets a plain number)
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> f64 { self.core.tick() as f64 }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    pub fn count_kind(&self, kind: u8) -> Result<u32, JsError> {
        Ok(self.core.count_kind(kind_from_js(kind)?) as u32)
    }

    pub fn kind_at(&self, row: i32, col: i32) -> u8 {
        self.core.kind_at(row, col).id()
    }

    #[wasm_bindgen(js_name = loadConfigJson)]
    pub fn load_config_json(&mut self, json: &str) -> Result<(), JsError> {
        self.core.load_config_json(json).map_err(js_error)
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(js_name = requestPlacement)]
    pub fn request_placement(&mut self, row: i32, col: i32, kind: u8) -> Result<(), JsError> {
        self.core.request_placement(row, col, kind_from_js(kind)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = requestPlacementBrush)]
    pub fn request_placement_brush(&mut self, center_row: i32, center_col: i32, size: u32, kind: u8) -> Result<(), JsError> {
        self.core
            .request_placement_brush(center_row, center_col, size, kind_from_js(kind)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = addHeat)]
    pub fn add_heat(&mut self, row: i32, col: i32, amount: f32) -> bool {
        self.core.add_heat(row, col, amount)
    }

    pub fn clear(&mut self) {
        self.core.clear();
        self.core.extract_render(&mut self.render);
    }

    /// Advance one tick and refresh the render buffers.
    pub fn step(&mut self) {
        self.core.step();
        self.core.extract_render(&mut self.render);
    }

    #[wasm_bindgen(js_name = enablePerfMetrics)]
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    #[wasm_bindgen(js_name = getPerfStats)]
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Render buffers (view into wasm memory; re-read after every step) ===

    pub fn kinds_ptr(&self) -> *const u8 {
        self.render.kinds.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    /// Cell count; the kinds array is this many bytes, colors four times that.
    pub fn render_len(&self) -> usize {
        self.render.len()
    }
}

impl World {
    fn wrap(core: WorldCore) -> Self {
        let mut render = RenderBuffers::with_size(core.grid().size());
        core.extract_render(&mut render);
        Self { core, render }
    }

    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
