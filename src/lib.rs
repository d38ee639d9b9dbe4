//! Sandfall Engine - falling-sand cellular automaton core for WASM and native hosts
//!
//! One tick: apply queued placements, reset per-tick flags, sweep bottom-up
//! running each awake particle's rule against a double buffer, carry over
//! what stayed put, swap.
//!
//! Architecture:
//! - core/       - errors, logging
//! - domain/     - particle kinds, particle record, configuration
//! - spatial/    - double-buffered grid and the move/swap/replace protocol
//! - systems/    - per-category behavior rules
//! - simulation/ - WorldCore orchestration and the wasm facade

// Macros first so every later module can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use spatial::grid;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Thread pool setup for the `parallel` feature in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("sandfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Kind registry as JSON (ids, names, colors, brush densities).
#[wasm_bindgen(js_name = kindManifestJson)]
pub fn kind_manifest_json() -> String {
    domain::kinds::kind_manifest_json()
}

// Re-export main types
pub use crate::core::WorldError;
pub use domain::{GrassDeathPolicy, Particle, ParticleKind, SimConfig, ALL_KINDS};
pub use grid::{Grid, GridSnapshot};
pub use simulation::{PerfStats, RenderBuffers, World, WorldCore};

// Export kind ids for JS
#[wasm_bindgen]
pub fn kind_empty() -> u8 { ParticleKind::Empty.id() }
#[wasm_bindgen]
pub fn kind_sand() -> u8 { ParticleKind::Sand.id() }
#[wasm_bindgen]
pub fn kind_wet_sand() -> u8 { ParticleKind::WetSand.id() }
#[wasm_bindgen]
pub fn kind_dirt() -> u8 { ParticleKind::Dirt.id() }
#[wasm_bindgen]
pub fn kind_grass() -> u8 { ParticleKind::Grass.id() }
#[wasm_bindgen]
pub fn kind_water() -> u8 { ParticleKind::Water.id() }
#[wasm_bindgen]
pub fn kind_silt() -> u8 { ParticleKind::Silt.id() }
#[wasm_bindgen]
pub fn kind_oil() -> u8 { ParticleKind::Oil.id() }
#[wasm_bindgen]
pub fn kind_steam() -> u8 { ParticleKind::Steam.id() }
