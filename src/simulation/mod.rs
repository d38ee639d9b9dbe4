//! World - the simulation orchestrator
//!
//! `WorldCore` owns the double-buffered grid, the placement queue, the RNG
//! and the behavior registry. It applies queued placements, runs the
//! bottom-up sweep and swaps buffers once per `step()`.
//!
//! Rules live in `systems/behaviors`; buffer mechanics in `spatial/grid`.

use rand_chacha::ChaCha8Rng;

use crate::core::WorldError;
use crate::domain::{Particle, ParticleKind, SimConfig};
use crate::spatial::grid::{Grid, GridSnapshot, SurfaceTable};
use crate::systems::behaviors::BehaviorRegistry;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/seed.rs"]
mod seed;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/sweep.rs"]
mod sweep;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::Placement;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::RenderBuffers;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    surface: SurfaceTable,
    behaviors: BehaviorRegistry,
    config: SimConfig,
    rng: ChaCha8Rng,
    seed: u64,

    /// Applied (and cleared) at the start of the next step
    placements: Vec<Placement>,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default settings. Fails when either dimension is 0.
    pub fn new(rows: u32, cols: u32) -> Result<Self, WorldError> {
        init::create_world_core(rows, cols, SimConfig::default())
    }

    pub fn with_config(rows: u32, cols: u32, config: SimConfig) -> Result<Self, WorldError> {
        init::create_world_core(rows, cols, config)
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    /// Ticks completed so far.
    pub fn tick(&self) -> u64 { self.frame }

    /// Seed the RNG was last initialized with.
    pub fn seed(&self) -> u64 { self.seed }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replace the configuration between ticks. Reseeds when the new config
    /// carries a seed.
    pub fn set_config(&mut self, config: SimConfig) -> Result<(), WorldError> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), WorldError> {
        settings::load_config_json(self, json)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Queue a single cell write for the next step. `ParticleKind::Empty`
    /// erases. Out-of-bounds requests are dropped when the queue is applied.
    pub fn request_placement(&mut self, row: i32, col: i32, kind: ParticleKind) {
        commands::request_placement(self, row, col, kind);
    }

    /// Queue a square brush of side `size` centred on the given cell. Each
    /// cell is kept with the kind's brush-density chance.
    pub fn request_placement_brush(&mut self, center_row: i32, center_col: i32, size: u32, kind: ParticleKind) {
        commands::request_placement_brush(self, center_row, center_col, size, kind);
    }

    pub fn pending_placements(&self) -> usize {
        self.placements.len()
    }

    /// Raise a particle's temperature and wake it. Ignores empty or
    /// out-of-bounds cells.
    pub fn add_heat(&mut self, row: i32, col: i32, amount: f32) -> bool {
        commands::add_heat(self, row, col, amount)
    }

    /// Empty both buffers and the placement queue.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by exactly one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Grid access ===

    pub fn query_cell(&self, row: i32, col: i32) -> Option<&Particle> {
        self.grid.query_cell(row, col)
    }

    pub fn query_next_cell(&self, row: i32, col: i32) -> Option<&Particle> {
        self.grid.query_next_cell(row, col)
    }

    pub fn kind_at(&self, row: i32, col: i32) -> ParticleKind {
        self.grid.kind_at(row, col)
    }

    /// Read-only view of the current buffer for renderers.
    pub fn snapshot(&self) -> GridSnapshot<'_> {
        self.grid.snapshot()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for hosts driving rules by hand between steps.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn particle_count(&self) -> usize {
        self.grid.particle_count()
    }

    pub fn count_kind(&self, kind: ParticleKind) -> usize {
        self.grid.count_kind(kind)
    }

    pub fn awake_count(&self) -> usize {
        self.grid.awake_count()
    }

    /// Refresh flat kind/color arrays from the current buffer.
    pub fn extract_render(&self, out: &mut RenderBuffers) {
        render_extract::extract(self, out);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
