//! Domain - what the simulation is made of
//!
//! - kinds:    particle kind registry (ids, colors, densities, phase forms)
//! - particle: the per-cell record owned by exactly one grid slot
//! - config:   tunable rule constants

pub mod kinds;
pub mod particle;
pub mod config;

pub use config::{DepthSource, GrassConfig, GrassDeathPolicy, SimConfig};
pub use kinds::{Category, KindId, KindProps, ParticleKind, ALL_KINDS, KIND_COUNT, KIND_DATA};
pub use particle::Particle;
