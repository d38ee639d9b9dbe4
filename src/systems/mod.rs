//! Systems - per-tick rules applied to the grid

pub mod behaviors;
