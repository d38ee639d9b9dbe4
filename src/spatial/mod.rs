//! Spatial - storage of the world's cells

pub mod grid;
