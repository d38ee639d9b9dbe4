//! Core - cross-cutting pieces shared by every layer
//!
//! - error: construction/config failures (the only fallible surface)
//! - log:   console logging that works in the browser and natively

#[macro_use]
pub mod log;
pub mod error;

pub use error::WorldError;
