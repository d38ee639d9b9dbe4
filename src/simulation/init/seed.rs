//! Clock-derived seed for worlds created without an explicit one.

#[cfg(target_arch = "wasm32")]
pub(super) fn clock_seed() -> u64 {
    let now = js_sys::Date::now();
    let jitter = js_sys::Math::random();
    (now as u64) ^ ((jitter * u32::MAX as f64) as u64).rotate_left(32)
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed_5a4d)
}
