//! Console logging
//!
//! Browser builds go through `web_sys::console`, native builds (tests, host
//! tools) print to stderr. Keep calls off the per-cell hot path.

#[doc(hidden)]
pub fn write_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[sandfall] {}", msg);
    }
}

#[doc(hidden)]
pub fn write_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[sandfall] WARN {}", msg);
    }
}

/// `engine_log!("world {}x{}", rows, cols)`
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {
        $crate::core::log::write_log(&format!($($arg)*))
    };
}

/// Same as `engine_log!` but routed to `console.warn`.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {
        $crate::core::log::write_warn(&format!($($arg)*))
    };
}
