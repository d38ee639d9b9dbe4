use std::cell::Cell;

thread_local! {
    static LIQUID_SCANS: Cell<u64> = Cell::new(0);
}

#[inline]
pub(super) fn inc_liquid_scans() {
    LIQUID_SCANS.with(|c| c.set(c.get() + 1));
}

/// Lateral scans since the last call; resets the counter.
pub fn take_liquid_scan_counter() -> u64 {
    LIQUID_SCANS.with(|c| c.replace(0))
}
