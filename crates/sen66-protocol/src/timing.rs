//! Execution-window padding.
//!
//! The datasheet execution times are minimums. Hosts clocked from an
//! imprecise oscillator wait a little longer: `base + (base >> shift)`.

/// Pad `base_ms` by `base_ms >> tolerance_shift`.
///
/// A shift of 3 adds 12.5%. Shifts of 32 or more add nothing.
pub const fn compensate(base_ms: u32, tolerance_shift: u32) -> u32 {
    let margin = match base_ms.checked_shr(tolerance_shift) {
        Some(margin) => margin,
        None => 0,
    };
    base_ms.saturating_add(margin)
}
