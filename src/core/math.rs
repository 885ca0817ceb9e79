// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Convert a per-second rate into whole pixels for one tick.
///
/// Truncates toward zero; negative or non-finite results collapse to 0.
pub fn pixels_for_tick(rate: f32, dt: f32) -> i32 {
    let amount = rate * dt;
    if amount.is_finite() && amount > 0.0 {
        amount as i32
    } else {
        0
    }
}
