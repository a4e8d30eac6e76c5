/// Round `value` to `decimals` places, half away from zero.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Express a probability in [0, 1] as a percentage with two decimals.
#[inline]
pub fn as_percentage(probability: f64) -> f64 {
    round_to(probability * 100.0, 2)
}
