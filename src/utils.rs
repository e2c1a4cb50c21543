/// Wrap an angle in degrees into [0, 360)
pub fn wrap_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Width and height of the axis-aligned box that encloses a
/// `length` x `width` rectangle rotated by `angle_degrees`.
pub fn rotated_extent(length: f64, width: f64, angle_degrees: f64) -> (f64, f64) {
    let angle_rad = angle_degrees.to_radians();
    let cos_a = angle_rad.cos().abs();
    let sin_a = angle_rad.sin().abs();
    (length * cos_a + width * sin_a, length * sin_a + width * cos_a)
}

/// Scale a sensor reading into [0, 1] for the observation vector
pub fn normalize_reading(value: f64, range: f64) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (value / range).clamp(0.0, 1.0) as f32
}
