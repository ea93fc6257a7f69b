//! Small numeric helpers shared by the mode behaviours

/// Linear interpolation from `from` to `to` by `t` in [0, 1]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Re-map `value` from one range onto another, without clamping
///
/// A degenerate input range maps everything to `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / span + out_min
}

/// Map a brightness percentage onto an 8-bit output level
///
/// Integer arithmetic truncating toward zero, then clamped to 0..=255.
/// Percentages outside 0..=100 are accepted and saturate.
pub fn percent_to_level(percent: i32) -> u8 {
    let level = i64::from(percent) * 255 / 100;
    level.clamp(0, 255) as u8
}

/// Round and clamp a float onto an 8-bit level
pub fn to_level(value: f32) -> u8 {
    libm::roundf(value).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(10.0, 90.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 90.0, 1.0), 90.0);
        assert_eq!(lerp(10.0, 90.0, 0.5), 50.0);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(45.0, 0.0, 90.0, 0.0, 60.0), 30.0);
        assert_eq!(map_range(0.0, 0.0, 90.0, 20.0, 80.0), 20.0);
        // Degenerate input range
        assert_eq!(map_range(5.0, 1.0, 1.0, 7.0, 9.0), 7.0);
    }

    #[test]
    fn test_percent_to_level() {
        assert_eq!(percent_to_level(0), 0);
        assert_eq!(percent_to_level(50), 127);
        assert_eq!(percent_to_level(100), 255);
        assert_eq!(percent_to_level(150), 255);
        assert_eq!(percent_to_level(-20), 0);
        assert_eq!(percent_to_level(i32::MAX), 255);
    }

    #[test]
    fn test_to_level() {
        assert_eq!(to_level(127.6), 128);
        assert_eq!(to_level(-4.0), 0);
        assert_eq!(to_level(300.0), 255);
    }
}
