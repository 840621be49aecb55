//! Window geometry and font size arithmetic.
//!
//! Everything here is toolkit independent so the numbers can be checked
//! without a display.

use crate::config::scaling::{HEIGHT_DIVISOR, MIN_FONT_SIZE, REFERENCE_SIZE};

/// Initial and minimum window size derived from the screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
}

impl WindowGeometry {
    /// Half the screen width, 80% of its height, and a third of each as minimum.
    pub fn for_screen(screen_width: i32, screen_height: i32) -> Self {
        Self {
            width: (f64::from(screen_width) * 0.5) as i32,
            height: (f64::from(screen_height) * 0.8) as i32,
            min_width: screen_width / 3,
            min_height: screen_height / 3,
        }
    }
}

/// Scale factor from the measured pixel width of the reference text.
///
/// Never below 1, so unusual font metrics cannot blow up the division in
/// [`font_size_for_height`].
pub fn font_scale(reference_width_px: f64) -> f64 {
    let scale = reference_width_px / REFERENCE_SIZE;
    if scale.is_finite() {
        scale.max(1.0)
    } else {
        1.0
    }
}

/// Normal font size in points for a window of the given height.
pub fn font_size_for_height(window_height: i32, scale: f64) -> i32 {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    let size = (f64::from(window_height) / HEIGHT_DIVISOR / scale) as i32;
    size.max(MIN_FONT_SIZE)
}

/// Three quarters of `font_size`, without the minimum applied.
pub fn three_quarters(font_size: i32) -> i32 {
    (3 * font_size) / 4
}

/// Small font size paired with `font_size`.
pub fn small_font_size(font_size: i32) -> i32 {
    three_quarters(font_size).max(MIN_FONT_SIZE)
}

/// Normal and small point sizes applied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub normal: i32,
    pub small: i32,
}

impl FontSizes {
    pub fn for_height(window_height: i32, scale: f64) -> Self {
        let normal = font_size_for_height(window_height, scale);
        Self {
            normal,
            small: small_font_size(normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_follows_screen_fractions() {
        let geometry = WindowGeometry::for_screen(1920, 1080);
        assert_eq!(geometry.width, 960);
        assert_eq!(geometry.height, 864);
        assert_eq!(geometry.min_width, 640);
        assert_eq!(geometry.min_height, 360);
    }

    #[test]
    fn geometry_truncates_odd_sizes() {
        let geometry = WindowGeometry::for_screen(1366, 767);
        assert_eq!(geometry.width, 683);
        assert_eq!(geometry.height, 613);
        assert_eq!(geometry.min_width, 455);
        assert_eq!(geometry.min_height, 255);
    }

    #[test]
    fn scale_is_clamped_to_one() {
        assert_eq!(font_scale(0.0), 1.0);
        assert_eq!(font_scale(-40.0), 1.0);
        assert_eq!(font_scale(11.0), 1.0);
        assert_eq!(font_scale(f64::NAN), 1.0);
        assert_eq!(font_scale(f64::INFINITY), 1.0);
        assert_eq!(font_scale(44.0), 2.0);
    }

    #[test]
    fn font_size_matches_formula() {
        assert_eq!(font_size_for_height(0, 1.0), 10);
        assert_eq!(font_size_for_height(499, 1.0), 10);
        assert_eq!(font_size_for_height(864, 1.0), 17);
        assert_eq!(font_size_for_height(1000, 1.0), 20);
        assert_eq!(font_size_for_height(1000, 1.5), 13);
        assert_eq!(font_size_for_height(2000, 2.0), 20);
    }

    #[test]
    fn font_size_ignores_invalid_scale() {
        assert_eq!(font_size_for_height(1000, 0.0), 20);
        assert_eq!(font_size_for_height(1000, -3.0), 20);
        assert_eq!(font_size_for_height(1000, f64::NAN), 20);
    }

    #[test]
    fn font_size_is_monotonic_in_height() {
        for scale in [1.0, 1.25, 1.7, 3.0] {
            let mut previous = font_size_for_height(0, scale);
            for height in (0..4000).step_by(7) {
                let size = font_size_for_height(height, scale);
                assert!(size >= previous, "height {height} scale {scale}");
                previous = size;
            }
        }
    }

    #[test]
    fn small_size_has_floor_and_never_exceeds_normal() {
        assert_eq!(small_font_size(10), 10);
        assert_eq!(small_font_size(13), 10);
        assert_eq!(small_font_size(14), 10);
        assert_eq!(small_font_size(20), 15);
        assert_eq!(small_font_size(41), 30);
        for height in (0..5000).step_by(13) {
            let sizes = FontSizes::for_height(height, 1.0);
            assert!(sizes.small <= sizes.normal);
            assert_eq!(sizes.small, three_quarters(sizes.normal).max(10));
        }
    }

    #[test]
    fn three_quarters_has_no_floor() {
        assert_eq!(three_quarters(10), 7);
        assert_eq!(three_quarters(20), 15);
    }
}
