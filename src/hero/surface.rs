/// Fraction of the hero height that counts as sky. Stars and meteors never
/// render below it.
pub const SKY_CUTOFF: f64 = 0.62;

/// Backing stores stop growing past this pixel ratio.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Caps the ratio at `MAX_PIXEL_RATIO`. Ratios below 1 (zoomed-out pages)
/// are kept; a missing or nonsense ratio counts as 1.
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Size of one layer's drawing surface, in device pixels, together with the
/// CSS size of the container it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
}

impl Surface {
    /// Backing size for a container of `css_width` x `css_height`; never
    /// smaller than one pixel.
    pub fn fit(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = clamp_pixel_ratio(device_pixel_ratio);
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        Self {
            width: (css_width * dpr).floor().max(1.0),
            height: (css_height * dpr).floor().max(1.0),
            css_width,
            css_height,
            dpr,
        }
    }

    /// Pixel row of the horizon.
    pub fn sky_line(&self) -> f64 {
        SKY_CUTOFF * self.height
    }
}

impl Default for Surface {
    fn default() -> Self {
        Surface::fit(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        assert_eq!(clamp_pixel_ratio(3.0), 2.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
        assert_eq!(clamp_pixel_ratio(0.9), 0.9);
        assert_eq!(clamp_pixel_ratio(0.0), 1.0);
        assert_eq!(clamp_pixel_ratio(-2.0), 1.0);
        assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
    }

    #[test]
    fn backing_size_is_container_times_ratio() {
        let s = Surface::fit(1280.0, 720.0, 3.0);
        assert_eq!((s.width, s.height), (2560.0, 1440.0));
        let s = Surface::fit(1280.0, 720.0, 1.5);
        assert_eq!((s.width, s.height), (1920.0, 1080.0));
    }

    #[test]
    fn zoomed_out_page_gets_a_smaller_backing_store() {
        let s = Surface::fit(1000.0, 500.0, 0.9);
        assert_eq!((s.width, s.height), (900.0, 450.0));
        assert_eq!(s.dpr, 0.9);
        let s = Surface::fit(1001.0, 333.0, 0.5);
        assert_eq!((s.width, s.height), (500.0, 166.0));
    }

    #[test]
    fn empty_container_still_gets_one_pixel() {
        let s = Surface::fit(0.0, 0.0, 2.0);
        assert_eq!((s.width, s.height), (1.0, 1.0));
    }
}
