/// Page scroll through the hero box: 0 when its top sits at the viewport top,
/// 1 when its bottom does.
pub fn hero_scroll_progress(rect_top: f64, rect_height: f64) -> f64 {
    if rect_height <= 0.0 {
        return if rect_top < 0.0 { 1.0 } else { 0.0 };
    }
    (-rect_top / rect_height).clamp(0.0, 1.0)
}

/// Vertical offsets, in CSS pixels, for the two parallax-bound layers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parallax {
    pub image_y: f64,
    pub mist_y: f64,
}

impl Parallax {
    pub const IMAGE_TRAVEL: f64 = -40.0;
    pub const MIST_TRAVEL: f64 = -20.0;

    pub fn at(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self { image_y: Self::IMAGE_TRAVEL * p, mist_y: Self::MIST_TRAVEL * p }
    }

    pub fn image_transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.image_y)
    }

    pub fn mist_transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.mist_y)
    }
}

/// Remembers the last offsets written so scroll events that don't move
/// anything cost no style writes.
#[derive(Debug, Default)]
pub struct ParallaxTracker {
    last: Option<Parallax>,
}

impl ParallaxTracker {
    /// The new offsets for `progress`, or `None` when they match the last ones.
    pub fn update(&mut self, progress: f64) -> Option<Parallax> {
        let next = Parallax::at(progress);
        if self.last == Some(next) {
            return None;
        }
        self.last = Some(next);
        Some(next)
    }
}

/// Value for the `--vh` custom property: 1% of the real inner height, so
/// `calc(var(--vh) * 100)` ignores mobile browser chrome.
pub fn viewport_unit(inner_height: f64) -> String {
    format!("{}px", inner_height.max(0.0) * 0.01)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_hero_box() {
        assert_eq!(hero_scroll_progress(50.0, 800.0), 0.0);
        assert_eq!(hero_scroll_progress(-400.0, 800.0), 0.5);
        assert_eq!(hero_scroll_progress(-1_600.0, 800.0), 1.0);
    }

    #[test]
    fn offsets_interpolate_over_visible_range() {
        assert_eq!(Parallax::at(0.0), Parallax::default());
        let half = Parallax::at(0.5);
        assert_eq!(half.image_y, -20.0);
        assert_eq!(half.mist_y, -10.0);
        assert_eq!(Parallax::at(2.0), Parallax { image_y: -40.0, mist_y: -20.0 });
        assert_eq!(half.image_transform(), "translate3d(0, -20.00px, 0)");
        assert_eq!(half.mist_transform(), "translate3d(0, -10.00px, 0)");
    }

    #[test]
    fn tracker_skips_unchanged_offsets() {
        let mut tracker = ParallaxTracker::default();
        assert_eq!(tracker.update(0.0), Some(Parallax::default()));
        assert_eq!(tracker.update(0.0), None);
        assert_eq!(tracker.update(0.25), Some(Parallax::at(0.25)));
        assert_eq!(tracker.update(0.25), None);
        // both ends clamp, so overscroll is not a change
        assert_eq!(tracker.update(1.0), Some(Parallax::at(1.0)));
        assert_eq!(tracker.update(3.0), None);
    }

    #[test]
    fn viewport_unit_is_one_percent() {
        assert_eq!(viewport_unit(800.0), "8px");
        assert_eq!(viewport_unit(0.0), "0px");
    }
}
