use std::f64::consts::TAU;

use serde::Deserialize;

use super::noise::noise;
use super::overrides::{BoostSignal, DebugOverrides};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    /// (scrolled fraction of the hero, progress) where the two segments meet.
    pub knee: (f64, f64),
    pub base_opacity: f64,
    /// Opacity at the knee progress.
    pub mid_opacity: f64,
    pub max_opacity: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Horizontal turbulence amplitude in CSS pixels.
    pub turbulence: f64,
    /// CSS pixels per second; negative drifts left.
    pub drift_speed: f64,
    pub drift_wrap: f64,
    pub breath_amplitude: f64,
    pub breath_hz: f64,
    pub boost_ms: f64,
    pub boost_scale: f64,
    pub boost_opacity: f64,
    pub scale_ceiling: f64,
    pub opacity_ceiling: f64,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            knee: (0.6, 0.6),
            base_opacity: 0.22,
            mid_opacity: 0.28,
            max_opacity: 0.35,
            min_scale: 1.0,
            max_scale: 1.04,
            turbulence: 6.0,
            drift_speed: 4.0,
            drift_wrap: 48.0,
            breath_amplitude: 0.02,
            breath_hz: 0.035,
            boost_ms: 1_100.0,
            boost_scale: 0.015,
            boost_opacity: 0.08,
            scale_ceiling: 1.06,
            opacity_ceiling: 0.40,
        }
    }
}

/// Linear interpolation through `knots` (sorted by x), clamped to the end
/// values outside them.
pub fn piecewise(x: f64, knots: &[(f64, f64)]) -> f64 {
    let (first, last) = match (knots.first(), knots.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return 0.0,
    };
    if x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }
    for pair in knots.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if x <= x1 {
            if x == x1 || x1 <= x0 {
                return y1;
            }
            return y0 + (x - x0) / (x1 - x0) * (y1 - y0);
        }
    }
    last.1
}

/// How far the hero has scrolled up past the top of the viewport, from its
/// bounding rect: 0 until its top reaches the viewport top, 1 once its
/// bottom has passed it.
pub fn scroll_progress(rect_top: f64, rect_height: f64, knee: (f64, f64)) -> f64 {
    if rect_top >= 0.0 {
        return 0.0;
    }
    if rect_height <= 0.0 || rect_top + rect_height <= 0.0 {
        return 1.0;
    }
    let scrolled = (-rect_top / rect_height).clamp(0.0, 1.0);
    piecewise(scrolled, &[(0.0, 0.0), knee, (1.0, 1.0)]).clamp(0.0, 1.0)
}

impl FogConfig {
    pub fn opacity(&self, progress: f64) -> f64 {
        let knots = [(0.0, self.base_opacity), (self.knee.1, self.mid_opacity), (1.0, self.max_opacity)];
        piecewise(progress, &knots).min(self.max_opacity)
    }

    pub fn scale(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        self.min_scale + (self.max_scale - self.min_scale) * p
    }
}

/// What the fog element gets each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogStyle {
    pub scale: f64,
    pub translate_x: f64,
    pub opacity: f64,
}

impl FogStyle {
    pub fn transform(&self) -> String {
        format!("translateX({:.2}px) scale({:.4}) translateZ(0)", self.translate_x, self.scale)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }
}

pub struct GroundFog {
    config: FogConfig,
    overrides: DebugOverrides,
    boost: BoostSignal,
    started_at: Option<f64>,
    last_frame: Option<f64>,
    drift: f64,
}

impl GroundFog {
    pub fn new(config: FogConfig, overrides: DebugOverrides, boost: BoostSignal) -> Self {
        Self { config, overrides, boost, started_at: None, last_frame: None, drift: 0.0 }
    }

    pub fn config(&self) -> &FogConfig {
        &self.config
    }

    pub fn frame(&mut self, now_ms: f64, progress: f64, reduce_motion: bool) -> FogStyle {
        let c = &self.config;
        let started = *self.started_at.get_or_insert(now_ms);
        let t = (now_ms - started) / 1000.0;
        let dt = self.last_frame.map(|last| (now_ms - last).max(0.0) / 1000.0).unwrap_or(0.0);
        self.last_frame = Some(now_ms);

        let (translate_x, breath) = if reduce_motion {
            self.drift = 0.0;
            (0.0, 0.0)
        } else {
            if c.drift_wrap > 0.0 {
                self.drift = (self.drift + dt * c.drift_speed).rem_euclid(c.drift_wrap);
            }
            let turbulence = noise(0.15 * t, 0.5, t) * c.turbulence;
            (turbulence + self.drift, c.breath_amplitude * (TAU * c.breath_hz * t).sin())
        };

        let boosting = self.boost.active(now_ms, c.boost_ms);
        let (boost_scale, boost_opacity) = if boosting { (c.boost_scale, c.boost_opacity) } else { (0.0, 0.0) };

        let scale = (c.scale(progress) + breath + boost_scale).min(c.scale_ceiling);
        let opacity = match self.overrides.fog_opacity() {
            Some(forced) => forced,
            None => (c.opacity(progress) + boost_opacity).min(c.opacity_ceiling),
        };

        FogStyle { scale, translate_x, opacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fog() -> GroundFog {
        GroundFog::new(FogConfig::default(), DebugOverrides::default(), BoostSignal::default())
    }

    #[test]
    fn progress_is_zero_until_hero_top_passes_viewport_top() {
        let knee = FogConfig::default().knee;
        assert_eq!(scroll_progress(120.0, 900.0, knee), 0.0);
        assert_eq!(scroll_progress(0.0, 900.0, knee), 0.0);
    }

    #[test]
    fn progress_saturates_once_bottom_clears() {
        let knee = FogConfig::default().knee;
        assert_eq!(scroll_progress(-900.0, 900.0, knee), 1.0);
        assert_eq!(scroll_progress(-2_500.0, 900.0, knee), 1.0);
    }

    #[test]
    fn progress_is_monotonic_while_scrolling_down() {
        let knee = FogConfig::default().knee;
        let mut prev = 0.0;
        for scroll in 0..=1_200 {
            let p = scroll_progress(-(scroll as f64), 900.0, knee);
            assert!(p >= prev);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
        assert!((scroll_progress(-540.0, 900.0, knee) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn uneven_knee_bends_the_curve() {
        let knee = (0.5, 0.8);
        assert!((scroll_progress(-250.0, 1_000.0, knee) - 0.4).abs() < 1e-12);
        assert!((scroll_progress(-500.0, 1_000.0, knee) - 0.8).abs() < 1e-12);
        assert!((scroll_progress(-750.0, 1_000.0, knee) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn opacity_hits_configured_values() {
        let c = FogConfig::default();
        assert_eq!(c.opacity(0.0), c.base_opacity);
        assert_eq!(c.opacity(0.6), c.mid_opacity);
        assert_eq!(c.opacity(1.0), c.max_opacity);
        assert_eq!(c.opacity(0.3), c.base_opacity + (0.3 / 0.6) * (c.mid_opacity - c.base_opacity));
        let upper_mid = c.mid_opacity + (c.max_opacity - c.mid_opacity) * 0.5;
        assert!((c.opacity(0.8) - upper_mid).abs() < 1e-12);
    }

    #[test]
    fn scale_interpolates_linearly() {
        let c = FogConfig::default();
        assert_eq!(c.scale(0.0), 1.0);
        assert!((c.scale(0.5) - 1.02).abs() < 1e-12);
        assert!((c.scale(1.0) - 1.04).abs() < 1e-12);
        assert!((c.scale(4.0) - 1.04).abs() < 1e-12);
    }

    #[test]
    fn reduced_motion_has_no_turbulence_or_drift() {
        let mut fog = fog();
        for i in 0..100 {
            let style = fog.frame(i as f64 * 16.0, 0.0, true);
            assert_eq!(style.translate_x, 0.0);
            assert_eq!(style.scale, 1.0);
            assert_eq!(style.opacity, 0.22);
        }
    }

    #[test]
    fn drift_wraps_and_turbulence_stays_small() {
        let mut fog = fog();
        let c = fog.config().clone();
        for i in 0..2_000 {
            let style = fog.frame(i as f64 * 33.0, 0.5, false);
            assert!(style.translate_x.abs() <= c.turbulence + c.drift_wrap);
            assert!(fog.drift >= 0.0 && fog.drift < c.drift_wrap);
            assert!(style.scale <= c.scale_ceiling);
        }
    }

    #[test]
    fn hover_boost_is_a_short_transient() {
        let boost = BoostSignal::default();
        let mut fog = GroundFog::new(FogConfig::default(), DebugOverrides::default(), boost.clone());
        let calm = fog.frame(0.0, 0.0, true);
        boost.trigger(100.0);
        let boosted = fog.frame(200.0, 0.0, true);
        assert!((boosted.opacity - (calm.opacity + 0.08)).abs() < 1e-12);
        assert!((boosted.scale - 1.015).abs() < 1e-12);
        let after = fog.frame(1_300.0, 0.0, true);
        assert_eq!(after.opacity, calm.opacity);
    }

    #[test]
    fn boost_respects_ceiling() {
        let boost = BoostSignal::default();
        let mut fog = GroundFog::new(FogConfig::default(), DebugOverrides::default(), boost.clone());
        boost.trigger(0.0);
        let style = fog.frame(10.0, 1.0, true);
        assert_eq!(style.opacity, 0.40);
        assert!(style.scale <= 1.06);
    }

    #[test]
    fn forced_opacity_bypasses_scroll() {
        let overrides = DebugOverrides::default();
        let mut fog = GroundFog::new(FogConfig::default(), overrides.clone(), BoostSignal::default());
        overrides.update(|v| {
            v.enabled = true;
            v.fog_opacity = 0.05;
        });
        for p in [0.0, 0.3, 0.6, 1.0] {
            assert_eq!(fog.frame(p * 1_000.0, p, false).opacity, 0.05);
        }
    }

    #[test]
    fn style_renders_css() {
        let style = FogStyle { scale: 1.0234, translate_x: -3.5, opacity: 0.281 };
        assert_eq!(style.transform(), "translateX(-3.50px) scale(1.0234) translateZ(0)");
        assert_eq!(style.opacity_css(), "0.281");
    }
}
