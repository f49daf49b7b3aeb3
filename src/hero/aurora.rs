use std::f64::consts::PI;

use serde::Deserialize;

use super::color::Color;
use super::layer::{FrameEnv, Layer};
use super::noise::noise;
use super::overrides::DebugOverrides;
use super::painter::{Blend, Painter, Point};
use super::surface::Surface;

/// Samples dimmer than this are not drawn.
const NEGLIGIBLE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn for_width(css_width: f64) -> Self {
        if css_width < 768.0 {
            Breakpoint::Mobile
        } else if css_width < 1024.0 {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Multiplier for ribbon length, thickness and drift speed.
    pub fn scale(self) -> f64 {
        match self {
            Breakpoint::Mobile => 0.6,
            Breakpoint::Tablet => 0.8,
            Breakpoint::Desktop => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuroraConfig {
    pub intensity: f64,
    /// CSS pixels per second.
    pub drift_speed: f64,
    /// Drift wraps after this fraction of the width.
    pub wrap: f64,
    pub core_hue: f64,
    pub fringe_hue: f64,
    /// Start of the ribbon as fractions of width and height.
    pub origin: (f64, f64),
    /// Horizontal extent, fraction of width.
    pub length: f64,
    /// Vertical extent, fraction of height.
    pub rise: f64,
    /// Glow radius in CSS pixels.
    pub thickness: f64,
    pub samples: usize,
    /// Noise displacement in CSS pixels.
    pub undulation: f64,
    /// Trailing fraction of the ribbon that fades to nothing.
    pub fade: f64,
    pub target_fps: f64,
    pub max_core_alpha: f64,
    /// Fringe alpha relative to the core.
    pub fringe_alpha: f64,
    /// Fringe radius relative to the core.
    pub fringe_spread: f64,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            intensity: 0.6,
            drift_speed: 8.0,
            wrap: 0.04,
            core_hue: 205.0,
            fringe_hue: 275.0,
            origin: (0.60, 0.30),
            length: 0.18,
            rise: 0.18,
            thickness: 22.0,
            samples: 110,
            undulation: 6.0,
            fade: 0.3,
            target_fps: 30.0,
            max_core_alpha: 0.28,
            fringe_alpha: 0.45,
            fringe_spread: 1.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonSample {
    /// Position along the ribbon, 0..=1.
    pub along: f64,
    pub center: Point,
    pub radius: f64,
    pub fade: f64,
    /// Noise displacement already included in `center`.
    pub offset: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RibbonFrame {
    pub drift: f64,
    pub intensity: f64,
    pub samples: Vec<RibbonSample>,
}

/// Soft glowing band along a curve near the right ridge.
pub struct AuroraRibbon {
    config: AuroraConfig,
    overrides: DebugOverrides,
    surface: Surface,
    started_at: Option<f64>,
    last_drawn: Option<f64>,
}

impl AuroraRibbon {
    pub fn new(config: AuroraConfig, overrides: DebugOverrides) -> Self {
        Self { config, overrides, surface: Surface::default(), started_at: None, last_drawn: None }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.surface.css_width)
    }

    pub fn intensity(&self, t_secs: f64, reduce_motion: bool) -> f64 {
        if let Some(forced) = self.overrides.aurora_intensity() {
            return forced;
        }
        if reduce_motion {
            self.config.intensity
        } else {
            self.config.intensity * (0.85 + 0.15 * (0.4 * t_secs).sin())
        }
    }

    /// 1 along the body of the ribbon, ramping to 0 across the trailing
    /// `fade` fraction.
    pub fn fade_at(&self, along: f64) -> f64 {
        let fade = self.config.fade;
        if fade <= 0.0 || along < 1.0 - fade {
            1.0
        } else {
            ((1.0 - along) / fade).clamp(0.0, 1.0)
        }
    }

    pub fn sample(&self, t_secs: f64, reduce_motion: bool) -> RibbonFrame {
        let c = &self.config;
        let s = self.surface;
        let scale = self.breakpoint().scale();
        let t = if reduce_motion { 0.0 } else { t_secs };

        let wrap = c.wrap * s.width;
        let drift = if reduce_motion || wrap <= 0.0 {
            0.0
        } else {
            (t * c.drift_speed * scale * s.dpr).rem_euclid(wrap)
        };

        let steps = c.samples.max(1);
        let amp = c.undulation * s.dpr;
        let samples = (0..=steps)
            .map(|i| {
                let along = i as f64 / steps as f64;
                let offset = if reduce_motion {
                    Point::default()
                } else {
                    Point::new(noise(along * 3.0, 0.0, t) * amp, noise(along * 3.0, 1.7, t) * amp * 0.66)
                };
                let x = s.width * (c.origin.0 + c.length * scale * along) + drift + offset.x;
                let y = s.height * (c.origin.1 + c.rise * scale * along) + offset.y;
                let radius = c.thickness * scale * s.dpr * (1.0 + 0.25 * (along * 4.0 * PI + 0.8 * t).sin());
                RibbonSample { along, center: Point::new(x, y), radius, fade: self.fade_at(along), offset }
            })
            .collect();

        RibbonFrame { drift, intensity: self.intensity(t_secs, reduce_motion), samples }
    }

    /// Frame-rate cap and hidden-tab pause.
    fn should_draw(&mut self, now: f64, env: FrameEnv) -> bool {
        if env.hidden {
            return false;
        }
        let interval = 1000.0 / self.config.target_fps.max(1.0);
        if let Some(last) = self.last_drawn {
            // 1ms of slack so 60Hz frames land on every other one
            if now - last + 1.0 < interval {
                return false;
            }
        }
        self.last_drawn = Some(now);
        true
    }

    fn draw(&self, frame: &RibbonFrame, painter: &mut dyn Painter) {
        let c = &self.config;
        painter.clear(&self.surface);
        painter.set_blend(Blend::Lighter);
        for sample in &frame.samples {
            let strength = sample.fade * frame.intensity;
            if strength < NEGLIGIBLE {
                continue;
            }
            let alpha = (c.max_core_alpha * strength).min(c.max_core_alpha);
            painter.radial_glow(
                sample.center,
                sample.radius * c.fringe_spread,
                Color::hsla(c.fringe_hue, 85.0, 62.0, alpha * c.fringe_alpha),
                Color::hsla(c.fringe_hue + 12.0, 85.0, 50.0, 0.0),
            );
            painter.radial_glow(
                sample.center,
                sample.radius,
                Color::hsla(c.core_hue, 90.0, 70.0, alpha),
                Color::hsla(c.core_hue + 18.0, 90.0, 55.0, 0.0),
            );
        }
        painter.set_blend(Blend::SourceOver);
    }
}

impl Layer for AuroraRibbon {
    fn name(&self) -> &'static str {
        "aurora"
    }

    fn surface(&self) -> Surface {
        self.surface
    }

    fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        // redraw on the next frame regardless of the cap
        self.last_drawn = None;
    }

    fn frame(&mut self, now_ms: f64, env: FrameEnv, painter: &mut dyn Painter) {
        if !self.should_draw(now_ms, env) {
            return;
        }
        let started = *self.started_at.get_or_insert(now_ms);
        let frame = self.sample((now_ms - started) / 1000.0, env.reduce_motion);
        self.draw(&frame, painter);
    }
}
