use log::debug;
use rand::Rng;
use serde::Deserialize;

use super::color::Color;
use super::layer::{FrameEnv, Layer};
use super::painter::{Blend, GradientStroke, Painter, Point};
use super::surface::{Surface, SKY_CUTOFF};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeteorConfig {
    /// Wait between shots, milliseconds.
    pub min_wait_ms: f64,
    pub max_wait_ms: f64,
    /// Flight time; long on purpose so the streak reads as slow.
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    /// Trail length in CSS pixels.
    pub trail: f64,
    pub min_hue: f64,
    pub hue_spread: f64,
    pub peak_alpha: f64,
    pub line_width: f64,
    pub glow_blur: f64,
    /// How far past either side edge the head may travel, in device pixels.
    pub edge_slack: f64,
}

impl Default for MeteorConfig {
    fn default() -> Self {
        Self {
            min_wait_ms: 9_000.0,
            max_wait_ms: 18_000.0,
            min_duration_ms: 3_800.0,
            max_duration_ms: 6_000.0,
            trail: 100.0,
            min_hue: 210.0,
            hue_spread: 60.0,
            peak_alpha: 0.6,
            line_width: 1.6,
            glow_blur: 10.0,
            edge_slack: 120.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub start: Point,
    pub end: Point,
    /// Pixels per second.
    pub velocity: Point,
    pub started_at: f64,
    pub duration_ms: f64,
    pub trail: f64,
    pub hue: f64,
}

impl Shot {
    pub fn head(&self, now_ms: f64) -> Point {
        let secs = (now_ms - self.started_at) / 1000.0;
        Point::new(self.start.x + self.velocity.x * secs, self.start.y + self.velocity.y * secs)
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn tail(&self, head: Point) -> Point {
        let mag = self.velocity.x.hypot(self.velocity.y);
        let mag = if mag > 0.0 { mag } else { 1.0 };
        Point::new(
            head.x - self.velocity.x / mag * self.trail,
            head.y - self.velocity.y / mag * self.trail,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeteorPhase {
    Idle,
    Scheduled { fire_at: f64 },
    Active(Shot),
}

impl MeteorPhase {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, MeteorPhase::Scheduled { .. })
    }
}

/// Why a shot ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Horizon,
    Finished,
    OffScreen,
}

/// Fires one slow shooting star at a time across the sky band.
pub struct MeteorSpawner<R> {
    config: MeteorConfig,
    rng: R,
    phase: MeteorPhase,
    surface: Surface,
    /// Set once reduced motion swallowed a spawn; no more scheduling.
    dormant: bool,
    shots: u32,
    last_landing: Option<Landing>,
}

impl<R: Rng> MeteorSpawner<R> {
    pub fn new(config: MeteorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: MeteorPhase::Idle,
            surface: Surface::default(),
            dormant: false,
            shots: 0,
            last_landing: None,
        }
    }

    pub fn phase(&self) -> MeteorPhase {
        self.phase
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots
    }

    pub fn last_landing(&self) -> Option<Landing> {
        self.last_landing
    }

    pub fn is_dormant(&self) -> bool {
        self.dormant
    }

    fn schedule(&mut self, now: f64) {
        let c = &self.config;
        let wait = c.min_wait_ms + self.rng.gen::<f64>() * (c.max_wait_ms - c.min_wait_ms);
        self.phase = MeteorPhase::Scheduled { fire_at: now + wait };
    }

    fn spawn(&mut self, now: f64) -> Shot {
        let (w, h, dpr) = (self.surface.width, self.surface.height, self.surface.dpr);
        let c = &self.config;
        let rng = &mut self.rng;

        let sx = (0.08 + rng.gen::<f64>() * 0.84) * w;
        let sy = (0.06 + rng.gen::<f64>() * (SKY_CUTOFF - 0.12)) * h;

        let left = rng.gen_bool(0.5);
        let reach = (0.25 + rng.gen::<f64>() * 0.42) * w;
        let ex = sx + if left { -reach } else { reach };
        let ey = (sy + (0.18 + rng.gen::<f64>() * 0.22) * h).min(SKY_CUTOFF * h);

        let duration_ms = c.min_duration_ms + rng.gen::<f64>() * (c.max_duration_ms - c.min_duration_ms);
        let secs = duration_ms / 1000.0;

        Shot {
            start: Point::new(sx, sy),
            end: Point::new(ex, ey),
            velocity: Point::new((ex - sx) / secs, (ey - sy) / secs),
            started_at: now,
            duration_ms,
            trail: c.trail * dpr,
            hue: c.min_hue + rng.gen::<f64>() * c.hue_spread,
        }
    }

    fn land(&mut self, now: f64, landing: Landing) {
        self.last_landing = Some(landing);
        self.schedule(now);
    }

    /// Advances the state machine one frame. Returns the shot to draw, with
    /// its head, if one is in flight after the step.
    pub fn step(&mut self, now: f64, reduce_motion: bool) -> Option<(Shot, Point)> {
        match self.phase {
            MeteorPhase::Idle => {
                if !reduce_motion && !self.dormant {
                    self.schedule(now);
                }
                None
            }
            MeteorPhase::Scheduled { fire_at } => {
                if now < fire_at {
                    return None;
                }
                if reduce_motion {
                    self.dormant = true;
                    self.phase = MeteorPhase::Idle;
                    return None;
                }
                let shot = self.spawn(now);
                self.shots += 1;
                debug!("meteor #{} from ({:.0}, {:.0}) over {:.0}ms", self.shots, shot.start.x, shot.start.y, shot.duration_ms);
                self.phase = MeteorPhase::Active(shot);
                self.step(now, reduce_motion)
            }
            MeteorPhase::Active(shot) => {
                let head = shot.head(now);
                if head.y > self.surface.sky_line() {
                    self.land(now, Landing::Horizon);
                    return None;
                }
                Some((shot, head))
            }
        }
    }

    /// Ends the flight after drawing if the shot is done or off to the side.
    fn finish(&mut self, now: f64, shot: &Shot, head: Point) {
        let slack = self.config.edge_slack;
        if shot.progress(now) >= 1.0 {
            self.land(now, Landing::Finished);
        } else if head.x < -slack || head.x > self.surface.width + slack {
            self.land(now, Landing::OffScreen);
        }
    }

    pub fn stroke(&self, shot: &Shot, head: Point, now: f64) -> GradientStroke {
        let c = &self.config;
        let dpr = self.surface.dpr;
        let alpha = c.peak_alpha * (1.0 - shot.progress(now));
        GradientStroke {
            from: head,
            to: shot.tail(head),
            from_color: Color::hsla(shot.hue, 90.0, 75.0, alpha),
            to_color: Color::hsla(shot.hue + 30.0, 90.0, 55.0, 0.0),
            width: c.line_width * dpr,
            glow: Color::hsla(shot.hue, 100.0, 60.0, alpha * 0.5),
            glow_blur: c.glow_blur * dpr,
        }
    }
}

impl<R: Rng> Layer for MeteorSpawner<R> {
    fn name(&self) -> &'static str {
        "meteor"
    }

    fn surface(&self) -> Surface {
        self.surface
    }

    fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    fn frame(&mut self, now_ms: f64, env: FrameEnv, painter: &mut dyn Painter) {
        painter.clear(&self.surface);
        if let Some((shot, head)) = self.step(now_ms, env.reduce_motion) {
            painter.set_blend(Blend::Lighter);
            painter.gradient_stroke(&self.stroke(&shot, head, now_ms));
            painter.set_blend(Blend::SourceOver);
            self.finish(now_ms, &shot, head);
        }
    }
}
