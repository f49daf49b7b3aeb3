use std::f64::consts::TAU;

use rand::Rng;
use serde::Deserialize;

use super::color::{mix_rgb, Color};
use super::layer::{FrameEnv, Layer};
use super::painter::{Blend, Painter, Point};
use super::surface::{Surface, SKY_CUTOFF};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    pub count: usize,
    /// Radius range in CSS pixels.
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub base_alpha: f64,
    pub twinkle: f64,
    /// Alpha used for every star when motion is reduced.
    pub still_alpha: f64,
    /// Tint 0 colour.
    pub cool: (u8, u8, u8),
    /// Tint 1 colour.
    pub warm: (u8, u8, u8),
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 300,
            min_radius: 0.3,
            max_radius: 1.1,
            min_speed: 0.6,
            max_speed: 1.1,
            base_alpha: 0.28,
            twinkle: 0.30,
            still_alpha: 0.30,
            cool: (160, 180, 255),
            warm: (200, 200, 200),
        }
    }
}

/// One point light. Position is normalized to the layer size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub phase: f64,
    pub speed: f64,
    pub tint: f64,
}

pub struct StarField {
    config: StarFieldConfig,
    stars: Vec<Star>,
    surface: Surface,
}

impl StarField {
    pub fn new<R: Rng + ?Sized>(config: StarFieldConfig, rng: &mut R) -> Self {
        let stars = (0..config.count)
            .map(|_| Star {
                x: rng.gen::<f64>(),
                y: rng.gen::<f64>() * SKY_CUTOFF,
                radius: config.min_radius + rng.gen::<f64>() * (config.max_radius - config.min_radius),
                phase: rng.gen::<f64>() * TAU,
                speed: config.min_speed + rng.gen::<f64>() * (config.max_speed - config.min_speed),
                tint: rng.gen::<f64>(),
            })
            .collect();
        Self { config, stars, surface: Surface::default() }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn alpha(&self, star: &Star, t_secs: f64, reduce_motion: bool) -> f64 {
        if reduce_motion {
            self.config.still_alpha
        } else {
            self.config.base_alpha + self.config.twinkle * (t_secs * star.speed + star.phase).sin()
        }
    }

    pub fn color(&self, star: &Star, alpha: f64) -> Color {
        let (r, g, b) = mix_rgb(self.config.cool, self.config.warm, star.tint);
        Color::rgba(r, g, b, alpha)
    }
}

impl Layer for StarField {
    fn name(&self) -> &'static str {
        "stars"
    }

    fn surface(&self) -> Surface {
        self.surface
    }

    fn resize(&mut self, surface: Surface) {
        self.surface = surface;
    }

    fn frame(&mut self, now_ms: f64, env: FrameEnv, painter: &mut dyn Painter) {
        let s = self.surface;
        let t = now_ms / 1000.0;
        painter.clear(&s);
        painter.set_blend(Blend::SourceOver);
        for star in &self.stars {
            let cy = star.y * s.height;
            if cy > s.sky_line() {
                continue;
            }
            let alpha = self.alpha(star, t, env.reduce_motion);
            painter.fill_circle(Point::new(star.x * s.width, cy), star.radius * s.dpr, self.color(star, alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::testing::Recorder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(count: usize) -> StarField {
        let mut rng = StdRng::seed_from_u64(7);
        StarField::new(StarFieldConfig { count, ..Default::default() }, &mut rng)
    }

    #[test]
    fn stars_stay_in_the_sky_band() {
        let field = field(5_000);
        assert_eq!(field.stars().len(), 5_000);
        for s in field.stars() {
            assert!((0.0..=1.0).contains(&s.x));
            assert!(s.y >= 0.0 && s.y < SKY_CUTOFF);
            assert!(s.radius >= 0.3 && s.radius <= 1.1);
            assert!(s.speed >= 0.6 && s.speed <= 1.1);
        }
    }

    #[test]
    fn reduced_motion_alpha_is_constant() {
        let mut field = field(40);
        field.resize(Surface::fit(800.0, 600.0, 1.0));
        let mut painter = Recorder::default();
        let env = FrameEnv { reduce_motion: true, hidden: false };
        for frame in 0..10 {
            field.frame(frame as f64 * 250.0, env, &mut painter);
        }
        let alphas: Vec<f64> = painter.circles().iter().map(|(_, _, c)| c.alpha()).collect();
        assert_eq!(alphas.len(), 400);
        assert!(alphas.iter().all(|a| *a == 0.30));
    }

    #[test]
    fn twinkle_changes_alpha_over_time() {
        let field = field(1);
        let star = field.stars()[0];
        let a = field.alpha(&star, 0.0, false);
        let b = field.alpha(&star, 1.3, false);
        assert_ne!(a, b);
        assert!(a <= 0.58 && a >= -0.02);
    }

    #[test]
    fn draws_scaled_by_pixel_ratio() {
        let mut field = field(20);
        field.resize(Surface::fit(400.0, 300.0, 2.0));
        let mut painter = Recorder::default();
        field.frame(0.0, FrameEnv::default(), &mut painter);
        let stars = field.stars().to_vec();
        for ((center, radius, _), star) in painter.circles().iter().zip(stars.iter()) {
            assert_eq!(center.x, star.x * 800.0);
            assert_eq!(*radius, star.radius * 2.0);
            assert!(center.y <= SKY_CUTOFF * 600.0);
        }
    }

    #[test]
    fn resize_tracks_container() {
        let mut field = field(1);
        field.resize(Surface::fit(1024.0, 768.0, 4.0));
        assert_eq!(field.surface().width, 2048.0);
        assert_eq!(field.surface().height, 1536.0);
    }
}
