use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::color::Color;
use super::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas compositing modes the layers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    /// Additive: overlapping glows add brightness.
    Lighter,
}

impl Blend {
    pub fn as_css(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

/// A line stroked with a two-stop linear gradient plus a soft shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStroke {
    pub from: Point,
    pub to: Point,
    pub from_color: Color,
    pub to_color: Color,
    pub width: f64,
    pub glow: Color,
    pub glow_blur: f64,
}

/// Everything a layer needs from a 2d surface. The browser implementation
/// sits on `CanvasRenderingContext2d`; tests record the calls instead.
pub trait Painter {
    fn clear(&mut self, surface: &Surface);
    fn set_blend(&mut self, blend: Blend);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    /// Disc filled with a radial gradient from `inner` at the centre to
    /// `outer` at `radius`.
    fn radial_glow(&mut self, center: Point, radius: f64, inner: Color, outer: Color);
    fn gradient_stroke(&mut self, stroke: &GradientStroke);
}

pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn disc(&self, center: Point, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }
}

impl Painter for Canvas2d {
    fn clear(&mut self, surface: &Surface) {
        self.ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
    }

    fn set_blend(&mut self, blend: Blend) {
        let _ = self.ctx.set_global_composite_operation(blend.as_css());
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
        self.disc(center, radius);
    }

    fn radial_glow(&mut self, center: Point, radius: f64, inner: Color, outer: Color) {
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius.max(0.0))
        {
            Ok(gradient) => gradient,
            Err(_) => return,
        };
        let _ = gradient.add_color_stop(0.0, &inner.to_string());
        let _ = gradient.add_color_stop(1.0, &outer.to_string());
        self.ctx.set_fill_style(&gradient);
        self.disc(center, radius);
    }

    fn gradient_stroke(&mut self, stroke: &GradientStroke) {
        let gradient = self
            .ctx
            .create_linear_gradient(stroke.from.x, stroke.from.y, stroke.to.x, stroke.to.y);
        let _ = gradient.add_color_stop(0.0, &stroke.from_color.to_string());
        let _ = gradient.add_color_stop(1.0, &stroke.to_color.to_string());

        self.ctx.save();
        self.ctx.set_stroke_style(&gradient);
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_line_cap("round");
        self.ctx.set_shadow_color(&stroke.glow.to_string());
        self.ctx.set_shadow_blur(stroke.glow_blur);
        self.ctx.begin_path();
        self.ctx.move_to(stroke.to.x, stroke.to.y);
        self.ctx.line_to(stroke.from.x, stroke.from.y);
        self.ctx.stroke();
        self.ctx.restore();
    }
}
