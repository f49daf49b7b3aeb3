use std::fmt;

/// A CSS colour as the canvas API wants it: a string in `rgba()` or `hsla()`
/// form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl Color {
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// `s` and `l` are percentages.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Color::Hsla { h, s, l, a: a.clamp(0.0, 1.0) }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{:.3})", r, g, b, a),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({:.1}, {:.0}%, {:.0}%, {:.3})", h, s, l, a),
        }
    }
}

/// Channel-wise linear interpolation between two RGB triples, truncated the
/// way the canvas would floor them.
pub fn mix_rgb(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).floor() as u8;
    (ch(from.0, to.0), ch(from.1, to.1), ch(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_css_strings() {
        assert_eq!(Color::rgba(160, 180, 255, 0.3).to_string(), "rgba(160,180,255,0.300)");
        assert_eq!(Color::hsla(210.0, 90.0, 75.0, 0.6).to_string(), "hsla(210.0, 90%, 75%, 0.600)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::rgba(0, 0, 0, -0.2).alpha(), 0.0);
        assert_eq!(Color::hsla(0.0, 0.0, 0.0, 1.7).alpha(), 1.0);
    }

    #[test]
    fn mix_hits_endpoints() {
        assert_eq!(mix_rgb((160, 180, 255), (200, 200, 200), 0.0), (160, 180, 255));
        assert_eq!(mix_rgb((160, 180, 255), (200, 200, 200), 1.0), (200, 200, 200));
        assert_eq!(mix_rgb((160, 180, 255), (200, 200, 200), 0.5), (180, 190, 227));
    }
}
