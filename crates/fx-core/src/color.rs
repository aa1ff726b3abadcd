/// HSLA color as consumed by Canvas 2D style strings.
///
/// `h` is in degrees and always kept in `[0, 360)`; `s` and `l` are
/// percentages; `a` is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    #[inline]
    pub fn with_hue(self, h: f32) -> Self {
        Self {
            h: wrap_hue(h),
            ..self
        }
    }

    /// `hsla(h, s%, l%, a)` string for `fillStyle`/`strokeStyle`.
    pub fn css(&self) -> String {
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h, self.s, self.l, self.a
        )
    }
}

#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_both_directions() {
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert!(wrap_hue(-1e-7) < 360.0);
    }

    #[test]
    fn css_string_is_canvas_compatible() {
        let c = Hsla::new(200.0, 80.0, 60.0, 0.5);
        assert_eq!(c.css(), "hsla(200.0, 80.0%, 60.0%, 0.500)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Hsla::new(0.0, 0.0, 0.0, 1.7).a, 1.0);
        assert_eq!(Hsla::new(0.0, 0.0, 0.0, 0.2).with_alpha(-0.5).a, 0.0);
    }
}
