use glam::Vec2;
use std::f32::consts::TAU;

/// Glyph circling the pointer at a fixed distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Satellite {
    pub glyph: &'static str,
    pub angle: f32,
    pub distance: f32,
    /// Radians per frame; the sign picks the direction.
    pub speed: f32,
}

impl Satellite {
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
    }

    #[inline]
    pub fn position(&self, pointer: Vec2, scale: f32) -> Vec2 {
        pointer + Vec2::from_angle(self.angle) * self.distance * scale
    }
}

pub fn default_satellites() -> Vec<Satellite> {
    vec![
        Satellite {
            glyph: "✦",
            angle: 0.0,
            distance: 26.0,
            speed: 0.05,
        },
        Satellite {
            glyph: "✧",
            angle: 2.1,
            distance: 34.0,
            speed: -0.035,
        },
        Satellite {
            glyph: "⋆",
            angle: 4.2,
            distance: 42.0,
            speed: 0.025,
        },
    ]
}
