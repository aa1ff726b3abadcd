//! Drawing seam between the simulation and a raster backend.
//!
//! The web crate implements [`Surface`] over `CanvasRenderingContext2d`;
//! tests implement it with a recorder. Geometry for the non-disc shapes is
//! computed here so every backend draws identical outlines.

use crate::color::Hsla;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, TAU};

pub type Outline = SmallVec<[Vec2; 10]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Disc,
    Square,
    Triangle,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Disc, Shape::Square, Shape::Triangle, Shape::Star];
}

pub trait Surface {
    fn clear(&mut self);
    /// Filled circle; `glow` is a color-matched shadow blur in px (0 = none).
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla, glow: f32);
    fn fill_polygon(&mut self, points: &[Vec2], color: Hsla, glow: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla, width: f32);
    /// Straight segment whose color runs from `from_color` to `to_color`.
    fn gradient_line(&mut self, from: Vec2, to: Vec2, from_color: Hsla, to_color: Hsla, width: f32);
    fn polyline(&mut self, points: &[Vec2], color: Hsla, width: f32);
    /// A single glyph centered on `center`.
    fn glyph(&mut self, glyph: &str, center: Vec2, size: f32, color: Hsla);
}

/// Outline of `shape` centered on `center`. Discs have no outline.
pub fn outline(shape: Shape, center: Vec2, radius: f32, rotation: f32) -> Outline {
    let mut pts = Outline::new();
    match shape {
        Shape::Disc => {}
        Shape::Square => push_ring(&mut pts, center, radius, 4, rotation + TAU / 8.0),
        Shape::Triangle => push_ring(&mut pts, center, radius, 3, rotation - FRAC_PI_2),
        Shape::Star => {
            let inner = radius * 0.45;
            for i in 0..10 {
                let r = if i % 2 == 0 { radius } else { inner };
                let a = rotation - FRAC_PI_2 + i as f32 * TAU / 10.0;
                pts.push(center + Vec2::from_angle(a) * r);
            }
        }
    }
    pts
}

fn push_ring(pts: &mut Outline, center: Vec2, radius: f32, sides: usize, start: f32) {
    for i in 0..sides {
        let a = start + i as f32 * TAU / sides as f32;
        pts.push(center + Vec2::from_angle(a) * radius);
    }
}

/// Draw `shape` through the matching surface primitive.
pub fn fill_shape(
    surface: &mut dyn Surface,
    shape: Shape,
    center: Vec2,
    radius: f32,
    rotation: f32,
    color: Hsla,
    glow: f32,
) {
    match shape {
        Shape::Disc => surface.fill_disc(center, radius, color, glow),
        _ => surface.fill_polygon(&outline(shape, center, radius, rotation), color, glow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlines_have_expected_vertex_counts() {
        let c = Vec2::new(10.0, 10.0);
        assert!(outline(Shape::Disc, c, 3.0, 0.0).is_empty());
        assert_eq!(outline(Shape::Square, c, 3.0, 0.0).len(), 4);
        assert_eq!(outline(Shape::Triangle, c, 3.0, 0.0).len(), 3);
        assert_eq!(outline(Shape::Star, c, 3.0, 0.0).len(), 10);
    }

    #[test]
    fn outline_vertices_stay_within_radius() {
        let c = Vec2::new(-4.0, 7.0);
        for shape in Shape::ALL {
            for p in outline(shape, c, 5.0, 1.3) {
                assert!(p.distance(c) <= 5.0 + 1e-4);
            }
        }
    }
}
