// Recording surface shared by the host-side tests.

#![allow(dead_code)]
use fx_core::{Hsla, Surface};
use glam::Vec2;

#[derive(Default)]
pub struct Recorder {
    pub clears: usize,
    pub discs: Vec<(Vec2, f32, Hsla)>,
    pub polygons: usize,
    pub circles: Vec<(Vec2, f32, Hsla)>,
    pub gradient_lines: Vec<(Vec2, Vec2, Hsla, Hsla)>,
    pub polylines: Vec<Vec<Vec2>>,
    pub glyphs: Vec<(String, Vec2)>,
}

impl Recorder {
    pub fn shapes(&self) -> usize {
        self.discs.len() + self.polygons
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.clears += 1;
        self.discs.clear();
        self.polygons = 0;
        self.circles.clear();
        self.gradient_lines.clear();
        self.polylines.clear();
        self.glyphs.clear();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla, _glow: f32) {
        self.discs.push((center, radius, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], _color: Hsla, _glow: f32) {
        assert!(points.len() >= 3, "degenerate polygon");
        self.polygons += 1;
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla, _width: f32) {
        self.circles.push((center, radius, color));
    }

    fn gradient_line(&mut self, from: Vec2, to: Vec2, from_color: Hsla, to_color: Hsla, _width: f32) {
        self.gradient_lines.push((from, to, from_color, to_color));
    }

    fn polyline(&mut self, points: &[Vec2], _color: Hsla, _width: f32) {
        self.polylines.push(points.to_vec());
    }

    fn glyph(&mut self, glyph: &str, center: Vec2, _size: f32, _color: Hsla) {
        self.glyphs.push((glyph.to_string(), center));
    }
}
