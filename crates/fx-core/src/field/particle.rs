use crate::color::{wrap_hue, Hsla};
use crate::config::FieldConfig;
use crate::constants::{
    DENSITY_MAX, DENSITY_MIN, DRIFT_SPEED, MAX_HUE_OFFSET, RADIUS_MAX, RADIUS_MIN, SPIN_MAX,
};
use crate::surface::Shape;
use crate::theme::Palette;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One background agent.
///
/// Plain value record: [`update_particle`] maps it to its next-frame state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Fixed at creation; the particle relaxes back here outside the pointer radius.
    pub origin: Vec2,
    pub vel: Vec2,
    /// Creation-time drift velocity; drag relaxes `vel` toward it.
    pub drift: Vec2,
    pub radius: f32,
    pub base_radius: f32,
    /// Displayed color, rebuilt every update.
    pub color: Hsla,
    pub base_hue: f32,
    pub hue_offset: f32,
    pub base_alpha: f32,
    /// Position of `base_alpha` inside the palette's alpha band, kept for retinting.
    pub tone: f32,
    pub shape: Shape,
    pub rotation: f32,
    pub spin: f32,
    /// Responsiveness to repulsion.
    pub density: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(bounds: Vec2, palette: &Palette, rng: &mut R) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let drift = Vec2::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * DRIFT_SPEED,
            (rng.gen::<f32>() * 2.0 - 1.0) * DRIFT_SPEED,
        );
        let radius = RADIUS_MIN + rng.gen::<f32>() * (RADIUS_MAX - RADIUS_MIN);
        let (h0, h1) = palette.hue_range;
        let hue = h0 + rng.gen::<f32>() * (h1 - h0);
        let tone = rng.gen::<f32>();
        let base_alpha = tone_alpha(palette, tone);
        let shape = *Shape::ALL.choose(rng).unwrap_or(&Shape::Disc);
        Self {
            pos,
            origin: pos,
            vel: drift,
            drift,
            radius,
            base_radius: radius,
            color: Hsla::new(hue, palette.saturation, palette.lightness, base_alpha),
            base_hue: wrap_hue(hue),
            hue_offset: 0.0,
            base_alpha,
            tone,
            shape,
            rotation: rng.gen::<f32>() * TAU,
            spin: (rng.gen::<f32>() * 2.0 - 1.0) * SPIN_MAX,
            density: DENSITY_MIN + rng.gen::<f32>() * (DENSITY_MAX - DENSITY_MIN),
        }
    }

    /// Adopt a new palette's saturation, lightness and alpha band.
    pub fn retint(&mut self, palette: &Palette) {
        let boost = self.color.a - self.base_alpha;
        self.base_alpha = tone_alpha(palette, self.tone);
        self.color = Hsla::new(
            self.color.h,
            palette.saturation,
            palette.lightness,
            self.base_alpha + boost.max(0.0),
        );
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[inline]
fn tone_alpha(palette: &Palette, tone: f32) -> f32 {
    let (a0, a1) = palette.alpha_range;
    a0 + tone.clamp(0.0, 1.0) * (a1 - a0)
}

#[inline]
pub(crate) fn clamp_speed(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}

/// Advance one particle by one frame.
///
/// `pointer` is `None` while the pointer is outside the window.
pub fn update_particle(
    particle: Particle,
    pointer: Option<Vec2>,
    bounds: Vec2,
    cfg: &FieldConfig,
) -> Particle {
    let mut p = particle;
    p.pos += p.vel;
    p.rotation = (p.rotation + p.spin).rem_euclid(TAU);

    let radius = cfg.interaction_radius;
    let near = pointer
        .map(|m| (m, p.pos.distance(m)))
        .filter(|(_, d)| *d < radius);

    let alpha = match near {
        Some((m, d)) => {
            let force = (radius - d) / radius;
            let away = (p.pos - m).normalize_or_zero();
            p.vel += away * force * p.density * cfg.repulsion_strength;
            p.vel = clamp_speed(p.vel, cfg.max_speed);
            p.radius = p.base_radius * (1.0 + force * cfg.size_boost);
            p.hue_offset = (p.hue_offset + force * cfg.hue_shift).min(MAX_HUE_OFFSET);
            (p.base_alpha + force * cfg.alpha_boost).min(1.0)
        }
        None => {
            let k = cfg.relax_factor;
            p.vel = p.drift + (p.vel - p.drift) * cfg.drag;
            p.pos += (p.origin - p.pos) * cfg.return_factor;
            p.radius += (p.base_radius - p.radius) * k;
            p.hue_offset *= 1.0 - k;
            p.color.a + (p.base_alpha - p.color.a) * k
        }
    };

    bounce(&mut p, bounds, cfg.bounce_factor);

    p.base_hue = wrap_hue(p.base_hue + cfg.hue_drift);
    p.color = Hsla::new(p.base_hue + p.hue_offset, p.color.s, p.color.l, alpha);
    p
}

/// Reflect velocity on each axis where the particle has left the viewport
/// and is still moving outward. Drift is turned back inward as well.
fn bounce(p: &mut Particle, bounds: Vec2, factor: f32) {
    if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > bounds.x && p.vel.x > 0.0) {
        p.vel.x = -p.vel.x * factor;
        p.drift.x = if p.pos.x < 0.0 { p.drift.x.abs() } else { -p.drift.x.abs() };
    }
    if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > bounds.y && p.vel.y > 0.0) {
        p.vel.y = -p.vel.y * factor;
        p.drift.y = if p.pos.y < 0.0 { p.drift.y.abs() } else { -p.drift.y.abs() };
    }
}
