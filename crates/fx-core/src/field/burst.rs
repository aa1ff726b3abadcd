use super::particle::{clamp_speed, Particle};
use crate::color::Hsla;
use crate::config::BurstConfig;
use crate::constants::MAX_HUE_OFFSET;
use glam::Vec2;

/// Paces randomized bursts: at most one per `interval_ms`, and only when the
/// per-frame draw succeeds.
#[derive(Clone, Debug)]
pub struct BurstScheduler {
    last_burst_ms: Option<f64>,
    interval_ms: f64,
    probability: f32,
}

impl BurstScheduler {
    pub fn new(cfg: &BurstConfig) -> Self {
        Self {
            last_burst_ms: None,
            interval_ms: cfg.interval_ms,
            probability: cfg.probability,
        }
    }

    /// `draw` is a uniform sample in `[0, 1)`. The first poll only starts the
    /// interval, so nothing bursts right at mount.
    pub fn poll(&mut self, now_ms: f64, draw: f32) -> bool {
        let Some(last) = self.last_burst_ms else {
            self.last_burst_ms = Some(now_ms);
            return false;
        };
        if now_ms - last >= self.interval_ms && draw < self.probability {
            self.last_burst_ms = Some(now_ms);
            true
        } else {
            false
        }
    }

    pub fn last_burst_ms(&self) -> Option<f64> {
        self.last_burst_ms
    }
}

/// Expanding ring left behind by a burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
    pub color: Hsla,
    growth: f32,
    fade: f32,
}

impl Ripple {
    pub fn new(center: Vec2, max_radius: f32, color: Hsla, cfg: &BurstConfig) -> Self {
        Self {
            center,
            radius: 0.0,
            max_radius,
            opacity: cfg.ripple_start_opacity,
            color,
            growth: cfg.ripple_growth,
            fade: cfg.ripple_fade,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0 && self.radius < self.max_radius
    }

    /// Grow and fade by one frame; returns whether the ripple survives.
    pub fn tick(&mut self) -> bool {
        self.radius += self.growth;
        self.opacity -= self.fade;
        self.is_alive()
    }
}

/// Push every particle within `cfg.radius` of `center` outward and shift its
/// hue. Returns how many particles were affected.
pub fn apply_burst(particles: &mut [Particle], center: Vec2, cfg: &BurstConfig, max_speed: f32) -> usize {
    let mut hit = 0;
    for p in particles.iter_mut() {
        let d = p.pos.distance(center);
        if d >= cfg.radius {
            continue;
        }
        let force = (cfg.radius - d) / cfg.radius;
        let dir = (p.pos - center).normalize_or_zero();
        p.vel = clamp_speed(p.vel + dir * force * cfg.force, max_speed);
        p.hue_offset = (p.hue_offset + cfg.hue_shift * force).min(MAX_HUE_OFFSET);
        hit += 1;
    }
    hit
}

/// Ripples for one burst: `count` concentric rings, later ones reaching further.
pub fn spawn_ripples(center: Vec2, count: usize, color: Hsla, cfg: &BurstConfig) -> Vec<Ripple> {
    (0..count)
        .map(|i| {
            let max_radius = cfg.ripple_max_radius + i as f32 * cfg.ripple_spacing;
            Ripple::new(center, max_radius, color, cfg)
        })
        .collect()
}
