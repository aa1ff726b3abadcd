//! Particle field simulator.
//!
//! [`ParticleField`] owns the particle set, the ripple list and the burst
//! timer for one mounted backdrop. `step` advances the simulation, `draw`
//! paints the current state onto any [`Surface`].

mod burst;
mod links;
mod particle;
mod waves;

pub use burst::{apply_burst, spawn_ripples, BurstScheduler, Ripple};
pub use links::{links, Link};
pub use particle::{update_particle, Particle};
pub use waves::{build_waves, wave_offset, wave_points, Wave};

use crate::clock::Animator;
use crate::color::Hsla;
use crate::config::FieldConfig;
use crate::constants::{LINK_WIDTH, RIPPLE_WIDTH, WAVE_WIDTH};
use crate::surface::{fill_shape, Surface};
use crate::theme::{Palette, Theme};
use glam::Vec2;
use rand::prelude::*;

/// `clamp(width / pixels_per_particle, min, max)`.
pub fn particle_count(width: f32, cfg: &FieldConfig) -> usize {
    let raw = (width.max(0.0) / cfg.pixels_per_particle).floor() as usize;
    raw.clamp(cfg.min_particles, cfg.max_particles)
}

pub fn spawn_particles<R: Rng + ?Sized>(
    bounds: Vec2,
    count: usize,
    palette: &Palette,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::random(bounds, palette, rng))
        .collect()
}

pub struct ParticleField {
    cfg: FieldConfig,
    bounds: Vec2,
    theme: Theme,
    palette: Palette,
    particles: Vec<Particle>,
    links: Vec<Link>,
    ripples: Vec<Ripple>,
    burst: BurstScheduler,
    waves: Vec<Wave>,
    pointer: Option<Vec2>,
    scroll: f32,
    now_ms: f64,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(cfg: FieldConfig, width: f32, height: f32, theme: Theme, seed: u64) -> Self {
        let cfg = match cfg.validate() {
            Ok(()) => cfg,
            Err(e) => {
                log::warn!("[field] {e}; falling back to defaults");
                FieldConfig::default()
            }
        };
        let mut field = Self {
            burst: BurstScheduler::new(&cfg.burst),
            waves: build_waves(&cfg.waves),
            cfg,
            bounds: Vec2::ZERO,
            theme,
            palette: theme.palette(),
            particles: Vec::new(),
            links: Vec::new(),
            ripples: Vec::new(),
            pointer: None,
            scroll: 0.0,
            now_ms: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.resize(width, height);
        field
    }

    /// Drop the whole set and respawn it for the new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let count = particle_count(self.bounds.x, &self.cfg);
        self.particles = spawn_particles(self.bounds, count, &self.palette, &mut self.rng);
        self.links.clear();
        self.ripples.clear();
        log::debug!(
            "[field] spawned {} particles for {}x{}",
            count,
            self.bounds.x,
            self.bounds.y
        );
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll = scroll_y;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.palette = theme.palette();
        for p in &mut self.particles {
            p.retint(&self.palette);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    /// Advance one frame: particles, links, burst scheduling, ripples.
    pub fn step(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let (pointer, bounds) = (self.pointer, self.bounds);
        for p in &mut self.particles {
            *p = update_particle(*p, pointer, bounds, &self.cfg);
        }
        self.links = links(&self.particles, self.cfg.link_distance);

        let draw = self.rng.gen::<f32>();
        if self.burst.poll(now_ms, draw) {
            let center = Vec2::new(
                self.rng.gen::<f32>() * bounds.x,
                self.rng.gen::<f32>() * bounds.y,
            );
            self.trigger_burst(center);
        }

        self.ripples.retain_mut(|r| r.tick());
    }

    /// Radial impulse at `center` plus a batch of 1..=max ripples.
    pub fn trigger_burst(&mut self, center: Vec2) {
        let burst = &self.cfg.burst;
        let hit = apply_burst(&mut self.particles, center, burst, self.cfg.max_speed);
        let count = self.rng.gen_range(1..=burst.max_ripples);
        let (h0, h1) = self.palette.hue_range;
        let hue = h0 + self.rng.gen::<f32>() * (h1 - h0) + burst.hue_shift;
        let color = Hsla::new(hue, self.palette.saturation, self.palette.lightness, 1.0);
        self.ripples
            .extend(spawn_ripples(center, count, color, burst));
        log::trace!(
            "[field] burst at ({:.0},{:.0}) moved {} particles, {} ripples",
            center.x,
            center.y,
            hit,
            count
        );
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        let glow = self.palette.glow;
        for p in &self.particles {
            fill_shape(surface, p.shape, p.pos, p.radius, p.rotation, p.color, glow);
        }
        for l in &self.links {
            let (a, b) = (&self.particles[l.a], &self.particles[l.b]);
            let alpha = l.opacity * self.palette.link_alpha;
            surface.gradient_line(
                a.pos,
                b.pos,
                a.color.with_alpha(alpha),
                b.color.with_alpha(alpha),
                LINK_WIDTH,
            );
        }
        for r in &self.ripples {
            surface.stroke_circle(r.center, r.radius, r.color.with_alpha(r.opacity), RIPPLE_WIDTH);
        }
        if self.cfg.waves.enabled {
            for w in &self.waves {
                let pts = wave_points(w, self.bounds, self.scroll, self.now_ms, &self.cfg.waves);
                surface.polyline(&pts, self.palette.wave, WAVE_WIDTH);
            }
        }
    }
}

impl Animator for ParticleField {
    fn frame(&mut self, now_ms: f64) {
        self.step(now_ms);
    }
}
