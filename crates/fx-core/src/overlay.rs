//! Pointer overlay controller.
//!
//! Input handlers call the `pointer_*` / `interactive_*` methods, which only
//! update state. `step` runs once per frame (scale smoothing, satellites,
//! trail aging) and `draw` paints ring, dot, zone icon, satellites and trail.

mod satellite;
mod trail;

pub use satellite::{default_satellites, Satellite};
pub use trail::{Trail, TrailPoint};

use crate::clock::Animator;
use crate::color::Hsla;
use crate::config::OverlayConfig;
use crate::constants::{
    DOT_RADIUS, ICON_OFFSET, ICON_SIZE, RING_RADIUS, RING_WIDTH, SATELLITE_SIZE, TRAIL_DOT_RADIUS,
    TRAIL_HUE_STEP,
};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::zone::{resolve_zone, Region, Zone};
use glam::Vec2;
use smallvec::SmallVec;

/// `scale + (target - scale) * k`
#[inline]
pub fn smooth_scale(scale: f32, target: f32, k: f32) -> f32 {
    scale + (target - scale) * k
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub pressed: bool,
    /// Pointer has left the tracked surface.
    pub hidden: bool,
    pub zone: Zone,
    /// Ids of the interactive elements under the pointer; nested elements stack.
    hovered: SmallVec<[u64; 4]>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            pressed: false,
            hidden: true,
            zone: Zone::Default,
            hovered: SmallVec::new(),
        }
    }
}

impl PointerState {
    #[inline]
    pub fn over_interactive(&self) -> bool {
        !self.hovered.is_empty()
    }

    pub fn hovered(&self) -> &[u64] {
        &self.hovered
    }
}

pub struct CursorOverlay {
    cfg: OverlayConfig,
    theme: Theme,
    viewport: Vec2,
    pointer: PointerState,
    regions: Vec<Region>,
    trail: Trail,
    satellites: Vec<Satellite>,
    scale: f32,
}

impl CursorOverlay {
    pub fn new(cfg: OverlayConfig, width: f32, height: f32, theme: Theme) -> Self {
        let cfg = match cfg.validate() {
            Ok(()) => cfg,
            Err(e) => {
                log::warn!("[cursor] {e}; falling back to defaults");
                OverlayConfig::default()
            }
        };
        Self {
            trail: Trail::new(cfg.trail_length, cfg.trail_life),
            scale: cfg.scale_idle,
            cfg,
            theme,
            viewport: Vec2::new(width, height),
            pointer: PointerState::default(),
            regions: Vec::new(),
            satellites: default_satellites(),
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer.pos = pos;
        self.pointer.hidden = false;
        self.trail.push(pos);
        self.refresh_zone();
    }

    pub fn pointer_entered(&mut self) {
        self.pointer.hidden = false;
    }

    pub fn pointer_left(&mut self) {
        self.pointer.hidden = true;
        self.pointer.pressed = false;
        self.pointer.hovered.clear();
        self.trail.clear();
        self.refresh_zone();
    }

    pub fn pointer_down(&mut self) {
        self.pointer.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pointer.pressed = false;
    }

    pub fn interactive_entered(&mut self, id: u64) {
        if !self.pointer.hovered.contains(&id) {
            self.pointer.hovered.push(id);
        }
        self.refresh_zone();
    }

    pub fn interactive_left(&mut self, id: u64) {
        self.pointer.hovered.retain(|h| *h != id);
        self.refresh_zone();
    }

    /// Drop hovered elements for which `live` is false. Elements removed from
    /// the page never report a leave, so the host prunes them here.
    pub fn retain_interactive(&mut self, mut live: impl FnMut(u64) -> bool) {
        let before = self.pointer.hovered.len();
        self.pointer.hovered.retain(|h| live(*h));
        if self.pointer.hovered.len() != before {
            self.refresh_zone();
        }
    }

    /// Replace the measured section rectangles and re-resolve the zone.
    pub fn set_regions(&mut self, regions: Vec<Region>) {
        self.regions = regions;
        self.refresh_zone();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn refresh_zone(&mut self) {
        self.pointer.zone = resolve_zone(
            self.pointer.pos,
            &self.regions,
            self.pointer.over_interactive(),
        );
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn zone(&self) -> Zone {
        self.pointer.zone
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Hidden below the breakpoint and while the pointer is outside the window.
    pub fn is_visible(&self) -> bool {
        !self.pointer.hidden && self.viewport.x >= self.cfg.breakpoint_px
    }

    pub fn target_scale(&self) -> f32 {
        if self.pointer.pressed {
            self.cfg.scale_pressed
        } else if self.pointer.over_interactive() {
            self.cfg.scale_hover
        } else {
            self.cfg.scale_idle
        }
    }

    pub fn step(&mut self) {
        self.scale = smooth_scale(self.scale, self.target_scale(), self.cfg.smoothing);
        for s in &mut self.satellites {
            s.advance();
        }
        self.trail.tick();
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        if !self.is_visible() {
            return;
        }
        let style = self.pointer.zone.style();
        let light = self.theme.palette().cursor_lightness;
        let accent = Hsla::new(style.hue, style.saturation, light, 0.9);
        let pos = self.pointer.pos;

        for p in self.trail.iter() {
            let v = self.trail.vitality(p);
            let hue = style.hue + p.index as f32 * TRAIL_HUE_STEP;
            let color = accent.with_hue(hue).with_alpha(0.5 * v);
            surface.fill_disc(p.pos, (TRAIL_DOT_RADIUS * v).max(0.5), color, 0.0);
        }

        surface.stroke_circle(pos, RING_RADIUS * self.scale, accent.with_alpha(0.6), RING_WIDTH);
        surface.fill_disc(pos, DOT_RADIUS * self.scale, accent, 6.0);
        surface.glyph(
            style.glyph,
            pos + Vec2::from(ICON_OFFSET) * self.scale,
            ICON_SIZE,
            accent,
        );
        for s in &self.satellites {
            surface.glyph(
                s.glyph,
                s.position(pos, self.scale),
                SATELLITE_SIZE,
                accent.with_alpha(0.7),
            );
        }
    }
}

impl Animator for CursorOverlay {
    fn frame(&mut self, _now_ms: f64) {
        self.step();
    }
}
