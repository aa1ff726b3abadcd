//! Tunable parameter sets.
//!
//! Each struct defaults to the canonical values in [`crate::constants`]. Hosts
//! may override individual fields; `validate` rejects values that would break
//! the per-frame invariants (zero radii, probabilities outside `[0, 1]`, ...).

use crate::constants::*;
use crate::error::{ensure, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub pixels_per_particle: f32,
    pub min_particles: usize,
    pub max_particles: usize,
    pub interaction_radius: f32,
    pub repulsion_strength: f32,
    pub max_speed: f32,
    pub size_boost: f32,
    pub alpha_boost: f32,
    pub hue_shift: f32,
    pub drag: f32,
    pub return_factor: f32,
    pub relax_factor: f32,
    pub hue_drift: f32,
    pub bounce_factor: f32,
    pub link_distance: f32,
    pub burst: BurstConfig,
    pub waves: WaveConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            pixels_per_particle: PIXELS_PER_PARTICLE,
            min_particles: MIN_PARTICLES,
            max_particles: MAX_PARTICLES,
            interaction_radius: INTERACTION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            max_speed: MAX_SPEED,
            size_boost: SIZE_BOOST,
            alpha_boost: ALPHA_BOOST,
            hue_shift: HUE_SHIFT,
            drag: DRAG,
            return_factor: RETURN_FACTOR,
            relax_factor: RELAX_FACTOR,
            hue_drift: HUE_DRIFT,
            bounce_factor: BOUNCE_FACTOR,
            link_distance: LINK_DISTANCE,
            burst: BurstConfig::default(),
            waves: WaveConfig::default(),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        ensure(
            self.pixels_per_particle > 0.0,
            "pixels_per_particle",
            "must be positive",
        )?;
        ensure(
            self.min_particles <= self.max_particles,
            "min_particles",
            "must not exceed max_particles",
        )?;
        ensure(
            self.interaction_radius > 0.0,
            "interaction_radius",
            "must be positive",
        )?;
        ensure(self.max_speed > 0.0, "max_speed", "must be positive")?;
        ensure(self.size_boost > 0.0, "size_boost", "must be positive")?;
        ensure(self.alpha_boost > 0.0, "alpha_boost", "must be positive")?;
        ensure(
            (0.0..1.0).contains(&self.drag),
            "drag",
            "must be in [0, 1)",
        )?;
        ensure(
            self.return_factor > 0.0 && self.return_factor < 1.0,
            "return_factor",
            "must be in (0, 1)",
        )?;
        ensure(
            self.relax_factor > 0.0 && self.relax_factor <= 1.0,
            "relax_factor",
            "must be in (0, 1]",
        )?;
        ensure(self.bounce_factor > 0.0, "bounce_factor", "must be positive")?;
        ensure(
            self.link_distance > 0.0,
            "link_distance",
            "must be positive",
        )?;
        self.burst.validate()?;
        self.waves.validate()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub interval_ms: f64,
    pub probability: f32,
    pub radius: f32,
    pub force: f32,
    pub hue_shift: f32,
    pub max_ripples: usize,
    pub ripple_start_opacity: f32,
    pub ripple_fade: f32,
    pub ripple_growth: f32,
    pub ripple_max_radius: f32,
    pub ripple_spacing: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            interval_ms: BURST_INTERVAL_MS,
            probability: BURST_PROBABILITY,
            radius: BURST_RADIUS,
            force: BURST_FORCE,
            hue_shift: BURST_HUE_SHIFT,
            max_ripples: RIPPLES_PER_BURST_MAX,
            ripple_start_opacity: RIPPLE_START_OPACITY,
            ripple_fade: RIPPLE_FADE,
            ripple_growth: RIPPLE_GROWTH,
            ripple_max_radius: RIPPLE_MAX_RADIUS,
            ripple_spacing: RIPPLE_SPACING,
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> Result<()> {
        ensure(self.interval_ms >= 0.0, "burst.interval_ms", "must not be negative")?;
        ensure(
            (0.0..=1.0).contains(&self.probability),
            "burst.probability",
            "must be in [0, 1]",
        )?;
        ensure(self.radius > 0.0, "burst.radius", "must be positive")?;
        ensure(self.max_ripples >= 1, "burst.max_ripples", "must be at least 1")?;
        ensure(
            self.ripple_start_opacity > 0.0 && self.ripple_start_opacity <= 1.0,
            "burst.ripple_start_opacity",
            "must be in (0, 1]",
        )?;
        ensure(self.ripple_fade > 0.0, "burst.ripple_fade", "must be positive")?;
        ensure(
            self.ripple_max_radius > 0.0,
            "burst.ripple_max_radius",
            "must be positive",
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub enabled: bool,
    pub count: usize,
    pub base_amplitude: f32,
    pub base_frequency: f32,
    pub scroll_factor: f32,
    pub time_factor: f32,
    pub sample_step: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: WAVE_COUNT,
            base_amplitude: WAVE_BASE_AMPLITUDE,
            base_frequency: WAVE_BASE_FREQUENCY,
            scroll_factor: WAVE_SCROLL_FACTOR,
            time_factor: WAVE_TIME_FACTOR,
            sample_step: WAVE_SAMPLE_STEP,
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> Result<()> {
        ensure(self.sample_step > 0.0, "waves.sample_step", "must be positive")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub breakpoint_px: f32,
    pub trail_length: usize,
    pub trail_life: u32,
    pub scale_idle: f32,
    pub scale_pressed: f32,
    pub scale_hover: f32,
    pub smoothing: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: CURSOR_BREAKPOINT_PX,
            trail_length: TRAIL_LENGTH,
            trail_life: TRAIL_LIFE,
            scale_idle: SCALE_IDLE,
            scale_pressed: SCALE_PRESSED,
            scale_hover: SCALE_HOVER,
            smoothing: SCALE_SMOOTHING,
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> Result<()> {
        ensure(self.trail_length >= 1, "trail_length", "must be at least 1")?;
        ensure(self.trail_life >= 1, "trail_life", "must be at least 1")?;
        ensure(
            self.smoothing > 0.0 && self.smoothing <= 1.0,
            "smoothing",
            "must be in (0, 1]",
        )?;
        ensure(
            self.scale_idle > 0.0 && self.scale_pressed > 0.0 && self.scale_hover > 0.0,
            "scale",
            "targets must be positive",
        )
    }
}
