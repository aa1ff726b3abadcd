use crate::config::WaveConfig;
use glam::Vec2;

/// One ambient sine band drawn behind the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
    /// How fast this band's phase follows the scroll offset, relative to the config factor.
    pub parallax: f32,
    /// Resting height as a fraction of the viewport height.
    pub baseline: f32,
}

pub fn build_waves(cfg: &WaveConfig) -> Vec<Wave> {
    (0..cfg.count)
        .map(|i| {
            let f = i as f32;
            Wave {
                amplitude: cfg.base_amplitude * (1.0 - 0.25 * f).max(0.25),
                frequency: cfg.base_frequency * (1.0 + 0.4 * f),
                phase: f * 1.7,
                parallax: 1.0 + 0.5 * f,
                baseline: (0.55 + 0.12 * f).min(0.95),
            }
        })
        .collect()
}

/// Vertical displacement of `wave` at column `x`.
#[inline]
pub fn wave_offset(wave: &Wave, x: f32, scroll: f32, time_ms: f64, cfg: &WaveConfig) -> f32 {
    let t = (time_ms as f32) * cfg.time_factor;
    let s = scroll * cfg.scroll_factor * wave.parallax;
    wave.amplitude * (x * wave.frequency + wave.phase + s + t).sin()
}

/// Polyline samples across the full width, both ends included.
pub fn wave_points(wave: &Wave, bounds: Vec2, scroll: f32, time_ms: f64, cfg: &WaveConfig) -> Vec<Vec2> {
    let base_y = bounds.y * wave.baseline;
    let steps = (bounds.x / cfg.sample_step).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let x = (i as f32 * cfg.sample_step).min(bounds.x);
            Vec2::new(x, base_y + wave_offset(wave, x, scroll, time_ms, cfg))
        })
        .collect()
}
