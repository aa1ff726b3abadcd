// Host-side tests for tuning constants and their relationships.

use fx_core::constants::*;
use fx_core::{FieldConfig, OverlayConfig, Theme};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Population
    assert!(PIXELS_PER_PARTICLE > 0.0);
    assert!(MIN_PARTICLES > 0 && MIN_PARTICLES <= MAX_PARTICLES);

    // Relaxation factors are per-frame fractions
    assert!((0.0..1.0).contains(&DRAG));
    assert!(RETURN_FACTOR > 0.0 && RETURN_FACTOR < 1.0);
    assert!(RELAX_FACTOR > 0.0 && RELAX_FACTOR <= 1.0);
    assert!(BOUNCE_FACTOR > 0.0 && BOUNCE_FACTOR <= 1.0);

    // Spawn ranges
    assert!(RADIUS_MIN > 0.0 && RADIUS_MIN < RADIUS_MAX);
    assert!(DENSITY_MIN > 0.0 && DENSITY_MIN < DENSITY_MAX);
    assert!(DRIFT_SPEED < MAX_SPEED);

    // Bursts and ripples
    assert!((0.0..=1.0).contains(&BURST_PROBABILITY));
    assert!(RIPPLES_PER_BURST_MAX >= 1);
    assert!(RIPPLE_START_OPACITY > 0.0 && RIPPLE_START_OPACITY <= 1.0);
    assert!(RIPPLE_FADE > 0.0 && RIPPLE_GROWTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn links_are_shorter_than_the_interaction_radius() {
    assert!(LINK_DISTANCE > 0.0);
    assert!(LINK_DISTANCE < INTERACTION_RADIUS);
}

#[test]
fn boosted_alpha_saturates_within_unit_range() {
    for theme in [Theme::Dark, Theme::Light] {
        let (lo, hi) = theme.palette().alpha_range;
        assert!(lo > 0.0 && lo < hi && hi < 1.0);
        // a particle right under the pointer outshines the brightest resting one
        assert!(lo + ALPHA_BOOST > hi);
    }
}

#[test]
fn ripples_fade_out_before_reaching_max_radius() {
    let fade_frames = RIPPLE_START_OPACITY / RIPPLE_FADE;
    let grow_frames = RIPPLE_MAX_RADIUS / RIPPLE_GROWTH;
    assert!(fade_frames > 10.0);
    assert!(fade_frames < grow_frames);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_scales_are_ordered() {
    assert!(SCALE_PRESSED < SCALE_IDLE);
    assert!(SCALE_IDLE < SCALE_HOVER);
    assert!(SCALE_SMOOTHING > 0.0 && SCALE_SMOOTHING <= 1.0);
    assert!(TRAIL_LENGTH > 0 && TRAIL_LIFE > 0);
    assert!(DOT_RADIUS < RING_RADIUS);
}

#[test]
fn defaults_validate() {
    assert!(FieldConfig::default().validate().is_ok());
    assert!(OverlayConfig::default().validate().is_ok());
}
