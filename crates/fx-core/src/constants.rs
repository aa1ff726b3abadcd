// Tuning constants for the backdrop and the cursor overlay.
// Per-frame quantities assume one step per display refresh (~60 Hz).

// Population
pub const PIXELS_PER_PARTICLE: f32 = 4.0; // one particle per this many px of viewport width
pub const MIN_PARTICLES: usize = 24;
pub const MAX_PARTICLES: usize = 350;

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 150.0; // R
pub const REPULSION_STRENGTH: f32 = 1.2; // impulse at zero distance, px/frame
pub const MAX_SPEED: f32 = 6.0; // px/frame
pub const SIZE_BOOST: f32 = 1.5; // radius multiplier gained at zero distance
pub const ALPHA_BOOST: f32 = 0.6;
pub const HUE_SHIFT: f32 = 2.0; // degrees added per frame at zero distance
pub const MAX_HUE_OFFSET: f32 = 90.0; // cap on the accumulated proximity/burst hue shift
pub const DENSITY_MIN: f32 = 0.5;
pub const DENSITY_MAX: f32 = 1.5;

// Relaxation outside R
pub const DRAG: f32 = 0.95; // fraction of the impulse velocity kept per frame
pub const RETURN_FACTOR: f32 = 0.01; // fraction of the way back to origin per frame
pub const RELAX_FACTOR: f32 = 0.08; // size/alpha/hue relaxation per frame
pub const HUE_DRIFT: f32 = 0.15; // degrees per frame, always applied

// Spawn ranges
pub const RADIUS_MIN: f32 = 0.8;
pub const RADIUS_MAX: f32 = 2.8;
pub const DRIFT_SPEED: f32 = 0.25; // max |v| per axis at creation
pub const SPIN_MAX: f32 = 0.02; // rad/frame

// Edges
pub const BOUNCE_FACTOR: f32 = 0.9; // applied to the impulse part of velocity on a bounce

// Links
pub const LINK_DISTANCE: f32 = 110.0; // L, kept below R
pub const LINK_WIDTH: f32 = 0.6;

// Bursts
pub const BURST_INTERVAL_MS: f64 = 3000.0;
pub const BURST_PROBABILITY: f32 = 0.02; // per frame once the interval elapsed
pub const BURST_RADIUS: f32 = 220.0;
pub const BURST_FORCE: f32 = 5.0; // px/frame at the burst center
pub const BURST_HUE_SHIFT: f32 = 40.0;
pub const RIPPLES_PER_BURST_MAX: usize = 3;

// Ripples
pub const RIPPLE_START_OPACITY: f32 = 0.5;
pub const RIPPLE_FADE: f32 = 0.008; // opacity per frame
pub const RIPPLE_GROWTH: f32 = 2.2; // px per frame
pub const RIPPLE_MAX_RADIUS: f32 = 180.0; // first ripple; later ones in a batch reach further
pub const RIPPLE_SPACING: f32 = 40.0;
pub const RIPPLE_WIDTH: f32 = 1.5;

// Scroll waves
pub const WAVE_COUNT: usize = 3;
pub const WAVE_BASE_AMPLITUDE: f32 = 28.0;
pub const WAVE_BASE_FREQUENCY: f32 = 0.006; // rad per px
pub const WAVE_SCROLL_FACTOR: f32 = 0.004; // phase per px scrolled
pub const WAVE_TIME_FACTOR: f32 = 0.0006; // phase per ms
pub const WAVE_SAMPLE_STEP: f32 = 12.0; // px between polyline samples
pub const WAVE_WIDTH: f32 = 1.2;

// Cursor overlay
pub const CURSOR_BREAKPOINT_PX: f32 = 768.0;
pub const TRAIL_LENGTH: usize = 30;
pub const TRAIL_LIFE: u32 = 24; // frames
pub const TRAIL_HUE_STEP: f32 = 12.0; // degrees per spawned point
pub const TRAIL_DOT_RADIUS: f32 = 4.0;
pub const DOT_RADIUS: f32 = 4.0;
pub const RING_RADIUS: f32 = 16.0;
pub const RING_WIDTH: f32 = 1.5;
pub const ICON_SIZE: f32 = 14.0;
pub const ICON_OFFSET: [f32; 2] = [18.0, -18.0];
pub const SATELLITE_SIZE: f32 = 11.0;
pub const SCALE_IDLE: f32 = 1.0;
pub const SCALE_PRESSED: f32 = 0.75;
pub const SCALE_HOVER: f32 = 1.5;
pub const SCALE_SMOOTHING: f32 = 0.2;
