//! Frame scheduling seam.
//!
//! Components implement [`Animator`]; the web crate drives them from
//! `requestAnimationFrame`, tests drive them with [`ManualClock`].

/// Something advanced once per display refresh.
pub trait Animator {
    /// `now_ms` is a monotonic timestamp in milliseconds.
    fn frame(&mut self, now_ms: f64);
}

/// Deterministic stand-in for the display refresh.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now_ms: f64,
    frame_ms: f64,
    frames: u64,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(1000.0 / 60.0)
    }
}

impl ManualClock {
    pub fn new(frame_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_ms,
            frames: 0,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance time by one frame interval and run one frame.
    pub fn tick<A: Animator + ?Sized>(&mut self, animator: &mut A) {
        self.now_ms += self.frame_ms;
        self.frames += 1;
        animator.frame(self.now_ms);
    }

    pub fn run<A: Animator + ?Sized>(&mut self, animator: &mut A, frames: usize) {
        for _ in 0..frames {
            self.tick(animator);
        }
    }

    /// Jump the clock forward without running any frame.
    pub fn skip_ms(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}
