pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod overlay;
pub mod surface;
pub mod theme;
pub mod zone;

pub use clock::{Animator, ManualClock};
pub use color::Hsla;
pub use config::{BurstConfig, FieldConfig, OverlayConfig, WaveConfig};
pub use error::FxError;
pub use field::{particle_count, Particle, ParticleField};
pub use overlay::CursorOverlay;
pub use surface::{Shape, Surface};
pub use theme::{Palette, Theme};
pub use zone::{Rect, Region, Section, Zone};
