//! Pointer zone classification.

use glam::Vec2;

/// Named page sections the host can register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Intro,
    About,
    Skills,
    Work,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Intro,
        Section::About,
        Section::Skills,
        Section::Work,
        Section::Contact,
    ];

    /// Map a DOM id onto a section. Unknown ids are not tracked.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "intro" | "hero" | "home" => Some(Section::Intro),
            "about" => Some(Section::About),
            "skills" => Some(Section::Skills),
            "work" | "projects" => Some(Section::Work),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Zone {
    Section(Section),
    Interactive,
    #[default]
    Default,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneStyle {
    pub hue: f32,
    pub saturation: f32,
    pub glyph: &'static str,
}

impl Zone {
    pub fn style(self) -> ZoneStyle {
        let (hue, saturation, glyph) = match self {
            Zone::Section(Section::Intro) => (200.0, 85.0, "✦"),
            Zone::Section(Section::About) => (160.0, 70.0, "☺"),
            Zone::Section(Section::Skills) => (45.0, 90.0, "⚙"),
            Zone::Section(Section::Work) => (280.0, 75.0, "◆"),
            Zone::Section(Section::Contact) => (330.0, 80.0, "✉"),
            Zone::Interactive => (15.0, 95.0, "➜"),
            Zone::Default => (220.0, 20.0, "•"),
        };
        ZoneStyle {
            hue,
            saturation,
            glyph,
        }
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub section: Section,
    pub rect: Rect,
}

/// Interactive elements win over sections; among overlapping sections the
/// first registered wins; otherwise `Default`.
pub fn resolve_zone(point: Vec2, regions: &[Region], over_interactive: bool) -> Zone {
    if over_interactive {
        return Zone::Interactive;
    }
    regions
        .iter()
        .find(|r| r.rect.contains(point))
        .map(|r| Zone::Section(r.section))
        .unwrap_or_default()
}
