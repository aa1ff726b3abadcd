//! Light/dark palettes.
//!
//! The theme only selects colors; it never changes simulation behavior.

use crate::color::Hsla;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse the host's theme signal. Anything other than `"light"` is dark.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                hue_range: (190.0, 290.0),
                saturation: 80.0,
                lightness: 70.0,
                alpha_range: (0.25, 0.6),
                link_alpha: 0.35,
                wave: Hsla::new(220.0, 70.0, 70.0, 0.08),
                glow: 8.0,
                cursor_lightness: 85.0,
            },
            Theme::Light => Palette {
                hue_range: (200.0, 300.0),
                saturation: 70.0,
                lightness: 45.0,
                alpha_range: (0.2, 0.5),
                link_alpha: 0.25,
                wave: Hsla::new(230.0, 60.0, 45.0, 0.06),
                glow: 4.0,
                cursor_lightness: 40.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub hue_range: (f32, f32),
    pub saturation: f32,
    pub lightness: f32,
    pub alpha_range: (f32, f32),
    /// Multiplier applied to a link's `1 - d/L` opacity when drawn.
    pub link_alpha: f32,
    pub wave: Hsla,
    /// Shadow blur (px) used for the particle glow.
    pub glow: f32,
    pub cursor_lightness: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_dark() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse(" Light "), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn palettes_keep_alpha_below_one() {
        for t in [Theme::Light, Theme::Dark] {
            let p = t.palette();
            assert!(p.alpha_range.0 < p.alpha_range.1);
            assert!(p.alpha_range.1 < 1.0);
        }
    }
}
