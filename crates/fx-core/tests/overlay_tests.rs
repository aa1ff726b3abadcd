// Host-side tests for the cursor overlay: visibility, scale smoothing, trail and zones.

mod common;

use common::Recorder;
use fx_core::constants::*;
use fx_core::overlay::{default_satellites, smooth_scale, Trail};
use fx_core::zone::resolve_zone;
use fx_core::{
    CursorOverlay, FxError, ManualClock, OverlayConfig, Rect, Region, Section, Theme, Zone,
};
use glam::Vec2;
use std::f32::consts::TAU;

fn overlay() -> CursorOverlay {
    CursorOverlay::new(OverlayConfig::default(), 1280.0, 800.0, Theme::Dark)
}

fn regions() -> Vec<Region> {
    vec![
        Region {
            section: Section::About,
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
        },
        Region {
            section: Section::Work,
            rect: Rect::new(50.0, 50.0, 100.0, 100.0),
        },
    ]
}

#[test]
fn hidden_until_first_move() {
    let mut o = overlay();
    assert!(!o.is_visible());
    o.pointer_moved(Vec2::new(10.0, 10.0));
    assert!(o.is_visible());
    o.pointer_left();
    assert!(!o.is_visible());
    o.pointer_entered();
    assert!(o.is_visible());
}

#[test]
fn hidden_below_breakpoint() {
    let mut o = overlay();
    o.pointer_moved(Vec2::new(10.0, 10.0));
    o.resize(CURSOR_BREAKPOINT_PX - 1.0, 800.0);
    assert!(!o.is_visible());
    let mut rec = Recorder::default();
    o.draw(&mut rec);
    assert_eq!(rec.clears, 1);
    assert!(rec.discs.is_empty() && rec.circles.is_empty() && rec.glyphs.is_empty());
    o.resize(CURSOR_BREAKPOINT_PX, 800.0);
    assert!(o.is_visible());
}

#[test]
fn visible_draw_paints_ring_dot_icon_and_satellites() {
    let mut o = overlay();
    o.pointer_moved(Vec2::new(200.0, 200.0));
    let mut rec = Recorder::default();
    o.draw(&mut rec);
    assert_eq!(rec.circles.len(), 1);
    assert_eq!(rec.discs.len(), o.trail().len() + 1);
    assert_eq!(rec.glyphs.len(), 1 + default_satellites().len());
    assert_eq!(rec.glyphs[0].0, Zone::Default.style().glyph);
}

#[test]
fn scale_targets_follow_pointer_state() {
    let mut o = overlay();
    assert_eq!(o.target_scale(), SCALE_IDLE);
    o.interactive_entered(1);
    assert_eq!(o.target_scale(), SCALE_HOVER);
    o.pointer_down();
    assert_eq!(o.target_scale(), SCALE_PRESSED, "press outranks hover");
    o.pointer_up();
    o.interactive_left(1);
    assert_eq!(o.target_scale(), SCALE_IDLE);
}

#[test]
fn scale_converges_within_200_frames() {
    let mut o = overlay();
    let mut clock = ManualClock::default();
    o.interactive_entered(1);
    clock.run(&mut o, 200);
    assert!((o.scale() - SCALE_HOVER).abs() < 0.01);
    o.pointer_down();
    clock.run(&mut o, 200);
    assert!((o.scale() - SCALE_PRESSED).abs() < 0.01);
    o.pointer_up();
    o.interactive_left(1);
    clock.run(&mut o, 200);
    assert!((o.scale() - SCALE_IDLE).abs() < 0.01);
    assert_eq!(clock.frames(), 600);
}

#[test]
fn smooth_scale_moves_a_fraction_of_the_gap() {
    assert_eq!(smooth_scale(1.0, 2.0, 0.25), 1.25);
    assert_eq!(smooth_scale(1.5, 1.5, 0.2), 1.5);
    assert_eq!(smooth_scale(1.0, 0.75, 1.0), 0.75);
}

#[test]
fn trail_stays_bounded_and_expires() {
    let mut o = overlay();
    for i in 0..1000 {
        o.pointer_moved(Vec2::new(i as f32, 5.0));
    }
    assert_eq!(o.trail().len(), TRAIL_LENGTH);
    let newest = o.trail().iter().last().map(|p| p.index);
    assert_eq!(newest, Some(999));

    for _ in 0..TRAIL_LIFE - 1 {
        o.step();
    }
    assert!(!o.trail().is_empty());
    o.step();
    assert!(o.trail().is_empty());
}

#[test]
fn trail_vitality_decays() {
    let mut t = Trail::new(4, 10);
    t.push(Vec2::ZERO);
    let first = t.iter().next().copied();
    assert_eq!(first.map(|p| t.vitality(&p)), Some(1.0));
    for _ in 0..5 {
        t.tick();
    }
    let p = t.iter().next().copied();
    assert_eq!(p.map(|p| t.vitality(&p)), Some(0.5));
    assert_eq!(t.capacity(), 4);
}

#[test]
fn leaving_the_window_resets_pointer_state() {
    let mut o = overlay();
    o.pointer_moved(Vec2::new(5.0, 5.0));
    o.pointer_down();
    o.interactive_entered(1);
    o.pointer_left();
    assert!(o.trail().is_empty());
    assert!(!o.pointer().pressed);
    assert!(!o.pointer().over_interactive());
    assert_eq!(o.zone(), Zone::Default);
}

#[test]
fn zone_prefers_interactive_then_first_region() {
    let rs = regions();
    assert_eq!(resolve_zone(Vec2::new(75.0, 75.0), &rs, false), Zone::Section(Section::About));
    assert_eq!(resolve_zone(Vec2::new(140.0, 140.0), &rs, false), Zone::Section(Section::Work));
    assert_eq!(resolve_zone(Vec2::new(75.0, 75.0), &rs, true), Zone::Interactive);
    assert_eq!(resolve_zone(Vec2::new(500.0, 500.0), &rs, false), Zone::Default);
    assert_eq!(resolve_zone(Vec2::new(500.0, 500.0), &[], true), Zone::Interactive);
}

#[test]
fn nested_interactive_elements_stack() {
    let mut o = overlay();
    o.set_regions(regions());
    o.pointer_moved(Vec2::new(20.0, 20.0));
    assert_eq!(o.zone(), Zone::Section(Section::About));
    o.interactive_entered(1);
    o.interactive_entered(2);
    o.interactive_left(2);
    assert_eq!(o.zone(), Zone::Interactive);
    o.interactive_left(1);
    assert_eq!(o.zone(), Zone::Section(Section::About));
    o.interactive_left(1);
    assert!(!o.pointer().over_interactive());
}

#[test]
fn repeated_enter_for_one_element_counts_once() {
    let mut o = overlay();
    o.interactive_entered(7);
    o.interactive_entered(7);
    assert_eq!(o.pointer().hovered(), &[7]);
    o.interactive_left(7);
    assert!(!o.pointer().over_interactive());
}

#[test]
fn removed_element_without_leave_is_pruned() {
    let mut o = overlay();
    o.set_regions(regions());
    o.pointer_moved(Vec2::new(20.0, 20.0));

    // element 1 is hovered, then taken out of the page with no leave event
    o.interactive_entered(1);
    o.interactive_entered(2);
    o.interactive_left(2);
    assert_eq!(o.zone(), Zone::Interactive);

    o.retain_interactive(|id| id != 1);
    o.pointer_moved(Vec2::new(30.0, 30.0));
    assert_eq!(o.zone(), Zone::Section(Section::About));
    assert_eq!(o.target_scale(), SCALE_IDLE);
    assert!(o.pointer().hovered().is_empty());
}

#[test]
fn pruning_keeps_live_hovered_elements() {
    let mut o = overlay();
    o.interactive_entered(3);
    o.interactive_entered(4);
    o.retain_interactive(|id| id == 4);
    assert_eq!(o.pointer().hovered(), &[4]);
    assert_eq!(o.zone(), Zone::Interactive);
}

#[test]
fn moving_between_regions_updates_zone() {
    let mut o = overlay();
    o.set_regions(regions());
    o.pointer_moved(Vec2::new(140.0, 60.0));
    assert_eq!(o.zone(), Zone::Section(Section::Work));
    o.pointer_moved(Vec2::new(900.0, 600.0));
    assert_eq!(o.zone(), Zone::Default);
    o.set_regions(vec![Region {
        section: Section::Contact,
        rect: Rect::new(800.0, 500.0, 200.0, 200.0),
    }]);
    assert_eq!(o.zone(), Zone::Section(Section::Contact));
}

#[test]
fn section_ids_map_to_sections() {
    assert_eq!(Section::from_id("about"), Some(Section::About));
    assert_eq!(Section::from_id("skills"), Some(Section::Skills));
    assert_eq!(Section::from_id("projects"), Some(Section::Work));
    assert_eq!(Section::from_id(" Contact "), Some(Section::Contact));
    assert_eq!(Section::from_id("hero"), Some(Section::Intro));
    assert_eq!(Section::from_id("footer"), None);
}

#[test]
fn every_zone_has_a_distinct_glyph() {
    let mut zones: Vec<Zone> = Section::ALL.iter().map(|s| Zone::Section(*s)).collect();
    zones.push(Zone::Interactive);
    zones.push(Zone::Default);
    let glyphs: Vec<&str> = zones.iter().map(|z| z.style().glyph).collect();
    for (i, g) in glyphs.iter().enumerate() {
        assert!(!g.is_empty());
        assert!(!glyphs[i + 1..].contains(g), "duplicate glyph {g}");
    }
}

#[test]
fn satellites_keep_orbiting() {
    let mut o = overlay();
    o.pointer_moved(Vec2::new(400.0, 400.0));
    let start: Vec<f32> = o.satellites().iter().map(|s| s.angle).collect();
    for _ in 0..500 {
        o.step();
    }
    for (s, a0) in o.satellites().iter().zip(start) {
        assert!(s.angle >= 0.0 && s.angle < TAU);
        assert!(s.angle != a0);
        let d = s.position(Vec2::new(400.0, 400.0), 1.0).distance(Vec2::new(400.0, 400.0));
        assert!((d - s.distance).abs() < 1e-3);
    }
}

#[test]
fn invalid_overlay_config_falls_back() {
    let cfg = OverlayConfig {
        smoothing: 0.0,
        ..OverlayConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(FxError::InvalidConfig {
            field: "smoothing",
            ..
        })
    ));
    let mut o = CursorOverlay::new(cfg, 1280.0, 800.0, Theme::Light);
    o.interactive_entered(1);
    o.step();
    assert!(o.scale() > SCALE_IDLE, "defaults restore a working smoothing factor");
}
