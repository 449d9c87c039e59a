// Host-side tests for parallax offsets and motion helpers.

use cosmic_core::{
    compute_offset, compute_offset_with, float_bob, smooth_toward, ParallaxLayer, ParallaxStyle,
    ParallaxTuning, SceneName, SceneSnapshot,
};
use glam::Vec2;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-3
}

fn snapshot(scene: SceneName, progress: f32, style: ParallaxStyle, pointer: Vec2) -> SceneSnapshot {
    SceneSnapshot {
        scene,
        progress,
        style,
        pointer,
        scene_changed: false,
    }
}

#[test]
fn offset_is_pure() {
    let args = (1.5, ParallaxStyle::Combined, SceneName::CosmicReveal, 0.55, Vec2::new(0.3, -0.7));
    let a = compute_offset(args.0, args.1, args.2, args.3, args.4);
    let b = compute_offset(args.0, args.1, args.2, args.3, args.4);
    assert_eq!(a, b);
}

#[test]
fn three_d_scroll_travel_rises_with_scene_multiplier() {
    let o = compute_offset(1.0, ParallaxStyle::ThreeD, SceneName::Awakening, 0.5, Vec2::ZERO);
    // 0.5 progress * 120px * 0.5 awakening multiplier
    assert!(approx(o, Vec2::new(0.0, -30.0)), "{:?}", o);

    let flight = compute_offset(1.0, ParallaxStyle::ThreeD, SceneName::CosmicFlight, 0.5, Vec2::ZERO);
    assert!(flight.y < o.y);
}

#[test]
fn dripping_moves_down_instead_of_up() {
    let o = compute_offset(1.0, ParallaxStyle::Dripping, SceneName::Awakening, 0.5, Vec2::ZERO);
    assert!(approx(o, Vec2::new(0.0, 30.0)), "{:?}", o);
}

#[test]
fn pointer_intensity_depends_on_style() {
    let pointer = Vec2::new(1.0, 0.0);
    let at = |style| compute_offset(1.0, style, SceneName::Dormant, 0.0, pointer);
    assert!(approx(at(ParallaxStyle::Combined), Vec2::new(-24.0, 0.0)));
    assert!(approx(at(ParallaxStyle::ThreeD), Vec2::new(-19.2, 0.0)));
    assert!(approx(at(ParallaxStyle::Dripping), Vec2::new(-9.6, 0.0)));
}

#[test]
fn tuning_is_overridable() {
    let tuning = ParallaxTuning {
        combined: 0.0,
        three_d: 2.0,
        other: 0.0,
    };
    let o = compute_offset_with(
        &tuning,
        1.0,
        ParallaxStyle::ThreeD,
        SceneName::Dormant,
        0.0,
        Vec2::new(0.0, -1.0),
    );
    assert!(approx(o, Vec2::new(0.0, 48.0)));
}

#[test]
fn zero_factor_and_bad_inputs_give_no_offset() {
    let o = compute_offset(0.0, ParallaxStyle::Combined, SceneName::CosmicFlight, 1.0, Vec2::ONE);
    assert!(approx(o, Vec2::ZERO));
    let o = compute_offset(
        f32::NAN,
        ParallaxStyle::Combined,
        SceneName::CosmicFlight,
        f32::NAN,
        Vec2::new(f32::NAN, 0.0),
    );
    assert!(o.is_finite());
    assert!(approx(o, Vec2::ZERO));
}

#[test]
fn layer_overrides_beat_inherited_values() {
    let snap = snapshot(SceneName::Dormant, 0.5, ParallaxStyle::Dripping, Vec2::ZERO);

    let inherit = ParallaxLayer::new(1.0);
    assert_eq!(inherit.resolve(&snap), (SceneName::Dormant, ParallaxStyle::Dripping));

    let pinned = ParallaxLayer {
        factor: 1.0,
        scene: Some(SceneName::CosmicFlight),
        style: Some(ParallaxStyle::ThreeD),
    };
    assert_eq!(pinned.resolve(&snap), (SceneName::CosmicFlight, ParallaxStyle::ThreeD));

    let expected = compute_offset(1.0, ParallaxStyle::ThreeD, SceneName::CosmicFlight, 0.5, Vec2::ZERO);
    assert_eq!(pinned.offset(&snap, &ParallaxTuning::default()), expected);
}

#[test]
fn smoothing_approaches_target() {
    let target = Vec2::new(100.0, -50.0);
    assert_eq!(smooth_toward(Vec2::ZERO, target, 0.0, 0.2), Vec2::ZERO);

    let mut cur = Vec2::ZERO;
    for _ in 0..240 {
        cur = smooth_toward(cur, target, 1.0 / 60.0, 0.2);
    }
    assert!(approx(cur, target));

    assert_eq!(smooth_toward(Vec2::ZERO, target, 0.016, 0.0), target);
    assert_eq!(smooth_toward(Vec2::new(f32::NAN, 0.0), target, 0.016, 0.2), target);
}

#[test]
fn float_bob_follows_sine() {
    assert!(float_bob(0.0, 6.0, 4.0, 0.0).abs() < 1e-4);
    assert!((float_bob(1.0, 6.0, 4.0, 0.0) - 6.0).abs() < 1e-4);
    assert!((float_bob(3.0, 6.0, 4.0, 0.0) + 6.0).abs() < 1e-4);
    assert_eq!(float_bob(1.0, 6.0, 0.0, 0.0), 0.0);
}
