// Host-side tests for scroll sampling and scene classification.

use cosmic_core::{
    classify, sample_scroll, scroll_progress, ParallaxStyle, SceneName, SceneThresholds,
    ScrollMetrics, ScrollSource,
};

struct FixedScroll(Option<ScrollMetrics>);

impl ScrollSource for FixedScroll {
    fn metrics(&self) -> Option<ScrollMetrics> {
        self.0
    }
}

#[test]
fn classify_known_sequence() {
    let progress = [0.0, 0.19, 0.2, 0.39, 0.4, 0.6, 1.0];
    let scenes: Vec<SceneName> = progress.iter().map(|p| classify(*p)).collect();
    assert_eq!(
        scenes,
        vec![
            SceneName::Dormant,
            SceneName::Dormant,
            SceneName::Awakening,
            SceneName::Awakening,
            SceneName::CosmicReveal,
            SceneName::CosmicFlight,
            SceneName::CosmicFlight,
        ]
    );
}

#[test]
fn classify_is_monotonic_and_pure() {
    let mut prev = classify(0.0);
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        let scene = classify(p);
        assert!(scene.ordinal() >= prev.ordinal(), "went backwards at {}", p);
        assert_eq!(scene, classify(p));
        prev = scene;
    }
    assert_eq!(prev, SceneName::CosmicFlight);
}

#[test]
fn scrolling_back_and_forth_has_no_hysteresis() {
    let down = classify(0.5);
    let up = classify(0.1);
    let back = classify(0.5);
    assert_eq!(down, SceneName::CosmicReveal);
    assert_eq!(up, SceneName::Dormant);
    assert_eq!(down, back);
}

#[test]
fn non_finite_progress_is_dormant() {
    assert_eq!(classify(f32::NAN), SceneName::Dormant);
    assert_eq!(classify(f32::INFINITY), SceneName::Dormant);
}

#[test]
fn custom_thresholds_override_defaults() {
    let t = SceneThresholds::new(0.1, 0.5, 0.9).unwrap();
    assert_eq!(t.classify(0.05), SceneName::Dormant);
    assert_eq!(t.classify(0.1), SceneName::Awakening);
    assert_eq!(t.classify(0.6), SceneName::CosmicReveal);
    assert_eq!(t.classify(0.9), SceneName::CosmicFlight);

    assert_eq!(SceneThresholds::parse(" 0.1, 0.5 ,0.9"), Some(t));
    assert_eq!(SceneThresholds::default().bounds(), [0.2, 0.4, 0.6]);
}

#[test]
fn bad_thresholds_are_rejected() {
    assert!(SceneThresholds::new(0.4, 0.2, 0.6).is_none());
    assert!(SceneThresholds::new(0.2, 0.2, 0.6).is_none());
    assert!(SceneThresholds::new(0.2, 0.4, 1.5).is_none());
    assert!(SceneThresholds::new(f32::NAN, 0.4, 0.6).is_none());
    assert!(SceneThresholds::parse("0.2,0.4").is_none());
    assert!(SceneThresholds::parse("a,b,c").is_none());
}

#[test]
fn names_round_trip_through_markup_strings() {
    for scene in SceneName::ALL {
        assert_eq!(scene.as_str().parse::<SceneName>(), Ok(scene));
    }
    assert_eq!("cosmicreveal".parse::<SceneName>(), Ok(SceneName::CosmicReveal));
    assert!("auto".parse::<SceneName>().is_err());

    assert_eq!("3d".parse::<ParallaxStyle>(), Ok(ParallaxStyle::ThreeD));
    assert_eq!("Dripping".parse::<ParallaxStyle>(), Ok(ParallaxStyle::Dripping));
    assert_eq!("combined".parse::<ParallaxStyle>(), Ok(ParallaxStyle::Combined));
    assert!("flat".parse::<ParallaxStyle>().is_err());
}

#[test]
fn progress_is_fraction_of_scrollable_range() {
    assert_eq!(scroll_progress(0.0, 1800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(500.0, 1800.0, 800.0), 0.5);
    assert_eq!(scroll_progress(1000.0, 1800.0, 800.0), 1.0);
    // overscroll bounce on some platforms
    assert_eq!(scroll_progress(1200.0, 1800.0, 800.0), 1.0);
    assert_eq!(scroll_progress(-40.0, 1800.0, 800.0), 0.0);
}

#[test]
fn progress_never_nan_or_infinite() {
    let cases = [
        (0.0, 800.0, 800.0),
        (10.0, 800.0, 800.0),
        (0.0, 600.0, 800.0),
        (f64::NAN, 1800.0, 800.0),
        (100.0, f64::INFINITY, 800.0),
        (100.0, 1800.0, f64::NAN),
    ];
    for (y, h, vh) in cases {
        let p = scroll_progress(y, h, vh);
        assert!(p.is_finite());
        assert_eq!(p, 0.0, "case {:?}", (y, h, vh));
    }
}

#[test]
fn sample_scroll_defaults_without_platform() {
    assert_eq!(sample_scroll(&FixedScroll(None)), 0.0);
    let metrics = ScrollMetrics {
        scroll_y: 250.0,
        scroll_height: 1800.0,
        viewport_height: 800.0,
    };
    assert_eq!(sample_scroll(&FixedScroll(Some(metrics))), 0.25);
}
