// Host-side tests for the floating panel manager.

use cosmic_core::{
    ManagerConfig, MemoryStore, NullStore, PanelEvent, PanelManager, PanelSpec, PositionStore,
    Viewport, ZCounter,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

const WIDTH: f32 = 320.0;

fn manager(viewport: Viewport) -> PanelManager {
    PanelManager::new(ManagerConfig::default(), viewport, ZCounter::new(), None)
}

fn stored_manager(store: Rc<MemoryStore>, viewport: Viewport) -> PanelManager {
    PanelManager::new(
        ManagerConfig::default(),
        viewport,
        ZCounter::new(),
        Some(PositionStore::new(store, "hud", "Debug")),
    )
}

fn catalog() -> Vec<PanelSpec> {
    vec![
        PanelSpec::new("perf", "Performance", Vec2::new(20.0, 20.0)).with_slot(1),
        PanelSpec::new("shader", "Shader", Vec2::new(360.0, 20.0))
            .with_width(400.0)
            .with_slot(2),
        PanelSpec::new("console", "Console", Vec2::new(20.0, 400.0)),
    ]
}

fn assert_in_bounds(pos: Vec2, width: f32, viewport: Viewport) {
    let header = ManagerConfig::default().header_height;
    assert!(pos.x >= 0.0 && pos.x <= viewport.width - width, "x out of bounds: {:?}", pos);
    assert!(pos.y >= 0.0 && pos.y <= viewport.height - header, "y out of bounds: {:?}", pos);
}

#[test]
fn drag_moves_by_captured_offset_and_clamps() {
    let vp = Viewport::new(1280.0, 800.0);
    let mut m = manager(vp);
    m.show("a", Vec2::new(100.0, 100.0), WIDTH);

    m.begin_drag("a", Vec2::new(110.0, 105.0));
    assert_eq!(m.update_drag("a", Vec2::new(210.0, 305.0)), Some(Vec2::new(200.0, 300.0)));
    // far past the bottom-right corner
    assert_eq!(m.update_drag("a", Vec2::new(2000.0, 2000.0)), Some(Vec2::new(960.0, 760.0)));
    // past the top-left corner
    assert_eq!(m.update_drag("a", Vec2::new(-50.0, -50.0)), Some(Vec2::ZERO));
    assert_eq!(m.end_drag("a"), Some(Vec2::ZERO));
}

#[test]
fn positions_stay_inside_viewport_for_any_drag_sequence() {
    let viewports = [
        Viewport::new(1280.0, 800.0),
        Viewport::new(1920.0, 1080.0),
        Viewport::new(400.0, 300.0),
        Viewport::new(WIDTH, 40.0),
    ];
    let pointers = [
        Vec2::new(-1000.0, 5.0),
        Vec2::new(50.0, -300.0),
        Vec2::new(5000.0, 5000.0),
        Vec2::new(160.0, 20.0),
        Vec2::new(f32::MAX, f32::MIN),
        Vec2::new(399.0, 299.0),
    ];
    for vp in viewports {
        let mut m = manager(vp);
        m.show("a", Vec2::new(30.0, 30.0), WIDTH);
        assert_in_bounds(m.panel("a").unwrap().position, WIDTH, vp);
        for (i, start) in pointers.iter().enumerate() {
            m.begin_drag("a", *start);
            for p in pointers.iter().cycle().skip(i).take(pointers.len()) {
                if let Some(pos) = m.update_drag("a", *p) {
                    assert_in_bounds(pos, WIDTH, vp);
                }
            }
            m.end_drag("a");
            assert_in_bounds(m.panel("a").unwrap().position, WIDTH, vp);
        }
    }
}

#[test]
fn viewport_narrower_than_panel_pins_to_left_edge() {
    let vp = Viewport::new(200.0, 30.0);
    let mut m = manager(vp);
    let pos = m.show("a", Vec2::new(80.0, 80.0), WIDTH).position;
    assert_eq!(pos, Vec2::ZERO);

    m.begin_drag("a", Vec2::new(10.0, 10.0));
    assert_eq!(m.update_drag("a", Vec2::new(150.0, 25.0)), Some(Vec2::ZERO));
}

#[test]
fn update_drag_is_gated_by_begin_and_end() {
    let mut m = manager(Viewport::default());
    m.show("a", Vec2::new(100.0, 100.0), WIDTH);

    assert_eq!(m.update_drag("a", Vec2::new(500.0, 500.0)), None);
    assert_eq!(m.panel("a").unwrap().position, Vec2::new(100.0, 100.0));
    assert_eq!(m.end_drag("a"), None);

    m.begin_drag("a", Vec2::new(100.0, 100.0));
    assert!(m.is_dragging("a"));
    assert!(m.any_dragging());
    m.update_drag("a", Vec2::new(150.0, 150.0));
    m.end_drag("a");
    assert!(!m.any_dragging());

    assert_eq!(m.update_drag("a", Vec2::new(600.0, 600.0)), None);
    assert_eq!(m.panel("a").unwrap().position, Vec2::new(150.0, 150.0));
}

#[test]
fn dragging_unknown_panel_is_ignored() {
    let z = ZCounter::new();
    let mut m = PanelManager::new(ManagerConfig::default(), Viewport::default(), z.clone(), None);
    let before = z.peek();
    assert_eq!(m.begin_drag("ghost", Vec2::ZERO), None);
    assert_eq!(m.update_drag("ghost", Vec2::ZERO), None);
    assert_eq!(m.end_drag("ghost"), None);
    assert_eq!(z.peek(), before);
}

#[test]
fn most_recently_dragged_panel_is_on_top() {
    let mut m = manager(Viewport::default());
    m.show("a", Vec2::new(0.0, 0.0), WIDTH);
    m.show("b", Vec2::new(50.0, 50.0), WIDTH);
    m.show("c", Vec2::new(90.0, 90.0), WIDTH);

    for id in ["a", "b", "a"] {
        m.begin_drag(id, Vec2::new(10.0, 10.0));
        m.end_drag(id);
    }

    assert_eq!(m.stacking_order(), vec!["c", "b", "a"]);
    let za = m.panel("a").unwrap().z_index;
    let zb = m.panel("b").unwrap().z_index;
    assert!(za > zb);
}

#[test]
fn two_panel_drag_order_a_b_a_leaves_b_then_a() {
    let mut m = manager(Viewport::default());
    // b starts on top
    m.show("a", Vec2::ZERO, WIDTH);
    m.show("b", Vec2::ZERO, WIDTH);
    assert_eq!(m.stacking_order(), vec!["a", "b"]);

    for id in ["a", "b", "a"] {
        m.begin_drag(id, Vec2::ZERO);
        m.end_drag(id);
    }
    assert_eq!(m.stacking_order(), vec!["b", "a"]);
}

#[test]
fn shared_counter_orders_across_managers() {
    let z = ZCounter::new();
    let mut left = PanelManager::new(ManagerConfig::default(), Viewport::default(), z.clone(), None);
    let mut right = PanelManager::new(ManagerConfig::default(), Viewport::default(), z.clone(), None);
    left.show("a", Vec2::ZERO, WIDTH);
    right.show("b", Vec2::ZERO, WIDTH);

    let first = left.begin_drag("a", Vec2::ZERO).unwrap();
    let second = right.begin_drag("b", Vec2::ZERO).unwrap();
    assert!(second > first);

    // an unrelated counter does not see those activations
    let fresh = ZCounter::new();
    assert!(fresh.activate() < first);
}

#[test]
fn show_is_idempotent() {
    let mut m = manager(Viewport::default());
    let first = m.show("a", Vec2::new(10.0, 10.0), WIDTH).clone();
    let again = m.show("a", Vec2::new(500.0, 500.0), WIDTH).clone();
    assert_eq!(first, again);
    assert_eq!(m.len(), 1);
}

#[test]
fn hide_removes_and_reports() {
    let mut m = manager(Viewport::default());
    m.show("a", Vec2::ZERO, WIDTH);
    assert!(m.hide("a"));
    assert!(!m.hide("a"));
    assert!(m.is_empty());
}

#[test]
fn minimize_twice_restores_state_and_keeps_geometry() {
    let mut m = manager(Viewport::default());
    m.show("a", Vec2::new(40.0, 60.0), WIDTH);
    let before = m.panel("a").unwrap().clone();

    assert_eq!(m.toggle_minimize("a"), Some(true));
    assert_eq!(m.toggle_minimize("a"), Some(false));

    let after = m.panel("a").unwrap();
    assert_eq!(after.minimized, before.minimized);
    assert_eq!(after.position, before.position);
    assert_eq!(after.z_index, before.z_index);
    assert_eq!(m.toggle_minimize("missing"), None);
}

#[test]
fn persisted_position_restores_in_fresh_manager() {
    let store = Rc::new(MemoryStore::new());
    PositionStore::new(store.clone(), "hud", "Debug").persist_position("perf", Vec2::new(10.0, 20.0));

    let mut m = stored_manager(store, Viewport::default());
    let pos = m.show("perf", Vec2::new(500.0, 500.0), WIDTH).position;
    assert_eq!(pos, Vec2::new(10.0, 20.0));
}

#[test]
fn drag_end_persists_for_next_mount() {
    let store = Rc::new(MemoryStore::new());
    {
        let mut m = stored_manager(store.clone(), Viewport::default());
        m.show("perf", Vec2::new(100.0, 100.0), WIDTH);
        m.begin_drag("perf", Vec2::new(100.0, 100.0));
        m.update_drag("perf", Vec2::new(300.0, 250.0));
        // nothing written mid-drag
        assert!(store.raw("hud_debug_positions").is_none());
        m.end_drag("perf");
    }
    let mut m = stored_manager(store, Viewport::default());
    assert_eq!(
        m.show("perf", Vec2::ZERO, WIDTH).position,
        Vec2::new(300.0, 250.0)
    );
}

#[test]
fn restore_is_clamped_to_smaller_viewport() {
    let store = Rc::new(MemoryStore::new());
    PositionStore::new(store.clone(), "hud", "Debug")
        .persist_position("perf", Vec2::new(1500.0, 900.0));

    let mut m = stored_manager(store, Viewport::new(1024.0, 600.0));
    let pos = m.show("perf", Vec2::ZERO, WIDTH).position;
    assert_eq!(pos, Vec2::new(1024.0 - WIDTH, 600.0 - 40.0));
}

#[test]
fn other_mode_does_not_see_positions() {
    let store = Rc::new(MemoryStore::new());
    PositionStore::new(store.clone(), "hud", "Debug").persist_position("perf", Vec2::new(10.0, 20.0));

    let mut m = PanelManager::new(
        ManagerConfig::default(),
        Viewport::default(),
        ZCounter::new(),
        Some(PositionStore::new(store, "hud", "Shader")),
    );
    assert_eq!(
        m.show("perf", Vec2::new(70.0, 80.0), WIDTH).position,
        Vec2::new(70.0, 80.0)
    );
}

#[test]
fn broken_storage_never_blocks_dragging() {
    let mut m = PanelManager::new(
        ManagerConfig::default(),
        Viewport::default(),
        ZCounter::new(),
        Some(PositionStore::new(Rc::new(NullStore), "hud", "Debug")),
    );
    m.show("a", Vec2::new(100.0, 100.0), WIDTH);
    m.begin_drag("a", Vec2::new(100.0, 100.0));
    m.update_drag("a", Vec2::new(120.0, 130.0));
    assert_eq!(m.end_drag("a"), Some(Vec2::new(120.0, 130.0)));
}

#[test]
fn resize_reclamps_without_overwriting_persisted() {
    let store = Rc::new(MemoryStore::new());
    let mut m = stored_manager(store.clone(), Viewport::new(1600.0, 1000.0));
    m.show("a", Vec2::ZERO, WIDTH);
    m.move_to("a", Vec2::new(1200.0, 900.0));

    m.set_viewport(Viewport::new(800.0, 600.0));
    assert_eq!(m.panel("a").unwrap().position, Vec2::new(480.0, 560.0));

    let persisted = PositionStore::new(store, "hud", "Debug").get("a");
    assert_eq!(persisted, Some(Vec2::new(1200.0, 900.0)));
}

#[test]
fn catalog_toggle_and_slots() {
    let mut m = manager(Viewport::default()).with_catalog(catalog());
    m.show_initial(["perf", "nope"]);
    assert!(m.is_visible("perf"));
    assert_eq!(m.len(), 1);

    let id = m.spec_for_slot(2).map(|s| s.id.clone()).unwrap();
    assert!(m.toggle(&id));
    assert_eq!(m.panel("shader").unwrap().width, 400.0);
    assert!(!m.toggle(&id));
    assert!(!m.is_visible("shader"));

    // not in the catalog: cannot be shown by toggle
    assert!(!m.toggle("unknown"));
    assert!(m.spec_for_slot(9).is_none());
}

#[test]
fn hide_all_closes_every_panel() {
    let mut m = manager(Viewport::default()).with_catalog(catalog());
    m.show_initial(["perf", "shader", "console"]);
    assert_eq!(m.len(), 3);
    m.hide_all();
    assert!(m.is_empty());
}

#[test]
fn reset_positions_returns_to_defaults() {
    let store = Rc::new(MemoryStore::new());
    let mut m = stored_manager(store.clone(), Viewport::default()).with_catalog(catalog());
    m.show_initial(["perf"]);
    m.move_to("perf", Vec2::new(600.0, 500.0));
    assert!(store.raw("hud_debug_positions").is_some());

    m.reset_positions();
    assert_eq!(m.panel("perf").unwrap().position, Vec2::new(20.0, 20.0));
    assert!(store.raw("hud_debug_positions").is_none());
}

#[test]
fn listener_sees_lifecycle_events() {
    let events: Rc<RefCell<Vec<PanelEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let mut m = manager(Viewport::default());
    m.set_listener(move |ev| sink.borrow_mut().push(ev.clone()));

    m.show("a", Vec2::new(10.0, 10.0), WIDTH);
    let z = m.begin_drag("a", Vec2::new(10.0, 10.0)).unwrap();
    m.update_drag("a", Vec2::new(30.0, 40.0));
    // same spot again: no extra Moved
    m.update_drag("a", Vec2::new(30.0, 40.0));
    m.end_drag("a");
    m.toggle_minimize("a");
    m.hide("a");

    let events = events.borrow();
    assert_eq!(events.len(), 5);
    assert!(matches!(&events[0], PanelEvent::Shown(p) if p.id == "a"));
    assert_eq!(
        events[1],
        PanelEvent::Raised {
            id: "a".into(),
            z_index: z
        }
    );
    assert_eq!(
        events[2],
        PanelEvent::Moved {
            id: "a".into(),
            position: Vec2::new(30.0, 40.0)
        }
    );
    assert_eq!(
        events[3],
        PanelEvent::MinimizeToggled {
            id: "a".into(),
            minimized: true
        }
    );
    assert_eq!(events[4], PanelEvent::Hidden { id: "a".into() });
}
