//! Integration tests for the controller facade.

use multicheck::controller::{MultiCheck, MultiCheckOptions};
use multicheck::events::{EventResult, Key, KeyEvent, Modifiers};
use multicheck::platform::Platform;
use multicheck::surface::InputSurface;
use multicheck::target::{KeyboardTarget, SurfaceRegistry};

fn items() -> Vec<String> {
    (0..=10).map(|i| i.to_string()).collect()
}

fn options() -> MultiCheckOptions {
    MultiCheckOptions {
        platform: Platform::CtrlPrimary,
        ..MultiCheckOptions::default()
    }
}

fn controller(registry: &SurfaceRegistry) -> MultiCheck {
    MultiCheck::new(&items(), options(), registry)
}

fn press_shift(registry: &SurfaceRegistry) {
    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Shift, Modifiers::NONE.shift()));
}

fn release_shift(registry: &SurfaceRegistry) {
    registry
        .window()
        .dispatch(&KeyEvent::up(Key::Shift, Modifiers::NONE));
}

#[test]
fn test_single_check() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    controller.checkbox_props("1").on_change.emit(true);

    assert_eq!(controller.checked_items(), vec!["1".to_string()]);
    assert!(controller.any_checked());
    assert!(!controller.all_checked());
    assert!(controller.checkbox_props("1").checked);
    assert!(!controller.checkbox_props("2").checked);
}

#[test]
fn test_single_uncheck() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    controller.checkbox_props("1").on_change.emit(true);
    controller.checkbox_props("1").on_change.emit(false);

    assert!(controller.checked_items().is_empty());
    assert!(!controller.any_checked());
}

#[test]
fn test_shift_click_extends_range() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    controller.checkbox_props("0").on_change.emit(true);
    press_shift(&registry);
    controller.checkbox_props("6").on_change.emit(true);

    for id in 0..=6 {
        assert!(controller.is_checked(&id.to_string()));
    }
    for id in 7..=10 {
        assert!(!controller.is_checked(&id.to_string()));
    }
}

#[test]
fn test_shift_click_chain_unchecks_from_latest_anchor() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    controller.checkbox_props("0").on_change.emit(true);
    press_shift(&registry);
    controller.checkbox_props("6").on_change.emit(true);
    // Anchor moved to "6"; unchecking "0" clears the whole 0..=6 range.
    controller.checkbox_props("0").on_change.emit(false);

    assert!(!controller.any_checked());
}

#[test]
fn test_shift_release_returns_to_single_toggles() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    controller.checkbox_props("0").on_change.emit(true);
    press_shift(&registry);
    controller.checkbox_props("4").on_change.emit(true);
    release_shift(&registry);
    controller.checkbox_props("8").on_change.emit(true);

    assert!(controller.is_checked("8"));
    assert!(!controller.is_checked("6"));
}

#[test]
fn test_check_all_then_escape() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    controller.check_all();
    assert!(controller.all_checked());

    let result = registry
        .window()
        .dispatch(&KeyEvent::down(Key::Escape, Modifiers::NONE));

    assert_eq!(result, EventResult::Consumed);
    assert!(!controller.any_checked());
}

#[test]
fn test_primary_a_checks_all() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);
    controller.checkbox_props("3").on_change.emit(true);

    let result = registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));

    assert_eq!(result, EventResult::Consumed);
    assert!(controller.all_checked());
}

#[test]
fn test_plain_a_does_nothing() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    let result = registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE));

    assert_eq!(result, EventResult::Ignored);
    assert!(!controller.any_checked());
}

#[test]
fn test_ctrl_shift_a_does_not_fire_select_all() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);

    registry.window().dispatch(&KeyEvent::down(
        Key::Char('a'),
        Modifiers::NONE.ctrl().shift(),
    ));

    assert!(!controller.any_checked());
}

#[test]
fn test_meta_a_checks_all_on_meta_platform() {
    let registry = SurfaceRegistry::new();
    let controller = MultiCheck::new(
        &items(),
        MultiCheckOptions {
            platform: Platform::MetaPrimary,
            ..MultiCheckOptions::default()
        },
        &registry,
    );

    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.meta()));

    assert!(controller.all_checked());
}

#[test]
fn test_selector_target_listens_on_named_surface() {
    let mut registry = SurfaceRegistry::new();
    let table_surface = InputSurface::new();
    registry.register("#table", table_surface.clone()).unwrap();

    let controller = MultiCheck::new(
        &items(),
        MultiCheckOptions {
            keyboard_target: KeyboardTarget::Selector("#table".to_string()),
            platform: Platform::CtrlPrimary,
        },
        &registry,
    );

    // Shortcuts fire on the named surface, not on the window.
    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(!controller.any_checked());

    table_surface.dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(controller.all_checked());
}

#[test]
fn test_surface_target_listens_on_given_handle() {
    let registry = SurfaceRegistry::new();
    let pane = InputSurface::new();
    let controller = MultiCheck::new(
        &items(),
        MultiCheckOptions {
            keyboard_target: KeyboardTarget::Surface(pane.clone()),
            platform: Platform::CtrlPrimary,
        },
        &registry,
    );

    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(!controller.any_checked());

    pane.dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(controller.all_checked());
}

#[test]
fn test_unresolved_selector_disables_keyboard_silently() {
    let registry = SurfaceRegistry::new();
    let controller = MultiCheck::new(
        &items(),
        MultiCheckOptions {
            keyboard_target: KeyboardTarget::Selector("#missing".to_string()),
            platform: Platform::CtrlPrimary,
        },
        &registry,
    );

    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(!controller.any_checked());

    // Everything else still works.
    controller.checkbox_props("1").on_change.emit(true);
    assert!(controller.any_checked());
}

#[test]
fn test_disabled_target() {
    let registry = SurfaceRegistry::new();
    let controller = MultiCheck::new(
        &items(),
        MultiCheckOptions {
            keyboard_target: KeyboardTarget::Disabled,
            platform: Platform::CtrlPrimary,
        },
        &registry,
    );

    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(!controller.any_checked());
}

#[test]
fn test_empty_list_is_all_checked() {
    let registry = SurfaceRegistry::new();
    let empty: Vec<String> = Vec::new();
    let controller = MultiCheck::new(&empty, options(), &registry);

    assert!(controller.all_checked());
    assert!(!controller.any_checked());

    controller.check_all();
    assert!(controller.checked_items().is_empty());
}

#[test]
fn test_set_items_prunes_checked_set() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);
    controller.check_all();

    let shrunk: Vec<String> = (0..=4).map(|i| i.to_string()).collect();
    controller.set_items(&shrunk);

    assert_eq!(controller.checked_items(), shrunk);
    assert!(controller.all_checked());
}

#[test]
fn test_set_keyboard_target_swaps_attachment() {
    let mut registry = SurfaceRegistry::new();
    let pane = InputSurface::new();
    registry.register("#pane", pane.clone()).unwrap();
    let controller = controller(&registry);

    controller.set_keyboard_target(&KeyboardTarget::Selector("#pane".to_string()));

    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(!controller.any_checked());

    pane.dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    assert!(controller.all_checked());
}

#[test]
fn test_set_keyboard_target_same_surface_keeps_listener() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);
    // Tracker + dispatcher both listen on the window.
    assert_eq!(registry.window().listener_count(), 2);

    controller.set_keyboard_target(&KeyboardTarget::Window);
    assert_eq!(registry.window().listener_count(), 2);
}

#[test]
fn test_drop_releases_all_listeners() {
    let registry = SurfaceRegistry::new();
    {
        let _controller = controller(&registry);
        assert_eq!(registry.window().listener_count(), 2);
    }
    assert_eq!(registry.window().listener_count(), 0);
}

#[test]
fn test_independent_controllers_do_not_share_state() {
    let registry = SurfaceRegistry::new();
    let first = controller(&registry);
    let second = controller(&registry);

    first.checkbox_props("1").on_change.emit(true);

    assert!(first.any_checked());
    assert!(!second.any_checked());
}

#[test]
fn test_dirty_flag_tracks_mutations() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);
    controller.clear_dirty();
    assert!(!controller.is_dirty());

    controller.checkbox_props("1").on_change.emit(true);
    assert!(controller.is_dirty());

    controller.clear_dirty();
    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Escape, Modifiers::NONE));
    assert!(controller.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let registry = SurfaceRegistry::new();
    let controller = controller(&registry);
    let clone = controller.clone();

    controller.checkbox_props("5").on_change.emit(true);
    assert!(clone.is_checked("5"));
}
