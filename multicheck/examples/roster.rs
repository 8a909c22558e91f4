//! Roster selection example
//!
//! Drives a [`MultiCheck`] controller from synthetic key events:
//! - Single checkbox toggles
//! - Shift-click range extension (and chained ranges)
//! - Keyboard shortcuts: primary-modifier + `a` to check all, Escape to clear

use log::LevelFilter;
use multicheck::prelude::*;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn print_state(label: &str, roster: &[String], controller: &MultiCheck) {
    let rows: Vec<String> = roster
        .iter()
        .map(|id| {
            let props = controller.checkbox_props(id);
            let mark = if props.checked { 'x' } else { ' ' };
            format!("[{mark}] {id}")
        })
        .collect();
    println!(
        "{label}\n  {}\n  any={} all={} checked={:?}",
        rows.join("  "),
        controller.any_checked(),
        controller.all_checked(),
        controller.checked_items(),
    );
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let roster: Vec<String> = ["ada", "brandon", "casey", "dev", "erin", "farid"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    let registry = SurfaceRegistry::new();
    let controller = MultiCheck::new(
        &roster,
        MultiCheckOptions {
            platform: Platform::CtrlPrimary,
            ..MultiCheckOptions::default()
        },
        &registry,
    );

    print_state("initial", &roster, &controller);

    controller.checkbox_props("ada").on_change.emit(true);
    print_state("click ada", &roster, &controller);

    // Hold shift and click erin: the whole ada..erin range checks.
    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Shift, Modifiers::NONE.shift()));
    controller.checkbox_props("erin").on_change.emit(true);
    print_state("shift-click erin", &roster, &controller);

    // Still holding shift, uncheck casey: ranges from erin back to casey.
    controller.checkbox_props("casey").on_change.emit(false);
    print_state("shift-click casey (uncheck)", &roster, &controller);

    registry
        .window()
        .dispatch(&KeyEvent::up(Key::Shift, Modifiers::NONE));

    // Keyboard shortcuts land on the window surface.
    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Char('a'), Modifiers::NONE.ctrl()));
    print_state("ctrl+a", &roster, &controller);

    registry
        .window()
        .dispatch(&KeyEvent::down(Key::Escape, Modifiers::NONE));
    print_state("escape", &roster, &controller);
}
