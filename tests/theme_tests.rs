use std::rc::Rc;

use domkit::memory::{ManualSignal, MemoryRoot, MemoryStore};
use domkit::platform::{ColorSchemeSignal, MarkerSet};
use domkit::{ThemeController, DEFAULT_THEMES};

type Controller = ThemeController<MemoryRoot, MemoryStore, Rc<ManualSignal>>;

struct Page {
    root: Rc<MemoryRoot>,
    store: Rc<MemoryStore>,
    signal: Rc<ManualSignal>,
    controller: Controller,
}

fn page(prefers_dark: bool) -> Page {
    let root = Rc::new(MemoryRoot::new());
    let store = Rc::new(MemoryStore::new());
    let signal = Rc::new(ManualSignal::new(prefers_dark));
    let controller = ThemeController::new(root.clone(), store.clone(), signal.clone());
    Page {
        root,
        store,
        signal,
        controller,
    }
}

fn theme_markers(root: &MemoryRoot) -> usize {
    DEFAULT_THEMES.iter().filter(|t| root.contains(t)).count()
}

#[test]
fn test_explicit_theme_is_persisted_and_marked() {
    for theme in DEFAULT_THEMES {
        let p = page(false);
        p.controller.switch_theme(theme, &DEFAULT_THEMES);

        assert_eq!(p.controller.get_theme().as_deref(), Some(theme));
        assert_eq!(p.root.markers(), vec![theme.to_string()]);
        assert!(!p.controller.is_following_system());
        assert_eq!(p.signal.subscribe_count(), 0);
    }
}

#[test]
fn test_get_theme_is_none_before_any_switch() {
    let p = page(true);
    assert_eq!(p.controller.get_theme(), None);
    assert!(p.root.markers().is_empty());
}

#[test]
fn test_system_theme_resolves_dark() {
    let p = page(true);
    p.controller.switch_system_theme();

    assert_eq!(p.controller.get_theme().as_deref(), Some("dark"));
    assert!(p.root.contains("dark"));
    assert!(p.controller.is_following_system());
}

#[test]
fn test_system_theme_resolves_light() {
    let p = page(false);
    p.controller.switch_theme("system", &DEFAULT_THEMES);

    assert_eq!(p.controller.get_theme().as_deref(), Some("light"));
    assert!(p.root.contains("light"));
}

#[test]
fn test_system_change_reapplies_theme() {
    let p = page(false);
    p.controller.switch_system_theme();

    p.signal.set_prefers_dark(true);
    assert_eq!(p.controller.get_theme().as_deref(), Some("dark"));
    assert_eq!(p.root.markers(), vec!["dark"]);

    p.signal.set_prefers_dark(false);
    assert_eq!(p.controller.get_theme().as_deref(), Some("light"));
    assert_eq!(p.root.markers(), vec!["light"]);
}

#[test]
fn test_explicit_theme_stops_following_system() {
    let p = page(false);
    p.controller.switch_system_theme();
    p.controller.switch_theme("light", &DEFAULT_THEMES);

    p.signal.set_prefers_dark(true);

    assert_eq!(p.controller.get_theme().as_deref(), Some("light"));
    assert_eq!(p.root.markers(), vec!["light"]);
    assert_eq!(p.signal.listener_count(), 0);
    assert!(!p.controller.is_following_system());
}

#[test]
fn test_repeated_system_switches_never_stack_listeners() {
    let p = page(true);

    for _ in 0..5 {
        p.controller.switch_system_theme();
        assert_eq!(p.signal.listener_count(), 1);
        assert!(p.signal.unsubscribe_count() + 1 >= p.signal.subscribe_count());
    }

    assert_eq!(p.signal.subscribe_count(), 5);
    assert_eq!(p.signal.unsubscribe_count(), 4);

    // One change notification means exactly one storage write.
    let writes = p.store.write_count();
    p.signal.set_prefers_dark(false);
    assert_eq!(p.store.write_count(), writes + 1);
}

#[test]
fn test_at_most_one_theme_marker_after_any_call() {
    let p = page(true);
    let sequence = ["dark", "system", "light", "system", "dark", "light"];

    for theme in sequence {
        p.controller.switch_theme(theme, &DEFAULT_THEMES);
        assert_eq!(theme_markers(&p.root), 1, "after switching to '{}'", theme);
        p.signal.set_prefers_dark(!p.signal.prefers_dark());
        assert!(theme_markers(&p.root) <= 1);
    }
}

#[test]
fn test_unrelated_markers_survive_switches() {
    let p = page(false);
    p.root.add("chrome");
    p.root.add("windows");

    p.controller.switch_theme("dark", &DEFAULT_THEMES);
    p.controller.switch_system_theme();

    assert!(p.root.contains("chrome"));
    assert!(p.root.contains("windows"));
    assert!(p.root.contains("light"));
}

#[test]
fn test_empty_theme_changes_nothing() {
    let p = page(true);
    p.controller.switch_system_theme();
    let markers = p.root.markers();
    let theme = p.controller.get_theme();
    let writes = p.store.write_count();

    p.controller.switch_theme("", &DEFAULT_THEMES);

    assert_eq!(p.root.markers(), markers);
    assert_eq!(p.controller.get_theme(), theme);
    assert_eq!(p.store.write_count(), writes);
    // The system subscription is left untouched as well.
    assert!(p.controller.is_following_system());
    assert_eq!(p.signal.unsubscribe_count(), 0);
}

#[test]
fn test_rejected_marker_is_not_persisted() {
    let p = page(false);
    p.controller.switch_theme("dark", &DEFAULT_THEMES);
    let writes = p.store.write_count();

    p.controller.switch_theme("high contrast", &["high contrast", "light", "dark"]);

    assert_eq!(p.controller.get_theme().as_deref(), Some("dark"));
    assert_eq!(p.store.write_count(), writes);
    assert!(p.root.markers().is_empty());
}

#[test]
fn test_custom_allowed_themes_are_stripped() {
    let p = page(false);
    let allowed = ["light", "dark", "solarized"];

    p.controller.switch_theme("solarized", &allowed);
    assert_eq!(p.root.markers(), vec!["solarized"]);

    p.controller.switch_theme("dark", &allowed);
    assert_eq!(p.root.markers(), vec!["dark"]);
    assert_eq!(p.controller.get_theme().as_deref(), Some("dark"));
}
