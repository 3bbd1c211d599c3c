use leptos::prelude::*;
use tracing::warn;

use crate::config::DomkitConfig;
use crate::theme::{DEFAULT_THEMES, SYSTEM_THEME};
use crate::web;

const THEME_OPTIONS: [(&str, &str); 3] = [
    (SYSTEM_THEME, "System"),
    ("light", "Light"),
    ("dark", "Dark"),
];

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// Theme picker bound to `<html>` classes and `localStorage`.
/// Provides a `ThemeContext` so other components can switch themes too.
///
/// Only the resolved theme is stored, never "system". A user who picked
/// "System" reloads into the stored "light" or "dark" and no longer follows
/// the OS until "System" is picked again.
#[component]
pub fn ThemeSelect(
    /// Storage key and media query; defaults apply when omitted
    #[prop(optional)]
    config: Option<DomkitConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let controller = match web::theme_controller(&config) {
        Ok(controller) => Some(controller),
        Err(e) => {
            warn!("Theme switching disabled: {}", e);
            None
        }
    };

    // The stored value is always a concrete theme, so a fresh page starts on "system".
    let initial = controller
        .as_ref()
        .and_then(|c| c.get_theme())
        .unwrap_or_else(|| SYSTEM_THEME.to_string());

    let controller = StoredValue::new_local(controller);
    let (theme, set_theme) = signal(initial);
    provide_context(ThemeContext { theme, set_theme });

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        let t = theme.get();
        controller.with_value(|c| {
            if let Some(c) = c {
                c.switch_theme(&t, &DEFAULT_THEMES);
            }
        });
    });

    view! {
        <select
            class="theme-select"
            on:change=move |ev| set_theme.set(event_target_value(&ev))
        >
            {THEME_OPTIONS.iter().map(|&(value, label)| {
                view! {
                    <option value=value selected=move || theme.get() == value>
                        {label}
                    </option>
                }
            }).collect::<Vec<_>>()}
        </select>
    }
}
