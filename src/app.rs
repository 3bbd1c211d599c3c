use leptos::prelude::*;

use domkit::components::theme_select::ThemeSelect;
use domkit::{dev_log, ms_to_seconds, web, ScrollBehavior, DEFAULT_WAIT};

#[component]
pub fn App() -> impl IntoView {
    let browser = web::detect_browser().ok().flatten();
    let os = web::detect_os().ok().flatten();

    let (clicks, set_clicks) = signal(0u32);
    let (settled, set_settled) = signal(0u32);

    let debounced = StoredValue::new_local(
        web::debounce(move |count: u32| set_settled.set(count), DEFAULT_WAIT).ok(),
    );

    let on_click = move |_| {
        let count = clicks.get_untracked() + 1;
        set_clicks.set(count);
        dev_log(format!("click #{}", count));
        debounced.with_value(|d| {
            if let Some(d) = d {
                d.call(count);
            }
        });
    };

    let back_to_top = move |_| {
        let _ = web::scroll_into_view_by_id("top", ScrollBehavior::Smooth);
    };

    view! {
        <main class="content" id="top">
            <h2>"domkit"</h2>

            <section class="settings-section">
                <h3>"Theme"</h3>
                <ThemeSelect />
            </section>

            <section class="settings-section">
                <h3>"Environment"</h3>
                <p>"Browser: " {browser.map(|b| b.as_str()).unwrap_or("unknown")}</p>
                <p>"OS: " {os.map(|o| o.as_str()).unwrap_or("unknown")}</p>
            </section>

            <section class="settings-section">
                <h3>"Debounce"</h3>
                <p class="section-description">
                    {format!("Settles {}s after the last click.", ms_to_seconds(DEFAULT_WAIT.as_millis() as f64))}
                </p>
                <button class="btn" on:click=on_click>"Click"</button>
                <p>"Clicks: " {move || clicks.get()} ", settled at: " {move || settled.get()}</p>
            </section>

            <button class="btn" on:click=back_to_top>"Back to top"</button>
        </main>
    }
}
