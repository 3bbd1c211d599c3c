mod app;

use app::App;
use domkit::DomkitConfig;

fn main() {
    let config = DomkitConfig::default();
    if let Err(e) = domkit::init_logging(&config.log_filter) {
        web_sys::console::error_1(&e.to_string().into());
    }
    leptos::mount::mount_to_body(App);
}
