pub mod components;
pub mod config;
pub mod debounce;
mod error;
pub mod guards;
pub mod logging;
pub mod memory;
pub mod platform;
pub mod scroll;
pub mod sniff;
pub mod theme;
pub mod units;
pub mod web;

pub use config::DomkitConfig;
pub use debounce::{debounce, Debounced, DEFAULT_WAIT};
pub use error::DomkitError;
pub use guards::{is_array, is_js_array, is_js_object, is_object};
pub use logging::{dev_log, init_logging};
pub use scroll::{scroll_into_view_by_id, ScrollBehavior};
pub use sniff::{detect_browser, detect_os, Browser, Os};
pub use theme::{ColorScheme, ThemeController, DEFAULT_THEMES, SYSTEM_THEME};
pub use units::ms_to_seconds;
