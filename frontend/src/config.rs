use shared::constants::PRIZE_SOURCE_PATH;
use web_sys::window;

pub fn get_asset_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            // Prize list is served next to the app, so reuse the page origin
            return origin;
        }
    }

    // Default for `trunk serve`
    "http://127.0.0.1:8080".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_asset_base_url(), path)
    }
}

pub fn prize_source_url() -> String {
    get_asset_url(PRIZE_SOURCE_PATH)
}
