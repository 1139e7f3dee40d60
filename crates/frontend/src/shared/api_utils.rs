//! Helpers for locating the sales API from the browser.

/// Port the sales API listens on
pub const API_PORT: u16 = 5000;

/// Get the base URL for API requests
///
/// Built from the current window location: same protocol and host, port
/// [`API_PORT`], path `/api`. Returns an empty string outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    api_base_for(&protocol, &hostname)
}

fn api_base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}/api", protocol, hostname, API_PORT)
}
