//! Navigation seam. The session controller asks for in-app navigation after a
//! successful resolution, while the HTTP client performs hard navigation when a
//! credential is rejected so every piece of in-memory state is dropped.

use tracing::debug;

pub trait Navigator {
    /// Path component of the current location.
    fn current_path(&self) -> String;

    /// Client-side navigation that keeps the application alive.
    fn navigate(&self, path: &str);

    /// Full page load of `path`.
    fn hard_navigate(&self, path: &str);
}

/// Navigator backed by `window.location`. Without a browser it reports `/` and
/// ignores navigation requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        location_path().unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, path: &str) {
        self.hard_navigate(path);
    }

    fn hard_navigate(&self, path: &str) {
        debug!(path, "hard navigation");
        assign_location(path);
    }
}

#[cfg(target_arch = "wasm32")]
fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn location_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn assign_location(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        tracing::warn!(?err, "failed to change location");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn assign_location(_path: &str) {}
