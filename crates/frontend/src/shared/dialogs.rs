//! Browser dialogs

/// Blocking `window.alert` with the given text.
///
/// Outside a browser window (or if the call fails) the text goes to the log.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("window is not available, alert skipped: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("window.alert failed: {:?}", e);
    }
}
