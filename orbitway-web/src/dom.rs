use wasm_bindgen::JsValue;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is
/// unavailable.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn window() -> web_sys::Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Entropy for booking references: wall-clock bits mixed with
/// `Math.random` noise in the browser, system time elsewhere.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        (millis << 20) ^ noise
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }
}
