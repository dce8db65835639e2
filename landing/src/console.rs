//! Greeting for anyone who opens the dev tools.

use wasm_bindgen::JsValue;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn ascii_logo() -> String {
    format!(
        r#"
     .-.
    (   )   O R G A N I C O
     `|`    Pure Nature, Pure Life.
      |     v{VERSION}
"#
    )
}

/// Print the logo and a short note to the browser console.
pub fn greet() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #7C9D8E; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cLooking under the hood? The whole page is Rust and Leptos."),
        &JsValue::from_str("color: #8B7355;"),
    );
}
