//! Browser timers for the subscribe banner.

use std::time::Duration;

use leptos::prelude::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use organico_core::{DismissToken, Scheduler, TimerHandle};
use wasm_bindgen::JsValue;

/// Schedules dismissals with `setTimeout`; expiry hands the token to
/// `on_expire`.
pub struct BrowserScheduler {
    on_expire: Callback<DismissToken>,
}

impl BrowserScheduler {
    pub fn new(on_expire: Callback<DismissToken>) -> Self {
        Self { on_expire }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&mut self, delay: Duration, token: DismissToken) -> BrowserTimer {
        let on_expire = self.on_expire;
        match set_timeout_with_handle(move || on_expire.run(token), delay) {
            Ok(handle) => BrowserTimer(Some(handle)),
            Err(err) => {
                // Banner stays up until the next subscribe
                web_sys::console::warn_2(&JsValue::from_str("[organico] setTimeout failed:"), &err);
                BrowserTimer(None)
            }
        }
    }
}

/// A pending `setTimeout`, cleared on cancel.
pub struct BrowserTimer(Option<TimeoutHandle>);

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}
