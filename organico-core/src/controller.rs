//! The view controller: state plus the banner dismissal timer.

use std::time::Duration;

use tracing::debug;

use crate::catalog::ItemId;
use crate::state::{ViewEvent, ViewState};
use crate::timer::{DismissToken, ManualClock, Scheduler, TimerHandle};

/// How long the subscribe success banner stays up.
pub const DISMISS_DELAY: Duration = Duration::from_millis(3000);

struct PendingDismiss<H> {
    token: DismissToken,
    handle: H,
}

/// Owns the [`ViewState`] of one mounted page.
///
/// At most one dismissal timer is alive at a time. A second successful
/// subscribe cancels the first timer before scheduling its own, and dropping
/// the controller cancels whatever is still pending.
pub struct ViewController<S: Scheduler> {
    state: ViewState,
    scheduler: S,
    pending: Option<PendingDismiss<S::Handle>>,
    next_token: u64,
}

impl<S: Scheduler> ViewController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: ViewState::default(),
            scheduler,
            pending: None,
            next_token: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Token of the dismissal timer that is currently allowed to hide the
    /// banner, if any.
    pub fn pending_dismissal(&self) -> Option<DismissToken> {
        self.pending.as_ref().map(|pending| pending.token)
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
    }

    pub fn add_to_cart(&mut self, item: ItemId) {
        self.state.add_to_cart(item);
    }

    pub fn update_email_draft(&mut self, text: impl Into<String>) {
        self.state.update_email_draft(text);
    }

    /// Accept the email draft and (re)start the 3 second banner window.
    ///
    /// Empty drafts are ignored and return `false`.
    pub fn subscribe(&mut self) -> bool {
        if !self.state.subscribe() {
            return false;
        }

        if let Some(previous) = self.pending.take() {
            debug!(token = previous.token.0, "cancelling superseded dismissal timer");
            previous.handle.cancel();
        }

        let token = DismissToken(self.next_token);
        self.next_token += 1;
        let handle = self.scheduler.schedule(DISMISS_DELAY, token);
        self.pending = Some(PendingDismiss { token, handle });
        debug!(token = token.0, delay_ms = DISMISS_DELAY.as_millis() as u64, "dismissal scheduled");
        true
    }

    /// Deliver an expired timer. Only the pending token hides the banner.
    pub fn dismiss(&mut self, token: DismissToken) -> bool {
        match &self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.state.hide_banner();
                debug!(token = token.0, "success banner dismissed");
                true
            }
            _ => {
                debug!(token = token.0, "ignoring stale dismissal");
                false
            }
        }
    }

    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ToggleMenu => self.toggle_menu(),
            ViewEvent::AddToCart(item) => self.add_to_cart(item),
            ViewEvent::UpdateEmailDraft(text) => self.update_email_draft(text),
            ViewEvent::Subscribe => {
                self.subscribe();
            }
        }
    }

    /// Tear the view down, cancelling any pending timer.
    pub fn teardown(self) {}
}

impl<S: Scheduler> Drop for ViewController<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(token = pending.token.0, "cancelling dismissal timer on teardown");
            pending.handle.cancel();
        }
    }
}

impl ViewController<ManualClock> {
    /// Advance the virtual clock and deliver every timer that came due.
    /// Returns how many of them hid the banner.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.scheduler.advance(by);
        due.into_iter().filter(|token| self.dismiss(*token)).count()
    }
}
