//! Handle shared by the interactive sections of the page.

use leptos::prelude::*;
use organico_core::{ViewEvent, ViewState};

/// Read access to the current [`ViewState`] plus a way to send interactions.
///
/// `Copy`, so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct Storefront {
    /// Current view state
    pub state: Signal<ViewState>,
    /// Receives every user interaction
    pub dispatch: Callback<ViewEvent>,
}

impl Storefront {
    /// Wire components to a live state signal and event sink.
    pub fn new(state: impl Into<Signal<ViewState>>, dispatch: Callback<ViewEvent>) -> Self {
        Self {
            state: state.into(),
            dispatch,
        }
    }

    /// A frozen view of `state`; interactions are dropped.
    pub fn snapshot(state: ViewState) -> Self {
        Self {
            state: Signal::derive(move || state.clone()),
            dispatch: Callback::new(|_event: ViewEvent| {}),
        }
    }

    /// Project a value out of the current state (tracked).
    pub fn read<T>(&self, f: impl FnOnce(&ViewState) -> T) -> T {
        self.state.with(f)
    }

    /// Send an interaction to the controller.
    pub fn send(&self, event: ViewEvent) {
        self.dispatch.run(event);
    }
}
