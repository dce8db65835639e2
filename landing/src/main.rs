// Organico Landing Page - Leptos 0.8 CSR
// Developed by The Organico Team (c)2025

mod chart;
mod console;
mod scheduler;

use chart::DomChartRenderer;
use leptos::html::Div;
use leptos::prelude::*;
use organico_core::{ChartConfig, ChartMount, DismissToken, ViewController, ViewEvent, ViewState, catalog};
use organico_storefront::styles::PAGE_CSS;
use organico_storefront::{ChartSlot, Storefront, StorefrontPage};
use scheduler::BrowserScheduler;

fn main() {
    console_error_panic_hook::set_once();
    console::greet();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    let controller: StoredValue<Option<ViewController<BrowserScheduler>>, LocalStorage> =
        StoredValue::new_local(None);

    // Expired banner timers come back here with their token
    let on_expire = Callback::new(move |token: DismissToken| {
        controller.update_value(|slot| {
            if let Some(view) = slot {
                if view.dismiss(token) {
                    state.set(view.state().clone());
                }
            }
        });
    });
    controller.set_value(Some(ViewController::new(BrowserScheduler::new(on_expire))));

    let dispatch = Callback::new(move |event: ViewEvent| {
        controller.update_value(|slot| {
            if let Some(view) = slot {
                view.apply(event);
                state.set(view.state().clone());
            }
        });
    });

    // The chart is drawn once, as soon as its container exists
    let surface = NodeRef::<Div>::new();
    let chart_mount = StoredValue::new_local(ChartMount::new());
    Effect::new(move || {
        let mut element: Option<web_sys::Element> = surface.get().map(Into::into);
        chart_mount.update_value(|mount| {
            mount.mount(
                &mut DomChartRenderer::default(),
                element.as_mut(),
                catalog::series(),
                &ChartConfig::growth(),
            );
        });
    });

    on_cleanup(move || {
        controller.update_value(|slot| {
            if let Some(view) = slot.take() {
                view.teardown();
            }
        });
    });

    let storefront = Storefront::new(state, dispatch);

    view! {
        <style>{PAGE_CSS}</style>
        <StorefrontPage storefront=storefront chart=ChartSlot::Surface(surface) />
    }
}
