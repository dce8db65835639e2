//! "Our Growth" section and its chart surface.
//!
//! The section only provides the surface. Who draws into it depends on the
//! host: snapshots pre-render the SVG here, the wasm page mounts a renderer
//! onto the element once it exists.

use leptos::html::Div;
use leptos::prelude::*;
use organico_core::chart::{SvgChartRenderer, SvgSurface};
use organico_core::{ChartConfig, ChartMount, MountOutcome, SeriesPoint, catalog, content};
use tracing::debug;

/// What goes into the chart surface.
#[derive(Clone)]
pub enum ChartSlot {
    /// Inline SVG markup, drawn ahead of time
    Prerendered(String),
    /// Empty element; the host renders into it after mount
    Surface(NodeRef<Div>),
    /// Empty element nobody draws into
    Empty,
}

impl ChartSlot {
    /// Draw the growth series with the SVG renderer. A failed render leaves
    /// the surface empty instead of failing the page.
    pub fn prerender() -> Self {
        Self::prerender_series(catalog::series(), &ChartConfig::growth())
    }

    /// Same as [`ChartSlot::prerender`] for any series and configuration.
    pub fn prerender_series(series: &[SeriesPoint], config: &ChartConfig) -> Self {
        let mut surface = SvgSurface::new(config.width, config.height);
        let outcome = ChartMount::new().mount(
            &mut SvgChartRenderer::default(),
            Some(&mut surface),
            series,
            config,
        );
        match outcome {
            MountOutcome::Rendered => ChartSlot::Prerendered(surface.markup),
            outcome => {
                debug!(?outcome, "chart not prerendered, leaving surface empty");
                ChartSlot::Empty
            }
        }
    }
}

/// "Our Growth" heading and the chart surface.
#[component]
pub fn GrowthChart(chart: ChartSlot) -> impl IntoView {
    let surface = match chart {
        ChartSlot::Prerendered(svg) => {
            view! { <div class="chart-surface" inner_html=svg></div> }.into_any()
        }
        ChartSlot::Surface(node_ref) => {
            view! { <div class="chart-surface" node_ref=node_ref></div> }.into_any()
        }
        ChartSlot::Empty => view! { <div class="chart-surface"></div> }.into_any(),
    };

    view! {
        <section class="section growth">
            <div class="container">
                <h2 class="section-title">{content::GROWTH_TITLE}</h2>
                {surface}
            </div>
        </section>
    }
}
