//! Draws the growth chart into its DOM container.

use organico_core::chart::{SvgChartRenderer, SvgSurface};
use organico_core::{ChartConfig, ChartError, ChartRenderer, SeriesPoint};

/// Renders inline SVG into an element, sized to the element's layout box.
#[derive(Default)]
pub struct DomChartRenderer {
    svg: SvgChartRenderer,
}

impl ChartRenderer for DomChartRenderer {
    type Surface = web_sys::Element;

    fn render(
        &mut self,
        surface: &mut web_sys::Element,
        series: &[SeriesPoint],
        config: &ChartConfig,
    ) -> Result<(), ChartError> {
        // Not laid out yet (or hidden): fall back to the configured size
        let width = u32::try_from(surface.client_width())
            .ok()
            .filter(|w| *w > 0)
            .unwrap_or(config.width);
        let height = u32::try_from(surface.client_height())
            .ok()
            .filter(|h| *h > 0)
            .unwrap_or(config.height);

        let mut svg = SvgSurface::new(width, height);
        self.svg.render(&mut svg, series, config)?;
        surface.set_inner_html(&svg.markup);
        Ok(())
    }
}
