//! SVG line chart renderer.

use std::fmt::Write as _;

use super::layout::{ChartLayout, svg_path_data};
use super::{ChartConfig, ChartRenderer};
use crate::catalog::SeriesPoint;
use crate::error::ChartError;

/// In-memory SVG drawing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgSurface {
    pub width: u32,
    pub height: u32,
    /// Rendered `<svg>` element, empty until drawn
    pub markup: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            markup: String::new(),
        }
    }
}

/// Draws the growth chart as a standalone `<svg>` element.
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    pub grid_color: &'static str,
    pub axis_color: &'static str,
    pub label_color: &'static str,
    pub font_family: &'static str,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self {
            grid_color: "#E5E7EB",
            axis_color: "#9CA3AF",
            label_color: "#6B7280",
            font_family: "system-ui, -apple-system, sans-serif",
        }
    }
}

impl ChartRenderer for SvgChartRenderer {
    type Surface = SvgSurface;

    fn render(
        &mut self,
        surface: &mut SvgSurface,
        series: &[SeriesPoint],
        config: &ChartConfig,
    ) -> Result<(), ChartError> {
        let sized = config.clone().with_size(surface.width, surface.height);
        let layout = ChartLayout::compute(series, &sized)?;
        surface.markup = self.draw(&layout, series, &sized);
        Ok(())
    }
}

impl SvgChartRenderer {
    fn draw(&self, layout: &ChartLayout, series: &[SeriesPoint], config: &ChartConfig) -> String {
        let plot = layout.plot;
        let mut svg = String::with_capacity(4096);

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="growth-chart" viewBox="0 0 {w} {h}" width="100%" height="100%" preserveAspectRatio="xMidYMid meet" font-family="{font}" font-size="12">"#,
            w = config.width,
            h = config.height,
            font = self.font_family,
        );

        // Horizontal grid with value labels
        svg.push_str(r#"<g class="chart-grid">"#);
        for tick in layout.scale.ticks() {
            let y = layout.y_for(tick);
            let _ = write!(
                svg,
                r#"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{grid}" stroke-width="1"/><text x="{tx:.1}" y="{ty:.1}" text-anchor="end" fill="{label}">{tick}</text>"#,
                x1 = plot.left,
                x2 = plot.right(),
                grid = self.grid_color,
                tx = plot.left - 8.0,
                ty = y + 4.0,
                label = self.label_color,
            );
        }
        svg.push_str("</g>");

        // Category axis
        let _ = write!(
            svg,
            r#"<line class="chart-axis" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{axis}" stroke-width="1"/>"#,
            x1 = plot.left,
            x2 = plot.right(),
            y = plot.bottom(),
            axis = self.axis_color,
        );
        svg.push_str(r#"<g class="chart-categories">"#);
        for (label, x) in &layout.labels {
            let _ = write!(
                svg,
                r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="{fill}">{text}</text>"#,
                y = plot.bottom() + 22.0,
                fill = self.label_color,
                text = escape_xml(label),
            );
        }
        svg.push_str("</g>");

        let _ = write!(
            svg,
            r#"<path class="chart-line" d="{d}" fill="none" stroke="{color}" stroke-width="2.5" stroke-linejoin="round" stroke-linecap="round"/>"#,
            d = svg_path_data(&layout.path(config.smooth)),
            color = escape_xml(&config.color),
        );

        svg.push_str(r#"<g class="chart-points">"#);
        for (point, datum) in layout.points.iter().zip(series) {
            let _ = write!(
                svg,
                r##"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="#FFFFFF" stroke="{color}" stroke-width="2">"##,
                x = point.x,
                y = point.y,
                color = escape_xml(&config.color),
            );
            if config.tooltip {
                let _ = write!(svg, "<title>{}: {}</title>", escape_xml(datum.label), datum.value);
            }
            svg.push_str("</circle>");
        }
        svg.push_str("</g></svg>");
        svg
    }
}

/// Render the series straight to an SVG string at the configured size.
pub fn render_svg(series: &[SeriesPoint], config: &ChartConfig) -> Result<String, ChartError> {
    let mut surface = SvgSurface::new(config.width, config.height);
    SvgChartRenderer::default().render(&mut surface, series, config)?;
    Ok(surface.markup)
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::series;

    #[test]
    fn draws_all_labels_and_points() {
        let svg = render_svg(series(), &ChartConfig::growth()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        for label in ["Jan", "Feb", "Mar", "Apr", "May", "Jun"] {
            assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
        }
        assert_eq!(svg.matches("<circle").count(), 6);
        assert!(svg.contains("<title>May: 1290</title>"));
        assert!(svg.contains(">1400</text>"));
        assert!(svg.contains(r##"stroke="#7C9D8E""##));
    }

    #[test]
    fn smooth_config_emits_curves() {
        let svg = render_svg(series(), &ChartConfig::growth()).unwrap();
        assert!(svg.contains(" C"));

        let straight = ChartConfig {
            smooth: false,
            ..ChartConfig::growth()
        };
        let svg = render_svg(series(), &straight).unwrap();
        assert!(!svg.contains(" C"));
        assert!(svg.contains(" L"));
    }

    #[test]
    fn surface_size_drives_viewbox() {
        let mut surface = SvgSurface::new(640, 320);
        SvgChartRenderer::default()
            .render(&mut surface, series(), &ChartConfig::growth())
            .unwrap();
        assert!(surface.markup.contains(r#"viewBox="0 0 640 320""#));
    }

    #[test]
    fn escapes_markup_in_labels() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn tooltip_can_be_disabled() {
        let config = ChartConfig {
            tooltip: false,
            ..ChartConfig::growth()
        };
        let svg = render_svg(series(), &config).unwrap();
        assert!(!svg.contains("<title>"));
    }
}
