//! Growth chart: renderer port, configuration and one-time mounting.
//!
//! The page does not own a charting engine. It hands a surface, the series and
//! a [`ChartConfig`] to whatever implements [`ChartRenderer`], exactly once,
//! through [`ChartMount`].
//!
//! ```text
//! ChartMount::mount(renderer, Option<surface>)
//!   ├── surface missing   -> SurfaceMissing (try again later)
//!   ├── already rendered  -> AlreadyMounted
//!   └── renderer.render() -> Rendered | Failed (logged, never propagated)
//! ```

mod layout;
mod svg;

pub use layout::{ChartLayout, PathCommand, PlotArea, Point, ValueScale, svg_path_data};
pub use svg::{SvgChartRenderer, SvgSurface, render_svg};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::SeriesPoint;
use crate::error::ChartError;

/// Brand green used for the series line.
pub const GROWTH_COLOR: &str = "#7C9D8E";

/// How an axis maps data to positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    /// Evenly spaced labels
    Category,
    /// Linear numeric scale
    Value,
}

/// Static chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub x_axis: AxisKind,
    pub y_axis: AxisKind,
    /// Draw cubic curves through the points instead of straight segments
    pub smooth: bool,
    pub color: String,
    pub width: u32,
    pub height: u32,
    /// Attach hover titles to the data points
    pub tooltip: bool,
    /// Always false; the chart is drawn once and left alone
    pub animation: bool,
}

impl ChartConfig {
    /// The configuration of the "Our Growth" section.
    pub fn growth() -> Self {
        Self {
            x_axis: AxisKind::Category,
            y_axis: AxisKind::Value,
            smooth: true,
            color: GROWTH_COLOR.to_string(),
            width: 1200,
            height: 400,
            tooltip: true,
            animation: false,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::growth()
    }
}

/// Draws a line chart into a surface.
pub trait ChartRenderer {
    /// Whatever the renderer draws into (DOM element, SVG buffer, ...)
    type Surface;

    fn render(
        &mut self,
        surface: &mut Self::Surface,
        series: &[SeriesPoint],
        config: &ChartConfig,
    ) -> Result<(), ChartError>;
}

/// Result of a [`ChartMount::mount`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Rendered,
    /// No surface yet; the mount stays armed
    SurfaceMissing,
    AlreadyMounted,
    /// The renderer failed; the view carries on without a chart
    Failed(ChartError),
}

/// Guards the "initialize exactly once, after the surface exists" rule.
#[derive(Debug, Default)]
pub struct ChartMount {
    mounted: bool,
}

impl ChartMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount<R: ChartRenderer>(
        &mut self,
        renderer: &mut R,
        surface: Option<&mut R::Surface>,
        series: &[SeriesPoint],
        config: &ChartConfig,
    ) -> MountOutcome {
        if self.mounted {
            return MountOutcome::AlreadyMounted;
        }
        let Some(surface) = surface else {
            debug!("chart surface not available yet");
            return MountOutcome::SurfaceMissing;
        };

        self.mounted = true;
        match renderer.render(surface, series, config) {
            Ok(()) => {
                debug!(points = series.len(), "chart rendered");
                MountOutcome::Rendered
            }
            Err(err) => {
                warn!(error = %err, "chart render failed");
                MountOutcome::Failed(err)
            }
        }
    }
}
