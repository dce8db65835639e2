//! Pixel geometry for the line chart: plot area, value scale, point
//! placement and the smoothed path.

use std::fmt::Write as _;

use super::ChartConfig;
use crate::catalog::SeriesPoint;
use crate::error::ChartError;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Target number of intervals on the value axis.
const VALUE_SPLITS: u32 = 5;

/// Curve tension; 0.5 gives a gentle bend without visible overshoot.
const TENSION: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Inner rectangle the series is drawn in, excluding axis gutters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        const EPS: f64 = 1e-9;
        point.x >= self.left - EPS
            && point.x <= self.right() + EPS
            && point.y >= self.top - EPS
            && point.y <= self.bottom() + EPS
    }
}

/// Linear value axis with round tick steps. Always includes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueScale {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl ValueScale {
    /// Round `lo..=hi` out to a range of whole steps that includes zero.
    ///
    /// Works on the full `i64` range; bounds that would fall outside it are
    /// clamped to `i64::MIN`/`i64::MAX`.
    pub fn nice(lo: i64, hi: i64, splits: u32) -> Self {
        let lo = i128::from(lo.min(0));
        let mut hi = i128::from(hi.max(0));
        if hi == lo {
            hi = lo + 1;
        }

        let raw = (hi - lo) as f64 / f64::from(splits.max(1));
        let magnitude = 10f64.powf(raw.log10().floor());
        let residual = raw / magnitude;
        let nice = if residual < 1.5 {
            1.0
        } else if residual < 3.0 {
            2.0
        } else if residual < 7.0 {
            5.0
        } else {
            10.0
        };
        let step = ((nice * magnitude).round() as i128).max(1);

        let min = lo.div_euclid(step) * step;
        let max = -((-hi).div_euclid(step)) * step;
        Self {
            min: i64::try_from(min).unwrap_or(i64::MIN),
            max: i64::try_from(max).unwrap_or(i64::MAX),
            step: i64::try_from(step).unwrap_or(i64::MAX),
        }
    }

    pub fn ticks(&self) -> Vec<i64> {
        (0..)
            .map_while(|i| self.step.checked_mul(i).and_then(|offset| self.min.checked_add(offset)))
            .take_while(|tick| *tick <= self.max)
            .collect()
    }

    /// Position of `value` in `0.0..=1.0`, bottom to top.
    pub fn fraction(&self, value: i64) -> f64 {
        (value as f64 - self.min as f64) / (self.max as f64 - self.min as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// Series mapped into pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub scale: ValueScale,
    pub points: Vec<Point>,
    /// Category label and the x coordinate of its band center
    pub labels: Vec<(&'static str, f64)>,
}

impl ChartLayout {
    pub fn compute(series: &[SeriesPoint], config: &ChartConfig) -> Result<Self, ChartError> {
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let width = f64::from(config.width);
        let height = f64::from(config.height);
        if width <= MARGIN_LEFT + MARGIN_RIGHT || height <= MARGIN_TOP + MARGIN_BOTTOM {
            return Err(ChartError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let plot = PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: width - MARGIN_LEFT - MARGIN_RIGHT,
            height: height - MARGIN_TOP - MARGIN_BOTTOM,
        };

        let lo = series.iter().map(|point| point.value).min().unwrap_or(0);
        let hi = series.iter().map(|point| point.value).max().unwrap_or(0);
        let scale = ValueScale::nice(lo, hi, VALUE_SPLITS);

        let band = plot.width / series.len() as f64;
        let mut points = Vec::with_capacity(series.len());
        let mut labels = Vec::with_capacity(series.len());
        for (i, point) in series.iter().enumerate() {
            let x = plot.left + band * (i as f64 + 0.5);
            let y = plot.top + plot.height * (1.0 - scale.fraction(point.value));
            points.push(Point { x, y });
            labels.push((point.label, x));
        }

        Ok(Self {
            plot,
            scale,
            points,
            labels,
        })
    }

    /// Vertical pixel position of a value on the axis.
    pub fn y_for(&self, value: i64) -> f64 {
        self.plot.top + self.plot.height * (1.0 - self.scale.fraction(value))
    }

    pub fn path(&self, smooth: bool) -> Vec<PathCommand> {
        let pts = &self.points;
        let mut commands = Vec::with_capacity(pts.len());
        let Some(first) = pts.first() else {
            return commands;
        };
        commands.push(PathCommand::MoveTo(*first));

        if !smooth {
            commands.extend(pts.iter().skip(1).copied().map(PathCommand::LineTo));
            return commands;
        }

        let k = TENSION / 3.0;
        let last = pts.len() - 1;
        for i in 0..last {
            let p0 = pts[i.saturating_sub(1)];
            let p1 = pts[i];
            let p2 = pts[i + 1];
            let p3 = pts[(i + 2).min(last)];

            // Keep control points inside the segment's vertical band so the
            // curve never dips below or above its two endpoints.
            let lo = p1.y.min(p2.y);
            let hi = p1.y.max(p2.y);
            let c1 = Point {
                x: p1.x + (p2.x - p0.x) * k,
                y: (p1.y + (p2.y - p0.y) * k).clamp(lo, hi),
            };
            let c2 = Point {
                x: p2.x - (p3.x - p1.x) * k,
                y: (p2.y - (p3.y - p1.y) * k).clamp(lo, hi),
            };
            commands.push(PathCommand::CubicTo { c1, c2, to: p2 });
        }
        commands
    }
}

/// Serialize path commands as an SVG `d` attribute.
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match command {
            PathCommand::MoveTo(p) => write!(d, "M{:.1},{:.1}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L{:.1},{:.1}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => write!(
                d,
                "C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
                c1.x, c1.y, c2.x, c2.y, to.x, to.y
            ),
        };
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::series;
    use pretty_assertions::assert_eq;

    #[test]
    fn growth_series_scale_is_zero_to_1400() {
        let scale = ValueScale::nice(820, 1330, VALUE_SPLITS);
        assert_eq!(scale, ValueScale { min: 0, max: 1400, step: 200 });
        assert_eq!(scale.ticks(), vec![0, 200, 400, 600, 800, 1000, 1200, 1400]);
    }

    #[test]
    fn flat_zero_series_still_has_a_range() {
        let scale = ValueScale::nice(0, 0, VALUE_SPLITS);
        assert!(scale.max > scale.min);
        assert_eq!(scale.fraction(0), 0.0);
    }

    #[test]
    fn negative_values_extend_below_zero() {
        let scale = ValueScale::nice(-120, 480, VALUE_SPLITS);
        assert!(scale.min <= -120);
        assert!(scale.max >= 480);
        assert!(scale.ticks().contains(&0));
    }

    #[test]
    fn points_sit_on_band_centers() {
        let layout = ChartLayout::compute(series(), &ChartConfig::growth()).unwrap();
        assert_eq!(layout.points.len(), 6);
        let band = layout.plot.width / 6.0;
        assert!((layout.points[0].x - (layout.plot.left + band / 2.0)).abs() < 1e-9);
        // Higher values are drawn higher up (smaller y).
        assert!(layout.points[5].y < layout.points[0].y);
        assert_eq!(layout.labels[3].0, "Apr");
    }

    #[test]
    fn smoothed_path_stays_inside_plot() {
        let layout = ChartLayout::compute(series(), &ChartConfig::growth()).unwrap();
        let path = layout.path(true);
        assert_eq!(path.len(), 6);
        assert!(matches!(path[0], PathCommand::MoveTo(_)));
        for command in &path {
            let points = match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![*p],
                PathCommand::CubicTo { c1, c2, to } => vec![*c1, *c2, *to],
            };
            for point in points {
                assert!(layout.plot.contains(point), "{point:?} escapes plot");
            }
        }
    }

    #[test]
    fn straight_path_uses_line_segments() {
        let layout = ChartLayout::compute(series(), &ChartConfig::growth()).unwrap();
        let path = layout.path(false);
        assert_eq!(
            path.iter().filter(|c| matches!(c, PathCommand::LineTo(_))).count(),
            5
        );
        assert!(svg_path_data(&path).starts_with('M'));
    }

    #[test]
    fn rejects_empty_series_and_tiny_surfaces() {
        let config = ChartConfig::growth();
        assert_eq!(ChartLayout::compute(&[], &config), Err(ChartError::EmptySeries));
        assert_eq!(
            ChartLayout::compute(series(), &config.clone().with_size(40, 40)),
            Err(ChartError::InvalidDimensions { width: 40, height: 40 })
        );
    }

    #[test]
    fn single_point_path_is_just_a_move() {
        let one = [SeriesPoint { label: "Jan", value: 5 }];
        let layout = ChartLayout::compute(&one, &ChartConfig::growth()).unwrap();
        assert_eq!(layout.path(true).len(), 1);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let scale = ValueScale::nice(i64::MIN, i64::MAX, 5);
        assert_eq!(scale.min, i64::MIN);
        assert_eq!(scale.max, i64::MAX);
        assert!(scale.step > 0);
        assert!(!scale.ticks().is_empty());
        assert!((0.0..=1.0).contains(&scale.fraction(0)));

        let extreme = [
            SeriesPoint { label: "Lo", value: i64::MIN },
            SeriesPoint { label: "Hi", value: i64::MAX },
        ];
        let layout = ChartLayout::compute(&extreme, &ChartConfig::growth()).unwrap();
        for point in &layout.points {
            assert!(layout.plot.contains(*point), "{point:?} outside plot");
        }
    }
}
