//! Chart description.
//!
//! A [`Chart`] is a plain value describing one figure: titles, axes, and the
//! series to draw. Building it does no drawing; [`crate::render`] paints it.

use crate::histogram::Histogram;

/// Dots per inch used to turn a [`FigureSize`] into window pixels.
pub const DEFAULT_DPI: f32 = 100.0;

/// Fraction of the data span added on each side of the plot area.
const AXIS_MARGIN: f64 = 0.05;
/// Days shown either side of a date axis holding a single date
const SINGLE_DATE_PAD_DAYS: f64 = 1.0;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub const WIDE: FigureSize = FigureSize { width: 14.0, height: 7.0 };
    pub const SQUARE: FigureSize = FigureSize { width: 8.0, height: 6.0 };

    pub fn to_pixels(self, dpi: f32) -> [f32; 2] {
        [self.width * dpi, self.height * dpi]
    }
}

/// How x values are interpreted when labelling ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Numeric,
    /// x values are days since 0001-01-01 (chrono's `num_days_from_ce`).
    Date,
}

/// Color of a series, resolved against the active theme when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    /// Position in the theme's color cycle.
    Cycle(usize),
}

/// Outline drawn around histogram bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEdge {
    None,
    Black,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Connected line; a `None` point breaks the line.
    Line {
        label: Option<String>,
        points: Vec<Option<[f64; 2]>>,
        alpha: f32,
        color: SeriesColor,
    },
    Scatter {
        label: Option<String>,
        points: Vec<[f64; 2]>,
        alpha: f32,
        color: SeriesColor,
    },
    Bars {
        label: Option<String>,
        histogram: Histogram,
        alpha: f32,
        color: SeriesColor,
        edge: BarEdge,
    },
}

impl Series {
    pub fn label(&self) -> Option<&str> {
        match self {
            Series::Line { label, .. } | Series::Scatter { label, .. } | Series::Bars { label, .. } => {
                label.as_deref()
            }
        }
    }

    pub fn color(&self) -> SeriesColor {
        match self {
            Series::Line { color, .. } | Series::Scatter { color, .. } | Series::Bars { color, .. } => *color,
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Series::Line { alpha, .. } | Series::Scatter { alpha, .. } | Series::Bars { alpha, .. } => *alpha,
        }
    }

    /// Contiguous runs of a line series, split at missing points.
    pub fn line_segments(points: &[Option<[f64; 2]>]) -> Vec<Vec<[f64; 2]>> {
        points
            .split(|p| p.is_none())
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().flatten().copied().collect())
            .collect()
    }

    /// Raw extent of the drawable data, `[x_min, x_max, y_min, y_max]`.
    fn extent(&self) -> Option<[f64; 4]> {
        let mut ext: Option<[f64; 4]> = None;
        let mut add = |x: f64, y: f64| {
            ext = Some(match ext {
                None => [x, x, y, y],
                Some([x0, x1, y0, y1]) => [x0.min(x), x1.max(x), y0.min(y), y1.max(y)],
            });
        };

        match self {
            Series::Line { points, .. } => points.iter().flatten().for_each(|p| add(p[0], p[1])),
            Series::Scatter { points, .. } => points.iter().for_each(|p| add(p[0], p[1])),
            Series::Bars { histogram, .. } => {
                for (lo, hi, count) in histogram.bins() {
                    add(lo, 0.0);
                    add(hi, count as f64);
                }
            }
        }
        ext
    }
}

/// Visible data range of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Everything needed to draw one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub figure: FigureSize,
    pub x_axis: AxisKind,
    pub legend: bool,
    pub grid: bool,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(title: impl Into<String>, figure: FigureSize) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            figure,
            x_axis: AxisKind::Numeric,
            legend: false,
            grid: false,
            series: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn x_axis(mut self, kind: AxisKind) -> Self {
        self.x_axis = kind;
        self
    }

    pub fn legend(mut self, on: bool) -> Self {
        self.legend = on;
        self
    }

    pub fn grid(mut self, on: bool) -> Self {
        self.grid = on;
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Labelled series, in drawing order.
    pub fn legend_entries(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().filter_map(|s| s.label().map(|l| (l, s)))
    }

    /// Data range padded by a 5% margin on each side.
    ///
    /// Bar charts keep zero as the y floor. A chart with nothing to draw
    /// falls back to the unit square.
    pub fn data_bounds(&self) -> Bounds {
        let raw = self
            .series
            .iter()
            .filter_map(Series::extent)
            .reduce(|[a0, a1, a2, a3], [b0, b1, b2, b3]| [a0.min(b0), a1.max(b1), a2.min(b2), a3.max(b3)]);

        let Some([x0, x1, y0, y1]) = raw else {
            return Bounds { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        };

        // A single date would otherwise be padded by a share of its day number
        let (x_min, x_max) = if self.x_axis == AxisKind::Date && x1 <= x0 {
            (x0 - SINGLE_DATE_PAD_DAYS, x1 + SINGLE_DATE_PAD_DAYS)
        } else {
            pad(x0, x1)
        };
        let (mut y_min, y_max) = pad(y0, y1);

        let has_bars = self.series.iter().any(|s| matches!(s, Series::Bars { .. }));
        if has_bars && y0 >= 0.0 {
            y_min = 0.0;
        }

        Bounds { x_min, x_max, y_min, y_max }
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    if hi <= lo {
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * AXIS_MARGIN };
        return ((lo - half).max(f64::MIN), (hi + half).min(f64::MAX));
    }
    // Scaled before subtracting so spans wider than f64::MAX stay finite
    let margin = hi * AXIS_MARGIN - lo * AXIS_MARGIN;
    ((lo - margin).max(f64::MIN), (hi + margin).min(f64::MAX))
}
