//! Paints a [`Chart`] with an egui painter.
//!
//! Drawing order follows a conventional figure: canvas, grid, series
//! (clipped to the plot area), axes frame with ticks, labels, title, legend.

use std::f32::consts::FRAC_PI_2;

use egui::epaint::TextShape;
use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Rect, Shape, Stroke, StrokeKind};

use crate::chart::{AxisKind, BarEdge, Chart, Series, SeriesColor};
use crate::render::ticks::{date_ticks, numeric_ticks, Tick};
use crate::render::transform::{PlotLayout, PlotTransform};
use crate::theme::{fade, ThemeColors};

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 3.0;
const TICK_LENGTH: f32 = 4.0;
const TITLE_FONT: f32 = 15.0;
const LABEL_FONT: f32 = 13.0;
const TICK_FONT: f32 = 11.0;

fn resolve(color: SeriesColor, colors: &ThemeColors) -> Color32 {
    match color {
        SeriesColor::Cycle(i) => colors.series_color(i),
    }
}

/// Paints `chart` into `rect` and returns the transform used for the plot
/// area, so callers can map pointer positions back to data coordinates.
pub fn paint_chart(painter: &Painter, rect: Rect, chart: &Chart, colors: &ThemeColors) -> PlotTransform {
    let layout = PlotLayout::new(rect);
    let bounds = chart.data_bounds();
    let transform = PlotTransform::new(bounds, layout.plot);

    painter.rect_filled(rect, 0.0, colors.panel_background);
    painter.rect_filled(layout.plot, 0.0, colors.plot_background);

    let x_ticks = match chart.x_axis {
        AxisKind::Numeric => numeric_ticks(bounds.x_min, bounds.x_max),
        AxisKind::Date => date_ticks(bounds.x_min, bounds.x_max),
    };
    let y_ticks = numeric_ticks(bounds.y_min, bounds.y_max);

    if chart.grid {
        paint_grid(painter, &transform, &x_ticks, &y_ticks, colors);
    }

    let plot_painter = painter.with_clip_rect(layout.plot);
    for series in &chart.series {
        paint_series(&plot_painter, &transform, series, colors);
    }

    painter.rect_stroke(layout.plot, 0.0, Stroke::new(1.0, colors.axes), StrokeKind::Outside);
    paint_ticks(painter, &transform, &x_ticks, &y_ticks, colors);
    paint_labels(painter, &layout, chart, colors);

    if chart.legend {
        paint_legend(painter, layout.plot, chart, colors);
    }

    transform
}

fn paint_grid(painter: &Painter, transform: &PlotTransform, x_ticks: &[Tick], y_ticks: &[Tick], colors: &ThemeColors) {
    let plot = transform.rect();
    let stroke = Stroke::new(0.8, colors.grid);

    for tick in x_ticks {
        let x = transform.x_to_screen(tick.value);
        painter.line_segment([pos2(x, plot.top()), pos2(x, plot.bottom())], stroke);
    }
    for tick in y_ticks {
        let y = transform.y_to_screen(tick.value);
        painter.line_segment([pos2(plot.left(), y), pos2(plot.right(), y)], stroke);
    }
}

fn paint_series(painter: &Painter, transform: &PlotTransform, series: &Series, colors: &ThemeColors) {
    let color = fade(resolve(series.color(), colors), series.alpha());

    match series {
        Series::Line { points, .. } => {
            for segment in Series::line_segments(points) {
                if segment.len() < 2 {
                    continue;
                }
                let screen: Vec<_> = segment.iter().map(|&p| transform.to_screen(p)).collect();
                painter.add(Shape::line(screen, Stroke::new(LINE_WIDTH, color)));
            }
        }
        Series::Scatter { points, .. } => {
            for &p in points {
                painter.circle_filled(transform.to_screen(p), MARKER_RADIUS, color);
            }
        }
        Series::Bars { histogram, edge, .. } => {
            for (lo, hi, count) in histogram.bins() {
                if count == 0 {
                    continue;
                }
                let bar = Rect::from_two_pos(
                    transform.to_screen([lo, 0.0]),
                    transform.to_screen([hi, count as f64]),
                );
                painter.rect_filled(bar, 0.0, color);
                if *edge == BarEdge::Black {
                    painter.rect_stroke(bar, 0.0, Stroke::new(1.0, Color32::BLACK), StrokeKind::Inside);
                }
            }
        }
    }
}

fn paint_ticks(painter: &Painter, transform: &PlotTransform, x_ticks: &[Tick], y_ticks: &[Tick], colors: &ThemeColors) {
    let plot = transform.rect();
    let stroke = Stroke::new(1.0, colors.axes);
    let font = FontId::proportional(TICK_FONT);

    for tick in x_ticks {
        let x = transform.x_to_screen(tick.value);
        painter.line_segment([pos2(x, plot.bottom()), pos2(x, plot.bottom() + TICK_LENGTH)], stroke);
        painter.text(
            pos2(x, plot.bottom() + TICK_LENGTH + 2.0),
            Align2::CENTER_TOP,
            &tick.label,
            font.clone(),
            colors.text,
        );
    }

    for tick in y_ticks {
        let y = transform.y_to_screen(tick.value);
        painter.line_segment([pos2(plot.left() - TICK_LENGTH, y), pos2(plot.left(), y)], stroke);
        painter.text(
            pos2(plot.left() - TICK_LENGTH - 3.0, y),
            Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            colors.text,
        );
    }
}

fn paint_labels(painter: &Painter, layout: &PlotLayout, chart: &Chart, colors: &ThemeColors) {
    let plot = layout.plot;
    let figure = layout.figure;

    if !chart.title.is_empty() {
        painter.text(
            pos2(plot.center().x, figure.top() + 8.0),
            Align2::CENTER_TOP,
            &chart.title,
            FontId::proportional(TITLE_FONT),
            colors.text,
        );
    }

    if !chart.x_label.is_empty() {
        painter.text(
            pos2(plot.center().x, figure.bottom() - 6.0),
            Align2::CENTER_BOTTOM,
            &chart.x_label,
            FontId::proportional(LABEL_FONT),
            colors.text,
        );
    }

    if !chart.y_label.is_empty() {
        // Rotated a quarter turn counter-clockwise around its top-left corner
        let galley = painter.layout_no_wrap(chart.y_label.clone(), FontId::proportional(LABEL_FONT), colors.text);
        let anchor = pos2(figure.left() + 6.0, plot.center().y + galley.size().x / 2.0);
        painter.add(Shape::Text(
            TextShape::new(anchor, galley, colors.text).with_angle(-FRAC_PI_2),
        ));
    }
}

fn paint_legend(painter: &Painter, plot: Rect, chart: &Chart, colors: &ThemeColors) {
    let entries: Vec<(&str, &Series)> = chart.legend_entries().collect();
    if entries.is_empty() {
        return;
    }

    const PADDING: f32 = 6.0;
    const SWATCH: f32 = 22.0;
    const ROW_GAP: f32 = 4.0;

    let font = FontId::proportional(TICK_FONT);
    let galleys: Vec<_> = entries
        .iter()
        .map(|(label, _)| painter.layout_no_wrap(label.to_string(), font.clone(), colors.text))
        .collect();

    let text_width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max);
    let row_height = galleys.iter().map(|g| g.size().y).fold(0.0, f32::max);
    let size = vec2(
        PADDING * 3.0 + SWATCH + text_width,
        PADDING * 2.0 + row_height * entries.len() as f32 + ROW_GAP * (entries.len() - 1) as f32,
    );

    let frame = Rect::from_min_size(pos2(plot.right() - size.x - 8.0, plot.top() + 8.0), size);
    painter.rect_filled(frame, 3.0, colors.legend_background);
    painter.rect_stroke(frame, 3.0, Stroke::new(0.8, colors.grid), StrokeKind::Inside);

    for (row, ((_, series), galley)) in entries.iter().zip(galleys).enumerate() {
        let top = frame.top() + PADDING + row as f32 * (row_height + ROW_GAP);
        let mid_y = top + row_height / 2.0;
        let swatch_left = frame.left() + PADDING;
        let color = fade(resolve(series.color(), colors), series.alpha());

        match series {
            Series::Line { .. } => {
                painter.line_segment(
                    [pos2(swatch_left, mid_y), pos2(swatch_left + SWATCH, mid_y)],
                    Stroke::new(LINE_WIDTH * 1.5, color),
                );
            }
            Series::Scatter { .. } => {
                painter.circle_filled(pos2(swatch_left + SWATCH / 2.0, mid_y), MARKER_RADIUS, color);
            }
            Series::Bars { .. } => {
                let swatch = Rect::from_center_size(pos2(swatch_left + SWATCH / 2.0, mid_y), vec2(SWATCH * 0.6, row_height * 0.6));
                painter.rect_filled(swatch, 0.0, color);
            }
        }

        painter.galley(pos2(swatch_left + SWATCH + PADDING, top), galley, colors.text);
    }
}
