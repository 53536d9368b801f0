//! Headless painting of every chart.

use egui::{pos2, vec2, Context, RawInput, Rect};
use sentiplot::{
    distribution, paint_chart, rolling_average, scatter_sentiment_vs_returns, time_series, Chart,
    DailyTable, PlotColumns, PlotTransform, SyntheticTable, ThemeManager,
};

fn sample() -> DailyTable {
    SyntheticTable::new().with_missing_ratio(0.05).generate()
}

/// Paints `chart` into a 1400x700 frame and returns the shape count and the
/// plot transform.
fn paint_headless(chart: &Chart, theme: &str) -> (usize, PlotTransform) {
    let themes = ThemeManager::new();
    let colors = themes.get_theme(theme).unwrap().colors.clone();
    let ctx = Context::default();
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(1400.0, 700.0))),
        ..Default::default()
    };

    let mut transform = None;
    let output = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            transform = Some(paint_chart(&painter, response.rect, chart, &colors));
        });
    });

    (output.shapes.len(), transform.unwrap())
}

#[test]
fn test_time_series_paints() {
    let table = sample();
    let columns = PlotColumns::default();
    let returns = table.numbers(&columns.daily_return).unwrap();
    let chart = time_series(&table, returns, &columns).unwrap();

    let (shapes, transform) = paint_headless(&chart, "Light");
    assert!(shapes > 20, "only {} shapes", shapes);
    let bounds = transform.bounds();
    assert!(bounds.x_max > bounds.x_min);
}

#[test]
fn test_scatter_paints_a_marker_per_complete_pair() {
    let table = sample();
    let columns = PlotColumns::default();
    let returns = table.numbers(&columns.daily_return).unwrap();
    let chart = scatter_sentiment_vs_returns(&table, returns, &columns).unwrap();

    let present = table
        .numbers(&columns.sentiment)
        .unwrap()
        .iter()
        .zip(returns)
        .filter(|(s, r)| s.is_some() && r.is_some())
        .count();
    let (shapes, _) = paint_headless(&chart, "Dark");
    assert!(shapes >= present);
}

#[test]
fn test_distribution_paints() {
    let table = sample();
    let chart = distribution(&table, "daily_return", "Distribution of Daily Returns").unwrap();
    let (shapes, transform) = paint_headless(&chart, "Dracula");
    assert!(shapes > 30);
    assert_eq!(transform.bounds().y_min, 0.0);
}

#[test]
fn test_rolling_average_paints_and_maps_pointer() {
    let mut table = sample();
    let chart = rolling_average(&mut table, 7, &PlotColumns::default()).unwrap();
    let (shapes, transform) = paint_headless(&chart, "One Dark Pro");
    assert!(shapes > 10);

    let centre = transform.rect().center();
    let [x, y] = transform.to_data(centre);
    let back = transform.to_screen([x, y]);
    assert!((back.x - centre.x).abs() < 0.5);
    assert!((back.y - centre.y).abs() < 0.5);
}

#[test]
fn test_empty_table_still_paints() {
    let table = DailyTable::new()
        .with_column("date", sentiplot::Column::Dates(Vec::new()))
        .unwrap()
        .with_column("sentiment_score", sentiplot::Column::Numbers(Vec::new()))
        .unwrap()
        .with_column("daily_return", sentiplot::Column::Numbers(Vec::new()))
        .unwrap();
    let columns = PlotColumns::default();
    let chart = time_series(&table, &[], &columns).unwrap();
    let (shapes, _) = paint_headless(&chart, "Light");
    assert!(shapes > 0);
}

#[test]
fn test_extreme_values_paint_without_panic() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let table = DailyTable::new()
        .with_column("date", sentiplot::Column::Dates(vec![start, start.succ_opt().unwrap()]))
        .unwrap()
        .with_column("sentiment_score", sentiplot::Column::from_values([-1e308, 1e308]))
        .unwrap();
    let returns = [Some(0.01), Some(-0.02)];
    let chart = scatter_sentiment_vs_returns(&table, &returns, &PlotColumns::default()).unwrap();

    let (shapes, transform) = paint_headless(&chart, "Light");
    assert!(shapes > 0);
    let bounds = transform.bounds();
    assert!(bounds.x_min.is_finite() && bounds.x_max.is_finite());
}
