//! Coordinate mapping between chart data and screen space.
//!
//! These are pure functions of the data bounds and the canvas rect, so they
//! can be tested without an egui context.

use egui::{pos2, Pos2, Rect};

use crate::chart::Bounds;

/// Space reserved around the plot area, in points.
const TITLE_HEIGHT: f32 = 36.0;
const X_AXIS_HEIGHT: f32 = 48.0;
const Y_AXIS_WIDTH: f32 = 78.0;
const RIGHT_MARGIN: f32 = 24.0;

/// Splits a figure rect into the plot area and the margins around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub figure: Rect,
    pub plot: Rect,
}

impl PlotLayout {
    pub fn new(figure: Rect) -> Self {
        let left = (figure.left() + Y_AXIS_WIDTH).min(figure.right());
        let top = (figure.top() + TITLE_HEIGHT).min(figure.bottom());
        let right = (figure.right() - RIGHT_MARGIN).max(left);
        let bottom = (figure.bottom() - X_AXIS_HEIGHT).max(top);

        Self {
            figure,
            plot: Rect::from_min_max(pos2(left, top), pos2(right, bottom)),
        }
    }
}

/// Maps data coordinates into a screen rect; y grows upward in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    bounds: Bounds,
    rect: Rect,
}

impl PlotTransform {
    pub fn new(bounds: Bounds, rect: Rect) -> Self {
        Self { bounds, rect }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x_to_screen(&self, x: f64) -> f32 {
        if self.bounds.width() <= 0.0 {
            return self.rect.left();
        }
        let normalized = ((x - self.bounds.x_min) / self.bounds.width()) as f32;
        self.rect.left() + normalized * self.rect.width()
    }

    pub fn y_to_screen(&self, y: f64) -> f32 {
        if self.bounds.height() <= 0.0 {
            return self.rect.bottom();
        }
        let normalized = ((y - self.bounds.y_min) / self.bounds.height()) as f32;
        self.rect.bottom() - normalized * self.rect.height()
    }

    pub fn to_screen(&self, point: [f64; 2]) -> Pos2 {
        pos2(self.x_to_screen(point[0]), self.y_to_screen(point[1]))
    }

    /// Inverse of [`to_screen`](Self::to_screen).
    pub fn to_data(&self, pos: Pos2) -> [f64; 2] {
        let nx = if self.rect.width() > 0.0 {
            ((pos.x - self.rect.left()) / self.rect.width()) as f64
        } else {
            0.0
        };
        let ny = if self.rect.height() > 0.0 {
            ((self.rect.bottom() - pos.y) / self.rect.height()) as f64
        } else {
            0.0
        };
        [
            self.bounds.x_min + nx * self.bounds.width(),
            self.bounds.y_min + ny * self.bounds.height(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> PlotTransform {
        PlotTransform::new(
            Bounds { x_min: 0.0, x_max: 10.0, y_min: -1.0, y_max: 1.0 },
            Rect::from_min_max(pos2(100.0, 50.0), pos2(300.0, 250.0)),
        )
    }

    #[test]
    fn test_corners_map_to_rect() {
        let t = transform();
        assert_eq!(t.to_screen([0.0, -1.0]), pos2(100.0, 250.0));
        assert_eq!(t.to_screen([10.0, 1.0]), pos2(300.0, 50.0));
        assert_eq!(t.to_screen([5.0, 0.0]), pos2(200.0, 150.0));
    }

    #[test]
    fn test_round_trip_through_screen() {
        let t = transform();
        let [x, y] = t.to_data(t.to_screen([2.5, 0.25]));
        assert!((x - 2.5).abs() < 1e-4);
        assert!((y - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_bounds() {
        let t = PlotTransform::new(
            Bounds { x_min: 1.0, x_max: 1.0, y_min: 2.0, y_max: 2.0 },
            Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)),
        );
        assert_eq!(t.to_screen([1.0, 2.0]), pos2(0.0, 10.0));
    }

    #[test]
    fn test_layout_reserves_margins() {
        let layout = PlotLayout::new(Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0)));
        assert_eq!(layout.plot.left(), Y_AXIS_WIDTH);
        assert_eq!(layout.plot.top(), TITLE_HEIGHT);
        assert_eq!(layout.plot.right(), 800.0 - RIGHT_MARGIN);
        assert_eq!(layout.plot.bottom(), 600.0 - X_AXIS_HEIGHT);
    }

    #[test]
    fn test_layout_never_inverts() {
        let layout = PlotLayout::new(Rect::from_min_max(pos2(0.0, 0.0), pos2(20.0, 20.0)));
        assert!(layout.plot.width() >= 0.0);
        assert!(layout.plot.height() >= 0.0);
    }
}
