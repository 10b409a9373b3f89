use crate::core::{Point, Rect};
use crate::render::PlotRenderer;

use super::ChartView;

/// Below these thresholds the chart is drawn at the minimum size and scaled
/// down to fit the component, so text and markers stay legible.
pub const MIN_DRAW_WIDTH: f64 = 200.0;
pub const MIN_DRAW_HEIGHT: f64 = 150.0;

impl<R: PlotRenderer> ChartView<R> {
    /// Scale factors applied to the rendered buffer by the last paint.
    #[must_use]
    pub fn scale_factors(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Data area as it appears on screen: the renderer's layout mapped
    /// through the current scale factors and the view insets.
    ///
    /// `None` until the renderer has produced a first layout.
    #[must_use]
    pub fn screen_data_area(&self) -> Option<Rect> {
        let area = self.renderer.data_area()?;
        Some(Rect::new(
            area.x * self.scale_x + self.insets.left,
            area.y * self.scale_y + self.insets.top,
            area.width * self.scale_x,
            area.height * self.scale_y,
        ))
    }

    /// Maps a screen point into the renderer's drawing space.
    #[must_use]
    pub fn screen_to_buffer(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.insets.left) / self.scale_x,
            (point.y - self.insets.top) / self.scale_y,
        )
    }

    /// Maps a point in the renderer's drawing space onto the screen.
    #[must_use]
    pub fn buffer_to_screen(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale_x + self.insets.left,
            point.y * self.scale_y + self.insets.top,
        )
    }
}
