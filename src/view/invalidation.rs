use tracing::trace;

use crate::core::Rect;
use crate::error::ViewResult;
use crate::render::PlotRenderer;

use super::{ChartView, MIN_DRAW_HEIGHT, MIN_DRAW_WIDTH};

impl<R: PlotRenderer> ChartView<R> {
    #[must_use]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Marks the buffer stale. Model mutators and range commits call this
    /// internally; hosts call it when the underlying chart data changed.
    pub fn invalidate(&mut self) {
        self.needs_repaint = true;
    }

    /// Synchronously redraws the buffer when stale.
    ///
    /// When the viewport (minus insets) is smaller than the minimum draw
    /// size, the chart is rendered at the minimum size and the per-axis
    /// scale factors are set so pointer coordinates map back correctly.
    ///
    /// Returns `true` when the renderer was invoked, `false` when the buffer
    /// was already current.
    pub fn paint(&mut self) -> ViewResult<bool> {
        if !self.needs_repaint {
            return Ok(false);
        }

        let available_width = f64::from(self.viewport.width) - self.insets.left - self.insets.right;
        let available_height =
            f64::from(self.viewport.height) - self.insets.top - self.insets.bottom;

        let mut draw_width = available_width;
        self.scale_x = 1.0;
        if available_width < MIN_DRAW_WIDTH {
            self.scale_x = available_width / MIN_DRAW_WIDTH;
            draw_width = MIN_DRAW_WIDTH;
        }

        let mut draw_height = available_height;
        self.scale_y = 1.0;
        if available_height < MIN_DRAW_HEIGHT {
            self.scale_y = available_height / MIN_DRAW_HEIGHT;
            draw_height = MIN_DRAW_HEIGHT;
        }

        let area = Rect::new(0.0, 0.0, draw_width, draw_height);
        self.renderer.draw(&self.model, area)?;
        self.needs_repaint = false;

        trace!(
            draw_width,
            draw_height,
            scale_x = self.scale_x,
            scale_y = self.scale_y,
            "repainted chart buffer"
        );
        Ok(true)
    }
}
