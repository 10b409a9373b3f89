use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartModel, Insets, Viewport};
use crate::error::ViewResult;
use crate::interaction::ZoomGesture;
use crate::render::PlotRenderer;

mod events;
mod geometry;
mod invalidation;
mod model_controller;
mod pointer_controller;
mod validation;
mod zoom_controller;

pub use events::{ChartViewEvent, ChartViewListener};
pub use geometry::{MIN_DRAW_HEIGHT, MIN_DRAW_WIDTH};

/// Minimum pixel drag on a zoomable axis for a release to count as a zoom.
pub const DEFAULT_ZOOM_TRIGGER_DISTANCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    pub insets: Insets,
    pub zoom_trigger_distance: f64,
    /// Draw the drag selection filled instead of as an outline.
    pub fill_selection: bool,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            insets: Insets::default(),
            zoom_trigger_distance: DEFAULT_ZOOM_TRIGGER_DISTANCE,
            fill_selection: false,
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_zoom_trigger_distance(mut self, distance: f64) -> Self {
        self.zoom_trigger_distance = distance;
        self
    }

    #[must_use]
    pub fn with_fill_selection(mut self, fill: bool) -> Self {
        self.fill_selection = fill;
        self
    }
}

/// Interactive view facade consumed by host applications.
///
/// `ChartView` owns the renderer, the chart model, the drag-to-zoom gesture
/// state, and the subscriber list, and coordinates buffer repaints. All of
/// it runs on the host's single UI event loop; nothing here is thread-aware.
pub struct ChartView<R: PlotRenderer> {
    renderer: R,
    model: ChartModel,
    gesture: ZoomGesture,
    listeners: SmallVec<[Box<dyn ChartViewListener>; 2]>,
    viewport: Viewport,
    insets: Insets,
    fill_selection: bool,
    scale_x: f64,
    scale_y: f64,
    needs_repaint: bool,
}

impl<R: PlotRenderer> ChartView<R> {
    pub fn new(renderer: R, model: ChartModel, config: ChartViewConfig) -> ViewResult<Self> {
        validation::validate_config(&config)?;

        Ok(Self {
            renderer,
            model,
            gesture: ZoomGesture::new(config.zoom_trigger_distance),
            listeners: SmallVec::new(),
            viewport: config.viewport,
            insets: config.insets,
            fill_selection: config.fill_selection,
            scale_x: 1.0,
            scale_y: 1.0,
            needs_repaint: true,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ViewResult<()> {
        validation::validate_layout(viewport, self.insets)?;
        self.viewport = viewport;
        self.invalidate();
        Ok(())
    }

    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    #[must_use]
    pub fn zoom_trigger_distance(&self) -> f64 {
        self.gesture.trigger_distance()
    }

    /// Whether a drag selection is currently live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
