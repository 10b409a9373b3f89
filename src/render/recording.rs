use crate::core::{
    Axis, AxisRange, ChartEntity, ChartModel, PlotOrientation, Point, Rect, ZoomCapability,
};
use crate::error::ViewResult;
use crate::render::PlotRenderer;

/// Renderer test double used by tests and headless view usage.
///
/// It records every collaborator call so tests can assert on the exact
/// sequence of range commits and outline paints, and it models the XOR
/// selection overlay as a toggle so cancellation is observable.
#[derive(Debug)]
pub struct RecordingRenderer {
    capability: ZoomCapability,
    data_area: Option<Rect>,
    entities: Vec<(Rect, ChartEntity)>,
    pub range_calls: Vec<(Axis, AxisRange)>,
    pub auto_range_calls: Vec<Axis>,
    pub draw_count: usize,
    pub last_draw_area: Option<Rect>,
    pub selection_draw_count: usize,
    selection_overlay: Option<(Rect, bool)>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new(capability: ZoomCapability) -> Self {
        Self {
            capability,
            data_area: None,
            entities: Vec::new(),
            range_calls: Vec::new(),
            auto_range_calls: Vec::new(),
            draw_count: 0,
            last_draw_area: None,
            selection_draw_count: 0,
            selection_overlay: None,
        }
    }

    /// Pre-establishes a layout, as if a first draw had already happened.
    #[must_use]
    pub fn with_data_area(mut self, area: Rect) -> Self {
        self.data_area = Some(area);
        self
    }

    /// Registers a rectangular hit region for `entity_at`.
    #[must_use]
    pub fn with_entity(mut self, region: Rect, entity: ChartEntity) -> Self {
        self.entities.push((region, entity));
        self
    }

    pub fn set_capability(&mut self, capability: ZoomCapability) {
        self.capability = capability;
    }

    /// Outline currently on screen, if the XOR toggle left one visible.
    #[must_use]
    pub fn selection_overlay(&self) -> Option<(Rect, bool)> {
        self.selection_overlay
    }
}

impl PlotRenderer for RecordingRenderer {
    fn draw(&mut self, _model: &ChartModel, area: Rect) -> ViewResult<()> {
        self.draw_count += 1;
        self.last_draw_area = Some(area);
        // A full repaint overwrites the buffer, taking any outline with it.
        self.selection_overlay = None;
        if self.data_area.is_none() {
            self.data_area = Some(area);
        }
        Ok(())
    }

    fn data_area(&self) -> Option<Rect> {
        self.data_area
    }

    fn orientation(&self) -> PlotOrientation {
        self.capability.orientation
    }

    fn is_axis_zoomable(&self, axis: Axis) -> bool {
        self.capability.is_zoomable(axis)
    }

    fn set_axis_range(&mut self, axis: Axis, range: AxisRange) {
        self.range_calls.push((axis, range));
    }

    fn restore_auto_range(&mut self, axis: Axis) {
        self.auto_range_calls.push(axis);
    }

    fn entity_at(&self, point: Point) -> Option<ChartEntity> {
        self.entities
            .iter()
            .find(|(region, _)| region.contains(point))
            .map(|(_, entity)| entity.clone())
    }

    fn draw_selection(&mut self, rect: Rect, fill: bool) {
        self.selection_draw_count += 1;
        // XOR semantics: repainting the same geometry cancels it out.
        if self.selection_overlay == Some((rect, fill)) {
            self.selection_overlay = None;
        } else {
            self.selection_overlay = Some((rect, fill));
        }
    }
}
