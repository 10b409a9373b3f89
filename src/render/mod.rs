mod recording;

pub use recording::RecordingRenderer;

use crate::core::{
    Axis, AxisRange, ChartEntity, ChartModel, PlotOrientation, Point, Rect, ZoomCapability,
};
use crate::error::ViewResult;

/// Contract implemented by the external rendering collaborator.
///
/// The renderer owns the plot layout and axes; the view drives it with
/// gesture outcomes and repaint requests. All coordinates are in the
/// renderer's own drawing space (the view applies scale factors and insets
/// before calling in).
pub trait PlotRenderer {
    /// Renders the plot into the buffer area and establishes the layout
    /// reported by [`PlotRenderer::data_area`].
    fn draw(&mut self, model: &ChartModel, area: Rect) -> ViewResult<()>;

    /// Rectangle occupied by plotted data, or `None` before the first layout.
    fn data_area(&self) -> Option<Rect>;

    fn orientation(&self) -> PlotOrientation;

    fn is_axis_zoomable(&self, axis: Axis) -> bool;

    /// Commits a new visible range as fractions of the current data bounds.
    fn set_axis_range(&mut self, axis: Axis, range: AxisRange);

    /// Reverts the axis to automatically computed bounds.
    fn restore_auto_range(&mut self, axis: Axis);

    /// Hit-tests the most specific entity under the point, if any.
    fn entity_at(&self, point: Point) -> Option<ChartEntity>;

    /// Paints the drag-selection outline in XOR mode: two successive calls
    /// with the same rectangle restore the previous pixel state.
    fn draw_selection(&mut self, rect: Rect, fill: bool);

    /// Current zoom permissions, queried fresh before each gesture step.
    fn capability(&self) -> ZoomCapability {
        ZoomCapability {
            domain_zoomable: self.is_axis_zoomable(Axis::Domain),
            range_zoomable: self.is_axis_zoomable(Axis::Range),
            orientation: self.orientation(),
        }
    }
}
