use tracing::debug;

use crate::core::{Axis, PlotOrientation, Rect};
use crate::interaction::selection_fractions;
use crate::render::PlotRenderer;

use super::{ChartView, ChartViewEvent};

impl<R: PlotRenderer> ChartView<R> {
    /// Zooms in on a selected region, given in screen coordinates.
    ///
    /// The selection is converted into fractional bounds against the screen
    /// data area and committed per axis. Selections without strictly
    /// positive width and height are ignored, as are plots with no zoomable
    /// axis. Callable directly for programmatic or touch-gesture zooming.
    pub fn zoom(&mut self, selection: Rect) {
        let Some(area) = self.screen_data_area() else {
            return;
        };
        let Some((horizontal, vertical)) = selection_fractions(selection, area) else {
            return;
        };

        let capability = self.renderer.capability();
        // A horizontal plot swaps which screen direction feeds which axis.
        let (domain, range) = match capability.orientation {
            PlotOrientation::Horizontal => (vertical, horizontal),
            PlotOrientation::Vertical => (horizontal, vertical),
        };

        let domain_commit = capability.domain_zoomable.then_some(domain);
        let range_commit = capability.range_zoomable.then_some(range);
        if domain_commit.is_none() && range_commit.is_none() {
            return;
        }

        if let Some(bounds) = domain_commit {
            self.renderer.set_axis_range(Axis::Domain, bounds);
        }
        if let Some(bounds) = range_commit {
            self.renderer.set_axis_range(Axis::Range, bounds);
        }

        debug!(?domain_commit, ?range_commit, "committed zoom selection");
        self.invalidate();
        self.emit(&ChartViewEvent::ZoomCommitted {
            domain: domain_commit,
            range: range_commit,
        });
    }

    /// Restores the automatic bounds calculation on both axes.
    pub fn restore_auto_bounds(&mut self) {
        self.restore_auto_domain_bounds();
        self.restore_auto_range_bounds();
    }

    pub fn restore_auto_domain_bounds(&mut self) {
        self.renderer.restore_auto_range(Axis::Domain);
        self.invalidate();
        self.emit(&ChartViewEvent::AutoRangeRestored { axis: Axis::Domain });
    }

    pub fn restore_auto_range_bounds(&mut self) {
        self.renderer.restore_auto_range(Axis::Range);
        self.invalidate();
        self.emit(&ChartViewEvent::AutoRangeRestored { axis: Axis::Range });
    }
}
