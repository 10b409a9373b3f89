use serde::{Deserialize, Serialize};

use super::{PlotOrientation, ZoomCapability};

/// Chart flavor, used as a strategy object instead of a class hierarchy.
///
/// The kind supplies default zoom permissions and says whether the plot has
/// an orientation at all; live permissions still come from the renderer,
/// which may restrict them further at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    TimeSeries,
}

impl ChartKind {
    /// Default zoom permissions for this kind of plot.
    ///
    /// Pie plots have no axes. Category plots (bar, line) only allow value
    /// zooming because the category axis has no continuous scale. XY plots
    /// (scatter, time-series) zoom on both axes.
    #[must_use]
    pub const fn default_capability(self, orientation: PlotOrientation) -> ZoomCapability {
        match self {
            Self::Pie => ZoomCapability::none(orientation),
            Self::Bar | Self::Line => ZoomCapability {
                domain_zoomable: false,
                range_zoomable: true,
                orientation,
            },
            Self::Scatter | Self::TimeSeries => ZoomCapability {
                domain_zoomable: true,
                range_zoomable: true,
                orientation,
            },
        }
    }

    #[must_use]
    pub const fn supports_orientation(self) -> bool {
        !matches!(self, Self::Pie)
    }
}
