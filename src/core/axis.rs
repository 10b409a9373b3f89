use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Plot axis in the natural (pre-orientation-swap) coordinate sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Domain,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotOrientation {
    Horizontal,
    Vertical,
}

/// Fractional zoom window relative to the current data bounds.
///
/// Committed ranges produced by gestures over the data area satisfy
/// `0.0 <= lower < upper <= 1.0`; construction only enforces finiteness and
/// ordering so programmatic callers may pass windows outside the unit
/// interval where their renderer accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    lower: f64,
    upper: f64,
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> ViewResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ViewError::InvalidRange(format!(
                "bounds must be finite, got ({lower}, {upper})"
            )));
        }
        if lower >= upper {
            return Err(ViewError::InvalidRange(format!(
                "lower must be strictly below upper, got ({lower}, {upper})"
            )));
        }

        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }
}

/// Per-plot zoom permissions, queried from the renderer before every drag
/// and release since they can vary chart-to-chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomCapability {
    pub domain_zoomable: bool,
    pub range_zoomable: bool,
    pub orientation: PlotOrientation,
}

impl ZoomCapability {
    #[must_use]
    pub const fn none(orientation: PlotOrientation) -> Self {
        Self {
            domain_zoomable: false,
            range_zoomable: false,
            orientation,
        }
    }

    /// Whether a horizontal screen drag maps onto a zoomable axis.
    ///
    /// A horizontal plot swaps the axes on screen, so the horizontal screen
    /// direction tracks the range axis there and the domain axis otherwise.
    #[must_use]
    pub const fn screen_x_zoomable(self) -> bool {
        match self.orientation {
            PlotOrientation::Horizontal => self.range_zoomable,
            PlotOrientation::Vertical => self.domain_zoomable,
        }
    }

    /// Whether a vertical screen drag maps onto a zoomable axis.
    #[must_use]
    pub const fn screen_y_zoomable(self) -> bool {
        match self.orientation {
            PlotOrientation::Horizontal => self.domain_zoomable,
            PlotOrientation::Vertical => self.range_zoomable,
        }
    }

    #[must_use]
    pub const fn is_zoomable(self, axis: Axis) -> bool {
        match axis {
            Axis::Domain => self.domain_zoomable,
            Axis::Range => self.range_zoomable,
        }
    }
}
