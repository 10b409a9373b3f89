use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ChartKind, PlotOrientation};

/// Where the legend sits relative to the plot, if shown at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    None,
}

/// Presentational chart state shared by every chart kind.
///
/// This struct replaces the original accessor-heavy component hierarchy with
/// one composed model: titles, legend placement, orientation, and per-series
/// metadata live here, while kind-specific behavior comes from [`ChartKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    kind: ChartKind,
    title: String,
    subtitle: String,
    source: String,
    legend_position: LegendPosition,
    orientation: PlotOrientation,
    series_metadata: IndexMap<String, String>,
}

impl ChartModel {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: String::new(),
            subtitle: String::new(),
            source: String::new(),
            legend_position: LegendPosition::default(),
            orientation: PlotOrientation::Vertical,
            series_metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    /// Data-source attribution line shown alongside the plot.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    #[must_use]
    pub fn legend_position(&self) -> LegendPosition {
        self.legend_position
    }

    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.legend_position = position;
    }

    #[must_use]
    pub fn orientation(&self) -> PlotOrientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: PlotOrientation) {
        self.orientation = orientation;
    }

    /// Insertion-ordered metadata entries keyed by series name.
    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    pub fn insert_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }
}
