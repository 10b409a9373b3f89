use crate::core::{ChartModel, LegendPosition, PlotOrientation};
use crate::error::{ViewError, ViewResult};
use crate::render::PlotRenderer;

use super::{ChartView, ChartViewEvent};

impl<R: PlotRenderer> ChartView<R> {
    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.model.set_title(title);
        self.model_changed("title");
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.model.set_subtitle(subtitle);
        self.model_changed("subtitle");
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.model.set_source(source);
        self.model_changed("source");
    }

    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.model.set_legend_position(position);
        self.model_changed("legend_position");
    }

    /// Rejects the change for chart kinds without a plot orientation.
    pub fn set_orientation(&mut self, orientation: PlotOrientation) -> ViewResult<()> {
        if !self.model.kind().supports_orientation() {
            return Err(ViewError::InvalidConfig(format!(
                "{:?} charts have no plot orientation",
                self.model.kind()
            )));
        }
        self.model.set_orientation(orientation);
        self.model_changed("orientation");
        Ok(())
    }

    pub fn insert_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.model.insert_series_metadata(key, value);
        self.model_changed("series_metadata");
    }

    fn model_changed(&mut self, property: &'static str) {
        self.invalidate();
        self.emit(&ChartViewEvent::ModelChanged { property });
    }
}
