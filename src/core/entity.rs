use serde::{Deserialize, Serialize};

/// What the pointer landed on, as reported by the renderer's hit-test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityHit {
    LegendItem { series_key: String },
    XyItem { series_index: usize, item_index: usize },
    CategoryItem { row_key: String, column_key: String },
    PieSection { section_key: String },
}

/// Hit-test result with optional tooltip text supplied by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntity {
    pub hit: EntityHit,
    pub tooltip: Option<String>,
}

impl ChartEntity {
    #[must_use]
    pub const fn new(hit: EntityHit) -> Self {
        Self { hit, tooltip: None }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}
