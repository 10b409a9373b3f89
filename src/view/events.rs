use crate::core::{Axis, AxisRange};
use crate::render::PlotRenderer;

use super::ChartView;

/// Notifications delivered to view subscribers, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartViewEvent {
    /// A drag or programmatic zoom committed new bounds. Axes that were not
    /// zoomable at commit time carry `None`.
    ZoomCommitted {
        domain: Option<AxisRange>,
        range: Option<AxisRange>,
    },
    AutoRangeRestored {
        axis: Axis,
    },
    LegendClick {
        series_key: String,
    },
    XyItemClick {
        series_index: usize,
        item_index: usize,
    },
    CategoryItemClick {
        row_key: String,
        column_key: String,
    },
    SectionClick {
        section_key: String,
    },
    ContextMenuRequested {
        x: f64,
        y: f64,
    },
    /// A model mutator ran; `property` names the field that changed.
    ModelChanged {
        property: &'static str,
    },
}

/// Subscriber interface for view notifications.
///
/// Closures subscribe too: any `FnMut(&ChartViewEvent)` implements this.
pub trait ChartViewListener {
    fn on_event(&mut self, event: &ChartViewEvent);
}

impl<F> ChartViewListener for F
where
    F: FnMut(&ChartViewEvent),
{
    fn on_event(&mut self, event: &ChartViewEvent) {
        self(event);
    }
}

impl<R: PlotRenderer> ChartView<R> {
    /// Appends a subscriber; dispatch preserves registration order.
    pub fn subscribe(&mut self, listener: Box<dyn ChartViewListener>) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(super) fn emit(&mut self, event: &ChartViewEvent) {
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }
}
