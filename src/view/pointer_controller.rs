use crate::core::{EntityHit, Point};
use crate::interaction::{PointerButton, PointerEvent, ReleaseAction};
use crate::render::PlotRenderer;

use super::{ChartView, ChartViewEvent};

impl<R: PlotRenderer> ChartView<R> {
    /// Starts a potential drag; the press point is clamped into the data
    /// area and recorded as the anchor.
    ///
    /// The popup gesture bypasses the zoom state machine: a secondary-button
    /// press requests a context menu regardless of drag state.
    pub fn pointer_pressed(&mut self, event: PointerEvent) {
        let area = self.screen_data_area();
        self.gesture.begin(Point::new(event.x, event.y), area);

        if event.button == PointerButton::Secondary {
            self.emit(&ChartViewEvent::ContextMenuRequested {
                x: event.x,
                y: event.y,
            });
        }
    }

    /// Advances the live selection and repaints its outline.
    ///
    /// Both outline paints go through the renderer's XOR selection path, so
    /// the previous rectangle disappears as the new one appears.
    pub fn pointer_dragged(&mut self, x: f64, y: f64) {
        let Some(area) = self.screen_data_area() else {
            return;
        };
        let capability = self.renderer.capability();
        let update = self.gesture.drag(Point::new(x, y), area, capability);

        let fill = self.fill_selection;
        if let Some(rect) = update.erase {
            self.renderer.draw_selection(rect, fill);
        }
        if let Some(rect) = update.draw {
            self.renderer.draw_selection(rect, fill);
        }
    }

    /// Ends the drag: commit, restore automatic bounds, or discard.
    pub fn pointer_released(&mut self, event: PointerEvent) {
        let Some(area) = self.screen_data_area() else {
            // Layout vanished mid-drag; erase any stale outline and reset.
            let fill = self.fill_selection;
            if let Some(stale) = self.gesture.reset() {
                self.renderer.draw_selection(stale, fill);
            } else if event.button == PointerButton::Secondary {
                self.emit(&ChartViewEvent::ContextMenuRequested {
                    x: event.x,
                    y: event.y,
                });
            }
            return;
        };

        let capability = self.renderer.capability();
        let point = Point::new(event.x, event.y);
        match self.gesture.release(point, area, capability) {
            ReleaseAction::Idle => {
                if event.button == PointerButton::Secondary {
                    self.emit(&ChartViewEvent::ContextMenuRequested {
                        x: event.x,
                        y: event.y,
                    });
                }
            }
            ReleaseAction::Commit { selection } => self.zoom(selection),
            ReleaseAction::RestoreAuto => self.restore_auto_bounds(),
            ReleaseAction::Discard { erase } => {
                let fill = self.fill_selection;
                if let Some(rect) = erase {
                    self.renderer.draw_selection(rect, fill);
                }
            }
        }
    }

    /// Routes a click to the matching typed event via entity hit-testing.
    pub fn pointer_clicked(&mut self, x: f64, y: f64) {
        // if no-one is listening, skip the hit-test entirely
        if self.listeners.is_empty() {
            return;
        }

        let point = self.screen_to_buffer(Point::new(x, y));
        let Some(entity) = self.renderer.entity_at(point) else {
            return;
        };

        let event = match entity.hit {
            EntityHit::LegendItem { series_key } => ChartViewEvent::LegendClick { series_key },
            EntityHit::XyItem {
                series_index,
                item_index,
            } => ChartViewEvent::XyItemClick {
                series_index,
                item_index,
            },
            EntityHit::CategoryItem {
                row_key,
                column_key,
            } => ChartViewEvent::CategoryItemClick {
                row_key,
                column_key,
            },
            EntityHit::PieSection { section_key } => {
                ChartViewEvent::SectionClick { section_key }
            }
        };
        self.emit(&event);
    }

    /// Tooltip text for the entity under the pointer, if any.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<String> {
        let point = self.screen_to_buffer(Point::new(x, y));
        self.renderer
            .entity_at(point)
            .and_then(|entity| entity.tooltip)
    }
}
