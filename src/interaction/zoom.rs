use crate::core::{AxisRange, Point, Rect, ZoomCapability};

/// Selection-outline paint instructions produced by a drag step.
///
/// Both rectangles are drawn in XOR mode by the caller: `erase` repaints the
/// previous outline away, `draw` paints the new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragUpdate {
    pub erase: Option<Rect>,
    pub draw: Option<Rect>,
}

/// What a pointer release asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseAction {
    /// No drag was in progress.
    Idle,
    /// Commit the selection as new axis bounds.
    Commit { selection: Rect },
    /// The drag ran backward on a zoomable axis: restore automatic bounds.
    RestoreAuto,
    /// The drag never met the trigger distance (or lost its anchor);
    /// erase the outline if one is still on screen and do nothing else.
    Discard { erase: Option<Rect> },
}

/// Drag-to-zoom gesture state machine.
///
/// The machine is `Idle` until a press lands while a data area exists; the
/// press point is clamped into the data area and recorded as the anchor.
/// Drags then maintain a live selection rectangle anchored there, spanning
/// the full cross-axis extent when only one screen axis is zoomable.
/// A release either commits the selection, restores automatic bounds
/// (backward drag), or discards a selection that stayed under the trigger
/// distance. All side effects are returned to the caller as data; the
/// machine itself never touches the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomGesture {
    trigger_distance: f64,
    anchor: Option<Point>,
    selection: Option<Rect>,
}

impl ZoomGesture {
    /// `trigger_distance` is the minimum pixel drag on a zoomable axis for a
    /// release to count as a zoom rather than a click.
    #[must_use]
    pub const fn new(trigger_distance: f64) -> Self {
        Self {
            trigger_distance,
            anchor: None,
            selection: None,
        }
    }

    #[must_use]
    pub fn trigger_distance(self) -> f64 {
        self.trigger_distance
    }

    #[must_use]
    pub fn anchor(self) -> Option<Point> {
        self.anchor
    }

    #[must_use]
    pub fn selection(self) -> Option<Rect> {
        self.selection
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.selection.is_some()
    }

    /// Records the anchor for a new drag.
    ///
    /// With no data area (no layout yet, or the press preceded the first
    /// paint) the anchor stays empty and the whole gesture becomes a no-op.
    /// A press while a selection is still live keeps the existing anchor.
    pub fn begin(&mut self, point: Point, data_area: Option<Rect>) {
        if self.selection.is_none() {
            self.anchor = data_area.map(|area| area.normalized().clamp_point(point));
        }
    }

    /// Advances the live selection to the current pointer position.
    pub fn drag(&mut self, point: Point, data_area: Rect, capability: ZoomCapability) -> DragUpdate {
        let Some(anchor) = self.anchor else {
            return DragUpdate::default();
        };

        let h_zoom = capability.screen_x_zoomable();
        let v_zoom = capability.screen_y_zoomable();
        if !h_zoom && !v_zoom {
            return DragUpdate::default();
        }

        let area = data_area.normalized();
        let erase = self.selection;

        // The selection must not extend beyond the data area; the anchor is
        // already clamped, so only the moving corner needs limiting.
        self.selection = if h_zoom && v_zoom {
            let x_max = point.x.min(area.max_x());
            let y_max = point.y.min(area.max_y());
            Some(Rect::new(
                anchor.x,
                anchor.y,
                x_max - anchor.x,
                y_max - anchor.y,
            ))
        } else if h_zoom {
            let x_max = point.x.min(area.max_x());
            Some(Rect::new(
                anchor.x,
                area.min_y(),
                x_max - anchor.x,
                area.height,
            ))
        } else {
            let y_max = point.y.min(area.max_y());
            Some(Rect::new(
                area.min_x(),
                anchor.y,
                area.width,
                y_max - anchor.y,
            ))
        };

        DragUpdate {
            erase,
            draw: self.selection,
        }
    }

    /// Ends the drag and reports what the release amounts to.
    ///
    /// The capability is passed in fresh because it can change between the
    /// press and the release.
    pub fn release(
        &mut self,
        point: Point,
        data_area: Rect,
        capability: ZoomCapability,
    ) -> ReleaseAction {
        let Some(selection) = self.selection.take() else {
            return ReleaseAction::Idle;
        };
        let Some(anchor) = self.anchor.take() else {
            // A live selection without an anchor: treat as a cancelled drag.
            return ReleaseAction::Discard {
                erase: Some(selection),
            };
        };

        let h_zoom = capability.screen_x_zoomable();
        let v_zoom = capability.screen_y_zoomable();

        let h_triggered = h_zoom && (point.x - anchor.x).abs() >= self.trigger_distance;
        let v_triggered = v_zoom && (point.y - anchor.y).abs() >= self.trigger_distance;
        if !h_triggered && !v_triggered {
            return ReleaseAction::Discard {
                erase: Some(selection),
            };
        }

        if (h_zoom && point.x < anchor.x) || (v_zoom && point.y < anchor.y) {
            return ReleaseAction::RestoreAuto;
        }

        let area = data_area.normalized();
        let committed = if !v_zoom {
            Rect::new(
                anchor.x,
                area.min_y(),
                selection.width.min(area.max_x() - anchor.x),
                area.height,
            )
        } else if !h_zoom {
            Rect::new(
                area.min_x(),
                anchor.y,
                area.width,
                selection.height.min(area.max_y() - anchor.y),
            )
        } else {
            Rect::new(
                anchor.x,
                anchor.y,
                selection.width.min(area.max_x() - anchor.x),
                selection.height.min(area.max_y() - anchor.y),
            )
        };

        ReleaseAction::Commit {
            selection: committed,
        }
    }

    /// Returns to `Idle`, reporting the outline to erase if a drag was live.
    pub fn reset(&mut self) -> Option<Rect> {
        self.anchor = None;
        self.selection.take()
    }
}

/// Converts a selection into fractional bounds relative to the data area.
///
/// Returns `(horizontal, vertical)` screen fractions; the caller assigns
/// them to the domain/range axes according to plot orientation. The vertical
/// pair is flipped because screen y grows downward while data ranges grow
/// upward:
///
/// ```text
/// h_lower = (selection.min_x - data_area.min_x) / data_area.width
/// h_upper = (selection.max_x - data_area.min_x) / data_area.width
/// v_lower = (data_area.max_y - selection.max_y) / data_area.height
/// v_upper = (data_area.max_y - selection.min_y) / data_area.height
/// ```
///
/// Returns `None` for selections without strictly positive width and height
/// (zero-area drags are clicks, not zooms) and for degenerate data areas.
#[must_use]
pub fn selection_fractions(selection: Rect, data_area: Rect) -> Option<(AxisRange, AxisRange)> {
    if !selection.has_positive_area() || !data_area.has_positive_area() {
        return None;
    }

    let area = data_area.normalized();
    let h_lower = (selection.min_x() - area.min_x()) / area.width;
    let h_upper = (selection.max_x() - area.min_x()) / area.width;
    let v_lower = (area.max_y() - selection.max_y()) / area.height;
    let v_upper = (area.max_y() - selection.min_y()) / area.height;

    let horizontal = AxisRange::new(h_lower, h_upper).ok()?;
    let vertical = AxisRange::new(v_lower, v_upper).ok()?;
    Some((horizontal, vertical))
}
