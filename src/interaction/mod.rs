use serde::{Deserialize, Serialize};

mod zoom;

pub use zoom::{DragUpdate, ReleaseAction, ZoomGesture, selection_fractions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    /// Platform popup trigger (context-menu) button.
    Secondary,
}

/// Raw pointer press/release notification in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: PointerButton,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64, button: PointerButton) -> Self {
        Self { x, y, button }
    }

    #[must_use]
    pub const fn primary(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerButton::Primary)
    }

    #[must_use]
    pub const fn secondary(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerButton::Secondary)
    }
}
