use crate::core::{Insets, Viewport};
use crate::error::{ViewError, ViewResult};

use super::ChartViewConfig;

pub(super) fn validate_config(config: &ChartViewConfig) -> ViewResult<()> {
    validate_layout(config.viewport, config.insets)?;

    if !config.zoom_trigger_distance.is_finite() || config.zoom_trigger_distance < 0.0 {
        return Err(ViewError::InvalidConfig(format!(
            "zoom trigger distance must be finite and >= 0, got {}",
            config.zoom_trigger_distance
        )));
    }

    Ok(())
}

pub(super) fn validate_layout(viewport: Viewport, insets: Insets) -> ViewResult<()> {
    if !viewport.is_valid() {
        return Err(ViewError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    for (side, value) in [
        ("left", insets.left),
        ("top", insets.top),
        ("right", insets.right),
        ("bottom", insets.bottom),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ViewError::InvalidConfig(format!(
                "inset `{side}` must be finite and >= 0, got {value}"
            )));
        }
    }

    let available_width = f64::from(viewport.width) - insets.left - insets.right;
    let available_height = f64::from(viewport.height) - insets.top - insets.bottom;
    if available_width <= 0.0 || available_height <= 0.0 {
        return Err(ViewError::InvalidConfig(
            "insets leave no drawable area inside the viewport".to_owned(),
        ));
    }

    Ok(())
}
