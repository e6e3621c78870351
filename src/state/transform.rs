/// Zoom and pan applied to the displayed image.
///
/// Rendering applies `translate(pan_x, pan_y)` first, in unscaled screen
/// pixels, then scales uniformly around the image's own centre.

use crate::config::{DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP};

/// Intent of a single wheel notch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolled away from the user: zoom in
    Up,
    /// Scrolled toward the user: zoom out
    Down,
}

impl WheelDirection {
    /// Map a raw vertical wheel delta to a zoom intent.
    ///
    /// Platforms report a positive delta when the content should move down,
    /// which is the "scroll toward the user" gesture, so the sign is
    /// inverted here. A zero delta (pure horizontal scroll) has no intent.
    pub fn from_delta(raw_dy: f32) -> Option<Self> {
        let intent = -raw_dy;
        if intent > 0.0 {
            Some(WheelDirection::Up)
        } else if intent < 0.0 {
            Some(WheelDirection::Down)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Zoom level (1.0 = 100%)
    pub zoom: f32,
    /// Horizontal pan offset in pixels
    pub pan_x: f32,
    /// Vertical pan offset in pixels
    pub pan_y: f32,
    step: f32,
    min_zoom: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP, DEFAULT_MIN_ZOOM)
    }
}

impl Transform {
    pub fn new(step: f32, min_zoom: f32) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            step,
            min_zoom,
        }
    }

    /// Back to 100% with no pan. Zoom settings are kept.
    pub fn reset(&mut self) -> Transform {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        *self
    }

    pub fn zoom_in(&mut self) {
        self.zoom_in_by(self.step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_out_by(self.step);
    }

    pub fn zoom_in_by(&mut self, factor: f32) {
        self.zoom *= factor;
    }

    pub fn zoom_out_by(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).max(self.min_zoom);
    }

    pub fn apply_wheel(&mut self, direction: WheelDirection) {
        match direction {
            WheelDirection::Up => self.zoom_in(),
            WheelDirection::Down => self.zoom_out(),
        }
    }

    /// Set the absolute pan offset.
    pub fn pan(&mut self, x: f32, y: f32) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Zoom as a rounded percentage
    pub fn zoom_percent(&self) -> i32 {
        (self.zoom * 100.0).round() as i32
    }

    /// Text shown in the zoom readout, e.g. "110%"
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent())
    }
}
