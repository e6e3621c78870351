/// Click-and-drag panning
///
/// Raw pointer events go in, absolute pan offsets come out and are applied
/// to the [`Transform`]. The drag anchor never leaves this module.

use super::transform::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Pointer input in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    /// Pointer position minus pan, captured on press
    Dragging { anchor_x: f32, anchor_y: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: DragState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one pointer event through the drag state machine.
    pub fn handle(&mut self, event: PointerEvent, transform: &mut Transform) {
        match (self.state, event) {
            (
                DragState::Idle,
                PointerEvent::Down {
                    button: PointerButton::Primary,
                    x,
                    y,
                },
            ) => {
                self.state = DragState::Dragging {
                    anchor_x: x - transform.pan_x,
                    anchor_y: y - transform.pan_y,
                };
            }
            (DragState::Dragging { anchor_x, anchor_y }, PointerEvent::Move { x, y }) => {
                transform.pan(x - anchor_x, y - anchor_y);
            }
            // Release resolves to Idle from any state
            (_, PointerEvent::Up) => self.state = DragState::Idle,
            // Moves while idle, non-primary presses and repeated presses
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            button: PointerButton::Primary,
            x,
            y,
        }
    }

    #[test]
    fn test_drag_pans_by_pointer_travel() {
        let mut tracker = GestureTracker::new();
        let mut transform = Transform::default();

        tracker.handle(press(100.0, 100.0), &mut transform);
        assert!(tracker.is_dragging());

        tracker.handle(PointerEvent::Move { x: 130.0, y: 160.0 }, &mut transform);
        assert_eq!((transform.pan_x, transform.pan_y), (30.0, 60.0));

        tracker.handle(PointerEvent::Up, &mut transform);
        assert!(!tracker.is_dragging());

        tracker.handle(PointerEvent::Move { x: 500.0, y: 500.0 }, &mut transform);
        assert_eq!((transform.pan_x, transform.pan_y), (30.0, 60.0));
    }

    #[test]
    fn test_second_drag_continues_from_current_pan() {
        let mut tracker = GestureTracker::new();
        let mut transform = Transform::default();
        transform.pan(30.0, 60.0);

        tracker.handle(press(10.0, 10.0), &mut transform);
        tracker.handle(PointerEvent::Move { x: 20.0, y: 5.0 }, &mut transform);

        assert_eq!((transform.pan_x, transform.pan_y), (40.0, 55.0));
    }

    #[test]
    fn test_non_primary_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        let mut transform = Transform::default();

        for button in [PointerButton::Secondary, PointerButton::Middle, PointerButton::Other] {
            tracker.handle(PointerEvent::Down { button, x: 1.0, y: 1.0 }, &mut transform);
            assert!(!tracker.is_dragging());
        }

        tracker.handle(PointerEvent::Move { x: 50.0, y: 50.0 }, &mut transform);
        assert_eq!((transform.pan_x, transform.pan_y), (0.0, 0.0));
    }

    #[test]
    fn test_release_without_press_stays_idle() {
        let mut tracker = GestureTracker::new();
        let mut transform = Transform::default();

        tracker.handle(PointerEvent::Up, &mut transform);
        assert!(!tracker.is_dragging());
        assert_eq!((transform.pan_x, transform.pan_y), (0.0, 0.0));
    }

    #[test]
    fn test_repeated_press_keeps_original_anchor() {
        let mut tracker = GestureTracker::new();
        let mut transform = Transform::default();

        tracker.handle(press(100.0, 100.0), &mut transform);
        tracker.handle(press(0.0, 0.0), &mut transform);
        tracker.handle(PointerEvent::Move { x: 110.0, y: 90.0 }, &mut transform);

        assert_eq!((transform.pan_x, transform.pan_y), (10.0, -10.0));
    }
}
