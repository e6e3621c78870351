use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::widget::image::Handle;
use iced::{Point, Rectangle, Renderer, Size, Theme, Vector};

use crate::state::gesture::{PointerButton, PointerEvent};
use crate::state::transform::{Transform, WheelDirection};
use crate::Message;

/// Main image surface with wheel zoom and drag pan
///
/// The canvas owns no interaction state: it only translates mouse events
/// into [`PointerEvent`]s and wheel intents for the session.
pub struct ImageCanvas {
    pub handle: Handle,
    /// Natural pixel size of the image
    pub width: u32,
    pub height: u32,
    pub transform: Transform,
    /// Whether the session is in the middle of a drag
    pub dragging: bool,
}

impl ImageCanvas {
    /// Image size at 100% zoom: the natural size, shrunk to fit `bounds`
    fn fitted_size(&self, bounds: Size) -> Size {
        let width = self.width.max(1) as f32;
        let height = self.height.max(1) as f32;
        let scale = (bounds.width / width).min(bounds.height / height).min(1.0);
        Size::new(width * scale, height * scale)
    }

    /// Where the image ends up on screen once pan and zoom are applied
    fn screen_rect(&self, bounds: Rectangle) -> Rectangle {
        let size = self.fitted_size(bounds.size()) * self.transform.zoom;
        let center = bounds.center() + Vector::new(self.transform.pan_x, self.transform.pan_y);
        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

impl Program<Message> for ImageCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = self.fitted_size(bounds.size());

        frame.with_save(|frame| {
            // Translate first, then scale around the image centre
            frame.translate(Vector::new(
                bounds.width / 2.0 + self.transform.pan_x,
                bounds.height / 2.0 + self.transform.pan_y,
            ));
            frame.scale(self.transform.zoom);
            frame.draw_image(
                Rectangle::new(Point::new(-size.width / 2.0, -size.height / 2.0), size),
                &self.handle,
            );
        });

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    let y = match delta {
                        mouse::ScrollDelta::Lines { y, .. } => y,
                        mouse::ScrollDelta::Pixels { y, .. } => y,
                    };
                    // iced reports positive y for "away from the user"; flip it
                    // back to the platform convention the transform expects
                    if let Some(direction) = WheelDirection::from_delta(-y) {
                        return (canvas::event::Status::Captured, Some(Message::Wheel(direction)));
                    }
                }
            }

            // Presses only count on the image itself
            canvas::Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                if let Some(pos) = cursor.position() {
                    if self.screen_rect(bounds).contains(pos) {
                        let event = PointerEvent::Down {
                            button: pointer_button(button),
                            x: pos.x,
                            y: pos.y,
                        };
                        let status = if button == mouse::Button::Left {
                            canvas::event::Status::Captured
                        } else {
                            canvas::event::Status::Ignored
                        };
                        return (status, Some(Message::Pointer(event)));
                    }
                }
            }

            // Moves and releases are tracked anywhere in the window
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.dragging {
                    let event = PointerEvent::Move {
                        x: position.x,
                        y: position.y,
                    };
                    return (canvas::event::Status::Captured, Some(Message::Pointer(event)));
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(_)) => {
                if self.dragging {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Pointer(PointerEvent::Up)),
                    );
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor
            .position()
            .is_some_and(|pos| self.screen_rect(bounds).contains(pos))
        {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn pointer_button(button: mouse::Button) -> PointerButton {
    match button {
        mouse::Button::Left => PointerButton::Primary,
        mouse::Button::Right => PointerButton::Secondary,
        mouse::Button::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32, transform: Transform) -> ImageCanvas {
        ImageCanvas {
            handle: Handle::from_rgba(1, 1, vec![0u8; 4]),
            width,
            height,
            transform,
            dragging: false,
        }
    }

    #[test]
    fn test_large_image_is_fitted_small_is_not_upscaled() {
        let bounds = Size::new(400.0, 300.0);

        let large = canvas(800, 300, Transform::default());
        assert_eq!(large.fitted_size(bounds), Size::new(400.0, 150.0));

        let small = canvas(100, 50, Transform::default());
        assert_eq!(small.fitted_size(bounds), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_screen_rect_applies_pan_then_zoom() {
        let mut transform = Transform::default();
        transform.pan(30.0, 60.0);
        transform.zoom_in_by(2.0);

        let image = canvas(100, 50, transform);
        let rect = image.screen_rect(Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)));

        // Centre moves with the pan; size doubles around it
        assert_eq!(rect.center(), Point::new(230.0, 210.0));
        assert_eq!(rect.size(), Size::new(200.0, 100.0));
    }
}
