use iced::widget::{button, container, image, scrollable, text, Row};
use iced::{ContentFit, Element, Length, Task, Theme};

use super::sync::{self, StripEntry};
use crate::Message;

/// Scrollable id of the strip, used to bring the active entry into view
pub fn id() -> scrollable::Id {
    scrollable::Id::new("thumbnail-strip")
}

/// Scroll the strip so entry `index` of `count` is visible
pub fn reveal(index: usize, count: usize) -> Task<Message> {
    scrollable::snap_to(
        id(),
        scrollable::RelativeOffset {
            x: sync::reveal_offset(index, count),
            y: 0.0,
        },
    )
}

/// One button per gallery image; the active one is highlighted
pub fn view<'a>(entries: &[StripEntry<'_>], size: u32) -> Element<'a, Message> {
    let edge = size as f32;

    let items = entries.iter().map(|entry| {
        let content: Element<'a, Message> = match entry.thumbnail {
            Some(thumbnail) => container(
                image(thumbnail.handle.clone())
                    .width(Length::Fixed(thumbnail.width.min(size) as f32))
                    .height(Length::Fixed(thumbnail.height.min(size) as f32))
                    .content_fit(ContentFit::Contain),
            )
            .center(Length::Fixed(edge))
            .into(),
            None => {
                let label = if entry.failed {
                    entry.name.clone()
                } else {
                    "…".to_string()
                };
                container(text(label).size(12))
                    .center(Length::Fixed(edge))
                    .into()
            }
        };

        let style: fn(&Theme, button::Status) -> button::Style = if entry.active {
            button::primary
        } else {
            button::text
        };

        button(content)
            .on_press(Message::Jump(entry.index))
            .padding(4)
            .style(style)
            .into()
    });

    scrollable(Row::with_children(items).spacing(6).padding(6))
        .id(id())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill)
        .into()
}
