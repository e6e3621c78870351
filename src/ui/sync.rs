/// View sync
///
/// A read-only projection of the [`Session`] for one render pass. Nothing
/// here is stored between frames; the widgets are rebuilt from it every
/// time iced asks for a view.

use crate::host::{EncodedImage, Thumbnail};
use crate::state::session::{Session, ThumbnailSlot};
use crate::state::transform::Transform;

/// One entry of the thumbnail strip
#[derive(Debug, Clone)]
pub struct StripEntry<'a> {
    pub index: usize,
    /// File name shown while the thumbnail loads or when it failed
    pub name: String,
    pub active: bool,
    pub thumbnail: Option<&'a Thumbnail>,
    pub failed: bool,
}

#[derive(Debug, Clone)]
pub struct Projection<'a> {
    pub image: Option<&'a EncodedImage>,
    pub transform: Transform,
    pub zoom_label: String,
    pub strip: Vec<StripEntry<'a>>,
    pub active: Option<usize>,
    pub status: String,
    pub dragging: bool,
}

pub fn project(session: &Session) -> Projection<'_> {
    let gallery = session.gallery();
    let active = gallery.current_index();

    let strip = gallery
        .images()
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let slot = session.thumbnails().get(index);
            StripEntry {
                index,
                name: file_name(path).to_string(),
                active: active == Some(index),
                thumbnail: match slot {
                    Some(ThumbnailSlot::Ready(thumbnail)) => Some(thumbnail),
                    _ => None,
                },
                failed: matches!(slot, Some(ThumbnailSlot::Failed)),
            }
        })
        .collect();

    Projection {
        image: session.image(),
        transform: *session.transform(),
        zoom_label: session.transform().zoom_label(),
        strip,
        active,
        status: status_line(session),
        dragging: session.is_dragging(),
    }
}

/// "2 / 3  /a/2.png", or the last failure
fn status_line(session: &Session) -> String {
    if let Some(notice) = session.notice() {
        return notice.to_string();
    }

    let gallery = session.gallery();
    match (gallery.current_index(), gallery.current_path()) {
        (Some(index), Some(path)) => format!("{} / {}  {}", index + 1, gallery.len(), path),
        _ => match session.image() {
            Some(image) => image.path.clone(),
            None => "Open an image to start browsing".to_string(),
        },
    }
}

/// Horizontal scroll position, as a fraction of the strip, that brings
/// entry `index` of `count` into view
pub fn reveal_offset(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    (index.min(count - 1) as f32 / (count - 1) as f32).clamp(0.0, 1.0)
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
