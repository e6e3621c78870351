/// Session coordinator
///
/// Owns the gallery, the transform and the gesture tracker, and decides
/// which host requests to issue. It never performs I/O: every operation
/// returns the [`Effect`]s the application shell must run, and every host
/// response comes back through one of the `*_loaded` / `*_listed` methods.
///
/// Responses are tagged. Each picked image bumps a generation number and
/// each main-image request gets a ticket; a response carrying an outdated
/// tag is dropped so a slow, superseded request can never overwrite newer
/// state.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::host::{EncodedImage, Thumbnail};

use super::gallery::Gallery;
use super::gesture::{GestureTracker, PointerEvent};
use super::transform::{Transform, WheelDirection};

/// A host request the shell must carry out
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the native file chooser
    PickImage,
    /// Load an image for the main view
    LoadImage { ticket: u64, path: String },
    /// List the images next to `selected`
    ListDirectory {
        generation: u64,
        directory: String,
        selected: String,
    },
    /// Load one thumbnail of the strip
    LoadThumbnail {
        generation: u64,
        index: usize,
        path: String,
    },
    /// Scroll the strip so the entry at `index` is visible
    RevealThumbnail { index: usize, count: usize },
}

/// Load state of one strip entry
#[derive(Debug, Clone)]
pub enum ThumbnailSlot {
    Pending,
    Ready(Thumbnail),
    Failed,
}

#[derive(Debug)]
pub struct Session {
    gallery: Gallery,
    transform: Transform,
    gesture: GestureTracker,
    /// Image currently on screen; kept when a later load fails
    image: Option<EncodedImage>,
    thumbnails: Vec<ThumbnailSlot>,
    generation: u64,
    ticket: u64,
    /// Main-image failure, cleared by the next image that loads
    image_error: Option<String>,
    /// Directory failure for the current generation, cleared by the next pick
    gallery_error: Option<String>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            gallery: Gallery::new(),
            transform: Transform::new(config.zoom_step, config.min_zoom),
            gesture: GestureTracker::new(),
            image: None,
            thumbnails: Vec::new(),
            generation: 0,
            ticket: 0,
            image_error: None,
            gallery_error: None,
        }
    }

    // ========== Opening ==========

    pub fn select_new_image(&self) -> Vec<Effect> {
        vec![Effect::PickImage]
    }

    /// The file chooser closed; `None` means the user cancelled.
    pub fn image_picked(&mut self, path: Option<String>) -> Vec<Effect> {
        let Some(path) = path else {
            log::debug!("file selection cancelled");
            return Vec::new();
        };

        log::info!("opening {}", path);
        let mut effects = self.display(&path);

        // Any listing still in flight belongs to the previous pick
        self.generation += 1;
        self.gallery_error = None;

        match resolve_directory(&path) {
            Ok(directory) => effects.push(Effect::ListDirectory {
                generation: self.generation,
                directory,
                selected: path,
            }),
            Err(e) => self.fail_gallery(e),
        }

        effects
    }

    /// Request `path` for the main view.
    pub fn display(&mut self, path: &str) -> Vec<Effect> {
        self.ticket += 1;
        vec![Effect::LoadImage {
            ticket: self.ticket,
            path: path.to_string(),
        }]
    }

    pub fn image_loaded(&mut self, ticket: u64, result: Result<EncodedImage>) {
        if ticket != self.ticket {
            log::debug!("dropping stale image response (ticket {})", ticket);
            return;
        }

        match result {
            Ok(image) => {
                log::debug!("showing {} ({})", image.path, image.mime);
                self.image = Some(image);
                self.transform.reset();
                self.image_error = None;
            }
            Err(e) => {
                log::warn!("{}", e);
                self.image_error = Some(e.to_string());
            }
        }
    }

    pub fn directory_listed(
        &mut self,
        generation: u64,
        selected: &str,
        result: Result<Vec<String>>,
    ) -> Vec<Effect> {
        if generation != self.generation {
            log::debug!("dropping stale directory listing (generation {})", generation);
            return Vec::new();
        }

        let images = match result {
            Ok(images) => images,
            Err(e) => {
                self.fail_gallery(e);
                return Vec::new();
            }
        };

        self.gallery.load(images, selected);
        self.thumbnails = vec![ThumbnailSlot::Pending; self.gallery.len()];
        log::info!("{} images in gallery", self.gallery.len());

        // Issued in list order; they may complete in any order
        let mut effects: Vec<Effect> = self
            .gallery
            .images()
            .iter()
            .enumerate()
            .map(|(index, path)| Effect::LoadThumbnail {
                generation: self.generation,
                index,
                path: path.clone(),
            })
            .collect();

        if let Some(index) = self.gallery.current_index() {
            effects.push(Effect::RevealThumbnail {
                index,
                count: self.gallery.len(),
            });
        }

        effects
    }

    pub fn thumbnail_loaded(&mut self, generation: u64, index: usize, result: Result<Thumbnail>) {
        if generation != self.generation {
            log::debug!("dropping thumbnail {} of generation {}", index, generation);
            return;
        }
        let Some(slot) = self.thumbnails.get_mut(index) else {
            return;
        };

        *slot = match result {
            Ok(thumbnail) => ThumbnailSlot::Ready(thumbnail),
            Err(e) => {
                log::warn!("thumbnail unavailable: {}", e);
                ThumbnailSlot::Failed
            }
        };
    }

    // ========== Navigation ==========

    pub fn go_to(&mut self, index: usize) -> Vec<Effect> {
        let path = self.gallery.jump(index).map(str::to_owned);
        self.navigate(path)
    }

    pub fn go_next(&mut self) -> Vec<Effect> {
        let path = self.gallery.next().map(str::to_owned);
        self.navigate(path)
    }

    pub fn go_previous(&mut self) -> Vec<Effect> {
        let path = self.gallery.previous().map(str::to_owned);
        self.navigate(path)
    }

    fn navigate(&mut self, path: Option<String>) -> Vec<Effect> {
        let (Some(path), Some(index)) = (path, self.gallery.current_index()) else {
            return Vec::new();
        };

        let mut effects = self.display(&path);
        effects.push(Effect::RevealThumbnail {
            index,
            count: self.gallery.len(),
        });
        effects
    }

    // ========== Zoom & pan ==========

    pub fn zoom_in(&mut self) {
        self.transform.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.transform.zoom_out();
    }

    pub fn reset_transform(&mut self) {
        self.transform.reset();
    }

    pub fn wheel(&mut self, direction: WheelDirection) {
        self.transform.apply_wheel(direction);
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        self.gesture.handle(event, &mut self.transform);
    }

    // ========== Accessors ==========

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        self.image.as_ref()
    }

    pub fn thumbnails(&self) -> &[ThumbnailSlot] {
        &self.thumbnails
    }

    /// Failure to show in the status line, image errors first
    pub fn notice(&self) -> Option<&str> {
        self.image_error
            .as_deref()
            .or(self.gallery_error.as_deref())
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// The new image has no usable gallery: drop the previous directory's
    /// list so the strip and status line stop pointing at it.
    fn fail_gallery(&mut self, error: Error) {
        log::warn!("{}", error);
        self.gallery = Gallery::new();
        self.thumbnails.clear();
        self.gallery_error = Some(error.to_string());
    }
}

/// Directory part of an image path.
///
/// The platform separator is tried first, then the other common one, so a
/// path written with either style resolves. A path with no separator at
/// all cannot be resolved.
pub fn resolve_directory(path: &str) -> Result<String> {
    let native = std::path::MAIN_SEPARATOR;
    let alternate = if native == '\\' { '/' } else { '\\' };

    let (index, separator) = path
        .rfind(native)
        .map(|i| (i, native))
        .or_else(|| path.rfind(alternate).map(|i| (i, alternate)))
        .ok_or_else(|| Error::UnresolvableDirectory(path.to_string()))?;

    let directory = &path[..index];
    if directory.is_empty() {
        // "/photo.png"
        return Ok(separator.to_string());
    }
    if directory.ends_with(':') {
        // "C:\photo.png"
        return Ok(format!("{}{}", directory, separator));
    }
    Ok(directory.to_string())
}
