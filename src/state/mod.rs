/// State management module
///
/// Everything the viewer knows lives here, free of any window or file I/O:
/// - Ordered sibling list and current position (gallery.rs)
/// - Zoom and pan (transform.rs)
/// - Click-and-drag panning (gesture.rs)
/// - The coordinator tying them to the host services (session.rs)

pub mod gallery;
pub mod gesture;
pub mod session;
pub mod transform;
