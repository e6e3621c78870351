/// User interface module
///
/// - Main image surface with zoom and pan input (canvas.rs)
/// - Thumbnail strip (strip.rs)
/// - Per-frame projection of the session state (sync.rs)

pub mod canvas;
pub mod strip;
pub mod sync;
