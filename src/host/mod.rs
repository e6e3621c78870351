/// Host services
///
/// The viewer core never touches the file system or native dialogs itself.
/// It asks for one of these async services and reacts to the response:
/// - Native file chooser (picker.rs)
/// - Reading an image into a displayable handle (loader.rs)
/// - Listing the images that sit in a directory (listing.rs)

pub mod listing;
pub mod loader;
pub mod picker;

pub use loader::{EncodedImage, Thumbnail};
