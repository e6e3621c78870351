/// Open the native file chooser and return the chosen image path.
///
/// `None` means the user cancelled the dialog.
pub async fn pick_image_file(extensions: Vec<String>) -> Option<String> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Select Image")
        .add_filter("Images", extensions.as_slice())
        .add_filter("All files", &["*"])
        .pick_file()
        .await?;

    Some(handle.path().to_string_lossy().into_owned())
}
