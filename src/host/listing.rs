use std::path::Path;
use tokio::task;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List the image files directly inside `directory`, sorted by file name.
///
/// Subdirectories are not descended into. An empty directory string yields
/// an empty list rather than listing the working directory.
pub async fn list_images_in_directory(
    directory: String,
    extensions: Vec<String>,
) -> Result<Vec<String>> {
    task::spawn_blocking(move || list_images_blocking(&directory, &extensions))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

/// Blocking implementation of the directory listing
pub fn list_images_blocking(directory: &str, extensions: &[String]) -> Result<Vec<String>> {
    if directory.is_empty() {
        return Ok(Vec::new());
    }

    let metadata = std::fs::metadata(directory).map_err(|e| Error::list(directory, e))?;
    if !metadata.is_dir() {
        return Err(Error::list(directory, "not a directory"));
    }

    let paths: Vec<String> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && has_image_extension(entry.path(), extensions))
        .map(|entry| entry.path().to_string_lossy().into_owned())
        .collect();

    log::debug!("{} images in {}", paths.len(), directory);

    Ok(paths)
}

fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|allowed| *allowed == ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_lists_only_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "c.webp");
        touch(dir.path(), "a.PNG");
        touch(dir.path(), "b.jpeg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "no_extension");
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "deep.png");

        let root = dir.path().to_string_lossy().into_owned();
        let paths = list_images_blocking(&root, &Config::default().extensions).unwrap();

        let expected: Vec<String> = ["a.PNG", "b.jpeg", "c.webp"]
            .iter()
            .map(|name| dir.path().join(name).to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_empty_directory_string_lists_nothing() {
        let paths = list_images_blocking("", &Config::default().extensions).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = list_images_blocking("/nonexistent/dir", &Config::default().extensions);
        assert!(matches!(result, Err(Error::List { .. })));
    }

    #[tokio::test]
    async fn test_async_listing_matches_blocking() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.png");
        touch(dir.path(), "2.gif");

        let root = dir.path().to_string_lossy().into_owned();
        let extensions = Config::default().extensions;
        let paths = list_images_in_directory(root.clone(), extensions.clone()).await.unwrap();
        assert_eq!(paths, list_images_blocking(&root, &extensions).unwrap());
        assert_eq!(paths.len(), 2);
    }
}
