/// The ordered list of sibling images and the current position in it.
///
/// The index is the single source of truth for "which image is current":
/// both the main view and the thumbnail highlight are derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    images: Vec<String>,
    /// `None` when the list is empty or the selected path was not listed
    current: Option<usize>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list and select `selected` if it is part of it.
    pub fn load(&mut self, images: Vec<String>, selected: &str) {
        self.current = images.iter().position(|path| path == selected);
        self.images = images;
    }

    /// Select the image at `index`.
    ///
    /// Returns the selected path, or `None` (leaving the selection untouched)
    /// when `index` is out of range.
    pub fn jump(&mut self, index: usize) -> Option<&str> {
        if index >= self.images.len() {
            return None;
        }
        self.current = Some(index);
        Some(&self.images[index])
    }

    /// Advance by one, wrapping to the first image past the end.
    pub fn next(&mut self) -> Option<&str> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        let index = match self.current {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.jump(index)
    }

    /// Step back by one, wrapping to the last image before the start.
    pub fn previous(&mut self) -> Option<&str> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        let index = match self.current {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.jump(index)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.map(|i| self.images[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gallery {
        let mut gallery = Gallery::new();
        gallery.load(
            vec![
                "/a/1.png".to_string(),
                "/a/2.png".to_string(),
                "/a/3.png".to_string(),
            ],
            "/a/2.png",
        );
        gallery
    }

    #[test]
    fn test_load_selects_matching_position() {
        let gallery = sample();
        assert_eq!(gallery.current_index(), Some(1));
        assert_eq!(gallery.current_path(), Some("/a/2.png"));
    }

    #[test]
    fn test_load_without_match_has_no_selection() {
        let mut gallery = sample();
        gallery.load(vec!["/b/x.png".to_string()], "/a/2.png");
        assert_eq!(gallery.current_index(), None);
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn test_browsing_wraps_both_ways() {
        let mut gallery = sample();

        assert_eq!(gallery.next(), Some("/a/3.png"));
        assert_eq!(gallery.current_index(), Some(2));
        assert_eq!(gallery.next(), Some("/a/1.png"));
        assert_eq!(gallery.current_index(), Some(0));
        assert_eq!(gallery.previous(), Some("/a/3.png"));
        assert_eq!(gallery.current_index(), Some(2));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut gallery = sample();
        for _ in 0..gallery.len() {
            gallery.next();
        }
        assert_eq!(gallery.current_index(), Some(1));

        for _ in 0..gallery.len() {
            gallery.previous();
        }
        assert_eq!(gallery.current_index(), Some(1));
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut gallery = sample();
        assert_eq!(gallery.jump(3), None);
        assert_eq!(gallery.jump(usize::MAX), None);
        assert_eq!(gallery.current_index(), Some(1));

        assert_eq!(gallery.jump(0), Some("/a/1.png"));
        assert_eq!(gallery.current_index(), Some(0));
    }

    #[test]
    fn test_empty_gallery_does_nothing() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.next(), None);
        assert_eq!(gallery.previous(), None);
        assert_eq!(gallery.jump(0), None);
        assert_eq!(gallery.current_index(), None);
    }

    #[test]
    fn test_navigation_without_selection_starts_at_an_edge() {
        let mut gallery = Gallery::new();
        gallery.load(vec!["/a/1.png".to_string(), "/a/2.png".to_string()], "/z.png");

        let mut forward = gallery.clone();
        assert_eq!(forward.next(), Some("/a/1.png"));
        assert_eq!(gallery.previous(), Some("/a/2.png"));
    }
}
