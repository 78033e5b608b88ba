use thiserror::Error;

use super::catalog::{GalleryFilter, GalleryItem, GALLERY_ITEMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("photo {index} is outside the current view of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Filter and lightbox state of the gallery page.
///
/// The visible view is always derived from the full catalog; `current_index`
/// points into that view and is reset whenever the filter changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    items: &'static [GalleryItem],
    active: GalleryFilter,
    lightbox_open: bool,
    current_index: usize,
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new(&GALLERY_ITEMS)
    }
}

impl GalleryController {
    pub fn new(items: &'static [GalleryItem]) -> Self {
        Self {
            items,
            active: GalleryFilter::All,
            lightbox_open: false,
            current_index: 0,
        }
    }

    pub fn active(&self) -> GalleryFilter {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.lightbox_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Items of the given filter, in catalog order
    pub fn filter(&self, filter: GalleryFilter) -> Vec<&'static GalleryItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    pub fn visible(&self) -> Vec<&'static GalleryItem> {
        self.filter(self.active)
    }

    pub fn set_filter(&mut self, filter: GalleryFilter) {
        self.active = filter;
        self.current_index = 0;
        if self.visible().is_empty() {
            self.lightbox_open = false;
        }
    }

    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        let len = self.visible().len();
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        self.current_index = index;
        self.lightbox_open = true;
        Ok(())
    }

    pub fn close(&mut self) {
        self.lightbox_open = false;
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn current(&self) -> Option<&'static GalleryItem> {
        self.visible().get(self.current_index).copied()
    }

    /// Lightbox position, e.g. "3 / 8"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.visible().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::catalog::GalleryCategory;

    fn titles(items: &[&GalleryItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.title).collect()
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let gallery = GalleryController::default();
        assert_eq!(gallery.filter(GalleryFilter::All).len(), GALLERY_ITEMS.len());
        assert_eq!(
            titles(&gallery.filter(GalleryFilter::Only(GalleryCategory::Rooms))),
            vec!["Luxury Suite", "Executive Lounge"]
        );
        for category in GalleryCategory::ALL {
            assert!(gallery
                .filter(GalleryFilter::Only(category))
                .iter()
                .all(|item| item.category == category));
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut gallery = GalleryController::default();
        let len = gallery.visible().len();
        for start in 0..len {
            gallery.open(start).unwrap();
            for _ in 0..len {
                gallery.next();
            }
            assert_eq!(gallery.current_index(), start);
            for _ in 0..len {
                gallery.previous();
            }
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut gallery = GalleryController::default();
        gallery.open(0).unwrap();
        gallery.previous();
        assert_eq!(gallery.current_index(), 7);
        assert_eq!(gallery.counter(), "8 / 8");
        gallery.next();
        assert_eq!(gallery.current().map(|i| i.title), Some("Main Building"));
    }

    #[test]
    fn test_filter_change_resets_index() {
        let mut gallery = GalleryController::default();
        gallery.open(6).unwrap();
        gallery.set_filter(GalleryFilter::Only(GalleryCategory::Exterior));
        assert_eq!(gallery.current_index(), 0);
        assert!(gallery.current_index() < gallery.visible().len());
        assert_eq!(gallery.counter(), "1 / 2");
    }

    #[test]
    fn test_open_rejects_index_outside_view() {
        let mut gallery = GalleryController::default();
        gallery.set_filter(GalleryFilter::Only(GalleryCategory::Pool));
        assert_eq!(
            gallery.open(1),
            Err(GalleryError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_empty_view_closes_lightbox_and_ignores_navigation() {
        static ONLY_POOL: [GalleryItem; 1] = [GalleryItem {
            source: "pool.png",
            category: GalleryCategory::Pool,
            title: "Pool",
        }];
        let mut gallery = GalleryController::new(&ONLY_POOL);
        gallery.open(0).unwrap();
        gallery.set_filter(GalleryFilter::Only(GalleryCategory::Dining));
        assert!(!gallery.is_open());
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.current(), None);
    }
}
