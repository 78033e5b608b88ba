use crate::shared::images;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryCategory {
    Exterior,
    Rooms,
    Pool,
    Amenities,
    Events,
    Dining,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 6] = [
        GalleryCategory::Exterior,
        GalleryCategory::Rooms,
        GalleryCategory::Pool,
        GalleryCategory::Amenities,
        GalleryCategory::Events,
        GalleryCategory::Dining,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            GalleryCategory::Exterior => "exterior",
            GalleryCategory::Rooms => "rooms",
            GalleryCategory::Pool => "pool",
            GalleryCategory::Amenities => "amenities",
            GalleryCategory::Events => "events",
            GalleryCategory::Dining => "dining",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Exterior => "Exterior",
            GalleryCategory::Rooms => "Rooms",
            GalleryCategory::Pool => "Pool",
            GalleryCategory::Amenities => "Amenities",
            GalleryCategory::Events => "Events",
            GalleryCategory::Dining => "Dining",
        }
    }
}

/// Category filter of the gallery page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

impl GalleryFilter {
    /// Filter buttons in display order
    pub fn options() -> Vec<GalleryFilter> {
        std::iter::once(GalleryFilter::All)
            .chain(GalleryCategory::ALL.into_iter().map(GalleryFilter::Only))
            .collect()
    }

    pub fn code(&self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Only(category) => category.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: GalleryCategory) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(wanted) => *wanted == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub source: &'static str,
    pub category: GalleryCategory,
    pub title: &'static str,
}

pub static GALLERY_ITEMS: [GalleryItem; 8] = [
    GalleryItem {
        source: images::HERO,
        category: GalleryCategory::Exterior,
        title: "Main Building",
    },
    GalleryItem {
        source: images::AERIAL,
        category: GalleryCategory::Exterior,
        title: "Aerial View",
    },
    GalleryItem {
        source: images::POOL,
        category: GalleryCategory::Pool,
        title: "Swimming Pool",
    },
    GalleryItem {
        source: images::ROOM_SUITE,
        category: GalleryCategory::Rooms,
        title: "Luxury Suite",
    },
    GalleryItem {
        source: images::ROOM_LOUNGE,
        category: GalleryCategory::Rooms,
        title: "Executive Lounge",
    },
    GalleryItem {
        source: images::WEDDING,
        category: GalleryCategory::Events,
        title: "Wedding Setup",
    },
    GalleryItem {
        source: images::SPA,
        category: GalleryCategory::Amenities,
        title: "Spa & Wellness",
    },
    GalleryItem {
        source: images::DINING,
        category: GalleryCategory::Dining,
        title: "Fine Dining",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let codes: Vec<&str> = GalleryFilter::options().iter().map(|f| f.code()).collect();
        assert_eq!(
            codes,
            vec!["all", "exterior", "rooms", "pool", "amenities", "events", "dining"]
        );
    }

    #[test]
    fn test_every_category_has_a_photo() {
        for category in GalleryCategory::ALL {
            assert!(GALLERY_ITEMS.iter().any(|item| item.category == category));
        }
    }
}
