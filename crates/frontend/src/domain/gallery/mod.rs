//! Photo gallery: static catalog, filter/lightbox controller and its view

pub mod catalog;
pub mod controller;
pub mod ui;

pub use catalog::{GalleryCategory, GalleryFilter, GalleryItem, GALLERY_ITEMS};
pub use controller::{GalleryController, GalleryError};
