//! One component per route

pub mod about;
pub mod amenities;
pub mod contact;
pub mod corporate;
mod event;
pub mod gallery;
pub mod home;
pub mod rooms;
pub mod weddings;

pub use about::AboutPage;
pub use amenities::AmenitiesPage;
pub use contact::ContactPage;
pub use corporate::CorporatePage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use rooms::RoomsPage;
pub use weddings::WeddingsPage;
