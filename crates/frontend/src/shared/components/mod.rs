pub mod page_hero;
pub mod ui;

pub use page_hero::{PageHero, SectionTitle};
