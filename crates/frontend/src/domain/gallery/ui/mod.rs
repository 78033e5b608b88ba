pub mod view;

pub use view::Gallery;
