pub mod model;
pub mod view;

pub use model::EventPreset;
pub use view::EventEnquiryForm;
