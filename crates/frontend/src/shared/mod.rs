pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod enquiry;
pub mod icons;
pub mod images;
pub mod modal;
pub mod resort;
pub mod toast;
