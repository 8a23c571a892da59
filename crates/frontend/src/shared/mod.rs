pub mod api_utils;
pub mod collection;
pub mod components;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod theme;
