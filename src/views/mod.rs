pub mod popup;

pub use popup::business_popup;
