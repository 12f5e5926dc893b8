// Utils compartidos

pub mod constants;
pub mod html;

pub use constants::*;
pub use html::*;
