// Video domain models
pub mod video;

pub use video::*;
