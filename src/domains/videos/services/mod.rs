// Video domain services
pub mod video_service;
pub mod state;

pub use video_service::*;
pub use state::*;
