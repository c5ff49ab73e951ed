// Social domain services
pub mod comment_service;
pub mod subscription_service;
pub mod view_service;
pub mod state;

pub use comment_service::*;
pub use subscription_service::*;
pub use view_service::*;
pub use state::*;
