// Social repositories
pub mod comment_repository;
pub mod subscription_repository;
pub mod view_repository;

pub use comment_repository::*;
pub use subscription_repository::*;
pub use view_repository::*;
