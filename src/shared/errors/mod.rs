// Shared errors
pub mod api_error;
pub mod store_error;

pub use api_error::*;
pub use store_error::*;
