// Social domain models (comments, subscriptions, views)
pub mod social;

pub use social::*;
