// Reaction domain models
pub mod reaction;

pub use reaction::*;
