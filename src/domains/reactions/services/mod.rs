// Reaction domain services
pub mod reaction_service;
pub mod state;

pub use reaction_service::*;
pub use state::*;
