// Domain modules
pub mod auth;
pub mod videos;
pub mod reactions;
pub mod social;
