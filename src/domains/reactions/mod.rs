// Reaction domain module (Rating Engine)
pub mod handlers;
pub mod services;
pub mod models;
pub mod routes;
