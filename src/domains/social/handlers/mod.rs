pub mod social_handler;
