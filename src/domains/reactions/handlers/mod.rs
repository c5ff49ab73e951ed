pub mod reaction_handler;
