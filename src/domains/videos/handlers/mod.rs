pub mod video_handler;
