pub mod config_io;
pub mod discover;
pub mod scan;
