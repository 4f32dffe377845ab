pub mod compile;
pub mod config;
pub mod watch;
