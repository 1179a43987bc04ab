pub mod cli;
pub mod config;
pub mod device;
pub mod panel;
