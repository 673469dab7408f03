pub mod build_info;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod model;
pub mod ordering;
pub mod output;
pub mod prompt;
pub mod store;
