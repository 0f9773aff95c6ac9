pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod fs_util;
pub mod launcher;
pub mod load_config;
pub mod path_filter;
pub mod pipeline;
pub mod steps;
