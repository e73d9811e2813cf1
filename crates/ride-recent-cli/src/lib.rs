//! Command-line front end for the RIDE recent files list.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
