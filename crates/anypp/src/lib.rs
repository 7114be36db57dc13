//! Command-line front end for `anypp-convert`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
