//! classgrid client: file intake, configuration, output rendering.

pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
pub mod render;
