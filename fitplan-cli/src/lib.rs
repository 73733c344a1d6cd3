// Library exports for the fitplan CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
