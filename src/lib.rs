//! Library entry point for the codelaunch CLI.

pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod launcher;
pub mod model;
pub mod scanner;
pub mod utils;
