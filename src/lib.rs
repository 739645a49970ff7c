// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod specs;

pub mod file;
pub mod gui;
pub mod progress;
pub mod render;
