// src/core/mod.rs

pub mod dom;
pub mod rich;
pub mod sanitize;

pub use rich::{RichText, Segment};
