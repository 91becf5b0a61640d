#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]

pub mod cli;
pub mod error;
pub mod index;
pub mod model;
pub mod render;
pub mod storage;
