pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod render;

pub use error::{Result, ScoutError};
