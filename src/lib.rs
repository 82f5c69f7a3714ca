//! sigtop: a full-screen process list that sends signals to the selected process.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod list;
pub mod system;
pub mod terminal;
pub mod ui;

pub use error::{Error, Result};
