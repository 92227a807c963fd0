//! Courier Core — configuration, paths, and the user model shared by the
//! channel and CLI crates.

pub mod config;
pub mod user;
pub mod utils;

pub use user::{User, UserBuilder};
