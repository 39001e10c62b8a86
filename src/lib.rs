// Library surface for the binary and the headless integration tests.
pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod error;
pub mod progress;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod store;
pub mod trainer;
pub mod ui;
pub mod util;

pub use error::{Result, TutorError};
