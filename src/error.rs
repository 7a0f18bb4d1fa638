//! Error types for application startup.
//!
//! The simulation itself never fails; only creating the window can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// nannou could not build the main window.
    #[error("Failed to create window: {0}")]
    WindowCreation(String),
    /// The window was built but could not be looked up again.
    #[error("Window {0} is not available")]
    WindowNotFound(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
