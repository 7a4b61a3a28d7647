//! Crate error type
//!
//! Window creation is the only runtime failure; everything else the demo does
//! is infallible once the settings have been validated.

/// Errors surfaced while starting or running the demo.
#[derive(Debug)]
pub enum Error {
    /// Settings rejected by `Settings::validate` or failed to parse.
    InvalidSettings(String),

    /// Window or presentation surface could not be created.
    Window(String),

    /// The winit event loop could not be created or failed while running.
    EventLoop(winit::error::EventLoopError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            Self::Window(msg) => write!(f, "Couldn't create window and renderer: {}", msg),
            Self::EventLoop(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::EventLoopError> for Error {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::EventLoop(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidSettings(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
