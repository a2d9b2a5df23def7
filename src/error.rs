// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),       // Creating the window failed (bad surface handle)
    WindowUpdate(String),     // Pushing the pixel buffer to the window failed
    GridGeometry(String),     // Cell width/height/gutter must all be positive
    UnknownAlgorithm(String), // A trigger asked for an algorithm nobody mounted
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::GridGeometry(s) => write!(f, "Grid geometry error: {s}"),
            Error::UnknownAlgorithm(s) => write!(f, "Unknown algorithm: {s}"),
        }
    }
}

impl std::error::Error for Error {}
