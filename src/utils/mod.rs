// Utility functions

pub mod id;
pub mod logger;

pub use id::*;
pub use logger::*;
