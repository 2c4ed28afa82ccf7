//! Utility functions for ytthumb

pub mod filename;
pub mod url;

pub use filename::*;
pub use self::url::*;
