//! Download and format conversion for ytthumb

pub mod converter;

pub use converter::*;
