//! Core functionality for ytthumb

pub mod metadata;
pub mod thumbnail;
pub mod view;

pub use metadata::*;
pub use thumbnail::*;
pub use view::*;
