//! HTTP handlers for the book endpoints.

pub mod books;
pub use books::*;
