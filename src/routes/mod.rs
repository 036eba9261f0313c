//! Route tables: the versioned book API and the operational endpoints.

pub mod books;
pub mod common;

pub use books::book_routes;
pub use common::common_routes;
