//! Book routes, mounted under the `/api/v1` prefix.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{create_book, delete_book, get_book, home, list_books};
use crate::state::AppState;

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/create-books", post(create_book))
        .route("/delete-book/:id", delete(delete_book))
        .route("/get-books/:id", get(get_book))
        .route("/books", get(list_books))
        .with_state(state)
}
