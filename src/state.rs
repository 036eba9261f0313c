//! Shared application state, passed into router construction. Handlers own
//! no globals; everything they need travels through here.

use crate::store::BookStore;

#[derive(Clone)]
pub struct AppState {
    pub store: BookStore,
}
