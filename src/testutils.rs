//! Shared test helpers.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::state::AppState;
use crate::store::BookStore;

/// State over a lazy pool pointed at a port nothing listens on. Paths that
/// never reach the database run normally; anything that does fails fast
/// (the short acquire timeout keeps that failure bounded).
pub(crate) fn disconnected_state() -> AppState {
    let opts = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("nobody")
        .database("nowhere");
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy_with(opts);
    AppState { store: BookStore::new(pool) }
}
