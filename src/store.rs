//! Persistence client: the only layer that talks to PostgreSQL.

use sqlx::PgPool;

use crate::model::{Book, NewBook};

const INSERT_BOOK: &str = "INSERT INTO books (title, author, publisher, publish_date, page_count) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, title, author, publisher, publish_date, page_count";

// The id arrives as a raw path segment; the cast happens in the database so
// a non-numeric id fails the same way any other bad query does.
const SELECT_BOOK: &str =
    "SELECT id, title, author, publisher, publish_date, page_count FROM books WHERE id = $1::bigint";

const SELECT_BOOKS: &str =
    "SELECT id, title, author, publisher, publish_date, page_count FROM books";

const DELETE_BOOK: &str = "DELETE FROM books WHERE id = $1::bigint";

/// Thin typed wrapper over the shared connection pool. Cloning is cheap;
/// every handler gets one through [`crate::state::AppState`].
#[derive(Clone)]
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    pub fn new(pool: PgPool) -> Self {
        BookStore { pool }
    }

    /// Insert a book; the database assigns the id. Returns the created row.
    pub async fn insert(&self, book: &NewBook) -> Result<Book, sqlx::Error> {
        tracing::debug!(sql = INSERT_BOOK, "query");
        sqlx::query_as::<_, Book>(INSERT_BOOK)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.publisher)
            .bind(book.publish_date)
            .bind(book.page_count)
            .fetch_one(&self.pool)
            .await
    }

    /// Fetch one book by id. A missing row surfaces as `RowNotFound`, which
    /// callers report like any other persistence failure.
    pub async fn fetch(&self, id: &str) -> Result<Book, sqlx::Error> {
        tracing::debug!(sql = SELECT_BOOK, %id, "query");
        sqlx::query_as::<_, Book>(SELECT_BOOK).bind(id).fetch_one(&self.pool).await
    }

    /// Fetch all books in database-determined order.
    pub async fn fetch_all(&self) -> Result<Vec<Book>, sqlx::Error> {
        tracing::debug!(sql = SELECT_BOOKS, "query");
        sqlx::query_as::<_, Book>(SELECT_BOOKS).fetch_all(&self.pool).await
    }

    /// Delete by id. The affected-row count is not inspected: deleting an
    /// id that never existed succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = DELETE_BOOK, %id, "query");
        sqlx::query(DELETE_BOOK).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    /// Liveness probe for the readiness route.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
