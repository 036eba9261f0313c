//! Schema auto-migration: reconcile the `books` table at startup.

use sqlx::PgPool;

const CREATE_BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL DEFAULT '',
    author TEXT NOT NULL DEFAULT '',
    publisher TEXT NOT NULL DEFAULT '',
    publish_date DATE,
    page_count INTEGER NOT NULL DEFAULT 0
)
"#;

/// Ensure the `books` table exists. Idempotent; called once at startup and
/// fatal to the process if it fails.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_BOOKS_TABLE).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_is_idempotent_and_covers_every_column() {
        assert!(CREATE_BOOKS_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_BOOKS_TABLE.contains("books"));
        for col in ["id", "title", "author", "publisher", "publish_date", "page_count"] {
            assert!(CREATE_BOOKS_TABLE.contains(col), "missing column {}", col);
        }
        assert!(CREATE_BOOKS_TABLE.contains("BIGSERIAL PRIMARY KEY"));
    }
}
