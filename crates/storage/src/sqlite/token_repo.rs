use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{StorageError, TokenRepository};

use super::SqliteRepository;

#[async_trait]
impl TokenRepository for SqliteRepository {
    async fn load_token(&self) -> Result<Option<String>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT token
            FROM auth_token
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let token: String = row
            .try_get("token")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(token))
    }

    async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO auth_token (id, token, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                token = excluded.token,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(token)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear_token(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM auth_token WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
