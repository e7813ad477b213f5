use async_trait::async_trait;

use crate::error::AppError;

use super::{
    db::SurrealDbClient,
    types::{guru::Guru, StoredObject},
};

/// Minimal document-store capability the guidance service depends on.
///
/// Two generic operations plus the one filtered query the service needs.
/// Implementations must raise on failure; callers decide whether a failure
/// is fatal or degrades to fallback behavior.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into its table.
    async fn insert<T>(&self, item: T) -> Result<(), AppError>
    where
        T: StoredObject + Send + Sync + 'static;

    /// Return every document in the item's table.
    async fn list_all<T>(&self) -> Result<Vec<T>, AppError>
    where
        T: StoredObject + Send + Sync + 'static;

    /// Find guru records whose archetype or record id equals `guru_id`.
    async fn find_gurus(&self, guru_id: &str) -> Result<Vec<Guru>, AppError>;
}

#[async_trait]
impl DocumentStore for SurrealDbClient {
    async fn insert<T>(&self, item: T) -> Result<(), AppError>
    where
        T: StoredObject + Send + Sync + 'static,
    {
        self.store_item(item).await?;
        Ok(())
    }

    async fn list_all<T>(&self) -> Result<Vec<T>, AppError>
    where
        T: StoredObject + Send + Sync + 'static,
    {
        Ok(self.get_all_stored_items().await?)
    }

    async fn find_gurus(&self, guru_id: &str) -> Result<Vec<Guru>, AppError> {
        let gurus: Vec<Guru> = self
            .client
            .query(
                "SELECT * FROM type::table($table) \
                 WHERE archetype = $guru_id OR id = type::thing($table, $guru_id)",
            )
            .bind(("table", Guru::table_name()))
            .bind(("guru_id", guru_id.to_string()))
            .await?
            .take(0)?;

        Ok(gurus)
    }
}
