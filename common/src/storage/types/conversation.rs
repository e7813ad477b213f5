use uuid::Uuid;

use crate::{error::AppError, storage::db::SurrealDbClient, stored_object};

use super::message::Message;

stored_object!(Conversation, "conversation", {
    guru_id: String,
    user_name: Option<String>,
    title: Option<String>
});

impl Conversation {
    pub fn new(guru_id: String, user_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            guru_id,
            user_name,
            title: None,
        }
    }

    /// All messages belonging to a conversation, oldest first.
    pub async fn messages(
        conversation_id: &str,
        db: &SurrealDbClient,
    ) -> Result<Vec<Message>, AppError> {
        let messages: Vec<Message> = db
            .client
            .query("SELECT * FROM type::table($table_name) WHERE conversation_id = $conversation_id ORDER BY created_at")
            .bind(("table_name", Message::table_name()))
            .bind(("conversation_id", conversation_id.to_string()))
            .await?
            .take(0)?;

        Ok(messages)
    }
}
