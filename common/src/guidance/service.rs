use std::sync::Arc;

use tracing::warn;

use crate::{
    error::AppError,
    storage::{
        store::DocumentStore,
        types::{
            conversation::Conversation,
            guru::{DefaultGuru, Guru, GuruProfile},
            message::{Message, MessageRole},
        },
    },
};

use super::reply::synthesize_reply;

/// Conversation identifier handed out when nothing could be persisted.
/// Signals "this conversation was not durably recorded".
pub const EPHEMERAL_CONVERSATION_ID: &str = "temp-session";

/// One inbound exchange request.
#[derive(Debug, Clone)]
pub struct AskRequest {
    pub conversation_id: Option<String>,
    pub guru_id: String,
    pub user_message: String,
    pub user_name: Option<String>,
}

/// The result of a handled exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutcome {
    pub conversation_id: String,
    pub reply: String,
}

/// A guru resolved either from the store or from the built-in table.
#[derive(Debug, Clone)]
pub enum ResolvedGuru {
    Stored(Guru),
    Default(&'static DefaultGuru),
}

impl ResolvedGuru {
    pub fn style_archetype(&self) -> &str {
        match self {
            ResolvedGuru::Stored(guru) => guru.style_archetype(),
            ResolvedGuru::Default(default) => default.archetype,
        }
    }
}

/// Resolves gurus, synthesizes replies and persists exchanges.
///
/// Store failures never fail a request: resolution and listing fall back to
/// the built-in guru table, persistence falls back to an ephemeral
/// conversation id. The only error surfaced to callers is an unresolvable
/// guru.
#[derive(Clone)]
pub struct GuidanceService<S> {
    store: Arc<S>,
    defaults: &'static [DefaultGuru],
}

impl<S: DocumentStore> GuidanceService<S> {
    pub fn new(store: Arc<S>, defaults: &'static [DefaultGuru]) -> Self {
        Self { store, defaults }
    }

    /// Resolve `guru_id` against stored records first, then the built-in
    /// table. A store failure is logged and treated as "no stored match".
    pub async fn resolve_guru(&self, guru_id: &str) -> Result<ResolvedGuru, AppError> {
        match self.store.find_gurus(guru_id).await {
            Ok(mut matches) if !matches.is_empty() => {
                return Ok(ResolvedGuru::Stored(matches.remove(0)));
            }
            Ok(_) => {}
            Err(err) => {
                warn!(guru_id, error = %err, "guru lookup failed, checking built-in defaults");
            }
        }

        self.defaults
            .iter()
            .find(|default| default.archetype == guru_id)
            .map(ResolvedGuru::Default)
            .ok_or_else(|| AppError::NotFound("Guru not found".to_string()))
    }

    /// List every known guru. Never fails: an empty store is seeded with the
    /// built-in table first, an unreachable store is answered with the
    /// built-in table directly (unpersisted, so without ids).
    pub async fn list_gurus(&self) -> Vec<GuruProfile> {
        match self.store.list_all::<Guru>().await {
            Ok(stored) if stored.is_empty() => {
                self.seed_defaults().await;
                match self.store.list_all::<Guru>().await {
                    Ok(seeded) => seeded.into_iter().map(GuruProfile::from).collect(),
                    Err(err) => {
                        warn!(error = %err, "guru listing failed after seeding, serving built-in defaults");
                        self.default_profiles()
                    }
                }
            }
            Ok(stored) => stored.into_iter().map(GuruProfile::from).collect(),
            Err(err) => {
                warn!(error = %err, "guru listing failed, serving built-in defaults");
                self.default_profiles()
            }
        }
    }

    /// Handle one exchange: resolve the guru, synthesize the reply, persist
    /// the conversation and both messages best-effort.
    ///
    /// Only an unresolvable guru is an error. Any persistence failure leaves
    /// the reply intact; when no conversation record exists at that point the
    /// ephemeral id is returned instead.
    pub async fn handle_ask(&self, request: AskRequest) -> Result<AskOutcome, AppError> {
        let guru = self.resolve_guru(&request.guru_id).await?;
        let reply = synthesize_reply(guru.style_archetype(), &request.user_message);

        let mut conversation_id = request.conversation_id.clone();
        let mut store_usable = true;

        if conversation_id.is_none() {
            let conversation =
                Conversation::new(request.guru_id.clone(), request.user_name.clone());
            match self.store.insert(conversation.clone()).await {
                Ok(()) => conversation_id = Some(conversation.id),
                Err(err) => {
                    warn!(guru_id = %request.guru_id, error = %err, "failed to create conversation, reply will not be persisted");
                    store_usable = false;
                }
            }
        }

        if store_usable {
            if let Some(id) = conversation_id.as_deref() {
                self.persist_messages(id, &request, &reply).await;
            }
        }

        let conversation_id =
            conversation_id.unwrap_or_else(|| EPHEMERAL_CONVERSATION_ID.to_string());

        Ok(AskOutcome {
            conversation_id,
            reply,
        })
    }

    /// Write the user message, then the guru message. The guru message is
    /// only attempted when the user message was written, so a conversation
    /// never holds a reply without the question that produced it.
    async fn persist_messages(&self, conversation_id: &str, request: &AskRequest, reply: &str) {
        let user_message = Message::new(
            conversation_id.to_string(),
            MessageRole::User,
            request.user_message.clone(),
            request.guru_id.clone(),
        );
        if let Err(err) = self.store.insert(user_message).await {
            warn!(conversation_id, error = %err, "failed to persist user message, skipping guru message");
            return;
        }

        let guru_message = Message::new(
            conversation_id.to_string(),
            MessageRole::Guru,
            reply.to_string(),
            request.guru_id.clone(),
        );
        if let Err(err) = self.store.insert(guru_message).await {
            warn!(conversation_id, error = %err, "failed to persist guru message");
        }
    }

    async fn seed_defaults(&self) {
        // Intentional idempotent seed: each write's failure is logged and
        // discarded so one bad write doesn't block the rest.
        for default in self.defaults {
            if let Err(err) = self.store.insert(default.to_guru()).await {
                warn!(archetype = default.archetype, error = %err, "failed to seed default guru");
            }
        }
    }

    fn default_profiles(&self) -> Vec<GuruProfile> {
        self.defaults.iter().map(GuruProfile::from).collect()
    }
}
