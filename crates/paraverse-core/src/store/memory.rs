//! In-memory universe store backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ParaverseError, Result};
use crate::universe::{ConversationEntry, Universe};

use super::UniverseStore;

/// An in-memory [`UniverseStore`] backed by a `RwLock`-guarded map.
///
/// The write lock is the per-id serialization point: concurrent appends to
/// the same universe queue on the lock and land in a single total order,
/// while readers of other universes proceed in parallel between writes.
#[derive(Default)]
pub struct InMemoryUniverseStore {
    universes: RwLock<HashMap<String, Universe>>,
}

impl InMemoryUniverseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored universes.
    pub async fn len(&self) -> usize {
        self.universes.read().await.len()
    }

    /// Whether the store holds no universes.
    pub async fn is_empty(&self) -> bool {
        self.universes.read().await.is_empty()
    }
}

#[async_trait]
impl UniverseStore for InMemoryUniverseStore {
    async fn put(&self, universe: Universe) -> Result<()> {
        let mut universes = self.universes.write().await;
        universes.insert(universe.id.clone(), universe);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Universe>> {
        let universes = self.universes.read().await;
        Ok(universes.get(id).cloned())
    }

    async fn append_conversation(&self, id: &str, entry: ConversationEntry) -> Result<()> {
        let mut universes = self.universes.write().await;
        let universe = universes
            .get_mut(id)
            .ok_or_else(|| ParaverseError::universe_not_found(id))?;
        universe.conversation_log.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn sample_universe(id: &str) -> Universe {
        Universe {
            id: id.to_string(),
            owner_id: "user-1".to_string(),
            base_profile: json!({"name": "Alex", "occupation": "teacher"}),
            divergence_point: Some("moved abroad in 2015".to_string()),
            generated_content: json!({"content": "In this universe..."}),
            created_at: chrono::Utc::now().to_rfc3339(),
            conversation_log: vec![],
        }
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = InMemoryUniverseStore::new();
        let universe = sample_universe("u-1");

        store.put(universe.clone()).await.unwrap();

        let loaded = store.get("u-1").await.unwrap().unwrap();
        assert_eq!(loaded, universe);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = InMemoryUniverseStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_to_unknown_id_fails() {
        let store = InMemoryUniverseStore::new();

        let result = store
            .append_conversation("missing", ConversationEntry::now("hi", "hello"))
            .await;

        assert!(matches!(
            result,
            Err(ParaverseError::UniverseNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_appends_preserve_order() {
        let store = InMemoryUniverseStore::new();
        store.put(sample_universe("u-1")).await.unwrap();

        store
            .append_conversation("u-1", ConversationEntry::now("first", "a"))
            .await
            .unwrap();
        store
            .append_conversation("u-1", ConversationEntry::now("second", "b"))
            .await
            .unwrap();

        let log = store.get("u-1").await.unwrap().unwrap().conversation_log;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].message, "first");
        assert_eq!(log[1].message, "second");
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(InMemoryUniverseStore::new());
        store.put(sample_universe("u-1")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .append_conversation(
                        "u-1",
                        ConversationEntry::now(format!("msg-{i}"), "reply"),
                    )
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let log = store.get("u-1").await.unwrap().unwrap().conversation_log;
        assert_eq!(log.len(), 16);
        // Every append is present exactly once, in some definite order.
        let mut messages: Vec<_> = log.iter().map(|e| e.message.clone()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), 16);
    }
}
