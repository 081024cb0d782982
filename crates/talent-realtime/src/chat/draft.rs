//! Unsent message text, persisted per user and room.

use std::sync::Arc;

use talent_core::result::AppResult;
use talent_core::traits::KeyValueStore;
use talent_core::types::{RoomId, UserId};
use talent_storage::keys;

/// Drafts kept in the same key-value backend as the session tokens.
#[derive(Debug, Clone)]
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
}

impl DraftStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved draft, if any.
    pub fn load(&self, user: UserId, room: RoomId) -> AppResult<Option<String>> {
        Ok(self
            .store
            .get(&keys::chat_draft(user, room))?
            .filter(|d| !d.is_empty()))
    }

    /// Save a draft. An empty draft removes the entry.
    pub fn save(&self, user: UserId, room: RoomId, text: &str) -> AppResult<()> {
        let key = keys::chat_draft(user, room);
        if text.is_empty() {
            self.store.remove(&key)
        } else {
            self.store.set(&key, text)
        }
    }

    pub fn clear(&self, user: UserId, room: RoomId) -> AppResult<()> {
        self.store.remove(&keys::chat_draft(user, room))
    }
}

#[cfg(test)]
mod tests {
    use talent_storage::MemoryStore;

    use super::*;

    #[test]
    fn test_drafts_are_scoped_by_user_and_room() {
        let drafts = DraftStore::new(Arc::new(MemoryStore::new()));
        let (alice, bob) = (UserId::new(), UserId::new());
        let room = RoomId::new();

        drafts.save(alice, room, "half a thought").unwrap();
        assert_eq!(drafts.load(alice, room).unwrap().as_deref(), Some("half a thought"));
        assert_eq!(drafts.load(bob, room).unwrap(), None);
        assert_eq!(drafts.load(alice, RoomId::new()).unwrap(), None);
    }

    #[test]
    fn test_empty_save_removes() {
        let drafts = DraftStore::new(Arc::new(MemoryStore::new()));
        let (user, room) = (UserId::new(), RoomId::new());
        drafts.save(user, room, "x").unwrap();
        drafts.save(user, room, "").unwrap();
        assert_eq!(drafts.load(user, room).unwrap(), None);
    }
}
