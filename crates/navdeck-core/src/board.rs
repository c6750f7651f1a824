//! Board store — the gateway between the API and the key-value backend.
//!
//! The whole board lives in two JSON documents: the card list under
//! [`CARDS_KEY`] and the group list under [`GROUPS_KEY`]. Each document is
//! one JSON array; array order is display order. Every mutation is a
//! read-modify-write of the full document with no compare-and-swap — two
//! admins racing between read and write lose one update, and the last
//! writer wins. That window is accepted, not mitigated.
//!
//! Documents are created lazily: the first read of an absent key writes a
//! seed document and returns it. A present-but-undecodable document reads
//! as an empty list (logged, never surfaced to the caller).

use std::sync::Arc;

use navdeck_storage::StorageBackend;
use tracing::{info, warn};

use crate::card::{reorder, Card, CardDraft, CardPatch};
use crate::error::BoardError;

/// Storage key for the card list document.
pub const CARDS_KEY: &str = "nav/cards";

/// Storage key for the group list document.
pub const GROUPS_KEY: &str = "nav/groups";

/// Reads and writes the two board documents through a storage backend.
#[derive(Clone)]
pub struct BoardStore {
    storage: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore").finish_non_exhaustive()
    }
}

fn seed_cards() -> Vec<Card> {
    vec![
        CardDraft {
            title: Some("GitHub".to_owned()),
            url: Some("https://github.com".to_owned()),
            desc: "Where the code lives".to_owned(),
            tags: vec!["code".to_owned()],
            group: Some("General".to_owned()),
            color: Some("#3B82F6".to_owned()),
        }
        .into_card(),
        CardDraft {
            title: Some("Rust".to_owned()),
            url: Some("https://www.rust-lang.org".to_owned()),
            desc: "Language home and docs".to_owned(),
            tags: vec!["docs".to_owned()],
            group: Some("General".to_owned()),
            color: Some("#F59E0B".to_owned()),
        }
        .into_card(),
    ]
}

fn seed_groups() -> Vec<String> {
    vec!["General".to_owned()]
}

fn encode<T: serde::Serialize>(doc: &'static str, value: &T) -> Result<Vec<u8>, BoardError> {
    serde_json::to_vec(value).map_err(|e| BoardError::Encode {
        doc,
        reason: e.to_string(),
    })
}

impl BoardStore {
    /// Create a board store on top of the given backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Read the card list.
    ///
    /// An absent document is seeded (written and returned); an undecodable
    /// document reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn read_cards(&self) -> Result<Vec<Card>, BoardError> {
        match self.storage.get(CARDS_KEY).await? {
            None => {
                let seeds = seed_cards();
                self.storage.put(CARDS_KEY, &encode("cards", &seeds)?).await?;
                info!(count = seeds.len(), "seeded card document");
                Ok(seeds)
            }
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(cards) => Ok(cards),
                Err(e) => {
                    warn!(error = %e, "card document undecodable, treating as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Read the group list. Same contract as [`read_cards`](Self::read_cards).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn read_groups(&self) -> Result<Vec<String>, BoardError> {
        match self.storage.get(GROUPS_KEY).await? {
            None => {
                let seeds = seed_groups();
                self.storage
                    .put(GROUPS_KEY, &encode("groups", &seeds)?)
                    .await?;
                info!(count = seeds.len(), "seeded group document");
                Ok(seeds)
            }
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(groups) => Ok(groups),
                Err(e) => {
                    warn!(error = %e, "group document undecodable, treating as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Overwrite the card document unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn write_cards(&self, cards: &[Card]) -> Result<(), BoardError> {
        self.storage.put(CARDS_KEY, &encode("cards", &cards)?).await?;
        Ok(())
    }

    /// Overwrite the group document unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn write_groups(&self, groups: &[String]) -> Result<(), BoardError> {
        self.storage
            .put(GROUPS_KEY, &encode("groups", &groups)?)
            .await?;
        Ok(())
    }

    /// Append a new card built from `draft` and persist the full list.
    /// Returns the created card (fresh id, palette color when omitted).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn add_card(&self, draft: CardDraft) -> Result<Card, BoardError> {
        let mut cards = self.read_cards().await?;
        let card = draft.into_card();
        cards.push(card.clone());
        self.write_cards(&cards).await?;
        Ok(card)
    }

    /// Shallow-merge `patch` over the card with the given id and persist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] if no card has that id, or
    /// [`BoardError::Storage`] if the backend fails.
    pub async fn update_card(&self, id: &str, patch: CardPatch) -> Result<Card, BoardError> {
        let mut cards = self.read_cards().await?;
        let Some(card) = cards.iter_mut().find(|c| c.id == id) else {
            return Err(BoardError::NotFound { id: id.to_owned() });
        };
        card.apply(patch);
        let updated = card.clone();
        self.write_cards(&cards).await?;
        Ok(updated)
    }

    /// Remove the card with the given id and persist. Idempotent — deleting
    /// an id that is not present still rewrites and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn delete_card(&self, id: &str) -> Result<(), BoardError> {
        let mut cards = self.read_cards().await?;
        cards.retain(|c| c.id != id);
        self.write_cards(&cards).await
    }

    /// Rebuild the stored list in the order given by `ids` and persist.
    /// Unknown ids are dropped; cards not named are removed (see
    /// [`reorder`]).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn reorder_cards(&self, ids: &[String]) -> Result<(), BoardError> {
        let cards = self.read_cards().await?;
        let reordered = reorder(cards, ids);
        self.write_cards(&reordered).await
    }

    /// Replace the card document verbatim with a client-supplied array,
    /// trusting client-computed order and membership.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn replace_cards(&self, cards: Vec<Card>) -> Result<(), BoardError> {
        self.write_cards(&cards).await
    }

    /// Replace the group document verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn replace_groups(&self, groups: Vec<String>) -> Result<(), BoardError> {
        self.write_groups(&groups).await
    }

    /// Remove a group and cascade: every card whose `group` equals `name`
    /// is removed from the card document. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn delete_group(&self, name: &str) -> Result<(), BoardError> {
        let mut groups = self.read_groups().await?;
        groups.retain(|g| g != name);
        self.write_groups(&groups).await?;

        let mut cards = self.read_cards().await?;
        let before = cards.len();
        cards.retain(|c| c.group.as_deref() != Some(name));
        if cards.len() != before {
            info!(group = name, removed = before - cards.len(), "group cascade");
        }
        self.write_cards(&cards).await
    }

    /// Delete both documents so the next read re-seeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the backend fails.
    pub async fn reset(&self) -> Result<(), BoardError> {
        self.storage.delete(CARDS_KEY).await?;
        self.storage.delete(GROUPS_KEY).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use navdeck_storage::MemoryBackend;

    use super::*;

    fn store() -> BoardStore {
        BoardStore::new(Arc::new(MemoryBackend::new()))
    }

    fn draft(title: &str, group: Option<&str>) -> CardDraft {
        CardDraft {
            title: Some(title.to_owned()),
            url: Some(format!("https://{title}.example")),
            group: group.map(str::to_owned),
            ..CardDraft::default()
        }
    }

    #[tokio::test]
    async fn first_read_seeds_and_persists() {
        let store = store();
        let first = store.read_cards().await.unwrap();
        assert!(!first.is_empty());
        let second = store.read_cards().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn groups_seed_once() {
        let store = store();
        let first = store.read_groups().await.unwrap();
        assert_eq!(first, vec!["General".to_owned()]);
        assert_eq!(store.read_groups().await.unwrap(), first);
    }

    #[tokio::test]
    async fn empty_document_is_not_reseeded() {
        let store = store();
        store.write_cards(&[]).await.unwrap();
        assert!(store.read_cards().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_read_roundtrip_preserves_order() {
        let store = store();
        let cards = vec![
            draft("one", None).into_card(),
            draft("two", None).into_card(),
            draft("three", None).into_card(),
        ];
        store.write_cards(&cards).await.unwrap();
        assert_eq!(store.read_cards().await.unwrap(), cards);
    }

    #[tokio::test]
    async fn undecodable_cards_read_as_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.put(CARDS_KEY, b"{not json").await.unwrap();
        let store = BoardStore::new(backend);
        assert!(store.read_cards().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_appends_and_returns_created() {
        let store = store();
        store.write_cards(&[]).await.unwrap();
        let card = store.add_card(draft("added", None)).await.unwrap();
        assert_eq!(card.title, "added");
        assert!(!card.id.is_empty());
        let cards = store.read_cards().await.unwrap();
        assert_eq!(cards, vec![card]);
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let store = store();
        store.write_cards(&[]).await.unwrap();
        let card = store.add_card(draft("before", None)).await.unwrap();
        let updated = store
            .update_card(
                &card.id,
                CardPatch {
                    title: Some("after".to_owned()),
                    ..CardPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "after");
        assert_eq!(updated.url, card.url);
        assert_eq!(store.read_cards().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = store();
        store.write_cards(&[]).await.unwrap();
        let err = store
            .update_card("ghost", CardPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = store();
        store.write_cards(&[]).await.unwrap();
        let card = store.add_card(draft("gone", None)).await.unwrap();
        store.delete_card(&card.id).await.unwrap();
        let after_once = store.read_cards().await.unwrap();
        store.delete_card(&card.id).await.unwrap();
        assert_eq!(store.read_cards().await.unwrap(), after_once);
        assert!(after_once.is_empty());
    }

    #[tokio::test]
    async fn reorder_roundtrips_permutation() {
        let store = store();
        let a = draft("a", None).into_card();
        let b = draft("b", None).into_card();
        let c = draft("c", None).into_card();
        store.write_cards(&[a.clone(), b.clone(), c.clone()]).await.unwrap();
        store
            .reorder_cards(&[c.id.clone(), a.id.clone(), b.id.clone()])
            .await
            .unwrap();
        assert_eq!(store.read_cards().await.unwrap(), vec![c, a, b]);
    }

    #[tokio::test]
    async fn reorder_with_unknown_ids_drops_them() {
        let store = store();
        let a = draft("a", None).into_card();
        store.write_cards(&[a.clone()]).await.unwrap();
        store
            .reorder_cards(&["ghost".to_owned(), a.id.clone()])
            .await
            .unwrap();
        assert_eq!(store.read_cards().await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn group_delete_cascades_to_matching_cards_only() {
        let store = store();
        let work = draft("work", Some("Work")).into_card();
        let play = draft("play", Some("Play")).into_card();
        let loose = draft("loose", None).into_card();
        store
            .write_cards(&[work.clone(), play.clone(), loose.clone()])
            .await
            .unwrap();
        store
            .write_groups(&["Work".to_owned(), "Play".to_owned()])
            .await
            .unwrap();

        store.delete_group("Work").await.unwrap();

        assert_eq!(store.read_groups().await.unwrap(), vec!["Play".to_owned()]);
        assert_eq!(store.read_cards().await.unwrap(), vec![play, loose]);
    }

    #[tokio::test]
    async fn group_delete_is_idempotent() {
        let store = store();
        store.write_groups(&["Solo".to_owned()]).await.unwrap();
        store.write_cards(&[]).await.unwrap();
        store.delete_group("Solo").await.unwrap();
        store.delete_group("Solo").await.unwrap();
        assert!(store.read_groups().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_reseeds_on_next_read() {
        let store = store();
        store.write_cards(&[]).await.unwrap();
        store.write_groups(&[]).await.unwrap();
        store.reset().await.unwrap();
        assert!(!store.read_cards().await.unwrap().is_empty());
        assert_eq!(store.read_groups().await.unwrap(), vec!["General".to_owned()]);
    }
}
