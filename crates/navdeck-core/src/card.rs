//! Card model and ordering primitives.
//!
//! A card is one navigation entry on the board. Identity is an explicit
//! server-generated id; display order is exactly the array order of the
//! stored document. Missing `title`/`url` fields are tolerated by falling
//! back to defaults, never rejected — a half-filled card still renders.

use serde::{Deserialize, Serialize};

/// Fixed palette used when a card is created without a color.
pub const COLOR_PALETTE: [&str; 7] = [
    "#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#8B5CF6", "#EC4899", "#0EA5E9",
];

fn default_title() -> String {
    "Untitled".to_owned()
}

fn default_url() -> String {
    "#".to_owned()
}

fn generated_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A single navigation entry.
///
/// Deserialization is tolerant: absent `title`/`url` default rather than
/// fail, and an absent `id` is filled with a fresh UUID so that bulk-replaced
/// client arrays with missing ids still produce addressable cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Server-generated UUID. Stable for the lifetime of the card.
    #[serde(default = "generated_id")]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Group membership by name equality with an entry in the group list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub color: String,
}

/// Client-supplied shape for creating a card. Everything is optional;
/// [`CardDraft::into_card`] fills identity, defaults, and a palette color.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDraft {
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub group: Option<String>,
    pub color: Option<String>,
}

impl CardDraft {
    /// Materialize the draft into a card with a fresh id.
    ///
    /// An absent or empty color gets a pseudo-random pick from
    /// [`COLOR_PALETTE`], keyed off the generated id.
    #[must_use]
    pub fn into_card(self) -> Card {
        let id = generated_id();
        let color = self
            .color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| pick_color(&id).to_owned());
        Card {
            title: self.title.unwrap_or_else(default_title),
            url: self.url.unwrap_or_else(default_url),
            desc: self.desc,
            tags: self.tags,
            group: self.group,
            color,
            id,
        }
    }
}

/// Partial update for a card. Absent fields leave the stored value alone
/// (shallow merge).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub desc: Option<String>,
    pub tags: Option<Vec<String>>,
    pub group: Option<String>,
    pub color: Option<String>,
}

impl Card {
    /// Shallow-merge the supplied fields over this card.
    pub fn apply(&mut self, patch: CardPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(desc) = patch.desc {
            self.desc = desc;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(group) = patch.group {
            self.group = Some(group);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Pick a palette color from a string seed.
///
/// Deterministic per seed so tests can assert membership, pseudo-random
/// across seeds (UUID ids spread the byte sum evenly).
#[must_use]
pub fn pick_color(seed: &str) -> &'static str {
    let n: usize = seed.bytes().map(usize::from).sum();
    COLOR_PALETTE[n % COLOR_PALETTE.len()]
}

/// Rebuild a card list in the order given by `ids`.
///
/// The result contains exactly the cards whose ids appear in `ids`, in that
/// order. Unknown ids are silently dropped, and cards not named in `ids` are
/// removed — reordering to `[]` clears the board. This is the tolerant
/// policy the reorder endpoint relies on; it never errors.
#[must_use]
pub fn reorder(cards: Vec<Card>, ids: &[String]) -> Vec<Card> {
    let mut by_id: std::collections::HashMap<String, Card> = cards
        .into_iter()
        .map(|card| (card.id.clone(), card))
        .collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card(id: &str, title: &str) -> Card {
        Card {
            id: id.to_owned(),
            title: title.to_owned(),
            url: format!("https://{title}.example"),
            desc: String::new(),
            tags: Vec::new(),
            group: None,
            color: "#EF4444".to_owned(),
        }
    }

    #[test]
    fn reorder_applies_permutation() {
        let cards = vec![card("a", "one"), card("b", "two"), card("c", "three")];
        let ids = vec!["c".to_owned(), "a".to_owned(), "b".to_owned()];
        let result = reorder(cards, &ids);
        let order: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn reorder_drops_unknown_ids() {
        let cards = vec![card("a", "one"), card("b", "two")];
        let ids = vec!["b".to_owned(), "ghost".to_owned(), "a".to_owned()];
        let result = reorder(cards, &ids);
        let order: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn reorder_drops_cards_not_listed() {
        let cards = vec![card("a", "one"), card("b", "two"), card("c", "three")];
        let ids = vec!["b".to_owned()];
        let result = reorder(cards, &ids);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn reorder_to_empty_clears() {
        let cards = vec![card("a", "one")];
        assert!(reorder(cards, &[]).is_empty());
    }

    #[test]
    fn pick_color_is_from_palette_and_stable() {
        let first = pick_color("some-seed");
        assert!(COLOR_PALETTE.contains(&first));
        assert_eq!(first, pick_color("some-seed"));
    }

    #[test]
    fn draft_fills_defaults() {
        let card = CardDraft::default().into_card();
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.url, "#");
        assert!(COLOR_PALETTE.contains(&card.color.as_str()));
        assert!(!card.id.is_empty());
    }

    #[test]
    fn draft_keeps_explicit_color() {
        let draft = CardDraft {
            color: Some("#123456".to_owned()),
            ..CardDraft::default()
        };
        assert_eq!(draft.into_card().color, "#123456");
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let mut c = card("a", "one");
        c.apply(CardPatch {
            title: Some("renamed".to_owned()),
            ..CardPatch::default()
        });
        assert_eq!(c.title, "renamed");
        assert_eq!(c.url, "https://one.example");
    }

    #[test]
    fn card_deserializes_with_missing_fields() {
        let c: Card = serde_json::from_str(r#"{"title":"Docs"}"#).unwrap();
        assert_eq!(c.title, "Docs");
        assert_eq!(c.url, "#");
        assert!(!c.id.is_empty());
        assert!(c.tags.is_empty());
    }
}
