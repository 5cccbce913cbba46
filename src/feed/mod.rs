//! Result feed with promotional slots
//!
//! Turns a ranked result list into the sequence actually shown: result cards
//! with an ad slot after every `every`-th card. No ad follows the final card.

use crate::constants::ads::IN_FEED_SLOT;
use serde::{Deserialize, Serialize};

/// One entry of the displayed feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedItem<T> {
    /// A result card
    Card(T),
    /// A promotional slot
    Ad { slot: String },
}

impl<T> FeedItem<T> {
    /// The card payload, if this item is a card
    pub fn card(&self) -> Option<&T> {
        match self {
            Self::Card(item) => Some(item),
            Self::Ad { .. } => None,
        }
    }

    pub fn is_ad(&self) -> bool {
        matches!(self, Self::Ad { .. })
    }
}

/// Interleave ad slots into `items`
///
/// An ad is placed after cards 3, 6, 9, ... (for `every == 3`) unless that
/// card is the last one. `every == 0` disables ads.
pub fn interleave<T, I>(items: I, every: usize) -> Vec<FeedItem<T>>
where
    I: IntoIterator<Item = T>,
{
    let mut items = items.into_iter().peekable();
    let mut feed = Vec::new();
    let mut count = 0;

    while let Some(item) = items.next() {
        feed.push(FeedItem::Card(item));
        count += 1;

        if every > 0 && count % every == 0 && items.peek().is_some() {
            feed.push(FeedItem::Ad {
                slot: IN_FEED_SLOT.to_string(),
            });
        }
    }

    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(feed: &[FeedItem<u32>]) -> String {
        feed.iter()
            .map(|item| match item {
                FeedItem::Card(n) => n.to_string(),
                FeedItem::Ad { .. } => "ad".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_ad_after_every_third() {
        let feed = interleave(1..=7, 3);
        assert_eq!(layout(&feed), "1 2 3 ad 4 5 6 ad 7");
    }

    #[test]
    fn test_no_trailing_ad() {
        let feed = interleave(1..=6, 3);
        assert_eq!(layout(&feed), "1 2 3 ad 4 5 6");

        let feed = interleave(1..=3, 3);
        assert_eq!(layout(&feed), "1 2 3");
    }

    #[test]
    fn test_short_and_empty() {
        assert!(interleave(Vec::<u32>::new(), 3).is_empty());
        assert_eq!(layout(&interleave(1..=2, 3)), "1 2");
    }

    #[test]
    fn test_disabled() {
        let feed = interleave(1..=9, 0);
        assert_eq!(feed.len(), 9);
        assert!(!feed.iter().any(FeedItem::is_ad));
    }

    #[test]
    fn test_cards_keep_order() {
        let feed = interleave(vec![5, 1, 3, 2], 2);
        let cards: Vec<u32> = feed.iter().filter_map(|f| f.card().copied()).collect();
        assert_eq!(cards, vec![5, 1, 3, 2]);
    }

    #[test]
    fn test_serialized_tags() {
        #[derive(Serialize)]
        struct Card {
            name: &'static str,
        }

        let feed = interleave(vec![Card { name: "a" }, Card { name: "b" }], 1);
        let json = serde_json::to_value(&feed).unwrap();

        assert_eq!(json[0]["kind"], "card");
        assert_eq!(json[0]["name"], "a");
        assert_eq!(json[1]["kind"], "ad");
        assert_eq!(json[1]["slot"], IN_FEED_SLOT);
        assert_eq!(json[2]["kind"], "card");
    }
}
