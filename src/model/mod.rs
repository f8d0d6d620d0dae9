//! Domain model for reviews and their review items.
//!
//! Reviews and items are owned by the external repository. The panel only
//! ever holds snapshots of them: every refresh produces a fresh, fully-formed
//! item sequence so that readers never observe a partially updated list.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Identifier of a review within the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(u64);

impl ReviewId {
    /// Wraps a raw review identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "review#{}", self.0)
    }
}

/// Identifier of a review item, unique across all reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw item identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Content of a review item edited through the detail editor.
///
/// The panel never interprets the payload; it is carried through so the
/// editor and repository can exchange it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    /// One-line summary shown in the item list.
    pub summary: String,
    /// Free-form description of the remark.
    pub description: String,
    /// File the remark refers to, when anchored to source.
    pub file_path: Option<String>,
    /// Line number within `file_path`.
    pub line_number: Option<u32>,
}

/// A single review comment belonging to a [`Review`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    id: ItemId,
    review_id: ReviewId,
    /// Editable content of the item.
    pub payload: ItemPayload,
}

impl ReviewItem {
    /// Creates an item owned by the given review.
    #[must_use]
    pub const fn new(id: ItemId, review_id: ReviewId, payload: ItemPayload) -> Self {
        Self {
            id,
            review_id,
            payload,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the identifier of the owning review.
    #[must_use]
    pub const fn review_id(&self) -> ReviewId {
        self.review_id
    }
}

/// A review: a named, ordered collection of review items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    /// Display name of the review.
    pub name: String,
    /// Whether the review participates in the "all active reviews" scope.
    pub active: bool,
    items: Vec<ReviewItem>,
}

impl Review {
    /// Creates an empty review.
    #[must_use]
    pub fn new(id: ReviewId, name: impl Into<String>, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            active,
            items: Vec::new(),
        }
    }

    /// Returns the review identifier.
    #[must_use]
    pub const fn id(&self) -> ReviewId {
        self.id
    }

    /// Returns the items in display order.
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    /// Consumes the review, yielding its items in display order.
    #[must_use]
    pub fn into_items(self) -> Vec<ReviewItem> {
        self.items
    }

    /// Returns the position of the item with the given id.
    #[must_use]
    pub fn position_of(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    /// Appends a new item built from `payload` and returns a copy of it.
    pub fn push_item(&mut self, id: ItemId, payload: ItemPayload) -> ReviewItem {
        let item = ReviewItem::new(id, self.id, payload);
        self.items.push(item.clone());
        item
    }

    /// Inserts an item at `index`, clamped to the end of the list.
    ///
    /// The item is re-parented onto this review.
    pub fn insert_item(&mut self, index: usize, mut item: ReviewItem) {
        item.review_id = self.id;
        let at = index.min(self.items.len());
        self.items.insert(at, item);
    }

    /// Removes the item with the given id, returning it when present.
    pub fn remove_item(&mut self, item_id: ItemId) -> Option<ReviewItem> {
        let index = self.position_of(item_id)?;
        Some(self.items.remove(index))
    }

    /// Replaces the stored copy of `item` (matched by id).
    ///
    /// Returns `false` when the review no longer contains the item.
    pub fn replace_item(&mut self, item: ReviewItem) -> bool {
        match self.items.iter_mut().find(|stored| stored.id == item.id) {
            Some(stored) => {
                *stored = item;
                true
            }
            None => false,
        }
    }
}

/// Which reviews a panel aggregates items from.
///
/// The scope is fixed when a panel is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "review_id", rename_all = "snake_case")]
pub enum DisplayScope {
    /// Items of every review flagged `active`, in repository order.
    AllActiveReviews,
    /// Items of one specific review, whatever its `active` flag.
    SingleReview(ReviewId),
}

impl DisplayScope {
    /// Returns true when the scope is bound to a single review.
    #[must_use]
    pub const fn is_single_review(self) -> bool {
        matches!(self, Self::SingleReview(_))
    }

    /// Returns the bound review, if any.
    #[must_use]
    pub const fn review_id(self) -> Option<ReviewId> {
        match self {
            Self::AllActiveReviews => None,
            Self::SingleReview(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn payload(summary: &str) -> ItemPayload {
        ItemPayload {
            summary: summary.to_owned(),
            ..ItemPayload::default()
        }
    }

    #[rstest]
    fn push_item_sets_back_reference() {
        let mut review = Review::new(ReviewId::new(7), "sprint", true);
        let item = review.push_item(ItemId::new(1), payload("naming"));

        assert_eq!(item.review_id(), ReviewId::new(7));
        assert_eq!(review.items(), &[item]);
    }

    #[rstest]
    fn insert_item_clamps_index_and_reparents() {
        let mut review = Review::new(ReviewId::new(1), "a", true);
        review.push_item(ItemId::new(1), payload("first"));
        let foreign = ReviewItem::new(ItemId::new(2), ReviewId::new(99), payload("moved"));

        review.insert_item(10, foreign);

        let ids: Vec<_> = review.items().iter().map(ReviewItem::id).collect();
        assert_eq!(ids, vec![ItemId::new(1), ItemId::new(2)]);
        assert!(
            review
                .items()
                .iter()
                .all(|item| item.review_id() == ReviewId::new(1))
        );
    }

    #[rstest]
    fn replace_item_reports_missing_items() {
        let mut review = Review::new(ReviewId::new(1), "a", true);
        let mut item = review.push_item(ItemId::new(1), payload("old"));
        item.payload.summary = "new".to_owned();

        assert!(review.replace_item(item));
        assert_eq!(
            review.items().first().map(|i| i.payload.summary.as_str()),
            Some("new")
        );

        let stranger = ReviewItem::new(ItemId::new(5), ReviewId::new(1), payload("x"));
        assert!(!review.replace_item(stranger));
    }

    #[rstest]
    fn remove_item_returns_removed_item() {
        let mut review = Review::new(ReviewId::new(1), "a", true);
        review.push_item(ItemId::new(1), payload("one"));
        review.push_item(ItemId::new(2), payload("two"));

        let removed = review.remove_item(ItemId::new(1));

        assert_eq!(removed.map(|i| i.id()), Some(ItemId::new(1)));
        assert_eq!(review.items().len(), 1);
        assert!(review.remove_item(ItemId::new(1)).is_none());
    }

    #[rstest]
    fn scope_reports_bound_review() {
        let single = DisplayScope::SingleReview(ReviewId::new(2));
        assert!(single.is_single_review());
        assert_eq!(single.review_id(), Some(ReviewId::new(2)));
        assert!(!DisplayScope::AllActiveReviews.is_single_review());
        assert_eq!(DisplayScope::AllActiveReviews.review_id(), None);
    }

    #[rstest]
    fn identifiers_display_with_prefix() {
        assert_eq!(ReviewId::new(3).to_string(), "review#3");
        assert_eq!(ItemId::new(4).to_string(), "item#4");
    }
}
