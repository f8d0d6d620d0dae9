//! Synchronised item list and selection tracking.
//!
//! The list is rebuilt from the repository as a fresh sequence on every
//! change. Selection is tracked as a row index and restored by item id when
//! the list is rebuilt, so the user's position survives unrelated changes.

use tracing::debug;

use crate::model::{DisplayScope, ItemId, Review, ReviewItem};
use crate::services::ReviewRepository;

/// Builds the ordered item sequence for `scope`.
///
/// For [`DisplayScope::AllActiveReviews`] items are gathered from active
/// reviews in repository order, each review contributing its items in their
/// own order. A single-review scope yields that review's items whatever its
/// active flag, or an empty sequence if the review no longer exists.
#[must_use]
pub fn synchronize(scope: DisplayScope, repository: &dyn ReviewRepository) -> Vec<ReviewItem> {
    match scope {
        DisplayScope::AllActiveReviews => repository
            .reviews()
            .into_iter()
            .filter(|review| review.active)
            .flat_map(Review::into_items)
            .collect(),
        DisplayScope::SingleReview(review_id) => repository.review(review_id).map_or_else(
            || {
                debug!("{review_id} left the repository; showing no items");
                Vec::new()
            },
            Review::into_items,
        ),
    }
}

/// Items shown by the panel together with the selected row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<ReviewItem>,
    selection: Option<usize>,
}

impl ItemList {
    /// Creates a list with nothing selected.
    #[must_use]
    pub const fn new(items: Vec<ReviewItem>) -> Self {
        Self {
            items,
            selection: None,
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected row, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Item at the selected row.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ReviewItem> {
        self.selection.and_then(|row| self.items.get(row))
    }

    /// Row showing the item with `item_id`.
    #[must_use]
    pub fn row_of(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == item_id)
    }

    /// Returns true when `row` addresses an existing row.
    #[must_use]
    pub fn contains_row(&self, row: usize) -> bool {
        row < self.items.len()
    }

    /// Sets the selection without validation beyond the row range.
    ///
    /// Out-of-range rows clear the selection.
    pub fn select(&mut self, row: Option<usize>) {
        self.selection = row.filter(|&index| self.contains_row(index));
    }

    /// Clears the selection.
    pub const fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replaces the rows with a fresh sequence.
    ///
    /// The previously selected item stays selected when it is still present;
    /// otherwise the selection is cleared. Returns true when the selection
    /// survived.
    pub fn replace(&mut self, items: Vec<ReviewItem>) -> bool {
        let selected_id = self.selected_item().map(ReviewItem::id);
        self.items = items;
        self.selection = selected_id.and_then(|id| self.row_of(id));
        self.selection.is_some()
    }

    /// Swaps in an updated copy of an item, matched by id.
    ///
    /// Builds a new sequence instead of editing rows in place. Returns false
    /// when no row holds the item.
    pub fn replace_item(&mut self, updated: &ReviewItem) -> bool {
        if self.row_of(updated.id()).is_none() {
            return false;
        }
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == updated.id() {
                    updated.clone()
                } else {
                    item.clone()
                }
            })
            .collect();
        true
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::model::ReviewId;
    use crate::model::test_support::{item, review_with_items};
    use crate::services::InMemoryReviewRepository;

    fn ids(items: &[ReviewItem]) -> Vec<u64> {
        items.iter().map(|item| item.id().get()).collect()
    }

    #[fixture]
    fn repository() -> InMemoryReviewRepository {
        InMemoryReviewRepository::new(vec![
            review_with_items(1, true, &[1, 2]),
            review_with_items(2, false, &[3]),
            review_with_items(3, true, &[4]),
        ])
    }

    #[rstest]
    fn all_scope_skips_inactive_reviews(repository: InMemoryReviewRepository) {
        let items = synchronize(DisplayScope::AllActiveReviews, &repository);
        assert_eq!(ids(&items), vec![1, 2, 4]);
    }

    #[rstest]
    fn single_scope_ignores_active_flag(repository: InMemoryReviewRepository) {
        let items = synchronize(DisplayScope::SingleReview(ReviewId::new(2)), &repository);
        assert_eq!(ids(&items), vec![3]);
    }

    #[rstest]
    fn single_scope_tolerates_removed_review(repository: InMemoryReviewRepository) {
        let items = synchronize(DisplayScope::SingleReview(ReviewId::new(42)), &repository);
        assert!(items.is_empty());
    }

    #[rstest]
    fn replace_keeps_selected_item_by_id() {
        let mut list = ItemList::new(vec![item(1, 1), item(1, 2), item(1, 3)]);
        list.select(Some(1));

        let survived = list.replace(vec![item(1, 0), item(1, 1), item(1, 2)]);

        assert!(survived);
        assert_eq!(list.selection(), Some(2));
        assert_eq!(list.selected_item().map(|i| i.id().get()), Some(2));
    }

    #[rstest]
    fn replace_clears_selection_of_vanished_item() {
        let mut list = ItemList::new(vec![item(1, 1), item(1, 2)]);
        list.select(Some(1));

        let survived = list.replace(vec![item(1, 1)]);

        assert!(!survived);
        assert_eq!(list.selection(), None);
    }

    #[rstest]
    fn select_rejects_out_of_range_rows() {
        let mut list = ItemList::new(vec![item(1, 1)]);
        list.select(Some(5));
        assert_eq!(list.selection(), None);
    }

    #[rstest]
    fn replace_item_swaps_matching_row() {
        let mut list = ItemList::new(vec![item(1, 1), item(1, 2)]);
        let mut updated = item(1, 2);
        updated.payload.summary = "edited".to_owned();

        assert!(list.replace_item(&updated));
        assert!(!list.replace_item(&item(1, 9)));
        assert_eq!(
            list.items().get(1).map(|i| i.payload.summary.as_str()),
            Some("edited")
        );
    }
}
