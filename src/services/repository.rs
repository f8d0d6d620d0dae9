//! Review repository seam and its in-memory implementation.
//!
//! The repository owns reviews and items. Readers receive snapshots; change
//! notifications are posted to subscribers as [`PanelMsg`] values.

use std::sync::mpsc::Sender;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::listeners::{ListenerRegistry, SubscriptionId};
use crate::error::RepositoryError;
use crate::model::{ItemId, Review, ReviewId, ReviewItem};
use crate::panel::PanelMsg;

/// Store of reviews in repository-defined order.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    /// Returns a snapshot of every review in repository order.
    fn reviews(&self) -> Vec<Review>;

    /// Returns a snapshot of one review.
    fn review(&self, id: ReviewId) -> Option<Review>;

    /// Persists the given review.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the review is unknown or storage
    /// fails.
    fn save(&self, review: &Review) -> Result<(), RepositoryError>;

    /// Registers a listener for review and item notifications.
    fn subscribe(&self, sender: Sender<PanelMsg>) -> SubscriptionId;

    /// Releases a listener registration.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[derive(Debug, Default)]
struct RepositoryState {
    reviews: Vec<Review>,
    listeners: ListenerRegistry,
    saved: Vec<ReviewId>,
}

impl RepositoryState {
    fn find_mut(&mut self, id: ReviewId) -> Result<&mut Review, RepositoryError> {
        self.reviews
            .iter_mut()
            .find(|review| review.id() == id)
            .ok_or(RepositoryError::ReviewNotFound { review_id: id })
    }
}

/// Repository keeping reviews in memory.
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    state: Mutex<RepositoryState>,
}

impl InMemoryReviewRepository {
    /// Creates a repository holding `reviews` in the given order.
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            state: Mutex::new(RepositoryState {
                reviews,
                ..RepositoryState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RepositoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a review and announces the review-set change.
    pub fn add_review(&self, review: Review) {
        let mut state = self.lock();
        state.reviews.push(review);
        state.listeners.notify(&PanelMsg::ReviewSetChanged);
    }

    /// Removes a review and announces the review-set change.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ReviewNotFound`] for unknown reviews.
    pub fn remove_review(&self, id: ReviewId) -> Result<Review, RepositoryError> {
        let mut state = self.lock();
        let index = state
            .reviews
            .iter()
            .position(|review| review.id() == id)
            .ok_or(RepositoryError::ReviewNotFound { review_id: id })?;
        let removed = state.reviews.remove(index);
        state.listeners.notify(&PanelMsg::ReviewSetChanged);
        Ok(removed)
    }

    /// Flags a review active or inactive and announces the change.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ReviewNotFound`] for unknown reviews.
    pub fn set_active(&self, id: ReviewId, active: bool) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        state.find_mut(id)?.active = active;
        state.listeners.notify(&PanelMsg::ReviewSetChanged);
        Ok(())
    }

    /// Inserts an item into a review at `index` and announces it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ReviewNotFound`] for unknown reviews.
    pub fn insert_item(
        &self,
        review_id: ReviewId,
        index: usize,
        item: ReviewItem,
    ) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        let item_id = item.id();
        state.find_mut(review_id)?.insert_item(index, item);
        state.listeners.notify(&PanelMsg::ItemInserted { review_id, item_id });
        Ok(())
    }

    /// Removes an item from a review and announces it.
    ///
    /// Returns `Ok(None)` when the review does not contain the item; no
    /// notification is sent in that case.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ReviewNotFound`] for unknown reviews.
    pub fn remove_item(
        &self,
        review_id: ReviewId,
        item_id: ItemId,
    ) -> Result<Option<ReviewItem>, RepositoryError> {
        let mut state = self.lock();
        let removed = state.find_mut(review_id)?.remove_item(item_id);
        if removed.is_some() {
            state.listeners.notify(&PanelMsg::ItemDeleted { review_id, item_id });
        }
        Ok(removed)
    }

    /// Announces that review contents changed without a structural change.
    pub fn touch(&self) {
        self.lock().listeners.notify(&PanelMsg::ReviewUpdated);
    }

    /// Reviews saved so far, in save order.
    #[must_use]
    pub fn saved_reviews(&self) -> Vec<ReviewId> {
        self.lock().saved.clone()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

impl ReviewRepository for InMemoryReviewRepository {
    fn reviews(&self) -> Vec<Review> {
        self.lock().reviews.clone()
    }

    fn review(&self, id: ReviewId) -> Option<Review> {
        self.lock()
            .reviews
            .iter()
            .find(|review| review.id() == id)
            .cloned()
    }

    fn save(&self, review: &Review) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        *state.find_mut(review.id())? = review.clone();
        state.saved.push(review.id());
        Ok(())
    }

    fn subscribe(&self, sender: Sender<PanelMsg>) -> SubscriptionId {
        self.lock().listeners.subscribe(sender)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().listeners.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::model::test_support::{item, review_with_items};

    #[fixture]
    fn repository() -> InMemoryReviewRepository {
        InMemoryReviewRepository::new(vec![
            review_with_items(1, true, &[10, 11]),
            review_with_items(2, false, &[20]),
        ])
    }

    #[rstest]
    fn reviews_keep_repository_order(repository: InMemoryReviewRepository) {
        let ids: Vec<_> = repository.reviews().iter().map(Review::id).collect();
        assert_eq!(ids, vec![ReviewId::new(1), ReviewId::new(2)]);
    }

    #[rstest]
    fn insert_item_notifies_with_ids(repository: InMemoryReviewRepository) {
        let (tx, rx) = mpsc::channel();
        repository.subscribe(tx);

        let result = repository.insert_item(ReviewId::new(1), 1, item(1, 12));

        assert_eq!(result, Ok(()));
        assert_eq!(
            rx.try_recv().ok(),
            Some(PanelMsg::ItemInserted {
                review_id: ReviewId::new(1),
                item_id: ItemId::new(12),
            })
        );
        let ids: Vec<_> = repository
            .review(ReviewId::new(1))
            .map(|review| review.items().iter().map(ReviewItem::id).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec![ItemId::new(10), ItemId::new(12), ItemId::new(11)]);
    }

    #[rstest]
    fn removing_unknown_item_is_silent(repository: InMemoryReviewRepository) {
        let (tx, rx) = mpsc::channel();
        repository.subscribe(tx);

        let removed = repository.remove_item(ReviewId::new(1), ItemId::new(99));

        assert_eq!(removed, Ok(None));
        assert!(rx.try_recv().is_err());
    }

    #[rstest]
    fn set_active_announces_review_set_change(repository: InMemoryReviewRepository) {
        let (tx, rx) = mpsc::channel();
        repository.subscribe(tx);

        assert_eq!(repository.set_active(ReviewId::new(2), true), Ok(()));

        assert_eq!(rx.try_recv().ok(), Some(PanelMsg::ReviewSetChanged));
        assert_eq!(
            repository.review(ReviewId::new(2)).map(|review| review.active),
            Some(true)
        );
    }

    #[rstest]
    fn save_replaces_stored_review(repository: InMemoryReviewRepository) {
        let mut review = review_with_items(1, true, &[10]);
        review.name = "renamed".to_owned();

        assert_eq!(repository.save(&review), Ok(()));

        assert_eq!(repository.saved_reviews(), vec![ReviewId::new(1)]);
        assert_eq!(
            repository.review(ReviewId::new(1)).map(|r| r.name),
            Some("renamed".to_owned())
        );
    }

    #[rstest]
    fn save_rejects_unknown_review(repository: InMemoryReviewRepository) {
        let review = review_with_items(9, true, &[]);

        let result = repository.save(&review);

        assert_eq!(
            result,
            Err(RepositoryError::ReviewNotFound {
                review_id: ReviewId::new(9)
            })
        );
        assert!(repository.saved_reviews().is_empty());
    }
}
