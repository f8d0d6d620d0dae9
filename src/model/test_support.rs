//! Test helpers for constructing reviews and review items.
//!
//! # Examples
//!
//! ```
//! use review_browser::model::test_support::review_with_items;
//!
//! let review = review_with_items(1, true, &[10, 11]);
//! assert_eq!(review.items().len(), 2);
//! assert!(review.active);
//! ```

use super::{ItemId, ItemPayload, Review, ReviewId, ReviewItem};

/// Builds a payload whose summary names the item.
#[must_use]
pub fn payload_for(item_id: u64) -> ItemPayload {
    ItemPayload {
        summary: format!("Item {item_id}"),
        description: String::new(),
        file_path: Some("src/lib.rs".to_owned()),
        line_number: None,
    }
}

/// Builds a standalone item owned by `review_id`.
#[must_use]
pub fn item(review_id: u64, item_id: u64) -> ReviewItem {
    ReviewItem::new(
        ItemId::new(item_id),
        ReviewId::new(review_id),
        payload_for(item_id),
    )
}

/// Builds a review containing one item per id, in the given order.
#[must_use]
pub fn review_with_items(review_id: u64, active: bool, item_ids: &[u64]) -> Review {
    let mut review = Review::new(ReviewId::new(review_id), format!("Review {review_id}"), active);
    for &item_id in item_ids {
        review.push_item(ItemId::new(item_id), payload_for(item_id));
    }
    review
}
