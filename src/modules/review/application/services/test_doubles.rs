//! In-memory review store backing both review ports in service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::outgoing::{
    NewReview, ReviewQuery, ReviewQueryError, ReviewRepository, ReviewRepositoryError,
};
use crate::shared::soft_delete::{Deletable, DeletionStatus};

#[derive(Clone, Default)]
pub struct FakeReviewStore {
    pub reviews: Arc<Mutex<Vec<Review>>>,
}

impl FakeReviewStore {
    pub fn with(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(Mutex::new(reviews)),
        }
    }

    pub fn active(&self) -> Vec<Review> {
        self.reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !r.is_deleted())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ReviewQuery for FakeReviewStore {
    async fn list_for_product(&self, product_id: Uuid) -> Result<Vec<Review>, ReviewQueryError> {
        let mut found: Vec<Review> = self
            .active()
            .into_iter()
            .filter(|r| r.product_id == product_id)
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewQueryError> {
        Ok(self.active().into_iter().find(|r| r.id == review_id))
    }

    async fn exists_for(
        &self,
        user_id: UserId,
        product_id: Uuid,
    ) -> Result<bool, ReviewQueryError> {
        Ok(self
            .active()
            .iter()
            .any(|r| r.user_id == user_id && r.product_id == product_id))
    }
}

#[async_trait]
impl ReviewRepository for FakeReviewStore {
    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        let created = Review {
            id: Uuid::new_v4(),
            user_id: review.user_id,
            product_id: review.product_id,
            rating: review.rating,
            text: review.text,
            deletion: DeletionStatus::Active,
            created_at: Utc::now(),
        };
        self.reviews.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn soft_delete(
        &self,
        review_id: Uuid,
        deletion: DeletionStatus,
    ) -> Result<(), ReviewRepositoryError> {
        let mut reviews = self.reviews.lock().unwrap();
        let review = reviews
            .iter_mut()
            .find(|r| r.id == review_id && !r.is_deleted())
            .ok_or(ReviewRepositoryError::NotFound)?;
        review.set_deletion_status(deletion);
        Ok(())
    }
}
