use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::reviews::{ActiveModel, Column, Entity, ACTIVE_REVIEW_INDEX};
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::outgoing::{
    NewReview, ReviewRepository, ReviewRepositoryError,
};
use crate::shared::db_error::violates;
use crate::shared::soft_delete::DeletionStatus;

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    if violates(&e, ACTIVE_REVIEW_INDEX) {
        return ReviewRepositoryError::Duplicate;
    }
    ReviewRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(review.user_id.value()),
            product_id: Set(review.product_id),
            rating: Set(review.rating.value()),
            text: Set(review.text),
            is_deleted: Set(false),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        model.to_domain().map_err(map_db_err)
    }

    async fn soft_delete(
        &self,
        review_id: Uuid,
        deletion: DeletionStatus,
    ) -> Result<(), ReviewRepositoryError> {
        let (is_deleted, deleted_at) = deletion.to_columns();

        let result = Entity::update_many()
            .set(ActiveModel {
                is_deleted: Set(is_deleted),
                deleted_at: Set(deleted_at),
                updated_at: Set(Utc::now().fixed_offset()),
                ..Default::default()
            })
            .filter(Column::Id.eq(review_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        Ok(())
    }
}
