use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::soft_delete::{Deletable, DeletionStatus};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Star rating, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(i32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between 1 and 5")]
pub struct RatingOutOfRange;

impl Rating {
    pub fn new(value: i32) -> Result<Self, RatingOutOfRange> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange)
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: UserId,
    #[serde(skip)]
    pub product_id: Uuid,
    #[schema(value_type = i32, example = 4)]
    pub rating: Rating,
    pub text: String,
    #[serde(skip)]
    pub deletion: DeletionStatus,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn written_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

impl Deletable for Review {
    fn deletion_status(&self) -> DeletionStatus {
        self.deletion
    }

    fn set_deletion_status(&mut self, status: DeletionStatus) {
        self.deletion = status;
    }
}
