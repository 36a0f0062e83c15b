use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::soft_delete::{Deletable, DeletionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub account_type: AccountType,
    pub deletion: DeletionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn can_sign_in(&self) -> bool {
        self.is_active && !self.is_deleted()
    }

    /// BUYER becomes SELLER; a SELLER stays a SELLER. Approval is tracked
    /// on the seller record, not here.
    pub fn promote_to_seller(self) -> User {
        User {
            account_type: AccountType::Seller,
            ..self
        }
    }

    pub fn deactivate(mut self, at: DateTime<Utc>) -> User {
        self.is_active = false;
        self.mark_deleted(at);
        self
    }
}

impl Deletable for User {
    fn deletion_status(&self) -> DeletionStatus {
        self.deletion
    }

    fn set_deletion_status(&mut self, status: DeletionStatus) {
        self.deletion = status;
    }
}
