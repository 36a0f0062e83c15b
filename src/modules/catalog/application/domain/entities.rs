use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::soft_delete::{Deletable, DeletionStatus};

/// Largest value a `NUMERIC(10,2)` price column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 2);

pub const DEFAULT_STOCK: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    #[serde(skip)]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    /// Cleared when the seller record goes away; the product stays.
    pub seller_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub desc: String,
    pub price_old: Option<Decimal>,
    pub price_current: Decimal,
    pub in_stock: i32,
    pub image1: String,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub deletion: DeletionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Price pair to persist after a price edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub price_current: Decimal,
    pub price_old: Option<Decimal>,
}

impl Product {
    pub fn pricing(&self) -> Pricing {
        Pricing {
            price_current: self.price_current,
            price_old: self.price_old,
        }
    }

    /// A different price moves the current one into `price_old`; the same
    /// price leaves the history as it was.
    pub fn reprice(&self, new_price: Decimal) -> Pricing {
        if new_price == self.price_current {
            return self.pricing();
        }

        Pricing {
            price_current: new_price,
            price_old: Some(self.price_current),
        }
    }
}

impl Deletable for Product {
    fn deletion_status(&self) -> DeletionStatus {
        self.deletion
    }

    fn set_deletion_status(&mut self, status: DeletionStatus) {
        self.deletion = status;
    }
}
