use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, warn};
use uuid::Uuid;

use super::sea_orm_entity::order_items::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::ports::outgoing::{
    CartMutation, CartRepository, CartRepositoryError,
};
use crate::shared::db_error::is_unique_violation;

#[derive(Clone, Debug)]
pub struct CartRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// One locked read-modify-write of the (user, product) in-cart line.
    async fn toggle_once(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartMutation, DbErr> {
        let txn = self.db.begin().await?;

        match Self::apply(&txn, user_id, product_id, quantity).await {
            Ok(mutation) => {
                txn.commit().await?;
                Ok(mutation)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    error!(error = %rollback, "Cart transaction rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn apply(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartMutation, DbErr> {
        let existing = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::OrderId.is_null())
            .lock_exclusive()
            .one(txn)
            .await?;

        match (existing, quantity) {
            (Some(line), 0) => {
                Entity::delete_by_id(line.id).exec(txn).await?;
                Ok(CartMutation::Removed)
            }
            (Some(line), quantity) => {
                let id = line.id;
                let mut active = line.into_active_model();
                active.quantity = Set(quantity);
                active.updated_at = Set(Utc::now().fixed_offset());
                active.update(txn).await?;
                Ok(CartMutation::Updated(id))
            }
            (None, 0) => Ok(CartMutation::Removed),
            (None, quantity) => {
                let now = Utc::now().fixed_offset();
                let inserted = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    order_id: Set(None),
                    product_id: Set(product_id),
                    quantity: Set(quantity),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await?;
                Ok(CartMutation::Created(inserted.id))
            }
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn upsert_or_remove(
        &self,
        user_id: UserId,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartMutation, CartRepositoryError> {
        let user_uuid = user_id.value();

        match self.toggle_once(user_uuid, product_id, quantity).await {
            Ok(mutation) => Ok(mutation),
            // A concurrent toggle inserted the line first; it is visible now.
            Err(e) if is_unique_violation(&e) => {
                warn!(user_id = %user_uuid, product_id = %product_id, "Cart insert raced, retrying");
                self.toggle_once(user_uuid, product_id, quantity)
                    .await
                    .map_err(|e| CartRepositoryError::DatabaseError(e.to_string()))
            }
            Err(e) => Err(CartRepositoryError::DatabaseError(e.to_string())),
        }
    }
}
