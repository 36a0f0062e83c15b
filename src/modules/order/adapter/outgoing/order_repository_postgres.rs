use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, warn};
use uuid::Uuid;

use super::sea_orm_entity::orders::{ActiveModel, Column, DeliveryStatusDb, Entity, PaymentStatusDb};
use crate::modules::cart::adapter::outgoing::sea_orm_entity::order_items;
use crate::modules::order::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError, PlaceOrder, PlacedOrder,
};
use crate::shared::db_error::is_unique_violation;
use crate::shared::unique_code::{generate_unique_code, UniqueCodeError};

#[derive(Debug)]
enum PlaceError {
    CartChanged,
    Reference(UniqueCodeError),
    Db(DbErr),
}

impl From<DbErr> for PlaceError {
    fn from(e: DbErr) -> Self {
        PlaceError::Db(e)
    }
}

impl From<PlaceError> for OrderRepositoryError {
    fn from(e: PlaceError) -> Self {
        match e {
            PlaceError::CartChanged => OrderRepositoryError::CartChanged,
            PlaceError::Reference(UniqueCodeError::Exhausted { attempts }) => {
                OrderRepositoryError::ReferenceExhausted(format!(
                    "no unique tx_ref after {attempts} attempts"
                ))
            }
            PlaceError::Reference(UniqueCodeError::Lookup(msg)) => {
                OrderRepositoryError::DatabaseError(msg)
            }
            PlaceError::Db(e) => OrderRepositoryError::DatabaseError(e.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn place_once(&self, order: &PlaceOrder) -> Result<PlacedOrder, PlaceError> {
        let txn = self.db.begin().await?;

        match Self::write(&txn, order).await {
            Ok(placed) => {
                txn.commit().await?;
                Ok(placed)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    error!(error = %rollback, "Checkout transaction rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn write(txn: &DatabaseTransaction, order: &PlaceOrder) -> Result<PlacedOrder, PlaceError> {
        let user_uuid = order.user_id.value();
        let expected = order.line_ids.len();

        let locked = order_items::Entity::find()
            .filter(order_items::Column::Id.is_in(order.line_ids.clone()))
            .filter(order_items::Column::UserId.eq(user_uuid))
            .filter(order_items::Column::OrderId.is_null())
            .lock_exclusive()
            .all(txn)
            .await?;

        if locked.len() != expected {
            return Err(PlaceError::CartChanged);
        }

        let tx_ref = generate_unique_code(|code| async move {
            Entity::find()
                .filter(Column::TxRef.eq(code))
                .count(txn)
                .await
                .map(|n| n > 0)
        })
        .await
        .map_err(PlaceError::Reference)?;

        let now = Utc::now().fixed_offset();
        let shipping = order.shipping.clone();
        let inserted = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_uuid),
            tx_ref: Set(tx_ref),
            delivery_status: Set(DeliveryStatusDb::Pending),
            payment_status: Set(PaymentStatusDb::Pending),
            date_delivered: Set(None),
            full_name: Set(shipping.full_name),
            email: Set(shipping.email),
            phone: Set(shipping.phone),
            address: Set(shipping.address),
            city: Set(shipping.city),
            country: Set(shipping.country),
            zipcode: Set(shipping.zipcode),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await?;

        let bound = order_items::Entity::update_many()
            .set(order_items::ActiveModel {
                order_id: Set(Some(inserted.id)),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(order_items::Column::Id.is_in(order.line_ids.clone()))
            .filter(order_items::Column::OrderId.is_null())
            .exec(txn)
            .await?;

        if bound.rows_affected != expected as u64 {
            return Err(PlaceError::CartChanged);
        }

        Ok(PlacedOrder {
            id: inserted.id,
            tx_ref: inserted.tx_ref,
        })
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn place_order(&self, order: PlaceOrder) -> Result<PlacedOrder, OrderRepositoryError> {
        match self.place_once(&order).await {
            Ok(placed) => Ok(placed),
            // A concurrent checkout committed the same tx_ref after our probe.
            Err(PlaceError::Db(e)) if is_unique_violation(&e) => {
                warn!(user_id = %order.user_id, "tx_ref collided on insert, retrying");
                self.place_once(&order).await.map_err(Into::into)
            }
            Err(e) => Err(e.into()),
        }
    }
}
