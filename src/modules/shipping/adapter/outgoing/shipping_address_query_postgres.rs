use async_trait::async_trait;
use sea_orm::{
    sea_query::SimpleExpr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::shipping_addresses::{Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressFields, ShippingAddress};
use crate::modules::shipping::application::ports::outgoing::{
    ShippingAddressQuery, ShippingAddressQueryError,
};

#[derive(Clone, Debug)]
pub struct ShippingAddressQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ShippingAddressQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ShippingAddressQueryError {
    ShippingAddressQueryError::DatabaseError(e.to_string())
}

/// `col = v`, or `col IS NULL` when there is no value to compare.
fn eq_or_null<V>(column: Column, value: Option<V>) -> SimpleExpr
where
    V: Into<sea_orm::Value>,
{
    match value {
        Some(v) => column.eq(v),
        None => column.is_null(),
    }
}

fn identical(user_id: UserId, fields: &AddressFields) -> Condition {
    Condition::all()
        .add(Column::UserId.eq(user_id.value()))
        .add(Column::FullName.eq(fields.full_name.clone()))
        .add(Column::Email.eq(fields.email.clone()))
        .add(eq_or_null(Column::Phone, fields.phone.clone()))
        .add(eq_or_null(Column::Address, fields.address.clone()))
        .add(eq_or_null(Column::City, fields.city.clone()))
        .add(eq_or_null(Column::Country, fields.country.clone()))
        .add(eq_or_null(Column::Zipcode, fields.zipcode))
}

#[async_trait]
impl ShippingAddressQuery for ShippingAddressQueryPostgres {
    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ShippingAddress>, ShippingAddressQueryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<Option<ShippingAddress>, ShippingAddressQueryError> {
        let model = Entity::find_by_id(address_id)
            .filter(Column::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_identical(
        &self,
        user_id: UserId,
        fields: &AddressFields,
    ) -> Result<Option<ShippingAddress>, ShippingAddressQueryError> {
        let model = Entity::find()
            .filter(identical(user_id, fields))
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }
}
