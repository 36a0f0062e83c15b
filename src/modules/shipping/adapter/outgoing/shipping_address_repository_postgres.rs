use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::shipping_addresses::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::{AddressFields, ShippingAddress};
use crate::modules::shipping::application::ports::outgoing::{
    ShippingAddressRepository, ShippingAddressRepositoryError,
};

#[derive(Clone, Debug)]
pub struct ShippingAddressRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ShippingAddressRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn content(fields: AddressFields) -> ActiveModel {
        ActiveModel {
            full_name: Set(fields.full_name),
            email: Set(fields.email),
            phone: Set(fields.phone),
            address: Set(fields.address),
            city: Set(fields.city),
            country: Set(fields.country),
            zipcode: Set(fields.zipcode),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
    }
}

fn map_db_err(e: DbErr) -> ShippingAddressRepositoryError {
    ShippingAddressRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ShippingAddressRepository for ShippingAddressRepositoryPostgres {
    async fn create(
        &self,
        user_id: UserId,
        fields: AddressFields,
    ) -> Result<ShippingAddress, ShippingAddressRepositoryError> {
        let mut active = Self::content(fields);
        active.id = Set(Uuid::new_v4());
        active.user_id = Set(user_id.value());
        active.created_at = Set(Utc::now().fixed_offset());

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.to_domain())
    }

    async fn update(
        &self,
        user_id: UserId,
        address_id: Uuid,
        fields: AddressFields,
    ) -> Result<ShippingAddress, ShippingAddressRepositoryError> {
        let mut rows = Entity::update_many()
            .set(Self::content(fields))
            .filter(Column::Id.eq(address_id))
            .filter(Column::UserId.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.pop()
            .map(|m| m.to_domain())
            .ok_or(ShippingAddressRepositoryError::NotFound)
    }

    async fn delete(
        &self,
        user_id: UserId,
        address_id: Uuid,
    ) -> Result<(), ShippingAddressRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(address_id))
            .filter(Column::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ShippingAddressRepositoryError::NotFound);
        }
        Ok(())
    }
}
