use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::sellers::{self, ActiveModel, Column, Entity};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::seller::application::domain::entities::{Seller, SellerProfile};
use crate::modules::seller::application::ports::outgoing::{
    SellerApplication, SellerRepository, SellerRepositoryError,
};
use crate::shared::db_error::is_unique_violation;

#[derive(Clone, Debug)]
pub struct SellerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SellerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SellerRepositoryError {
        if is_unique_violation(&e) {
            return SellerRepositoryError::SlugAlreadyExists;
        }
        SellerRepositoryError::DatabaseError(e.to_string())
    }

    fn apply_profile(active: &mut ActiveModel, slug: String, profile: SellerProfile) {
        active.business_name = Set(profile.business_name);
        active.slug = Set(slug);
        active.inn_identification_number = Set(profile.inn_identification_number);
        active.website_url = Set(profile.website_url);
        active.phone_number = Set(profile.phone_number);
        active.business_description = Set(profile.business_description);
        active.business_address = Set(profile.business_address);
        active.city = Set(profile.city);
        active.postal_code = Set(profile.postal_code);
        active.bank_name = Set(profile.bank_name);
        active.bank_bic_number = Set(profile.bank_bic_number);
        active.bank_account_number = Set(profile.bank_account_number);
        active.bank_routing_number = Set(profile.bank_routing_number);
    }
}

#[async_trait]
impl SellerRepository for SellerRepositoryPostgres {
    async fn save_application(
        &self,
        application: SellerApplication,
    ) -> Result<Seller, SellerRepositoryError> {
        let user_uuid = application.user_id.value();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let existing = match Entity::find()
            .filter(Column::UserId.eq(user_uuid))
            .lock_exclusive()
            .one(&txn)
            .await
        {
            Ok(found) => found,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let saved = match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                Self::apply_profile(&mut active, application.slug, application.profile);
                active.update(&txn).await
            }
            None => {
                let now = Utc::now().fixed_offset();
                let mut active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_uuid),
                    is_approved: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                Self::apply_profile(&mut active, application.slug, application.profile);
                active.insert(&txn).await
            }
        };

        let saved: sellers::Model = match saved {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let role_change = users::ActiveModel {
            account_type: Set(application.account_type.into()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = match users::Entity::update_many()
            .set(role_change)
            .filter(users::Column::Id.eq(user_uuid))
            .filter(users::Column::IsDeleted.eq(false))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(SellerRepositoryError::DatabaseError(e.to_string()));
            }
        };

        if updated.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(SellerRepositoryError::UserNotFound);
        }

        txn.commit()
            .await
            .map_err(|e| SellerRepositoryError::DatabaseError(e.to_string()))?;

        Ok(saved.to_domain())
    }

    async fn set_approval(
        &self,
        seller_id: Uuid,
        approved: bool,
    ) -> Result<Seller, SellerRepositoryError> {
        let changes = ActiveModel {
            is_approved: Set(approved),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let mut rows = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(seller_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| SellerRepositoryError::DatabaseError(e.to_string()))?;

        rows.pop()
            .map(|m| m.to_domain())
            .ok_or(SellerRepositoryError::SellerNotFound)
    }
}
